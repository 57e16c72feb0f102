//! Rule-based English lemmatizer
//!
//! Irregular forms come from a fixed table. Everything else goes through
//! suffix detachment for plural nouns and `-ed`/`-ing` verb forms, followed
//! by stem restoration:
//!
//! - stems listed in `SILENT_E` regain their `e` (`changing` -> `change`)
//! - `at`, `bl`, `iz` endings regain their silent `e` (`troubling` -> `trouble`)
//! - doubled final consonants other than `l`, `s`, `z` are undoubled (`running` -> `run`)
//! - endings English never leaves bare (`-v`, `-u`, `-c`, `-dg`, `-uir`, ...)
//!   regain their `e` (`receiving` -> `receive`, `including` -> `include`)
//! - short consonant-vowel-consonant stems regain their `e` (`making` -> `make`)
//!
//! The tables are built once per process and never change afterwards.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

const IRREGULAR: &[(&str, &str)] = &[
    // verbs
    ("ran", "run"), ("went", "go"), ("gone", "go"), ("goes", "go"), ("saw", "see"),
    ("seen", "see"), ("came", "come"), ("took", "take"), ("taken", "take"),
    ("made", "make"), ("said", "say"), ("told", "tell"), ("found", "find"),
    ("gave", "give"), ("given", "give"), ("knew", "know"), ("known", "know"),
    ("thought", "think"), ("brought", "bring"), ("bought", "buy"),
    ("caught", "catch"), ("taught", "teach"), ("felt", "feel"), ("left", "leave"),
    ("kept", "keep"), ("slept", "sleep"), ("meant", "mean"), ("sent", "send"),
    ("spent", "spend"), ("built", "build"), ("lost", "lose"), ("held", "hold"),
    ("stood", "stand"), ("understood", "understand"), ("wrote", "write"),
    ("written", "write"), ("spoke", "speak"), ("spoken", "speak"),
    ("broke", "break"), ("broken", "break"), ("chose", "choose"),
    ("chosen", "choose"), ("drove", "drive"), ("driven", "drive"),
    ("rode", "ride"), ("ridden", "ride"), ("rose", "rise"), ("risen", "rise"),
    ("fell", "fall"), ("fallen", "fall"), ("ate", "eat"), ("eaten", "eat"),
    ("drank", "drink"), ("drunk", "drink"), ("began", "begin"), ("begun", "begin"),
    ("sang", "sing"), ("sung", "sing"), ("swam", "swim"), ("sat", "sit"),
    ("met", "meet"), ("led", "lead"), ("fed", "feed"), ("paid", "pay"),
    ("laid", "lay"), ("grew", "grow"), ("grown", "grow"), ("threw", "throw"),
    ("thrown", "throw"), ("flew", "fly"), ("flown", "fly"), ("drew", "draw"),
    ("drawn", "draw"), ("wore", "wear"), ("worn", "wear"), ("tore", "tear"),
    ("torn", "tear"), ("hid", "hide"), ("hidden", "hide"), ("struck", "strike"),
    ("fought", "fight"), ("sought", "seek"), ("heard", "hear"), ("sold", "sell"),
    ("stuck", "stick"), ("dug", "dig"), ("hung", "hang"), ("shook", "shake"),
    ("shaken", "shake"), ("woke", "wake"), ("forgot", "forget"),
    ("forgotten", "forget"), ("got", "get"), ("gotten", "get"),
    ("became", "become"), ("used", "use"), ("using", "use"),
    ("created", "create"), ("creating", "create"), ("dying", "die"),
    ("lying", "lie"), ("tying", "tie"), ("added", "add"), ("adding", "add"),
    // nouns
    ("children", "child"), ("men", "man"), ("women", "woman"), ("mice", "mouse"),
    ("geese", "goose"), ("feet", "foot"), ("teeth", "tooth"), ("lives", "life"),
    ("wives", "wife"), ("knives", "knife"), ("leaves", "leaf"), ("wolves", "wolf"),
    ("halves", "half"), ("shelves", "shelf"), ("thieves", "thief"),
    ("criteria", "criterion"), ("phenomena", "phenomenon"),
    ("analyses", "analysis"), ("crises", "crisis"), ("theses", "thesis"),
    ("hypotheses", "hypothesis"), ("indices", "index"), ("matrices", "matrix"),
    ("potatoes", "potato"), ("tomatoes", "tomato"), ("heroes", "hero"),
    ("echoes", "echo"), ("movies", "movie"), ("cookies", "cookie"),
];

/// Words that look inflected but are already base forms.
const INVARIANT: &[&str] = &[
    "news", "series", "species", "lens", "always", "perhaps", "towards",
    "afterwards", "whereas", "besides", "christmas", "physics", "mathematics",
    "economics", "politics", "ethics", "speed", "proceed", "succeed", "exceed",
    "breed", "bleed", "greed", "seed", "weed", "feed", "need", "deed", "indeed",
    "nothing", "something", "anything", "everything", "morning", "evening",
    "ceiling", "wedding", "pudding", "hundred", "kindred", "naked", "sacred",
    "wicked",
];

/// Base forms ending in a silent `e` whose stems no suffix rule recognizes.
const SILENT_E: &[&str] = &[
    "change", "arrange", "exchange", "interchange", "rearrange", "challenge",
    "range", "plunge", "lounge", "sponge", "lunge", "hinge", "cringe", "fringe",
    "infringe", "impinge", "avenge", "revenge", "scavenge", "estrange", "oblige",
    "cause", "pause", "accuse", "refuse", "confuse", "excuse", "amuse", "abuse",
    "fuse", "diffuse", "infuse", "guide", "persuade", "ignore", "explore",
    "restore", "adore", "deplore", "implore", "invite", "unite", "excite",
    "ignite", "recite", "complete", "delete", "compete", "promote", "devote",
    "denote", "quote", "become", "welcome", "overcome", "escape", "schedule",
    "waste", "taste", "paste", "haste", "choose", "loose",
];

static LEMMATIZER: Lazy<Lemmatizer> = Lazy::new(Lemmatizer::new);

pub struct Lemmatizer {
    irregular: HashMap<&'static str, &'static str>,
    invariant: HashSet<&'static str>,
    silent_e: HashSet<&'static str>,
}

impl Lemmatizer {
    fn new() -> Self {
        Self {
            irregular: IRREGULAR.iter().copied().collect(),
            invariant: INVARIANT.iter().copied().collect(),
            silent_e: SILENT_E.iter().copied().collect(),
        }
    }

    /// Process-wide instance.
    pub fn global() -> &'static Lemmatizer {
        &LEMMATIZER
    }

    /// Base form of a lowercase word. Words of three letters or fewer
    /// are returned unchanged unless they are irregular forms.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(base) = self.irregular.get(word) {
            return (*base).to_string();
        }
        if self.invariant.contains(word) || word.chars().count() <= 3 {
            return word.to_string();
        }

        noun_base(word)
            .or_else(|| self.verb_base(word))
            .unwrap_or_else(|| word.to_string())
    }

    fn verb_base(&self, word: &str) -> Option<String> {
        if let Some(stem) = word.strip_suffix("ied") {
            return if word.len() > 4 {
                Some(format!("{}y", stem))
            } else {
                // died, lied, tied
                Some(word[..word.len() - 1].to_string())
            };
        }

        if word.ends_with("eed") {
            return Some(word[..word.len() - 1].to_string());
        }

        let stem = word
            .strip_suffix("ing")
            .or_else(|| word.strip_suffix("ed"))?;

        if stem.chars().count() < 2 || !has_vowel(stem) {
            return None;
        }

        Some(self.restore_stem(stem))
    }

    fn restore_stem(&self, stem: &str) -> String {
        let with_e = format!("{}e", stem);
        if self.silent_e.contains(with_e.as_str()) {
            return with_e;
        }

        let chars: Vec<char> = stem.chars().collect();
        let n = chars.len();

        if stem.ends_with("bl") || stem.ends_with("iz") {
            return with_e;
        }
        // relat -> relate, but treat and float stay as they are
        if stem.ends_with("at") && n >= 3 && !is_vowel(&chars, n - 3) {
            return with_e;
        }

        let last = chars[n - 1];
        if n >= 2 && last == chars[n - 2] && !is_vowel(&chars, n - 1) && !matches!(last, 'l' | 's' | 'z') {
            return chars[..n - 1].iter().collect();
        }

        if takes_silent_e(&chars) {
            return with_e;
        }

        if measure(&chars) == 1 && ends_cvc(&chars) {
            return with_e;
        }

        stem.to_string()
    }
}

pub fn lemmatize(word: &str) -> String {
    Lemmatizer::global().lemmatize(word)
}

fn noun_base(word: &str) -> Option<String> {
    if let Some(stem) = word.strip_suffix("ies") {
        if word.len() > 4 {
            return Some(format!("{}y", stem));
        }
    }

    for suffix in ["sses", "shes", "ches", "xes", "zzes"] {
        if word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }

    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }

    word.strip_suffix('s').map(str::to_string)
}

/// Stem endings that only occur in base forms spelled with a final `e`.
/// Called after undoubling.
fn takes_silent_e(chars: &[char]) -> bool {
    let n = chars.len();
    let last = chars[n - 1];
    let prev = chars[n - 2];
    // consonant, single vowel, final consonant, in a stem of two or more syllables
    let long_cvc = |vowels: &[char]| {
        n >= 4
            && vowels.contains(&prev)
            && !is_vowel(chars, n - 3)
            && !is_vowel(chars, n - 1)
            && measure(chars) >= 2
    };

    match last {
        'v' | 'u' | 'c' => true,
        'z' => !matches!(prev, 'z' | 't'),
        'g' => matches!(prev, 'd' | 'r' | 'l') || long_cvc(&['a']),
        'l' => matches!(prev, 'c' | 'd' | 'f' | 'g' | 'k' | 'p' | 't' | 'z'),
        'b' => prev == 'i',
        's' => {
            matches!(prev, 'n' | 'r' | 'p' | 'l' | 'y')
                || (n >= 3
                    && matches!(
                        (chars[n - 3], prev),
                        ('e', 'a') | ('a', 'i') | ('a', 'u') | ('o', 'o')
                    ))
                || long_cvc(&['a', 'i', 'o'])
        }
        'r' => {
            n >= 3
                && match prev {
                    // require, admire; not repair
                    'i' => chars[n - 3] == 'u' || !is_vowel(chars, n - 3),
                    'u' => !is_vowel(chars, n - 3),
                    'a' => long_cvc(&['a']),
                    _ => false,
                }
        }
        'd' => long_cvc(&['a', 'i', 'o', 'u']),
        'n' => long_cvc(&['i']),
        't' => long_cvc(&['u']),
        'k' => long_cvc(&['o']),
        'm' => chars.ends_with(&['s', 'u', 'm']),
        _ => false,
    }
}

/// `y` counts as a vowel after a consonant.
fn is_vowel(chars: &[char], i: usize) -> bool {
    match chars[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => true,
        'y' => i > 0 && !is_vowel(chars, i - 1),
        _ => false,
    }
}

fn has_vowel(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    (0..chars.len()).any(|i| is_vowel(&chars, i))
}

/// Number of vowel-consonant sequences, as in `[C](VC){m}[V]`.
fn measure(chars: &[char]) -> usize {
    let mut m = 0;
    let mut previous_vowel = false;
    for i in 0..chars.len() {
        let vowel = is_vowel(chars, i);
        if previous_vowel && !vowel {
            m += 1;
        }
        previous_vowel = vowel;
    }
    m
}

fn ends_cvc(chars: &[char]) -> bool {
    let n = chars.len();
    n >= 3
        && !is_vowel(chars, n - 3)
        && is_vowel(chars, n - 2)
        && !is_vowel(chars, n - 1)
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
}
