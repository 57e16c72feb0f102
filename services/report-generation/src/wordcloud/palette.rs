use image::Rgb;

use pdfvocab_utils::{PdfVocabError, PdfVocabResult};

/// Viridis control points, dark purple to yellow.
const VIRIDIS: [[u8; 3]; 5] = [
    [68, 1, 84],
    [59, 82, 139],
    [33, 145, 140],
    [94, 201, 98],
    [253, 231, 37],
];

/// Colour for position `t` in `[0, 1]`, linearly interpolated between stops.
pub fn viridis(t: f32) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0) * (VIRIDIS.len() - 1) as f32;
    let lower = t.floor() as usize;
    let upper = (lower + 1).min(VIRIDIS.len() - 1);
    let frac = t - lower as f32;

    let mut channels = [0u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        let a = VIRIDIS[lower][i] as f32;
        let b = VIRIDIS[upper][i] as f32;
        *channel = (a + (b - a) * frac).round() as u8;
    }
    Rgb(channels)
}

/// Colour for the word at `rank` out of `total` words; the most frequent
/// word gets the darkest shade.
pub fn rank_color(rank: usize, total: usize) -> Rgb<u8> {
    if total <= 1 {
        return viridis(0.0);
    }
    viridis(rank as f32 / (total - 1) as f32)
}

/// Parse a `#rrggbb` colour.
pub fn parse_hex_color(value: &str) -> PdfVocabResult<Rgb<u8>> {
    let invalid = || PdfVocabError::render(format!("Invalid colour '{}', expected #rrggbb", value));

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viridis_endpoints() {
        assert_eq!(viridis(0.0), Rgb([68, 1, 84]));
        assert_eq!(viridis(1.0), Rgb([253, 231, 37]));
        assert_eq!(viridis(0.5), Rgb([33, 145, 140]));
        assert_eq!(viridis(-3.0), viridis(0.0));
    }

    #[test]
    fn test_rank_color() {
        assert_eq!(rank_color(0, 1), viridis(0.0));
        assert_eq!(rank_color(0, 10), viridis(0.0));
        assert_eq!(rank_color(9, 10), viridis(1.0));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ffffff").unwrap(), Rgb([255, 255, 255]));
        assert_eq!(parse_hex_color("#1a2B3c").unwrap(), Rgb([0x1a, 0x2b, 0x3c]));
        assert!(parse_hex_color("ffffff").is_err());
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#gggggg").is_err());
    }
}
