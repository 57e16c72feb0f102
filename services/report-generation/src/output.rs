use std::path::{Path, PathBuf};

/// File names of every artifact produced for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    dir: PathBuf,
    top_n: usize,
}

impl OutputFiles {
    pub fn new(dir: impl Into<PathBuf>, top_n: usize) -> Self {
        Self {
            dir: dir.into(),
            top_n,
        }
    }

    /// `results/<pdf stem>` under `base`.
    pub fn default_dir(base: &Path, pdf_path: &Path) -> PathBuf {
        let stem = pdf_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        base.join("results").join(stem)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn all_words_csv(&self) -> PathBuf {
        self.dir.join("all_words.csv")
    }

    pub fn excluded_known_csv(&self) -> PathBuf {
        self.dir.join("excluded_known_words.csv")
    }

    pub fn unknown_csv(&self) -> PathBuf {
        self.dir.join(format!("top{}_unknown_words.csv", self.top_n))
    }

    pub fn all_words_cloud(&self) -> PathBuf {
        self.dir.join(format!("wordcloud_top{}_all_words.png", self.top_n))
    }

    pub fn unknown_cloud(&self) -> PathBuf {
        self.dir.join(format!("wordcloud_top{}_unknown_words.png", self.top_n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let files = OutputFiles::new("out", 25);
        assert_eq!(files.all_words_csv(), Path::new("out/all_words.csv"));
        assert_eq!(files.excluded_known_csv(), Path::new("out/excluded_known_words.csv"));
        assert_eq!(files.unknown_csv(), Path::new("out/top25_unknown_words.csv"));
        assert_eq!(files.all_words_cloud(), Path::new("out/wordcloud_top25_all_words.png"));
        assert_eq!(files.unknown_cloud(), Path::new("out/wordcloud_top25_unknown_words.png"));
    }

    #[test]
    fn test_default_dir_uses_pdf_stem() {
        let dir = OutputFiles::default_dir(Path::new("/work"), Path::new("books/Moby Dick.pdf"));
        assert_eq!(dir, Path::new("/work/results/Moby Dick"));
    }
}
