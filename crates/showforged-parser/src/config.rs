//! Detector configuration.

/// Configuration for the episode detector.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use showforged_parser::config::DetectorConfig;
///
/// let config = DetectorConfig::builder()
///     .title_hint("Breaking Bad")
///     .bad_words(["GRP", "sample"])
///     .build();
/// assert_eq!(config.bad_words.len(), 2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectorConfig {
    /// Show title used when a call does not pass its own.
    /// It is removed from file names before numbers are searched, so that
    /// shows like "24" or "440" are not read as episode numbers.
    pub title_hint: Option<String>,

    /// Additional words to strip, like release group names.
    /// Each entry may be a regex fragment.
    pub bad_words: Vec<String>,

    /// Whether DVD/Blu-ray structure files (`VIDEO_TS.VOB`, `index.bdmv`)
    /// are detected from their folder path.
    /// Default: true
    pub resolve_disc_files: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            title_hint: None,
            bad_words: Vec::new(),
            resolve_disc_files: true,
        }
    }
}

impl DetectorConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> DetectorConfigBuilder {
        DetectorConfigBuilder::default()
    }
}

/// Builder for `DetectorConfig`.
#[derive(Debug, Clone, Default)]
pub struct DetectorConfigBuilder {
    title_hint: Option<String>,
    bad_words: Option<Vec<String>>,
    resolve_disc_files: Option<bool>,
}

impl DetectorConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default show title.
    pub fn title_hint(mut self, title: impl Into<String>) -> Self {
        self.title_hint = Some(title.into());
        self
    }

    /// Set the bad words to strip.
    pub fn bad_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bad_words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Set whether disc structure files are detected from their folder.
    ///
    /// Default: true
    pub fn resolve_disc_files(mut self, enabled: bool) -> Self {
        self.resolve_disc_files = Some(enabled);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> DetectorConfig {
        DetectorConfig {
            title_hint: self.title_hint,
            bad_words: self.bad_words.unwrap_or_default(),
            resolve_disc_files: self.resolve_disc_files.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetectorConfig::default();
        assert!(config.title_hint.is_none());
        assert!(config.bad_words.is_empty());
        assert!(config.resolve_disc_files);
    }

    #[test]
    fn test_builder_pattern() {
        let config = DetectorConfig::builder()
            .title_hint("440")
            .bad_words(vec!["GRP".to_string()])
            .resolve_disc_files(false)
            .build();

        assert_eq!(config.title_hint, Some("440".to_string()));
        assert_eq!(config.bad_words, vec!["GRP"]);
        assert!(!config.resolve_disc_files);
    }

    #[test]
    fn test_builder_partial() {
        let config = DetectorConfig::builder().title_hint("Show").build();
        assert_eq!(config.title_hint.as_deref(), Some("Show"));
        assert!(config.bad_words.is_empty()); // default
        assert!(config.resolve_disc_files); // default
    }
}
