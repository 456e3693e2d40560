use crate::constants::DEFAULT_SPECIES;

/// Configuration settings for a domain-architecture summarization run.
///
/// This struct controls filtering thresholds, the required target domains,
/// and report labeling.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use domarch_core::config::DomarchConfig;
///
/// let config = DomarchConfig::default();
/// assert_eq!(config.species, "HUMAN");
/// ```
///
/// ## Thresholded run over two required domains
///
/// ```rust
/// use domarch_core::config::DomarchConfig;
///
/// let config = DomarchConfig {
///     target_models: vec!["PAS".to_string(), "HisKA".to_string()],
///     i_e_value_threshold: Some(1e-6),
///     fs_e_value_threshold: Some(1e-4),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DomarchConfig {
    /// Ordered list of domain models that must all be present for a
    /// protein to be reported.
    ///
    /// The order defines the expected left-to-right domain order; with
    /// exactly two entries, linker extraction between them is enabled
    /// (when an alignment is supplied).
    ///
    /// **Default**: empty (no protein is ever reportable; callers should
    /// reject an empty list before running)
    pub target_models: Vec<String>,

    /// Independent (per-domain) e-value threshold.
    ///
    /// Hits with `i_e_value` above this are dropped before architecture
    /// rendering. `None` disables the filter.
    ///
    /// **Default**: `None` (no threshold)
    pub i_e_value_threshold: Option<f64>,

    /// Full-sequence e-value threshold.
    ///
    /// A target-model hit with `fs_e_value` above this suppresses the
    /// whole protein. `None` disables the gate.
    ///
    /// **Default**: `None` (no threshold)
    pub fs_e_value_threshold: Option<f64>,

    /// Species label copied verbatim into the report line.
    ///
    /// **Default**: `"HUMAN"`
    pub species: String,

    /// Model names dropped from the input stream before grouping.
    ///
    /// Useful for profiles known to produce uninformative repeat matches.
    ///
    /// **Default**: empty (disabled)
    pub excluded_models: Vec<String>,

    /// Suppress progress messages on stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}

impl Default for DomarchConfig {
    fn default() -> Self {
        Self {
            target_models: Vec::new(),
            i_e_value_threshold: None,
            fs_e_value_threshold: None,
            species: DEFAULT_SPECIES.to_string(),
            excluded_models: Vec::new(),
            quiet: false,
        }
    }
}
