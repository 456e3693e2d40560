/// Version string for domarch
pub const VERSION: &str = "0.1.0";

/// Maximum inter-domain gap, in residues, for two domains to count as
/// "close" in the overview architecture string
pub const CLOSE_DOMAIN_LIMIT: i64 = 20;

/// Width of one gap band in residues; the detailed architecture string
/// emits one dash per full band
pub const GAP_BAND_WIDTH: i64 = 20;

/// Number of full gap bands at which the gap marker collapses to the
/// long-gap glyph instead of individual dashes
pub const LONG_GAP_BANDS: i64 = 10;

/// Marker emitted for gaps of [`LONG_GAP_BANDS`] bands or more
pub const LONG_GAP_MARKER: &str = "----//----";

/// Separator between close domains in the overview string
pub const CLOSE_SEPARATOR: &str = "~";

/// Separator between distant domains in the overview string
pub const DISTANT_SEPARATOR: &str = "----";

/// E-values below this magnitude render in scientific notation; larger
/// values keep plain decimal form
pub const E_VALUE_SCIENTIFIC_CUTOFF: f64 = 1e-4;

/// Default species label for the report line
pub const DEFAULT_SPECIES: &str = "HUMAN";

/// Number of whitespace-delimited columns a hmmscan --domtblout data line
/// must have before the free-text description
pub const DOMTBLOUT_MIN_COLUMNS: usize = 22;
