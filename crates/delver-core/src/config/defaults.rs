//! Default values for Delver configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Backend Defaults
// ============================================================================

/// Default backend base URL.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Path of the research endpoint, relative to the base URL.
pub const RUN_ENDPOINT: &str = "/run";

/// Path of the health endpoint, relative to the base URL.
pub const HEALTH_ENDPOINT: &str = "/health";

/// Default per-request timeout in seconds.
///
/// A deep research run routinely takes 30-90 seconds; two minutes covers
/// slow backends without letting a dead one hang the terminal forever.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default research depth (number of search tasks).
pub const DEFAULT_MAX_TASKS: u32 = 5;

/// Lowest accepted research depth.
pub const MIN_MAX_TASKS: u32 = 3;

/// Highest accepted research depth.
pub const MAX_MAX_TASKS: u32 = 10;

// ============================================================================
// Export Defaults
// ============================================================================

/// Default directory for exported reports.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// File name stem for exported reports.
pub const REPORT_FILE_STEM: &str = "research";

/// MIME type of Markdown exports.
pub const MARKDOWN_MIME: &str = "text/markdown";

/// MIME type of JSON exports.
pub const JSON_MIME: &str = "application/json";
