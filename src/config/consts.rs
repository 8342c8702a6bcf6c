// src/config/consts.rs

pub const APP_TITLE: &str = "XPath Generator";

// Local store
pub const LOG_FILE: &str = ".store/debug.log";

// Extraction
pub const EXTRACT_DELAY_MS: u64 = 2_000; // stand-in for real work

// Preview
pub const PREVIEW_TIMEOUT_MS: u64 = 5_000;
pub const PROBE_IO_TIMEOUT_MS: u64 = 4_000;
pub const PROBE_USER_AGENT: &str = "xpath_gen/0.1";
pub const PROBE_MAX_BODY: usize = 64 * 1024;

// Notifications
pub const TOAST_MS: u64 = 3_000;

// Export
pub const DEFAULT_OUT_DIR: &str = "";
pub const DEFAULT_FILE: &str = "xpaths";
pub const CSV_EXT: &str = "csv";
