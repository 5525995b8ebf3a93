// src/config/consts.rs

// Net config
pub const API_URL: &str = "http://localhost:5000/api/check";
pub const ENDPOINT_ENV: &str = "MENTION_CHECK_ENDPOINT";

// Local store (debug log lives here)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_FILENAME: &str = "gemini-brand-mentions.csv";
pub const EXPORT_MIME: &str = "text/csv";
pub const EXPORT_HEADERS: [&str; 4] = ["Prompt", "Brand", "Mentioned", "Position"];
pub const CSV_SEP: char = ',';

// Display
pub const LONG_TEXT_CHARS: usize = 50;  // eligible for Show more / Show less
pub const TRUNCATE_CHARS: usize = 300;  // cutoff when collapsed
pub const TRUNCATE_LINES: usize = 4;
pub const ELLIPSIS: &str = "...";
