// src/params.rs
use std::time::Duration;

use crate::config::{consts::EXTRACT_DELAY_MS, options::ExtractOptions};
use crate::filter::Category;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub url: String,                     // required
    pub include_non_interactive: bool,   // --no-non-interactive clears
    pub include_text: bool,              // --no-text clears
    pub category: Category,              // --filter
    pub query: String,                   // --search
    pub out: Option<String>,             // CSV file (or dir) instead of stdout
    pub copy: bool,                      // also put the paths on the clipboard
    pub paths: bool,                     // print bare paths instead of CSV
    pub delay: Duration,
}

impl Params {
    pub fn new() -> Self {
        Self {
            url: String::new(),
            include_non_interactive: true,
            include_text: true,
            category: Category::All,
            query: String::new(),
            out: None,
            copy: false,
            paths: false,
            delay: Duration::from_millis(EXTRACT_DELAY_MS),
        }
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            include_non_interactive: self.include_non_interactive,
            include_text: self.include_text,
            delay: self.delay,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
