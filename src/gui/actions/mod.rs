// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{extract, copy_*, ...}.

mod clear;   // src/gui/actions/clear.rs
mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod extract; // src/gui/actions/extract.rs
mod preview; // src/gui/actions/preview.rs

pub use clear::clear;
pub use copy::{copy_all, copy_one};
pub use export::export;
pub use extract::extract;
pub use preview::{hide_preview, open_in_browser, refresh_preview, toggle_preview};
