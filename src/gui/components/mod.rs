// src/gui/components/mod.rs
pub mod action_bar;
pub mod error_banner;
pub mod filter_tabs;
pub mod preview_panel;
pub mod results_list;
pub mod toasts;
pub mod url_bar;
