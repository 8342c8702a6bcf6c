// tests/session.rs
use std::time::{Duration, Instant};

use xpath_gen::config::options::ExtractOptions;
use xpath_gen::error::ExtractError;
use xpath_gen::extract::run_extraction;
use xpath_gen::filter::Category;
use xpath_gen::progress::NullProgress;
use xpath_gen::render::Summary;
use xpath_gen::session::Session;

fn no_delay() -> ExtractOptions {
    ExtractOptions { delay: Duration::ZERO, ..ExtractOptions::default() }
}

fn extracted(url: &str, opts: &ExtractOptions) -> Session {
    let mut s = Session::new(Duration::from_secs(5));
    s.url_input = url.to_string();
    let parsed = s.begin_extract().unwrap();
    assert!(s.is_extracting());
    let res = run_extraction(&parsed, opts, Some(&mut NullProgress));
    s.finish_extract(res);
    s
}

#[test]
fn valid_url_yields_full_sample() {
    let s = extracted("  https://example.com  ", &no_delay());
    assert!(!s.is_extracting());
    assert!(s.results_visible());
    assert_eq!(s.current_url(), Some("https://example.com"));
    assert_eq!(s.view().len(), 25);
    assert_eq!(s.summary(), Summary { total: 25, interactive: 12, forms: 9 });
}

#[test]
fn summary_ignores_the_view_filter() {
    let mut s = extracted("https://example.com", &no_delay());
    s.set_category(Category::Buttons);
    s.set_query("submit");
    assert_eq!(s.view().len(), 1);
    assert_eq!(s.summary().total, 25);
}

#[test]
fn options_shape_the_dataset() {
    let opts = ExtractOptions { include_non_interactive: false, ..no_delay() };
    let s = extracted("https://example.com", &opts);
    assert_eq!(s.dataset().len(), 14);
}

#[test]
fn empty_url_is_rejected() {
    let mut s = Session::new(Duration::from_secs(5));
    s.url_input = "   ".to_string();
    assert_eq!(s.begin_extract(), Err(ExtractError::EmptyUrl));
    assert_eq!(s.error().map(|e| e.to_string()).as_deref(), Some("Please enter a valid URL"));
    assert!(!s.is_extracting());
    assert_eq!(s.current_url(), None);
}

#[test]
fn clear_resets_everything() {
    let mut s = extracted("https://example.com", &no_delay());
    s.set_category(Category::Forms);
    s.set_query("email");
    let url = s.current_url().map(str::to_owned);
    s.preview.show(url.as_deref(), Instant::now()).unwrap();
    assert!(s.preview.is_visible());

    s.clear();
    assert!(s.dataset().is_empty());
    assert!(!s.results_visible());
    assert_eq!(s.category(), Category::All);
    assert_eq!(s.query(), "");
    assert_eq!(s.url_input, "");
    assert_eq!(s.current_url(), None);
    assert!(!s.preview.is_visible());
}

#[test]
fn failed_rerun_hides_the_old_results() {
    let mut s = extracted("https://example.com", &no_delay());
    assert!(s.results_visible());

    s.url_input = "https://example.org".to_string();
    s.begin_extract().unwrap();
    assert!(!s.results_visible());
    s.finish_extract(Err(ExtractError::Failed("network down".to_string())));

    assert!(!s.is_extracting());
    assert!(!s.results_visible());
    assert_eq!(
        s.error().map(|e| e.to_string()).as_deref(),
        Some("Failed to extract XPaths: network down")
    );
}
