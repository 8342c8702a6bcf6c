// src/extract.rs
//
// The Extract action: validate the URL, wait out the artificial delay,
// return the sample narrowed by the option toggles. The URL never
// influences the result beyond passing validation.

use std::thread;

use url::Url;

use crate::{
    config::options::ExtractOptions,
    error::ExtractError,
    filter::apply_options,
    model::ElementDescriptor,
    progress::Progress,
    sample::sample,
};

/// Trim and parse. An empty field and an unparsable one are distinct errors.
pub fn validate_url(input: &str) -> Result<Url, ExtractError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::EmptyUrl);
    }
    Url::parse(trimmed).map_err(|e| {
        logd!("Extract: rejected '{}' ({})", trimmed, e);
        ExtractError::MalformedUrl
    })
}

pub fn run_extraction(
    url: &Url,
    opts: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<ElementDescriptor>, ExtractError> {
    logf!(
        "Extract: Begin url={} non_interactive={} text={}",
        url, opts.include_non_interactive, opts.include_text
    );
    if let Some(p) = progress.as_deref_mut() {
        p.begin(url.as_str());
        p.log("Analyzing page structure…");
    }

    if !opts.delay.is_zero() {
        thread::sleep(opts.delay);
    }

    let items = apply_options(&sample(), opts);

    if let Some(p) = progress.as_deref_mut() {
        p.finish(items.len());
    }
    logf!("Extract: OK rows={}", items.len());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn empty_and_whitespace_are_empty_url() {
        assert_eq!(validate_url(""), Err(ExtractError::EmptyUrl));
        assert_eq!(validate_url("   "), Err(ExtractError::EmptyUrl));
    }

    #[test]
    fn scheme_is_required() {
        assert_eq!(validate_url("example.com"), Err(ExtractError::MalformedUrl));
        assert!(validate_url("  https://example.com/login ").is_ok());
    }

    #[test]
    fn error_messages_match_the_page() {
        assert_eq!(ExtractError::EmptyUrl.to_string(), "Please enter a valid URL");
        assert_eq!(
            ExtractError::Failed(s!("boom")).to_string(),
            "Failed to extract XPaths: boom"
        );
    }

    #[derive(Default)]
    struct Seen { begun: Option<String>, found: Option<usize> }
    impl Progress for Seen {
        fn begin(&mut self, url: &str) { self.begun = Some(s!(url)); }
        fn finish(&mut self, found: usize) { self.found = Some(found); }
    }

    #[test]
    fn extraction_reports_progress() {
        let url = validate_url("https://example.com").unwrap();
        let opts = ExtractOptions { delay: Duration::ZERO, ..ExtractOptions::default() };
        let mut seen = Seen::default();
        let items = run_extraction(&url, &opts, Some(&mut seen)).unwrap();
        assert_eq!(items, sample());
        assert_eq!(seen.begun.as_deref(), Some("https://example.com/"));
        assert_eq!(seen.found, Some(items.len()));
    }
}
