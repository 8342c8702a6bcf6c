// src/session.rs
//
// Everything the page shows, in one place. Front ends mutate it only through
// these methods; the filtered view and summary are derived on demand.

use std::time::Duration;

use url::Url;

use crate::{
    error::ExtractError,
    extract::validate_url,
    filter::{Category, FilteredView},
    model::ElementDescriptor,
    preview::PreviewPanel,
    render::Summary,
};

#[derive(Clone, Debug)]
pub struct Session {
    /// Raw text of the URL field
    pub url_input: String,
    current_url: String,
    dataset: Vec<ElementDescriptor>,
    results_visible: bool,
    category: Category,
    query: String,
    pub preview: PreviewPanel,
    extracting: bool,
    error: Option<ExtractError>,
}

impl Session {
    pub fn new(preview_timeout: Duration) -> Self {
        Self {
            url_input: String::new(),
            current_url: String::new(),
            dataset: Vec::new(),
            results_visible: false,
            category: Category::All,
            query: String::new(),
            preview: PreviewPanel::new(preview_timeout),
            extracting: false,
            error: None,
        }
    }

    /// Validate the URL field and enter the extracting state.
    /// On failure only the inline error changes.
    pub fn begin_extract(&mut self) -> Result<Url, ExtractError> {
        match validate_url(&self.url_input) {
            Ok(url) => {
                self.current_url = s!(self.url_input.trim());
                self.extracting = true;
                self.results_visible = false;
                self.error = None;
                Ok(url)
            }
            Err(e) => {
                loge!("Extract: {}", e);
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn finish_extract(&mut self, result: Result<Vec<ElementDescriptor>, ExtractError>) {
        self.extracting = false;
        match result {
            Ok(items) => {
                self.dataset = items;
                self.results_visible = true;
            }
            Err(e) => {
                loge!("Extract: {}", e);
                self.results_visible = false;
                self.error = Some(match e {
                    ExtractError::Failed(_) => e,
                    other => ExtractError::Failed(other.to_string()),
                });
            }
        }
    }

    pub fn set_category(&mut self, category: Category) {
        if category != self.category {
            logd!("UI: Filter {} → {}", self.category, category);
            self.category = category;
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn view(&self) -> FilteredView<'_> {
        FilteredView::new(&self.dataset, self.category, &self.query)
    }

    /// Counts over the whole extracted dataset, not the current view.
    pub fn summary(&self) -> Summary {
        Summary::of(&self.dataset)
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn clear(&mut self) {
        logf!("UI: Clear");
        self.dataset.clear();
        self.results_visible = false;
        self.category = Category::All;
        self.query.clear();
        self.url_input.clear();
        self.current_url.clear();
        self.preview.hide();
    }

    /// URL accepted by the last successful validation, if any.
    pub fn current_url(&self) -> Option<&str> {
        if self.current_url.is_empty() { None } else { Some(&self.current_url) }
    }

    pub fn dataset(&self) -> &[ElementDescriptor] { &self.dataset }
    pub fn results_visible(&self) -> bool { self.results_visible }
    pub fn category(&self) -> Category { self.category }
    pub fn query(&self) -> &str { &self.query }
    pub fn is_extracting(&self) -> bool { self.extracting }
    pub fn error(&self) -> Option<&ExtractError> { self.error.as_ref() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind::*;

    fn session() -> Session {
        Session::new(Duration::from_secs(5))
    }

    #[test]
    fn bad_url_only_sets_the_error() {
        let mut s = session();
        s.url_input = s!("https://first.example");
        s.begin_extract().unwrap();
        s.finish_extract(Ok(vec![ElementDescriptor::new(Button, "//button")]));

        s.url_input = s!("not a url");
        assert_eq!(s.begin_extract(), Err(ExtractError::MalformedUrl));
        assert_eq!(s.error(), Some(&ExtractError::MalformedUrl));
        assert_eq!(s.current_url(), Some("https://first.example"));
        assert_eq!(s.dataset().len(), 1);
        assert!(!s.is_extracting());
    }

    #[test]
    fn failures_are_wrapped_once() {
        let mut s = session();
        s.finish_extract(Err(ExtractError::Failed(s!("network"))));
        assert_eq!(
            s.error().map(|e| e.to_string()).as_deref(),
            Some("Failed to extract XPaths: network")
        );
        s.dismiss_error();
        assert!(s.error().is_none());
    }
}
