// src/filter.rs
//! Option filter and view filter.
//!
//! Two stages, both pure:
//! - `apply_options` narrows the raw sample by the two extraction toggles and
//!   produces the session dataset (owned, re-derived on every extraction).
//! - `FilteredView` narrows that dataset by category tab and search text. It
//!   holds row indices into the borrowed dataset and is rebuilt from scratch
//!   whenever any input changes; there is no cached filtering state.

use std::fmt;
use std::str::FromStr;

use crate::config::options::ExtractOptions;
use crate::model::{ElementDescriptor, ElementKind};

/// True if an element of this kind survives both extraction toggles.
pub fn passes_options(kind: ElementKind, opts: &ExtractOptions) -> bool {
    (opts.include_non_interactive || kind.is_option_interactive())
        && (opts.include_text || !kind.is_text_bearing())
}

pub fn apply_options(items: &[ElementDescriptor], opts: &ExtractOptions) -> Vec<ElementDescriptor> {
    items
        .iter()
        .filter(|d| passes_options(d.kind, opts))
        .cloned()
        .collect()
}

/// Category tabs above the results list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Interactive,
    Forms,
    Links,
    Buttons,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Interactive,
        Category::Forms,
        Category::Links,
        Category::Buttons,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::All         => "All",
            Category::Interactive => "Interactive",
            Category::Forms       => "Forms",
            Category::Links       => "Links",
            Category::Buttons     => "Buttons",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::All         => "all",
            Category::Interactive => "interactive",
            Category::Forms       => "forms",
            Category::Links       => "links",
            Category::Buttons     => "buttons",
        }
    }

    pub fn admits(self, kind: ElementKind) -> bool {
        match self {
            Category::All         => true,
            Category::Interactive => kind.is_interactive(),
            Category::Forms       => kind.is_form_related(),
            Category::Links       => kind == ElementKind::Link,
            Category::Buttons     => kind == ElementKind::Button,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lc = s.trim().to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.key() == lc)
            .ok_or_else(|| format!("Unknown filter: {}", s))
    }
}

/// Case-insensitive substring match over xpath, type, text, id and class.
/// `needle_lc` must already be lowercase.
pub fn matches_query(d: &ElementDescriptor, needle_lc: &str) -> bool {
    if needle_lc.is_empty() {
        return true;
    }
    let hit = |field: &str| field.to_lowercase().contains(needle_lc);
    let hit_opt = |field: &Option<String>| field.as_deref().map(hit).unwrap_or(false);

    hit(&d.xpath)
        || hit(d.kind.as_str())
        || hit_opt(&d.text)
        || hit_opt(&d.id)
        || hit_opt(&d.class)
}

/// Index view over a dataset after category + search filtering.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    /// Positions of kept rows in the dataset
    pub row_ix: Vec<usize>,
    raw: &'a [ElementDescriptor],
}

impl<'a> FilteredView<'a> {
    pub fn new(raw: &'a [ElementDescriptor], category: Category, query: &str) -> Self {
        let needle = query.to_lowercase();
        let row_ix = raw
            .iter()
            .enumerate()
            .filter(|(_, d)| category.admits(d.kind) && matches_query(d, &needle))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, raw }
    }

    /// Unfiltered view (every row).
    pub fn all(raw: &'a [ElementDescriptor]) -> Self {
        Self { row_ix: (0..raw.len()).collect(), raw }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a row by projected index.
    pub fn get(&self, i: usize) -> Option<&'a ElementDescriptor> {
        self.row_ix.get(i).and_then(|&ix| self.raw.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ElementDescriptor> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.raw.get(ix))
    }

    pub fn xpaths(&self) -> Vec<&'a str> {
        self.iter().map(|d| d.xpath.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind::*;

    fn opts(non_interactive: bool, text: bool) -> ExtractOptions {
        ExtractOptions {
            include_non_interactive: non_interactive,
            include_text: text,
            ..ExtractOptions::default()
        }
    }

    fn tiny() -> Vec<ElementDescriptor> {
        vec![
            ElementDescriptor::new(Button, "//button[1]").with_text("Go").with_id("go"),
            ElementDescriptor::new(Form, "//form[1]").with_class("Signup"),
            ElementDescriptor::new(Div, "//div[@class=\"dropdown\"]"),
            ElementDescriptor::new(Img, "//img[1]").with_alt("Logo"),
            ElementDescriptor::new(H2, "//h2[1]").with_text("Pricing"),
        ]
    }

    #[test]
    fn toggles_apply_independently() {
        let items = tiny();
        let kinds = |o: ExtractOptions| apply_options(&items, &o).iter().map(|d| d.kind).collect::<Vec<_>>();

        assert_eq!(kinds(opts(true, true)), vec![Button, Form, Div, Img, H2]);
        assert_eq!(kinds(opts(false, true)), vec![Button, Form]);
        assert_eq!(kinds(opts(true, false)), vec![Button, Form, Img]);
        assert_eq!(kinds(opts(false, false)), vec![Button, Form]);
    }

    #[test]
    fn category_parse_and_display_agree() {
        for c in Category::ALL {
            assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
        }
        assert!("media".parse::<Category>().is_err());
    }

    #[test]
    fn forms_tab_includes_form_but_interactive_does_not() {
        assert!(Category::Forms.admits(Form));
        assert!(!Category::Interactive.admits(Form));
        assert!(Category::Interactive.admits(Link));
    }

    #[test]
    fn query_matches_optional_fields_but_not_alt() {
        let items = tiny();
        assert_eq!(FilteredView::new(&items, Category::All, "signup").row_ix, vec![1]);
        assert_eq!(FilteredView::new(&items, Category::All, "PRICING").row_ix, vec![4]);
        assert!(FilteredView::new(&items, Category::All, "logo").is_empty());
        assert_eq!(FilteredView::new(&items, Category::All, "img").row_ix, vec![3]);
    }

    #[test]
    fn category_and_query_compose() {
        let items = tiny();
        let v = FilteredView::new(&items, Category::Buttons, "go");
        assert_eq!(v.xpaths(), vec!["//button[1]"]);
        assert!(FilteredView::new(&items, Category::Links, "go").is_empty());
    }

    #[test]
    fn view_accessors() {
        let items = tiny();
        let v = FilteredView::new(&items, Category::Forms, "");
        assert_eq!(v.len(), 1);
        assert_eq!(v.get(0).map(|d| d.kind), Some(Form));
        assert!(v.get(1).is_none());
        assert_eq!(v.iter().next(), Some(&items[1]));
        assert_eq!(FilteredView::all(&items).len(), items.len());
    }
}
