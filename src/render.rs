// src/render.rs
//! Row model for the results list.
//!
//! Maps descriptors to display rows and summary counts. Nothing here knows
//! about egui; the GUI table and the CLI both consume `RowModel`.

use std::fmt;

use crate::filter::FilteredView;
use crate::model::{Badge, ElementDescriptor, ElementKind};

/// Counts shown above the results list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub interactive: usize,
    pub forms: usize,
}

impl Summary {
    pub fn of<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a ElementDescriptor>,
    {
        items.into_iter().fold(Summary::default(), |mut s, d| {
            s.total += 1;
            if d.kind.is_interactive() { s.interactive += 1; }
            if d.kind.is_form_related() { s.forms += 1; }
            s
        })
    }
}

/// One labelled optional field (`Text: "Submit"`, `ID: submit-btn`, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoField {
    pub label: &'static str,
    pub value: String,
    pub quoted: bool,
}

impl fmt::Display for InfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "{}: \"{}\"", self.label, self.value)
        } else {
            write!(f, "{}: {}", self.label, self.value)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowModel {
    /// Position within the rendered list
    pub index: usize,
    pub kind: ElementKind,
    pub badge: Badge,
    pub xpath: String,
    pub info: Vec<InfoField>,
}

impl RowModel {
    pub fn info_line(&self) -> String {
        self.info
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join("  ·  ")
    }
}

pub fn row_for(index: usize, d: &ElementDescriptor) -> RowModel {
    let fields: [(&'static str, &Option<String>, bool); 5] = [
        ("Text", &d.text, true),
        ("ID", &d.id, false),
        ("Class", &d.class, false),
        ("Placeholder", &d.placeholder, true),
        ("Alt", &d.alt, true),
    ];

    let info = fields
        .into_iter()
        .filter_map(|(label, value, quoted)| {
            value
                .as_ref()
                .map(|v| InfoField { label, value: v.clone(), quoted })
        })
        .collect();

    RowModel {
        index,
        kind: d.kind,
        badge: d.kind.badge(),
        xpath: d.xpath.clone(),
        info,
    }
}

/// Full list of rows for the current view. Callers replace their list wholesale.
pub fn render_rows(view: &FilteredView<'_>) -> Vec<RowModel> {
    view.iter().enumerate().map(|(i, d)| row_for(i, d)).collect()
}
