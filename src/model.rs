// src/model.rs
//
// Element descriptors: one mocked page element plus its display path.
// Kinds are a closed set; the type-set predicates below are shared by
// the option filter, the view filter and the summary counts.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Button,
    Input,
    Select,
    Textarea,
    Link,
    Form,
    Nav,
    Div,
    Img,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Span,
}

use ElementKind::*;

impl ElementKind {
    pub const ALL: [ElementKind; 17] = [
        Button, Input, Select, Textarea, Link, Form, Nav, Div, Img,
        H1, H2, H3, H4, H5, H6, P, Span,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Button   => "button",
            Input    => "input",
            Select   => "select",
            Textarea => "textarea",
            Link     => "link",
            Form     => "form",
            Nav      => "nav",
            Div      => "div",
            Img      => "img",
            H1 => "h1", H2 => "h2", H3 => "h3",
            H4 => "h4", H5 => "h5", H6 => "h6",
            P        => "p",
            Span     => "span",
        }
    }

    pub fn is_heading(self) -> bool {
        matches!(self, H1 | H2 | H3 | H4 | H5 | H6)
    }

    /// Kinds kept when non-interactive elements are excluded.
    pub fn is_option_interactive(self) -> bool {
        matches!(self, Button | Input | Select | Textarea | Link | Form)
    }

    /// Kinds dropped when text elements are excluded. `div` is in here even
    /// though the sample uses it for structural containers.
    pub fn is_text_bearing(self) -> bool {
        self.is_heading() || matches!(self, P | Span | Div)
    }

    /// "Interactive" for the category tab and the summary count (no `form`).
    pub fn is_interactive(self) -> bool {
        matches!(self, Button | Input | Select | Textarea | Link)
    }

    pub fn is_form_related(self) -> bool {
        matches!(self, Form | Input | Select | Textarea)
    }

    pub fn badge(self) -> Badge {
        match self {
            Button   => Badge::Button,
            Input    => Badge::Input,
            Select   => Badge::Select,
            Textarea => Badge::Textarea,
            Link     => Badge::Link,
            Form     => Badge::Form,
            Nav      => Badge::Nav,
            Div      => Badge::Div,
            Img      => Badge::Img,
            H1 | H2 | H3 | H4 | H5 | H6 => Badge::Heading,
            P | Span => Badge::Text,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lc = s.trim().to_ascii_lowercase();
        ElementKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == lc)
            .ok_or_else(|| format!("Unknown element type: {}", s))
    }
}

/// Styling group for the type badge of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Badge {
    Button,
    Input,
    Select,
    Textarea,
    Link,
    Form,
    Nav,
    Div,
    Img,
    Heading,
    Text,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementDescriptor {
    pub kind: ElementKind,
    pub xpath: String,
    pub text: Option<String>,
    pub id: Option<String>,
    pub class: Option<String>,
    pub placeholder: Option<String>,
    pub alt: Option<String>,
}

/// Empty strings are stored as absent.
fn present(v: impl Into<String>) -> Option<String> {
    let v = v.into();
    if v.is_empty() { None } else { Some(v) }
}

impl ElementDescriptor {
    pub fn new(kind: ElementKind, xpath: impl Into<String>) -> Self {
        Self {
            kind,
            xpath: xpath.into(),
            text: None,
            id: None,
            class: None,
            placeholder: None,
            alt: None,
        }
    }

    pub fn with_text(mut self, v: impl Into<String>) -> Self { self.text = present(v); self }
    pub fn with_id(mut self, v: impl Into<String>) -> Self { self.id = present(v); self }
    pub fn with_class(mut self, v: impl Into<String>) -> Self { self.class = present(v); self }
    pub fn with_placeholder(mut self, v: impl Into<String>) -> Self { self.placeholder = present(v); self }
    pub fn with_alt(mut self, v: impl Into<String>) -> Self { self.alt = present(v); self }
}
