// src/sample.rs
//
// The fixed element sample every extraction returns. Nothing about the
// target URL influences it.

use crate::model::{ElementDescriptor, ElementKind::{self, *}};

// (kind, xpath, text, id, class, placeholder, alt)
type Row = (ElementKind, &'static str, &'static str, &'static str, &'static str, &'static str, &'static str);

static SAMPLE: &[Row] = &[
    // Interactive
    (Button,   r#"//button[@class="btn-primary"]"#,                "Submit",    "submit-btn",    "btn-primary",  "", ""),
    (Button,   r#"//button[contains(@class, "menu-toggle")]"#,     "Menu",      "menu-toggle",   "menu-toggle",  "", ""),
    (Input,    r#"//input[@type="text" and @name="username"]"#,    "",          "username",      "form-control", "Enter username", ""),
    (Input,    r#"//input[@type="email" and @name="email"]"#,      "",          "email",         "form-control", "Enter email", ""),
    (Input,    r#"//input[@type="password" and @name="password"]"#,"",          "password",      "form-control", "Enter password", ""),
    (Input,    r#"//input[@type="checkbox" and @name="remember"]"#,"",          "remember",      "checkbox",     "", ""),
    (Input,    r#"//input[@type="radio" and @name="gender"]"#,     "",          "gender-male",   "radio",        "", ""),
    (Select,   r#"//select[@name="country"]"#,                     "",          "country",       "form-select",  "", ""),
    (Textarea, r#"//textarea[@name="message"]"#,                   "",          "message",       "form-control", "Enter your message", ""),
    (Link,     r#"//a[@href="/login"]"#,                           "Login",     "login-link",    "nav-link",     "", ""),
    (Link,     r#"//a[@href="/register"]"#,                        "Register",  "register-link", "nav-link",     "", ""),
    (Link,     r#"//a[contains(@class, "social-link")]"#,          "Follow us", "social-link",   "social-link",  "", ""),
    // Forms
    (Form,     r#"//form[@id="login-form"]"#,                      "",          "login-form",    "login-form",   "", ""),
    (Form,     r#"//form[@id="contact-form"]"#,                    "",          "contact-form",  "contact-form", "", ""),
    // Navigation
    (Nav,      r#"//nav[@class="main-navigation"]"#,               "",          "main-nav",      "main-navigation", "", ""),
    (Nav,      r#"//nav[@class="breadcrumb"]"#,                    "",          "breadcrumb",    "breadcrumb",   "", ""),
    // Containers
    (Div,      r#"//div[@class="dropdown-menu"]"#,                 "",          "dropdown-menu", "dropdown-menu", "", ""),
    (Div,      r#"//div[@class="modal-content"]"#,                 "",          "modal-content", "modal-content", "", ""),
    (Div,      r#"//div[@class="tab-content"]"#,                   "",          "tab-content",   "tab-content",  "", ""),
    // Media
    (Img,      r#"//img[@alt="Logo"]"#,                            "",          "logo",          "logo",         "", "Company Logo"),
    (Img,      r#"//img[@class="hero-image"]"#,                    "",          "hero-image",    "hero-image",   "", "Hero Image"),
    // Text
    (H1,       r#"//h1[@class="page-title"]"#,                     "Welcome to Our Website", "page-title", "page-title", "", ""),
    (H2,       r#"//h2[@class="section-title"]"#,                  "Our Services", "section-title", "section-title", "", ""),
    (P,        r#"//p[@class="description"]"#,                     "This is a sample description text.", "description", "description", "", ""),
    (Span,     r#"//span[@class="price"]"#,                        "$99.99",    "price",         "price",        "", ""),
];

/// A fresh copy of the sample set, in display order.
pub fn sample() -> Vec<ElementDescriptor> {
    SAMPLE
        .iter()
        .map(|&(kind, xpath, text, id, class, placeholder, alt)| {
            ElementDescriptor::new(kind, xpath)
                .with_text(text)
                .with_id(id)
                .with_class(class)
                .with_placeholder(placeholder)
                .with_alt(alt)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind::Img;
    use std::collections::HashSet;

    #[test]
    fn sample_is_stable() {
        assert_eq!(sample(), sample());
        assert_eq!(sample().len(), 25);
    }

    #[test]
    fn no_duplicate_path_and_type_pairs() {
        let items = sample();
        let pairs: HashSet<_> = items.iter().map(|d| (d.kind, d.xpath.as_str())).collect();
        assert_eq!(pairs.len(), items.len());
    }

    #[test]
    fn only_images_carry_alt() {
        for d in sample() {
            assert_eq!(d.alt.is_some(), d.kind == Img, "{}", d.xpath);
        }
    }
}
