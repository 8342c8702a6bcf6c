// src/core/html.rs
use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Inner text between the first `open_pat` tag (attributes allowed) and `close_pat`.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Document `<title>`, decoded and whitespace-normalized. None if missing or blank.
pub fn title_of(doc: &str) -> Option<String> {
    let raw = slice_between_ci(doc, "<title", "</title>")?;
    let title = normalize_ws(&normalize_entities(&strip_tags(raw)));
    if title.is_empty() { None } else { Some(title) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_case_insensitive_and_decoded() {
        let doc = "<HTML><Head><TITLE data-x=\"1\">\n  Fish &amp; Chips </TITLE></head></html>";
        assert_eq!(title_of(doc).as_deref(), Some("Fish & Chips"));
    }

    #[test]
    fn missing_or_blank_title_is_none() {
        assert_eq!(title_of("<html><body>hi</body></html>"), None);
        assert_eq!(title_of("<title>   </title>"), None);
    }

    #[test]
    fn strip_tags_collapses_whitespace() {
        assert_eq!(strip_tags("<b>Our</b>\n <i>Services</i>"), "Our Services");
    }
}
