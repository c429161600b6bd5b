//! Import from an exported document
//!
//! The document is searched for the three well-known element ids. A missing
//! element imports as empty text; only input with none of them, or an
//! element that is opened but never closed, is rejected. Nothing here panics
//! on malformed input.

use thiserror::Error;

use crate::model::Tab;

use super::export::{MARKUP_ELEMENT_ID, SCRIPT_ELEMENT_ID, STYLE_ELEMENT_ID};
use super::ProjectSnapshot;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    #[error("the document is empty")]
    Empty,
    #[error("no markup, style or script section found")]
    NoSections,
    #[error("the {0} section is never closed")]
    Unterminated(&'static str),
}

/// A successful import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub snapshot: ProjectSnapshot,
    /// Sections absent from the document (imported as empty text)
    pub missing: Vec<Tab>,
}

/// Parse an exported document back into its three texts
pub fn import_document(html: &str) -> Result<ImportReport, ImportError> {
    if html.trim().is_empty() {
        return Err(ImportError::Empty);
    }
    // ASCII lowercasing keeps byte offsets aligned with `html`
    let lower = html.to_ascii_lowercase();

    let mut snapshot = ProjectSnapshot::default();
    let mut missing = Vec::new();
    for tab in Tab::ALL {
        let id = match tab {
            Tab::Markup => MARKUP_ELEMENT_ID,
            Tab::Style => STYLE_ELEMENT_ID,
            Tab::Script => SCRIPT_ELEMENT_ID,
        };
        match element_content(html, &lower, id, tab.label())? {
            Some(content) => match tab {
                Tab::Markup => snapshot.markup = content,
                Tab::Style => snapshot.style = content,
                Tab::Script => snapshot.script = content,
            },
            None => missing.push(tab),
        }
    }

    if missing.len() == Tab::ALL.len() {
        return Err(ImportError::NoSections);
    }
    for tab in &missing {
        tracing::debug!("Imported document has no {} section", tab.label());
    }
    Ok(ImportReport { snapshot, missing })
}

fn element_content(
    html: &str,
    lower: &str,
    id: &str,
    label: &'static str,
) -> Result<Option<String>, ImportError> {
    let Some(attr) = find_id_attribute(lower, id) else {
        return Ok(None);
    };
    let Some(open) = lower[..attr].rfind('<') else {
        return Ok(None);
    };
    let name: String = lower[open + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if name.is_empty() {
        return Ok(None);
    }
    let Some(gt) = lower[attr..].find('>') else {
        return Err(ImportError::Unterminated(label));
    };
    let content_start = attr + gt + 1;

    let content_end = if name == "style" || name == "script" {
        // Raw text elements: the first closing tag ends them
        find_tag(lower, content_start, &format!("</{}", name))
    } else {
        // Exported markup may be unbalanced, so prefer the last close tag
        // before what export places after the container
        container_bound(lower, content_start)
            .and_then(|bound| rfind_tag(lower, content_start, bound, &format!("</{}", name)))
            .or_else(|| matching_close(lower, content_start, &name))
    }
    .ok_or(ImportError::Unterminated(label))?;

    Ok(Some(
        trim_wrapping_newlines(&html[content_start..content_end]).to_string(),
    ))
}

fn find_id_attribute(lower: &str, id: &str) -> Option<usize> {
    let id = id.to_ascii_lowercase();
    [format!("id=\"{}\"", id), format!("id='{}'", id)]
        .iter()
        .filter_map(|pattern| lower.find(pattern.as_str()))
        .min()
}

/// Where the markup container must have ended: the script element's open
/// tag, or the body close tag when there is no script element
fn container_bound(lower: &str, from: usize) -> Option<usize> {
    let script = find_id_attribute(lower, SCRIPT_ELEMENT_ID)
        .filter(|&attr| attr > from)
        .and_then(|attr| lower[..attr].rfind('<'))
        .filter(|&open| open >= from);
    script.or_else(|| {
        let body = lower.get(from..)?.rfind("</body")?;
        Some(from + body)
    })
}

/// Last occurrence of `pattern` in `from..to` that is not a prefix of a
/// longer tag name
fn rfind_tag(lower: &str, from: usize, to: usize, pattern: &str) -> Option<usize> {
    let mut end = to;
    while let Some(at) = lower.get(from..end)?.rfind(pattern).map(|i| from + i) {
        let boundary = lower
            .as_bytes()
            .get(at + pattern.len())
            .map_or(true, |b| !b.is_ascii_alphanumeric() && *b != b'-');
        if boundary {
            return Some(at);
        }
        end = at;
    }
    None
}

/// Find the close tag balancing an element opened just before `from`,
/// counting nested elements of the same name
fn matching_close(lower: &str, from: usize, name: &str) -> Option<usize> {
    let open_pattern = format!("<{}", name);
    let close_pattern = format!("</{}", name);
    let mut depth = 1usize;
    let mut pos = from;
    loop {
        let next_close = find_tag(lower, pos, &close_pattern)?;
        match find_tag(lower, pos, &open_pattern) {
            Some(next_open) if next_open < next_close => {
                depth += 1;
                pos = next_open + open_pattern.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(next_close);
                }
                pos = next_close + close_pattern.len();
            }
        }
    }
}

/// Occurrence of `pattern` at or after `from` that is not a prefix of a
/// longer tag name (`<div` must not match `<divider`)
fn find_tag(lower: &str, from: usize, pattern: &str) -> Option<usize> {
    let mut pos = from;
    while let Some(i) = lower.get(pos..)?.find(pattern) {
        let at = pos + i;
        let boundary = lower
            .as_bytes()
            .get(at + pattern.len())
            .map_or(true, |b| !b.is_ascii_alphanumeric() && *b != b'-');
        if boundary {
            return Some(at);
        }
        pos = at + pattern.len();
    }
    None
}

/// Undo the single newline export puts after the open tag and before the
/// close tag
fn trim_wrapping_newlines(content: &str) -> &str {
    let content = content.strip_prefix('\n').unwrap_or(content);
    content.strip_suffix('\n').unwrap_or(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::export_document;

    #[test]
    fn test_round_trip_through_export() {
        let snapshot = ProjectSnapshot::new(
            "<div class=\"outer\">\n  <div>nested</div>\n</div>",
            "div { margin: 0; }",
            "document.querySelector('div');",
        );
        let report = import_document(&export_document(&snapshot, "t")).unwrap();
        assert_eq!(report.snapshot, snapshot);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_round_trip_unbalanced_markup() {
        for markup in ["<div>draft", "<div><div>two open", "</div>stray close", "<div"] {
            let snapshot = ProjectSnapshot::new(markup, "", "go();");
            let report = import_document(&export_document(&snapshot, "t")).unwrap();
            assert_eq!(report.snapshot, snapshot, "{:?}", markup);
        }
    }

    #[test]
    fn test_unbalanced_markup_without_script_element() {
        let html = "<body><div id=\"livepen-markup\">\n<div>draft\n</div>\n</body>";
        let report = import_document(html).unwrap();
        assert_eq!(report.snapshot.markup, "<div>draft");
    }

    #[test]
    fn test_round_trip_keeps_carriage_returns() {
        let snapshot = ProjectSnapshot::new("a\r", "\rb {}\r", "x();\r\n");
        let report = import_document(&export_document(&snapshot, "t")).unwrap();
        assert_eq!(report.snapshot, snapshot);
    }

    #[test]
    fn test_round_trip_empty_sections() {
        let snapshot = ProjectSnapshot::default();
        let report = import_document(&export_document(&snapshot, "t")).unwrap();
        assert_eq!(report.snapshot, snapshot);
    }

    #[test]
    fn test_missing_script_imports_as_empty() {
        let html = "<html><head><style id=\"livepen-style\">a{}</style></head>\
                    <body><div id=\"livepen-markup\"><p>x</p></div></body></html>";
        let report = import_document(html).unwrap();
        assert_eq!(report.snapshot.script, "");
        assert_eq!(report.snapshot.style, "a{}");
        assert_eq!(report.snapshot.markup, "<p>x</p>");
        assert_eq!(report.missing, vec![Tab::Script]);
    }

    #[test]
    fn test_tolerates_case_and_single_quotes() {
        let html = "<DIV ID='livepen-markup'>Hi</DIV><SCRIPT id=\"livepen-script\">go()</SCRIPT>";
        let report = import_document(html).unwrap();
        assert_eq!(report.snapshot.markup, "Hi");
        assert_eq!(report.snapshot.script, "go()");
        assert_eq!(report.missing, vec![Tab::Style]);
    }

    #[test]
    fn test_longer_tag_names_are_not_nesting() {
        let html = "<div id=\"livepen-markup\"><divider></divider>x</div>";
        let report = import_document(html).unwrap();
        assert_eq!(report.snapshot.markup, "<divider></divider>x");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(import_document("  \n"), Err(ImportError::Empty));
    }

    #[test]
    fn test_unrelated_document_is_rejected() {
        assert_eq!(
            import_document("<html><body>hello</body></html>"),
            Err(ImportError::NoSections)
        );
        assert_eq!(import_document("not html at all <<<"), Err(ImportError::NoSections));
    }

    #[test]
    fn test_unterminated_section_is_rejected() {
        let html = "<div id=\"livepen-markup\"><div>open";
        assert_eq!(import_document(html), Err(ImportError::Unterminated("HTML")));
        let html = "<style id=\"livepen-style\">a{}";
        assert_eq!(import_document(html), Err(ImportError::Unterminated("CSS")));
    }
}
