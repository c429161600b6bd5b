//! Export to a single self-contained document

use crate::syntax::escape_html;

use super::ProjectSnapshot;

pub const STYLE_ELEMENT_ID: &str = "livepen-style";
pub const MARKUP_ELEMENT_ID: &str = "livepen-markup";
pub const SCRIPT_ELEMENT_ID: &str = "livepen-script";

/// Compose the three texts into one HTML document.
///
/// Each text sits on its own lines inside an element carrying a well-known
/// id, which is what [`import_document`](super::import_document) looks for.
/// The texts are embedded verbatim.
pub fn export_document(snapshot: &ProjectSnapshot, title: &str) -> String {
    let mut out = String::with_capacity(
        snapshot.markup.len() + snapshot.style.len() + snapshot.script.len() + 256,
    );
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    push_element(&mut out, "style", STYLE_ELEMENT_ID, &snapshot.style);
    out.push_str("</head>\n<body>\n");
    push_element(&mut out, "div", MARKUP_ELEMENT_ID, &snapshot.markup);
    push_element(&mut out, "script", SCRIPT_ELEMENT_ID, &snapshot.script);
    out.push_str("</body>\n</html>\n");
    out
}

fn push_element(out: &mut String, tag: &str, id: &str, content: &str) {
    out.push_str(&format!("<{} id=\"{}\">\n", tag, id));
    out.push_str(content);
    out.push_str(&format!("\n</{}>\n", tag));
}
