//! Markup rendering for highlighted text
//!
//! Turns tokenized lines into a display fragment: HTML-special characters
//! escaped, tokens wrapped in `<span class="hl-KIND">`, newlines as `<br>`.
//! The inverse direction (fragment back to plain text) lives here too so the
//! two stay in agreement.

use super::highlights::LineHighlights;
use super::languages::LanguageId;
use super::tokenizer::{tokenize_line, ScanState};

/// Explicit line break marker emitted between lines
pub const LINE_BREAK: &str = "<br>";

/// Prefix for token span classes
pub const CLASS_PREFIX: &str = "hl-";

/// Highlight `text` as `language`, producing a renderable fragment.
///
/// Never fails; text no rule recognises is emitted escaped and unwrapped.
/// Empty text renders to an empty fragment.
pub fn highlight(text: &str, language: LanguageId) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    if text.is_empty() {
        return out;
    }

    let mut state = ScanState::default();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push_str(LINE_BREAK);
        }
        let highlights = tokenize_line(line, language, &mut state);
        render_line(line, &highlights, &mut out);
    }
    out
}

/// Render one line with its tokens into `out`
pub fn render_line(line: &str, highlights: &LineHighlights, out: &mut String) {
    let mut cursor = 0;
    for token in &highlights.tokens {
        escape_into(&line[cursor..token.start], out);
        out.push_str("<span class=\"");
        out.push_str(CLASS_PREFIX);
        out.push_str(token.kind.class_name());
        out.push_str("\">");
        escape_into(&line[token.start..token.end], out);
        out.push_str("</span>");
        cursor = token.end;
    }
    escape_into(&line[cursor..], out);
}

/// Escape `& < > " '` for safe inclusion in markup
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Decode character references. Unknown or malformed references are kept
/// as literal text.
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&rest[1..semi]).map(|ch| (ch, semi)));
        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}

/// A piece of a rendered fragment as a surface would expose it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupPiece {
    /// Decoded text between two tags
    Text(String),
    /// A `<br>` element
    LineBreak,
}

/// Split a fragment into text runs and line breaks. Every tag boundary ends
/// a text run, so each span's contents come out as their own piece.
pub fn markup_pieces(markup: &str) -> Vec<MarkupPiece> {
    let mut pieces = Vec::new();
    let mut rest = markup;
    while !rest.is_empty() {
        match rest.find('<') {
            Some(0) => {
                let Some(close) = rest.find('>') else {
                    // Unterminated tag: treat the remainder as text
                    pieces.push(MarkupPiece::Text(unescape_html(rest)));
                    break;
                };
                if is_line_break_tag(&rest[1..close]) {
                    pieces.push(MarkupPiece::LineBreak);
                }
                rest = &rest[close + 1..];
            }
            Some(lt) => {
                pieces.push(MarkupPiece::Text(unescape_html(&rest[..lt])));
                rest = &rest[lt..];
            }
            None => {
                pieces.push(MarkupPiece::Text(unescape_html(rest)));
                break;
            }
        }
    }
    pieces
}

fn is_line_break_tag(inner: &str) -> bool {
    let name = inner.trim().trim_end_matches('/').trim();
    name.eq_ignore_ascii_case("br")
}

/// Discard all tags, turn line breaks back into `\n` and decode entities
pub fn strip_markup(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    for piece in markup_pieces(markup) {
        match piece {
            MarkupPiece::Text(text) => out.push_str(&text),
            MarkupPiece::LineBreak => out.push('\n'),
        }
    }
    out
}
