//! Single-pass tokenizer for markup, stylesheet and script text
//!
//! Each line is scanned once, left to right, producing a flat list of
//! non-overlapping tokens. Constructs that can span lines (block comments,
//! markup comments, open tags, template strings, stylesheet blocks) carry
//! over through [`ScanState`].
//!
//! Classification is heuristic: there is no grammar behind it, and
//! misclassifications at construct boundaries (selectors with combinators,
//! regex literals, quotes in prose) are accepted.

use super::highlights::{HighlightToken, LineHighlights, TokenKind};
use super::languages::LanguageId;

const SCRIPT_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "false", "finally", "for", "from",
    "function", "if", "import", "in", "instanceof", "let", "new", "null", "of", "return",
    "static", "super", "switch", "this", "throw", "true", "try", "typeof", "undefined", "var",
    "void", "while", "with", "yield",
];

const SCRIPT_PUNCTUATION: &[u8] = b"{}()[];,.";
const SCRIPT_OPERATORS: &[u8] = b"+-*/%=<>!&|^~?:";

/// Multi-line construct the scanner is currently inside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    #[default]
    Normal,
    /// `/* ... */` in stylesheets and scripts
    BlockComment,
    /// `<!-- ... -->` in markup
    MarkupComment,
    /// Between `<name` and `>` in markup
    InsideTag,
    /// Backtick string in scripts
    TemplateString,
}

/// State carried from one line to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    pub mode: ScanMode,
    /// Brace nesting depth in stylesheets
    css_depth: usize,
    /// Inside a declaration value (after `:`, before `;` or `}`)
    css_in_value: bool,
}

/// Tokenize a whole text, one entry per `\n`-separated line
pub fn tokenize(text: &str, language: LanguageId) -> Vec<LineHighlights> {
    let mut state = ScanState::default();
    text.split('\n')
        .map(|line| tokenize_line(line, language, &mut state))
        .collect()
}

/// Tokenize a single line (without its trailing newline)
pub fn tokenize_line(line: &str, language: LanguageId, state: &mut ScanState) -> LineHighlights {
    let mut scanner = Scanner::new(line);
    match language {
        LanguageId::Html => scan_markup(&mut scanner, state),
        LanguageId::Css => scan_stylesheet(&mut scanner, state),
        LanguageId::JavaScript => scan_script(&mut scanner, state),
        LanguageId::PlainText => {}
    }
    scanner.out
}

struct Scanner<'a> {
    line: &'a str,
    bytes: &'a [u8],
    pos: usize,
    out: LineHighlights,
}

impl<'a> Scanner<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            bytes: line.as_bytes(),
            pos: 0,
            out: LineHighlights::default(),
        }
    }

    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> u8 {
        self.bytes[self.pos]
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn starts_with(&self, pat: &str) -> bool {
        self.bytes[self.pos..].starts_with(pat.as_bytes())
    }

    /// Byte index of `pat` at or after `from`
    fn find_from(&self, from: usize, pat: &str) -> Option<usize> {
        self.line
            .get(from..)
            .and_then(|rest| rest.find(pat))
            .map(|i| from + i)
    }

    /// Emit a token from the current position to `end` and advance
    fn emit(&mut self, end: usize, kind: TokenKind) {
        self.out.push(HighlightToken::new(self.pos, end, kind));
        self.pos = end;
    }

    fn skip_whitespace(&mut self) {
        while !self.at_end() && self.peek().is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// End of a quoted string starting at the current position, if it
    /// closes on this line. Backslash escapes the next byte.
    fn closed_string_end(&self) -> Option<usize> {
        let quote = self.peek();
        let mut i = self.pos + 1;
        while i < self.len() {
            match self.bytes[i] {
                b'\\' => i += 2,
                b if b == quote => return Some(i + 1),
                _ => i += 1,
            }
        }
        None
    }

    /// Continue a comment that closes with `close`, starting the search at
    /// `from`. Returns true if the comment closed on this line.
    fn comment_until(&mut self, from: usize, close: &str) -> bool {
        match self.find_from(from, close) {
            Some(idx) => {
                self.emit(idx + close.len(), TokenKind::Comment);
                true
            }
            None => {
                self.emit(self.len(), TokenKind::Comment);
                false
            }
        }
    }

    /// Trim trailing ASCII whitespace from `start..end`, returning the new end
    fn trim_end(&self, start: usize, end: usize) -> usize {
        let mut end = end;
        while end > start && self.bytes[end - 1].is_ascii_whitespace() {
            end -= 1;
        }
        end
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn is_tag_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b':'
}

// =============================================================================
// Markup
// =============================================================================

fn scan_markup(s: &mut Scanner, state: &mut ScanState) {
    while !s.at_end() {
        match state.mode {
            ScanMode::MarkupComment => {
                if s.comment_until(s.pos, "-->") {
                    state.mode = ScanMode::Normal;
                }
                continue;
            }
            ScanMode::InsideTag => {
                scan_tag_body(s, state);
                continue;
            }
            _ => {}
        }

        if s.starts_with("<!--") {
            let from = s.pos + 4;
            if !s.comment_until(from, "-->") {
                state.mode = ScanMode::MarkupComment;
            }
            continue;
        }

        match s.peek() {
            b'<' => {
                let mut end = s.pos + 1;
                if matches!(s.peek_at(1), Some(b'/') | Some(b'!')) {
                    end += 1;
                }
                let name_start = end;
                while end < s.len() && is_tag_name_char(s.bytes[end]) {
                    end += 1;
                }
                if end > name_start && s.bytes[name_start].is_ascii_alphabetic() {
                    s.emit(end, TokenKind::Tag);
                    state.mode = ScanMode::InsideTag;
                } else {
                    s.pos += 1;
                }
            }
            b'"' | b'\'' => match s.closed_string_end() {
                Some(end) => s.emit(end, TokenKind::String),
                None => s.pos += 1,
            },
            _ => s.pos += 1,
        }
    }
}

fn scan_tag_body(s: &mut Scanner, state: &mut ScanState) {
    while !s.at_end() {
        let b = s.peek();
        if b.is_ascii_whitespace() || b == b'=' {
            s.pos += 1;
        } else if b == b'>' {
            s.emit(s.pos + 1, TokenKind::Tag);
            state.mode = ScanMode::Normal;
            return;
        } else if b == b'/' && s.peek_at(1) == Some(b'>') {
            s.emit(s.pos + 2, TokenKind::Tag);
            state.mode = ScanMode::Normal;
            return;
        } else if b == b'"' || b == b'\'' {
            let end = s.closed_string_end().unwrap_or(s.len());
            s.emit(end, TokenKind::AttributeValue);
        } else {
            let start = s.pos;
            let mut end = start;
            while end < s.len() {
                let c = s.bytes[end];
                if c.is_ascii_whitespace() || matches!(c, b'=' | b'>' | b'/' | b'"' | b'\'') {
                    break;
                }
                end += 1;
            }
            if end == start {
                s.pos += 1;
                continue;
            }
            let mut next = end;
            while next < s.len() && s.bytes[next].is_ascii_whitespace() {
                next += 1;
            }
            if next < s.len() && s.bytes[next] == b'=' {
                s.emit(end, TokenKind::AttributeName);
            } else {
                s.pos = end;
            }
        }
    }
}

// =============================================================================
// Stylesheet
// =============================================================================

fn scan_stylesheet(s: &mut Scanner, state: &mut ScanState) {
    while !s.at_end() {
        if state.mode == ScanMode::BlockComment {
            if s.comment_until(s.pos, "*/") {
                state.mode = ScanMode::Normal;
            }
            continue;
        }

        s.skip_whitespace();
        if s.at_end() {
            break;
        }

        if s.starts_with("/*") {
            let from = s.pos + 2;
            if !s.comment_until(from, "*/") {
                state.mode = ScanMode::BlockComment;
            }
            continue;
        }

        match s.peek() {
            b'"' | b'\'' => {
                match s.closed_string_end() {
                    Some(end) => s.emit(end, TokenKind::String),
                    None => s.pos += 1,
                }
                continue;
            }
            b'{' => {
                state.css_depth += 1;
                state.css_in_value = false;
                s.emit(s.pos + 1, TokenKind::Punctuation);
                continue;
            }
            b'}' => {
                state.css_depth = state.css_depth.saturating_sub(1);
                state.css_in_value = false;
                s.emit(s.pos + 1, TokenKind::Punctuation);
                continue;
            }
            b';' => {
                state.css_in_value = false;
                s.emit(s.pos + 1, TokenKind::Punctuation);
                continue;
            }
            _ => {}
        }

        if state.css_in_value {
            scan_css_value(s);
            continue;
        }

        if s.peek() == b'@' {
            let mut end = s.pos + 1;
            while end < s.len() && (is_ident_char(s.bytes[end]) || s.bytes[end] == b'-') {
                end += 1;
            }
            s.emit(end, TokenKind::Keyword);
            continue;
        }

        scan_css_segment(s, state);
    }
}

/// Value text after a property colon, up to the next terminator, string or
/// comment
fn scan_css_value(s: &mut Scanner) {
    let start = s.pos;
    let mut end = start;
    while end < s.len() {
        let b = s.bytes[end];
        if matches!(b, b';' | b'}' | b'{' | b'"' | b'\'')
            || (b == b'/' && s.bytes.get(end + 1) == Some(&b'*'))
        {
            break;
        }
        end += 1;
    }
    let trimmed = s.trim_end(start, end);
    if trimmed > start {
        s.emit(trimmed, TokenKind::Value);
    }
    s.pos = end;
}

/// A run of text outside a value: either a selector (ends in `{`) or a
/// declaration name (contains `:` inside a block)
fn scan_css_segment(s: &mut Scanner, state: &mut ScanState) {
    let start = s.pos;
    let mut seg_end = start;
    while seg_end < s.len() && !matches!(s.bytes[seg_end], b'{' | b'}' | b';') {
        seg_end += 1;
    }
    let terminator = s.bytes.get(seg_end).copied();
    let colon = s.line[start..seg_end].find(':').map(|i| start + i);

    if terminator == Some(b'{') || (terminator.is_none() && state.css_depth == 0) {
        let end = s.trim_end(start, seg_end);
        s.emit(end, TokenKind::Selector);
        s.pos = seg_end;
        return;
    }

    if let (Some(colon), true) = (colon, state.css_depth > 0) {
        let name_end = s.trim_end(start, colon);
        if name_end > start {
            s.emit(name_end, TokenKind::PropertyName);
        }
        s.pos = colon;
        s.emit(colon + 1, TokenKind::Punctuation);
        state.css_in_value = true;
        return;
    }

    s.pos = seg_end;
}

// =============================================================================
// Script
// =============================================================================

fn scan_script(s: &mut Scanner, state: &mut ScanState) {
    while !s.at_end() {
        match state.mode {
            ScanMode::BlockComment => {
                if s.comment_until(s.pos, "*/") {
                    state.mode = ScanMode::Normal;
                }
                continue;
            }
            ScanMode::TemplateString => {
                let from = s.pos;
                if scan_template_tail(s, from) {
                    state.mode = ScanMode::Normal;
                }
                continue;
            }
            _ => {}
        }

        let b = s.peek();
        if b.is_ascii_whitespace() {
            s.pos += 1;
        } else if s.starts_with("//") {
            s.emit(s.len(), TokenKind::Comment);
        } else if s.starts_with("/*") {
            let from = s.pos + 2;
            if !s.comment_until(from, "*/") {
                state.mode = ScanMode::BlockComment;
            }
        } else if b == b'"' || b == b'\'' {
            match s.closed_string_end() {
                Some(end) => s.emit(end, TokenKind::String),
                None => s.pos += 1,
            }
        } else if b == b'`' {
            let from = s.pos + 1;
            if !scan_template_tail(s, from) {
                state.mode = ScanMode::TemplateString;
            }
        } else if b.is_ascii_digit()
            || (b == b'.' && s.peek_at(1).is_some_and(|n| n.is_ascii_digit()))
        {
            scan_number(s);
        } else if is_ident_start(b) {
            scan_identifier(s);
        } else if SCRIPT_PUNCTUATION.contains(&b) {
            s.emit(s.pos + 1, TokenKind::Punctuation);
        } else if SCRIPT_OPERATORS.contains(&b) {
            let mut end = s.pos + 1;
            while end < s.len() && SCRIPT_OPERATORS.contains(&s.bytes[end]) {
                end += 1;
            }
            s.emit(end, TokenKind::Operator);
        } else {
            s.pos += 1;
        }
    }
}

/// Emit a template string from the current position, searching for the
/// closing backtick from `from`. Returns true if it closed on this line.
fn scan_template_tail(s: &mut Scanner, from: usize) -> bool {
    let mut i = from;
    while i < s.len() {
        match s.bytes[i] {
            b'\\' => i += 2,
            b'`' => {
                s.emit(i + 1, TokenKind::String);
                return true;
            }
            _ => i += 1,
        }
    }
    s.emit(s.len(), TokenKind::String);
    false
}

fn scan_number(s: &mut Scanner) {
    let mut end = s.pos;
    while end < s.len() {
        let b = s.bytes[end];
        if b.is_ascii_alphanumeric() || b == b'.' || b == b'_' {
            end += 1;
        } else if matches!(b, b'+' | b'-') && matches!(s.bytes[end - 1], b'e' | b'E') {
            end += 1;
        } else {
            break;
        }
    }
    s.emit(end, TokenKind::Number);
}

fn scan_identifier(s: &mut Scanner) {
    let start = s.pos;
    let mut end = start;
    while end < s.len() && is_ident_char(s.bytes[end]) {
        end += 1;
    }
    let line = s.line;
    let word = &line[start..end];

    let kind = if SCRIPT_KEYWORDS.contains(&word) {
        Some(TokenKind::Keyword)
    } else if is_constant_case(word) {
        Some(TokenKind::Variable)
    } else if line[end..].trim_start().starts_with('(') {
        Some(TokenKind::FunctionName)
    } else {
        None
    };

    match kind {
        Some(kind) => s.emit(end, kind),
        None => s.pos = end,
    }
}

/// `MAX_SIZE`, `API_URL2`: at least two characters, no lowercase letters
fn is_constant_case(word: &str) -> bool {
    word.len() >= 2
        && word.bytes().any(|b| b.is_ascii_uppercase())
        && !word.bytes().any(|b| b.is_ascii_lowercase())
}
