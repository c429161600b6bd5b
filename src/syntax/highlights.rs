//! Syntax highlighting data structures
//!
//! Defines token categories and per-line token lists.

/// Category a highlighted span belongs to.
///
/// Unclassified text has no token at all, so "plain" is the absence of a
/// `TokenKind` rather than a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Comment,
    String,
    Keyword,
    Tag,
    AttributeName,
    AttributeValue,
    Selector,
    PropertyName,
    Value,
    Number,
    FunctionName,
    Variable,
    Operator,
    Punctuation,
}

impl TokenKind {
    /// CSS class suffix used when rendering the token as a span
    pub fn class_name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Keyword => "keyword",
            TokenKind::Tag => "tag",
            TokenKind::AttributeName => "attr-name",
            TokenKind::AttributeValue => "attr-value",
            TokenKind::Selector => "selector",
            TokenKind::PropertyName => "property",
            TokenKind::Value => "value",
            TokenKind::Number => "number",
            TokenKind::FunctionName => "function",
            TokenKind::Variable => "variable",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
        }
    }
}

/// A single highlighted span within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightToken {
    /// Start byte offset within the line (inclusive)
    pub start: usize,
    /// End byte offset within the line (exclusive)
    pub end: usize,
    pub kind: TokenKind,
}

impl HighlightToken {
    pub fn new(start: usize, end: usize, kind: TokenKind) -> Self {
        Self { start, end, kind }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Highlight information for a single line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineHighlights {
    /// Tokens sorted by start, never overlapping
    pub tokens: Vec<HighlightToken>,
}

impl LineHighlights {
    /// Get the token kind covering a given byte offset, if any
    pub fn kind_at(&self, offset: usize) -> Option<TokenKind> {
        for token in &self.tokens {
            if offset >= token.start && offset < token.end {
                return Some(token.kind);
            }
            if token.start > offset {
                break; // tokens are sorted, no need to continue
            }
        }
        None
    }

    /// Append a token, merging it into the previous one when both are
    /// adjacent and of the same kind
    pub(crate) fn push(&mut self, token: HighlightToken) {
        if token.is_empty() {
            return;
        }
        if let Some(last) = self.tokens.last_mut() {
            if last.end == token.start && last.kind == token.kind {
                last.end = token.end;
                return;
            }
        }
        self.tokens.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_at() {
        let line = LineHighlights {
            tokens: vec![
                HighlightToken::new(0, 3, TokenKind::Keyword),
                HighlightToken::new(4, 7, TokenKind::Variable),
            ],
        };
        assert_eq!(line.kind_at(0), Some(TokenKind::Keyword));
        assert_eq!(line.kind_at(3), None);
        assert_eq!(line.kind_at(6), Some(TokenKind::Variable));
        assert_eq!(line.kind_at(7), None);
    }

    #[test]
    fn test_push_merges_adjacent_same_kind() {
        let mut line = LineHighlights::default();
        line.push(HighlightToken::new(0, 1, TokenKind::Punctuation));
        line.push(HighlightToken::new(1, 2, TokenKind::Punctuation));
        line.push(HighlightToken::new(2, 2, TokenKind::Operator));
        line.push(HighlightToken::new(3, 4, TokenKind::Punctuation));
        assert_eq!(
            line.tokens,
            vec![
                HighlightToken::new(0, 2, TokenKind::Punctuation),
                HighlightToken::new(3, 4, TokenKind::Punctuation),
            ]
        );
    }
}
