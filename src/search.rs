//! Find-in-document for the active text
//!
//! Matching is case-insensitive and works on the raw document text (not the
//! rendered fragment), reporting character offsets. Matches never overlap:
//! scanning resumes at the end of the previous match.

/// Direction to move through existing matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Next,
    Previous,
}

/// State of the find bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    term: String,
    /// Start offsets (in characters) of every match
    matches: Vec<usize>,
    /// Index into `matches`
    selected: Option<usize>,
}

impl SearchState {
    /// Run a search.
    ///
    /// A new term (or no direction) recomputes all matches and selects the
    /// first. The same term with a direction steps through the existing
    /// matches, wrapping at either end. Returns the selected match offset.
    pub fn search(
        &mut self,
        text: &str,
        term: &str,
        direction: Option<SearchDirection>,
    ) -> Option<usize> {
        match direction {
            Some(direction) if term == self.term => self.step(direction),
            _ => {
                self.term = term.to_string();
                self.matches = find_matches(text, term);
                self.selected = if self.matches.is_empty() { None } else { Some(0) };
            }
        }
        self.current_match()
    }

    fn step(&mut self, direction: SearchDirection) {
        let count = self.matches.len();
        if count == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        self.selected = Some(match direction {
            SearchDirection::Next => (current + 1) % count,
            SearchDirection::Previous => (current + count - 1) % count,
        });
    }

    /// Offset of the selected match
    pub fn current_match(&self) -> Option<usize> {
        self.selected.and_then(|i| self.matches.get(i).copied())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Forget the term and all matches
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Case-insensitive, non-overlapping match offsets (in characters)
pub fn find_matches(text: &str, term: &str) -> Vec<usize> {
    if term.is_empty() {
        return Vec::new();
    }
    let haystack: Vec<char> = text.chars().map(fold_case).collect();
    let needle: Vec<char> = term.chars().map(fold_case).collect();

    let mut results = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            results.push(i);
            i += needle.len();
        } else {
            i += 1;
        }
    }
    results
}

/// Lowercase a character when that maps it to exactly one character, so
/// offsets in the folded text match the original
fn fold_case(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Approximate vertical position of a character offset: the number of
/// newlines before it times an average line height. Not pixel-exact.
/// None if the offset is past the end of the text.
pub fn estimate_scroll_top(text: &str, char_offset: usize, line_height: f32) -> Option<f32> {
    let mut line = 0usize;
    let mut seen = 0usize;
    for ch in text.chars() {
        if seen == char_offset {
            break;
        }
        if ch == '\n' {
            line += 1;
        }
        seen += 1;
    }
    if seen < char_offset {
        return None;
    }
    Some(line as f32 * line_height)
}
