use std::collections::HashSet;

/// Character and keyword sets that drive scanning and classification.
///
/// The scanner splits tokens on delimiter and operator characters; the
/// classifier uses the same sets plus the reserved-keyword spellings to
/// route tokens. The keyword *translation* mapping is external
/// configuration — the core only needs membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    delimiters: HashSet<char>,
    operators: HashSet<char>,
    keywords: HashSet<String>,
}

impl Language {
    /// Build a language from explicit delimiter, operator, and keyword sets.
    #[must_use]
    pub fn new<D, O, K, S>(delimiters: D, operators: O, keywords: K) -> Self
    where
        D: IntoIterator<Item = char>,
        O: IntoIterator<Item = char>,
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            delimiters: delimiters.into_iter().collect(),
            operators: operators.into_iter().collect(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// The niko language defaults: its delimiter and operator sets and
    /// the full reserved-keyword list.
    #[must_use]
    pub fn niko() -> Self {
        Self::new(
            [' ', '=', ';', '{', '}', '[', ']', '(', ')', '"'],
            ['=', '+', '-', '*', '/'],
            [
                "mein",
                "modoru",
                "hyouji",
                "nyuuryoku",
                "moshi",
                "sore igai",
                "kurikaeshi",
                "kokoromiru",
                "seisuu",
                "shousuu",
                "mojiretsu",
                "shingi",
                "shin",
                "gi",
                "katsu",
                "mata wa",
                "dewa nai",
            ],
        )
    }

    /// Add an extra delimiter character, e.g. `#` for the comment-start
    /// variant of the language.
    #[must_use]
    pub fn with_delimiter(mut self, ch: char) -> Self {
        self.delimiters.insert(ch);
        self
    }

    /// Add an extra reserved keyword spelling.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.insert(keyword.into());
        self
    }

    #[must_use]
    pub fn is_delimiter(&self, ch: char) -> bool {
        self.delimiters.contains(&ch)
    }

    #[must_use]
    pub fn is_operator(&self, ch: char) -> bool {
        self.operators.contains(&ch)
    }

    /// True if `ch` forces the current token to close.
    #[must_use]
    pub fn is_boundary(&self, ch: char) -> bool {
        self.is_delimiter(ch) || self.is_operator(ch)
    }

    #[must_use]
    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(text)
    }

    /// The closer paired with an opening bracket or quote, if `ch` opens
    /// one. The double quote closes itself.
    #[must_use]
    pub const fn matching_closer(ch: char) -> Option<char> {
        match ch {
            '(' => Some(')'),
            '[' => Some(']'),
            '{' => Some('}'),
            '"' => Some('"'),
            _ => None,
        }
    }

    /// True for `)`, `]`, and `}`. The double quote is handled as its own
    /// closer by the scanner's quote mode.
    #[must_use]
    pub const fn is_closing_bracket(ch: char) -> bool {
        matches!(ch, ')' | ']' | '}')
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::niko()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn niko_defaults() {
        let lang = Language::niko();
        assert!(lang.is_delimiter(';'));
        assert!(lang.is_delimiter(' '));
        assert!(lang.is_operator('+'));
        assert!(lang.is_boundary('='));
        assert!(lang.is_keyword("seisuu"));
        assert!(!lang.is_keyword("foo"));
    }

    #[test]
    fn equals_is_both_delimiter_and_operator() {
        let lang = Language::niko();
        assert!(lang.is_delimiter('='));
        assert!(lang.is_operator('='));
    }

    #[test]
    fn comment_delimiter_is_opt_in() {
        let lang = Language::niko();
        assert!(!lang.is_delimiter('#'));
        let lang = lang.with_delimiter('#');
        assert!(lang.is_delimiter('#'));
    }

    #[test]
    fn bracket_pairs() {
        assert_eq!(Language::matching_closer('('), Some(')'));
        assert_eq!(Language::matching_closer('['), Some(']'));
        assert_eq!(Language::matching_closer('{'), Some('}'));
        assert_eq!(Language::matching_closer('"'), Some('"'));
        assert_eq!(Language::matching_closer(')'), None);
        assert!(Language::is_closing_bracket(']'));
        assert!(!Language::is_closing_bracket('"'));
    }
}
