use std::fmt;

use crate::language::Language;
use crate::symbols::SymbolTable;

/// One classified token: literal class or symbol-table reference, plus the
/// token's 0-based position in the input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Reserved word, quoted span, standalone delimiter/operator, or
    /// all-digit literal, carried through verbatim.
    Literal { text: String, position: usize },
    /// Anything else: a symbol-table reference.
    Symbol { index: usize, position: usize },
}

impl Record {
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. } | Self::Symbol { position, .. } => *position,
        }
    }
}

/// Wire form: `<text, pos>` or `<TS[index], pos>`.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { text, position } => write!(f, "<{text}, {position}>"),
            Self::Symbol { index, position } => write!(f, "<TS[{index}], {position}>"),
        }
    }
}

/// Classified records plus the symbol table built while producing them.
///
/// The table is surfaced for reporting only; it does not feed back into
/// classification beyond the dedup it provides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyOutput {
    pub records: Vec<Record>,
    pub symbols: SymbolTable,
}

/// Classify raw tokens into records, in input order.
///
/// Classification priority per token: reserved keyword, quoted span,
/// single delimiter/operator character, all-decimal-digits, and finally
/// symbol (deduplicated through a fresh [`SymbolTable`]). Empty tokens
/// are tolerated and skipped, but still consume their sequence position.
/// Classification has no failure path; well-formedness problems surface
/// earlier, in the scanner.
#[must_use = "classification builds the records and the symbol table"]
pub fn classify<I, S>(tokens: I, language: &Language) -> ClassifyOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut symbols = SymbolTable::new();
    let mut records = Vec::new();

    for (position, token) in tokens.into_iter().enumerate() {
        let text = token.as_ref().trim();
        if text.is_empty() {
            continue;
        }

        if is_literal(text, language) {
            records.push(Record::Literal {
                text: text.to_string(),
                position,
            });
        } else {
            let index = symbols.add(text);
            records.push(Record::Symbol { index, position });
        }
    }

    ClassifyOutput { records, symbols }
}

fn is_literal(text: &str, language: &Language) -> bool {
    if language.is_keyword(text) {
        return true;
    }
    if is_quoted_span(text) {
        return true;
    }
    if is_single_boundary(text, language) {
        return true;
    }
    text.chars().all(|ch| ch.is_ascii_digit())
}

/// A span that starts and ends with `"`. A lone `"` is not a span; it is
/// caught by the single-delimiter rule instead.
fn is_quoted_span(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

fn is_single_boundary(text: &str, language: &Language) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => language.is_boundary(ch),
        _ => false,
    }
}
