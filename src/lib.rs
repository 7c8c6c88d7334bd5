//! Lexical front end for the niko toy language.
//!
//! Converts raw source text into a flat stream of classified tokens plus
//! a deduplicated symbol table, in two stages: a [`scanner`] that splits
//! lines into raw tokens while tracking bracket/quote balance and the `;`
//! line terminator, and a [`classifier`] that routes each token to a
//! literal class or a symbol-table slot. All scan problems are non-fatal
//! diagnostics; the pipeline always runs to completion.
//!
//! # Quick start
//!
//! ## Scan and classify a compilation unit
//!
//! ```
//! use nikolex_rs::{Language, analyze, format};
//!
//! let lang = Language::niko();
//! let analysis = analyze("seisuu x = 5;\nhyouji(x);", &lang);
//!
//! assert!(analysis.diagnostics.is_empty());
//! assert_eq!(analysis.tokens[0], "seisuu");
//! assert_eq!(analysis.records[1].to_string(), "<TS[0], 1>");
//! // `x` reuses its slot at the second occurrence
//! assert_eq!(analysis.records[7].to_string(), "<TS[0], 7>");
//! assert!(format(&analysis.records).starts_with("<seisuu, 0>"));
//! ```
//!
//! ## Collect diagnostics without aborting
//!
//! ```
//! use nikolex_rs::{Language, scan};
//!
//! let out = scan("x = (5", &Language::niko());
//! assert_eq!(out.tokens, ["x", "=", "(", "5"]);
//! assert_eq!(out.diagnostics.len(), 2); // missing ';', unterminated '('
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod classifier;
pub mod formatter;
pub mod language;
pub mod scanner;
pub mod symbols;

pub use classifier::{ClassifyOutput, Record, classify};
pub use formatter::format;
pub use language::Language;
pub use scanner::{Diagnostic, DiagnosticKind, ScanOutput, Span, scan, scan_lines};
pub use symbols::SymbolTable;

/// Everything one run of the pipeline produces for a compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Raw tokens in source appearance order.
    pub tokens: Vec<String>,
    /// Classified records, one per non-empty token.
    pub records: Vec<Record>,
    /// Final symbol table, surfaced for reporting.
    pub symbols: SymbolTable,
    /// Scan diagnostics, all non-fatal.
    pub diagnostics: Vec<Diagnostic>,
}

/// Scan and classify a source string in one step.
#[must_use]
pub fn analyze(input: &str, language: &Language) -> Analysis {
    let scanned = scan(input, language);
    let classified = classify(&scanned.tokens, language);
    Analysis {
        tokens: scanned.tokens,
        records: classified.records,
        symbols: classified.symbols,
        diagnostics: scanned.diagnostics,
    }
}
