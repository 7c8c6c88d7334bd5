//! Scanner edge cases and diagnostic tests.

use nikolex_rs::{DiagnosticKind, Language, scan, scan_lines};

fn niko_scan(input: &str) -> nikolex_rs::ScanOutput {
    scan(input, &Language::niko())
}

// -----------------------------------------------------------
// Basic scanner behaviour.
// -----------------------------------------------------------

#[test]
fn scan_empty_input() {
    let out = niko_scan("");
    assert!(out.tokens.is_empty());
    assert!(out.diagnostics.is_empty());
}

#[test]
fn scan_whitespace_only() {
    let out = niko_scan("   \n\t\n  ");
    assert!(out.tokens.is_empty());
}

#[test]
fn scan_multi_line_program() {
    let out = niko_scan("seisuu x = 5;\nseisuu soma = x + 3;\nhyouji(soma);");
    assert_eq!(
        out.tokens,
        [
            "seisuu", "x", "=", "5", ";", "seisuu", "soma", "=", "x", "+", "3", ";", "hyouji", "(",
            "soma", ")", ";",
        ]
    );
    assert!(out.diagnostics.is_empty());
}

#[test]
fn scan_preserves_appearance_order() {
    let out = niko_scan("a = b / c;");
    assert_eq!(out.tokens, ["a", "=", "b", "/", "c", ";"]);
}

#[test]
fn every_boundary_char_is_standalone_exactly_once() {
    let out = niko_scan("x = (a + b) * [c - d];");
    let count = |text: &str| out.tokens.iter().filter(|t| *t == text).count();
    assert_eq!(count("="), 1);
    assert_eq!(count("("), 1);
    assert_eq!(count(")"), 1);
    assert_eq!(count("["), 1);
    assert_eq!(count("]"), 1);
    assert_eq!(count("+"), 1);
    assert_eq!(count("-"), 1);
    assert_eq!(count("*"), 1);
    assert_eq!(count(";"), 1);
}

#[test]
fn tabs_are_not_boundaries() {
    // Only the space character is in the niko delimiter set; a tab
    // between non-boundary characters stays inside the token.
    let out = niko_scan("a\tb;");
    assert_eq!(out.tokens, ["a\tb", ";"]);
}

#[test]
fn tokens_are_trimmed_and_non_empty() {
    let out = niko_scan("  seisuu   x  =  5 ;  ");
    assert!(out.tokens.iter().all(|t| *t == t.trim() && !t.is_empty()));
}

// -----------------------------------------------------------
// Quote handling.
// -----------------------------------------------------------

#[test]
fn quoted_span_includes_both_quotes() {
    let out = niko_scan("mojiretsu nome = \"Hiro\";");
    assert_eq!(out.tokens, ["mojiretsu", "nome", "=", "\"Hiro\"", ";"]);
}

#[test]
fn quote_suspends_delimiter_splitting() {
    let out = niko_scan("m = \"a; (b) [c] = d\";");
    assert_eq!(out.tokens[2], "\"a; (b) [c] = d\"");
    assert!(out.diagnostics.is_empty());
}

#[test]
fn empty_quoted_span() {
    let out = niko_scan("m = \"\";");
    assert_eq!(out.tokens, ["m", "=", "\"\"", ";"]);
}

#[test]
fn quote_mode_carries_across_lines() {
    // The opening frame stays on the stack at the line break and the
    // closer on the next line pops it, so no unterminated diagnostic.
    let out = niko_scan("m = \"ab;\ncd\";");
    assert!(
        !out.diagnostics
            .iter()
            .any(|d| matches!(d.kind, DiagnosticKind::UnterminatedOpening('"')))
    );
}

#[test]
fn unterminated_quote_is_reported_with_position() {
    let out = niko_scan("m = \"oops;");
    let diag = out
        .diagnostics
        .iter()
        .find(|d| d.kind == DiagnosticKind::UnterminatedOpening('"'))
        .expect("unterminated quote diagnostic");
    assert_eq!(diag.span.line, 1);
    assert_eq!(diag.span.column, 5);
}

// -----------------------------------------------------------
// Bracket balance.
// -----------------------------------------------------------

#[test]
fn balanced_brackets_produce_no_diagnostics() {
    let out = niko_scan("x = ([{\"ok\"}]);");
    assert!(out.diagnostics.is_empty());
}

#[test]
fn brackets_balance_across_lines() {
    let out = niko_scan("moshi (x) {;\nhyouji(x);\n};");
    assert!(out.diagnostics.is_empty());
}

#[test]
fn each_unterminated_opening_is_reported() {
    let out = niko_scan("a = ([;");
    let unterminated: Vec<_> = out
        .diagnostics
        .iter()
        .filter(|d| matches!(d.kind, DiagnosticKind::UnterminatedOpening(_)))
        .collect();
    assert_eq!(unterminated.len(), 2);
    assert_eq!(unterminated[0].kind, DiagnosticKind::UnterminatedOpening('('));
    assert_eq!(unterminated[1].kind, DiagnosticKind::UnterminatedOpening('['));
}

#[test]
fn unexpected_closer_reports_and_continues() {
    let out = niko_scan("a = 1);\nb = 2;");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].kind, DiagnosticKind::UnexpectedClosing(')'));
    // scanning continued: both lines tokenized
    assert!(out.tokens.iter().any(|t| t == "b"));
}

#[test]
fn mismatched_closer_leaves_opener_on_stack() {
    let out = niko_scan("a = (1];");
    assert!(
        out.diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::UnexpectedClosing(']'))
    );
    assert!(
        out.diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::UnterminatedOpening('('))
    );
}

// -----------------------------------------------------------
// Line terminator.
// -----------------------------------------------------------

#[test]
fn terminated_line_is_clean() {
    let out = niko_scan("x = 5;");
    assert!(out.diagnostics.is_empty());
}

#[test]
fn missing_terminator_names_line_and_char() {
    let out = niko_scan("x = 5;\nhyouji(x)");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(
        out.diagnostics[0].kind,
        DiagnosticKind::MissingTerminator { found: ')' }
    );
    assert_eq!(out.diagnostics[0].span.line, 2);
    assert_eq!(out.diagnostics[0].span.column, 9);
}

#[test]
fn terminator_check_fires_per_line() {
    let out = niko_scan("a = 1\nb = 2\nc = 3;");
    let missing = out
        .diagnostics
        .iter()
        .filter(|d| matches!(d.kind, DiagnosticKind::MissingTerminator { .. }))
        .count();
    assert_eq!(missing, 2);
}

#[test]
fn diagnostics_never_alter_tokens() {
    let with_term = niko_scan("x = 5;");
    let without_term = niko_scan("x = 5");
    assert_eq!(&with_term.tokens[..3], &without_term.tokens[..]);
}

// -----------------------------------------------------------
// Line-based input and configuration.
// -----------------------------------------------------------

#[test]
fn scan_lines_accepts_owned_lines() {
    let lines: Vec<String> = vec!["seisuu x = 5;".to_string(), "hyouji(x);".to_string()];
    let out = scan_lines(&lines, &Language::niko());
    assert_eq!(out.tokens.len(), 10);
    assert!(out.diagnostics.is_empty());
}

#[test]
fn zero_lines_is_a_clean_run() {
    let out = scan_lines(Vec::<&str>::new(), &Language::niko());
    assert!(out.tokens.is_empty());
    assert!(out.diagnostics.is_empty());
}

#[test]
fn hash_delimiter_variant_splits_comments() {
    let lang = Language::niko().with_delimiter('#');
    let out = scan("x = 5; # nota;", &lang);
    assert!(out.tokens.contains(&"#".to_string()));
    assert!(out.tokens.contains(&"nota".to_string()));
}
