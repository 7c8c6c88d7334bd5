use std::fmt;

use crate::language::Language;

/// Source location for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Classifies a scan diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Closing bracket with no matching opener on top of the stack.
    UnexpectedClosing(char),
    /// Opening bracket or quote never closed by end of input.
    UnterminatedOpening(char),
    /// Last non-whitespace character of a line is not `;`.
    MissingTerminator { found: char },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedClosing(ch) => {
                write!(f, "unexpected closing delimiter '{ch}'")
            }
            Self::UnterminatedOpening(ch) => {
                write!(f, "unterminated opening delimiter '{ch}'")
            }
            Self::MissingTerminator { found } => {
                write!(f, "expected ';' at end of line, found '{found}'")
            }
        }
    }
}

/// Diagnostic produced during scanning.
///
/// Diagnostics are non-fatal: the scanner records them and keeps going,
/// and the token sequence is returned in full regardless.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
}

/// Raw tokens plus the diagnostics collected while extracting them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    /// Non-empty, whitespace-trimmed tokens in source appearance order.
    pub tokens: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Scan a source string into raw tokens, one line per source line.
#[must_use]
pub fn scan(input: &str, language: &Language) -> ScanOutput {
    scan_lines(input.lines(), language)
}

/// Scan an ordered sequence of source lines into raw tokens.
///
/// Delimiter and operator characters close the current token and appear
/// as standalone one-character tokens; quoted spans are kept atomic,
/// quote characters included. Bracket and quote balance and the `;`
/// line terminator are checked as the lines stream through.
#[must_use = "scanning produces the tokens and diagnostics"]
pub fn scan_lines<I, S>(lines: I, language: &Language) -> ScanOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = Scanner::new(language);
    for (i, line) in lines.into_iter().enumerate() {
        scanner.scan_line(line.as_ref(), i + 1);
    }
    scanner.finish()
}

/// Unmatched opening bracket or quote: its character and where it opened.
struct Frame {
    open: char,
    span: Span,
}

struct Scanner<'a> {
    language: &'a Language,
    tokens: Vec<String>,
    diagnostics: Vec<Diagnostic>,
    stack: Vec<Frame>,
    acc: String,
}

impl<'a> Scanner<'a> {
    const fn new(language: &'a Language) -> Self {
        Self {
            language,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            stack: Vec::new(),
            acc: String::new(),
        }
    }

    fn scan_line(&mut self, line: &str, line_num: usize) {
        self.check_terminator(line, line_num);

        for (i, ch) in line.chars().enumerate() {
            let span = Span {
                line: line_num,
                column: i + 1,
            };

            // Quote mode: everything up to the closing quote belongs to
            // the quoted span, delimiters and operators included.
            if self.in_quote() {
                self.acc.push(ch);
                if ch == '"' {
                    self.stack.pop();
                }
                continue;
            }

            if !self.language.is_boundary(ch) {
                self.acc.push(ch);
                continue;
            }

            self.flush();

            if ch == '"' {
                self.stack.push(Frame { open: ch, span });
                self.acc.push(ch);
            } else if Language::matching_closer(ch).is_some() {
                self.stack.push(Frame { open: ch, span });
                self.tokens.push(ch.to_string());
            } else if Language::is_closing_bracket(ch) {
                match self.stack.last() {
                    Some(frame) if Language::matching_closer(frame.open) == Some(ch) => {
                        self.stack.pop();
                    }
                    _ => {
                        self.diagnostics.push(Diagnostic {
                            kind: DiagnosticKind::UnexpectedClosing(ch),
                            span,
                        });
                    }
                }
                self.tokens.push(ch.to_string());
            } else if !ch.is_whitespace() {
                self.tokens.push(ch.to_string());
            }
        }

        self.flush();
    }

    /// The terminator check fires once per line on the last
    /// non-whitespace character, regardless of bracket state.
    /// Blank lines have no such character and are skipped.
    fn check_terminator(&mut self, line: &str, line_num: usize) {
        let trimmed = line.trim_end();
        match trimmed.chars().last() {
            Some(last) if last != ';' => {
                self.diagnostics.push(Diagnostic {
                    kind: DiagnosticKind::MissingTerminator { found: last },
                    span: Span {
                        line: line_num,
                        column: trimmed.chars().count(),
                    },
                });
            }
            _ => {}
        }
    }

    fn in_quote(&self) -> bool {
        self.stack.last().is_some_and(|frame| frame.open == '"')
    }

    fn flush(&mut self) {
        let token = self.acc.trim();
        if !token.is_empty() {
            self.tokens.push(token.to_string());
        }
        self.acc.clear();
    }

    fn finish(mut self) -> ScanOutput {
        for frame in &self.stack {
            self.diagnostics.push(Diagnostic {
                kind: DiagnosticKind::UnterminatedOpening(frame.open),
                span: frame.span,
            });
        }

        ScanOutput {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }
}
