//! CLI tool to scan, classify, and check niko source files.

use std::fs;
use std::process::ExitCode;

use nikolex_rs::Language;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: nikolex <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  tokens  Scan file(s) and print the raw tokens");
        eprintln!("  lex     Print classified records and the symbol table");
        eprintln!("  check   Report diagnostics; fail if any are found");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  nikolex tokens input.niko");
        eprintln!("  nikolex lex input.niko > lexical.txt");
        eprintln!("  nikolex check input.niko");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let language = Language::niko();
    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "tokens" => {
                let out = nikolex_rs::scan(&content, &language);
                for diagnostic in &out.diagnostics {
                    eprintln!("{path}: {diagnostic}");
                }
                for token in &out.tokens {
                    println!("{token}");
                }
            }
            "lex" => {
                let analysis = nikolex_rs::analyze(&content, &language);
                for diagnostic in &analysis.diagnostics {
                    eprintln!("{path}: {diagnostic}");
                }
                println!("{}", nikolex_rs::format(&analysis.records));
                eprintln!("{path}: symbol table {}", analysis.symbols);
            }
            "check" => {
                let out = nikolex_rs::scan(&content, &language);
                if out.diagnostics.is_empty() {
                    eprintln!("{path}: ok ({} token(s))", out.tokens.len());
                } else {
                    for diagnostic in &out.diagnostics {
                        eprintln!("{path}: {diagnostic}");
                    }
                    had_error = true;
                }
            }
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
