//! Show how scan diagnostics are reported without stopping the pipeline.

use nikolex_rs::Language;

fn main() {
    // Missing `;` on line 1, unterminated `(` and a stray `]` on line 2.
    let input = "\
seisuu x = 5
hyouji(x];
";

    let language = Language::niko();
    let analysis = nikolex_rs::analyze(input, &language);

    println!("Diagnostics:");
    for diagnostic in &analysis.diagnostics {
        println!("  {diagnostic}");
    }

    // Tokens are still extracted in full.
    println!();
    println!("Tokens: {:?}", analysis.tokens);
    println!("Records:");
    for record in &analysis.records {
        println!("  {record}");
    }
}
