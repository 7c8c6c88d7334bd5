//! Scan a niko snippet and print tokens, records, and the symbol table.

use nikolex_rs::Language;

fn main() {
    let input = "\
seisuu x = 5;
seisuu soma = x + 3;
hyouji(soma);
";

    let language = Language::niko();
    let analysis = nikolex_rs::analyze(input, &language);

    println!("Tokens: {:?}", analysis.tokens);
    println!();
    println!("{}", nikolex_rs::format(&analysis.records));
    println!();
    println!("Symbol table: {}", analysis.symbols);
}
