use clap::{Parser, Subcommand};
use sixdot::{
    decode,
    dots::Cell,
    encode,
    translator::table::{CONTRACTIONS, DIGITS, LETTERS, PUNCTUATION},
};
use tabled::{Table, Tabled};

#[derive(Debug, Subcommand)]
enum Commands {
    /// transliterate <INPUT> into Unicode braille
    #[command(arg_required_else_help = true)]
    Encode {
        /// String to transliterate
        input: String,
        /// Apply the grade-2 whole-word contractions
        #[arg(long)]
        grade2: bool,
    },
    /// transliterate braille <INPUT> back into plain text
    #[command(arg_required_else_help = true)]
    Decode {
        /// Braille string to transliterate
        input: String,
    },
    /// print the symbol and contraction tables
    Tables,
    /// print the raised dot numbers of each braille cell in <INPUT>
    #[command(arg_required_else_help = true)]
    Dots {
        /// Braille string to inspect
        input: String,
    },
}

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "sixdot")]
#[command(about = "A command line tool to transliterate to and from Braille")]
#[command(author, version, long_about = None)] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Tabled)]
struct SymbolRow {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Braille")]
    braille: char,
    #[tabled(rename = "Dots")]
    dots: String,
}

impl SymbolRow {
    fn new(input: &str, braille: char) -> Self {
        SymbolRow {
            input: input.to_string(),
            braille,
            dots: dot_numbers(braille),
        }
    }
}

fn dot_numbers(braille: char) -> String {
    let cell = Cell::try_from(braille).expect("table glyphs are braille patterns");
    cell.dots()
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join("-")
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    match args.command {
        Commands::Encode { input, grade2 } => {
            println!("{}", encode(&input, grade2));
        }
        Commands::Decode { input } => {
            println!("{}", decode(&input));
        }
        Commands::Tables => {
            let symbols: Vec<SymbolRow> = LETTERS
                .iter()
                .chain(DIGITS.iter())
                .chain(PUNCTUATION.iter())
                .map(|&(c, glyph)| SymbolRow::new(&c.to_string(), glyph))
                .collect();
            println!("{}", Table::new(symbols));
            let contractions: Vec<SymbolRow> = CONTRACTIONS
                .iter()
                .map(|&(word, glyph)| SymbolRow::new(word, glyph))
                .collect();
            println!("{}", Table::new(contractions));
        }
        Commands::Dots { input } => {
            for c in input.chars() {
                match Cell::try_from(c) {
                    Ok(cell) => println!("{} {}", cell, dot_numbers(c)),
                    Err(_) => println!("{} (not braille)", c),
                }
            }
        }
    }
}
