use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use clap::{ArgAction, Parser};
use minilang::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse_program,
};
use tracing::{debug, Level};

/// Parse a let/print program and print its syntax tree
#[derive(Parser, Debug)]
#[command(name = "minilang", version, about, long_about = None)]
struct Cli {
    /// Source file, or `-` to read from stdin
    file: PathBuf,

    /// Print the token stream before the tree
    #[arg(long)]
    tokens: bool,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file_name = cli.file.display().to_string();
    let source = match read_source(&cli.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading '{}': {}", file_name, e);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &file_name);
            process::exit(1);
        }
    };

    debug!(elapsed = ?start.elapsed(), "tokenized");

    if cli.tokens {
        for (i, token) in tokens.iter().enumerate() {
            println!("{:4}: {}", i, token);
        }
    }

    let parse_start = Instant::now();
    match parse_program(&tokens) {
        Ok(program) => {
            debug!(elapsed = ?parse_start.elapsed(), total = ?start.elapsed(), "parsed");
            println!("{:#?}", program);
        }
        Err(error) => {
            display_error(&error, &file_name);
            process::exit(1);
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn read_source(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
    }
}

fn display_error(error: &Error, file: &str) {
    /*
        Error: InvalidStatement (Invalid statement, expected `let` or `print`, found `1`)
        -> final.lang
           |
           | 1 + 2
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", file);
    eprintln!("   |");

    let offending = error
        .get_tokens()
        .iter()
        .map(|token| token.value.as_str())
        .collect::<Vec<&str>>()
        .join(" ");

    if offending.is_empty() {
        eprintln!("   | {}", error);
    } else {
        eprintln!("   | {}", offending);
    }
}
