use std::{
    fs,
    io::{self, BufRead},
};

use arithma_front::{
    error::Error,
    interpreter::{lexer::tokenize, parser::core::parse},
    report::eprint_report,
};
use clap::Parser;

/// Parses one line of arithmetic and prints its syntax tree.
///
/// The line is taken from the `contents` argument, from the file it names
/// with `--file`, or from standard input when no contents are given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as a path and parse the first line of that file.
    #[arg(short, long)]
    file: bool,

    /// Name used for the source in diagnostics.
    #[arg(short, long)]
    name: Option<String>,

    /// Echo the token stream to stderr before parsing.
    #[arg(short, long)]
    tokens: bool,

    /// Print errors as annotated source snippets.
    #[arg(short, long)]
    report: bool,

    /// Print the tree as fully parenthesised infix instead of tree form.
    #[arg(short, long)]
    canonical: bool,

    /// Also print the height of the tree and its number of literals.
    #[arg(short, long)]
    stats: bool,

    contents: Option<String>,
}

/// Resolves the source name and the single line to parse.
fn read_line(args: &Args) -> io::Result<(String, String)> {
    let (default_name, text) = match &args.contents {
        Some(path) if args.file => (path.clone(), fs::read_to_string(path)?),
        Some(contents) => ("<input>".to_string(), contents.clone()),
        None => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            ("<stdin>".to_string(), line)
        },
    };

    let line = text.lines().next().unwrap_or_default().to_string();
    Ok((args.name.clone().unwrap_or(default_name), line))
}

fn main() {
    let args = Args::parse();

    let (name, line) = read_line(&args).unwrap_or_else(|e| {
                                           eprintln!("Failed to read the input: {e}");
                                           std::process::exit(1);
                                       });

    let result = tokenize(&name, &line).map_err(Error::from)
                                       .and_then(|tokens| {
                                           if args.tokens {
                                               eprintln!("{tokens}");
                                           }
                                           parse(&tokens).map_err(Error::from)
                                       });

    match result {
        Ok(tree) => {
            if args.canonical {
                println!("{}", tree.to_canonical());
            } else {
                println!("{tree}");
            }
            if args.stats {
                println!("depth: {}, literals: {}", tree.depth(), tree.leaf_count());
            }
        },
        Err(e) => {
            if args.report {
                if let Err(io_error) = eprint_report(&e) {
                    eprintln!("{e} ({io_error})");
                }
            } else {
                eprintln!("{e}");
            }
            std::process::exit(1);
        },
    }
}
