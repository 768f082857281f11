use std::{fs, io};

use clap::Parser;
use minnow::{get_result, repl};

/// minnow is a small, dynamically typed, C-like scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minnow to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the final value
    /// of a minnow script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// The script to run; omit it to start an interactive session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        println!("Hello! This is the minnow programming language.");
        println!("Feel free to type in commands.");

        let stdin = io::stdin();
        if let Err(e) = repl::start(&mut stdin.lock(), &mut io::stdout()) {
            eprintln!("{e}");
        }

        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
    }
}
