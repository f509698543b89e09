use std::{
    env,
    fs::File,
    io::{self, BufRead, BufReader},
    process::ExitCode,
};

use anyhow::{bail, Context, Result};
use line_lexer::{display_error, Lexer};

struct Options {
    verbosity: usize,
    quiet: bool,
    file: Option<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options> {
    let mut options = Options {
        verbosity: 1,
        quiet: false,
        file: None,
    };

    for arg in args {
        match arg.as_str() {
            "-q" | "--quiet" => options.quiet = true,
            "-" => options.file = None,
            flag if flag.starts_with("-v") && flag[1..].chars().all(|c| c == 'v') => {
                options.verbosity += flag.len() - 1;
            }
            flag if flag.starts_with('-') => bail!("Unknown option `{}`", flag),
            file => {
                if options.file.is_some() {
                    bail!("Only one input file may be given");
                }
                options.file = Some(file.to_string());
            }
        }
    }

    Ok(options)
}

fn main() -> Result<ExitCode> {
    let options = parse_args(env::args().skip(1))?;

    stderrlog::new()
        .module(module_path!())
        .quiet(options.quiet)
        .verbosity(options.verbosity)
        .init()?;

    let input: Box<dyn BufRead> = match &options.file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open `{}`", path))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut lexer = Lexer::new(input);
    loop {
        match lexer.read() {
            Ok(token) if token.is_eof() => break,
            Ok(token) => println!("=> {}", token),
            Err(error) => {
                display_error(&error);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
