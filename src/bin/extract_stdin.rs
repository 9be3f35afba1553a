//! Reads HTML from a file or stdin and prints the JSON envelope to stdout.
//!
//! Usage: `extract_stdin [FILE] [--options OPTIONS.json]`
//!
//! Exits 0 on success and 1 on any failure. Set `RUST_LOG=readable_extract=debug`
//! to trace the pipeline on stderr.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use readable_extract::{extract_bytes_with_options, Envelope, Options};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

struct Args {
    input: Option<String>,
    options: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        input: None,
        options: None,
    };
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--options" => {
                args.options = Some(iter.next().ok_or("--options needs a file path")?);
            }
            "-h" | "--help" => {
                return Err("usage: extract_stdin [FILE] [--options OPTIONS.json]".to_string());
            }
            path if args.input.is_none() => args.input = Some(path.to_string()),
            other => return Err(format!("unexpected argument: {other}")),
        }
    }
    Ok(args)
}

fn init_logging() {
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(args: &Args) -> Result<Envelope, Box<dyn std::error::Error>> {
    let options = match &args.options {
        Some(path) => Options::from_json(&fs::read_to_string(path)?)?,
        None => Options::default(),
    };

    let html = match &args.input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };

    Ok(match extract_bytes_with_options(&html, &options) {
        Ok(result) => Envelope::from(result),
        Err(err) => Envelope::from(err),
    })
}

fn main() -> ExitCode {
    init_logging();

    let envelope = match parse_args() {
        Ok(args) => match run(&args) {
            Ok(envelope) => envelope,
            Err(err) => {
                eprintln!("extract_stdin: {err}");
                return ExitCode::FAILURE;
            }
        },
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match envelope.to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("extract_stdin: {err}");
            return ExitCode::FAILURE;
        }
    }

    if envelope.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
