//! Scores extraction against a directory of reference documents.
//!
//! Usage: `evaluate_corpus DIR [--options OPTIONS.json] [--worst N]`
//!
//! Every `NAME.html` in DIR is extracted and compared with `NAME.txt`, the
//! hand-checked article text. HTML files without a reference are skipped.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use readable_extract::evaluation::{calculate_fscore, CorpusReport};
use readable_extract::{extract_bytes_with_options, Options};
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_WORST: usize = 10;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut args = env::args().skip(1);
    let mut dir: Option<PathBuf> = None;
    let mut options = Options::default();
    let mut worst = DEFAULT_WORST;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--options" => {
                let path = args.next().ok_or("--options needs a file path")?;
                options = Options::from_json(&fs::read_to_string(path)?)?;
            }
            "--worst" => {
                worst = args.next().ok_or("--worst needs a number")?.parse()?;
            }
            path if dir.is_none() => dir = Some(PathBuf::from(path)),
            other => return Err(format!("unexpected argument: {other}").into()),
        }
    }

    let dir = dir.ok_or("usage: evaluate_corpus DIR [--options OPTIONS.json] [--worst N]")?;
    let report = evaluate(&dir, &options)?;

    let mean = report.mean();
    println!("Documents: {}", report.documents().len());
    println!("Failures:  {}", report.failures());
    println!("Precision: {:.3}", mean.precision);
    println!("Recall:    {:.3}", mean.recall);
    println!("F-Score:   {:.3}", mean.fscore);

    if worst > 0 && !report.documents().is_empty() {
        println!("\nLowest scores:");
        for doc in report.worst(worst) {
            match doc.score {
                Some(score) => println!("  {:.3}  {}", score.fscore, doc.name),
                None => println!("  fail   {}", doc.name),
            }
        }
    }

    Ok(())
}

fn evaluate(dir: &Path, options: &Options) -> Result<CorpusReport, Box<dyn std::error::Error>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
        .collect();
    paths.sort();

    let mut report = CorpusReport::new();
    for html_path in paths {
        let name = html_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let Ok(expected) = fs::read_to_string(html_path.with_extension("txt")) else {
            debug!(%name, "no reference text, skipping");
            continue;
        };

        let html = fs::read(&html_path)?;
        match extract_bytes_with_options(&html, options) {
            Ok(result) => report.record(name, calculate_fscore(&result.content_text, &expected)),
            Err(err) => {
                warn!(%name, error = %err, "extraction failed");
                report.record_failure(name);
            }
        }
    }

    Ok(report)
}
