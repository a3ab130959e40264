mod cli;
mod logger;

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser as _;
use log::debug;

use cli::Cli;

fn main() -> Result<()> {
    logger::init();
    let cli = Cli::parse();

    let (inputs, mut outputs) = if let Some(dir) = &cli.dir {
        let inputs = collect_dir(dir, cli.recursive)
            .with_context(|| format!("reading directory {}", dir.display()))?;
        (inputs, VecDeque::new())
    } else {
        (cli.input_files.clone(), VecDeque::from(cli.out.clone()))
    };

    if inputs.is_empty() {
        bail!("no input files");
    }
    debug!("converting {} file(s)", inputs.len());

    for input in &inputs {
        let output = outputs
            .pop_front()
            .unwrap_or_else(|| input.with_extension("css"));
        if let Err(err) = convert_file(input, &output) {
            // A syntax error in one file shouldn't abort the batch;
            // anything else (I/O, bad paths) does.
            match err.downcast_ref::<ccss::ParserError>() {
                Some(parse_err) => eprintln!("Error in {}: {}", file_name(input), parse_err),
                None => return Err(err),
            }
        }
    }
    Ok(())
}

fn convert_file(input: &Path, output: &Path) -> Result<()> {
    debug!("converting {}", input.display());
    let source =
        fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let css = ccss::convert(&source)?;
    fs::write(output, css).with_context(|| format!("writing {}", output.display()))?;
    println!("Wrote {}", output.display());
    Ok(())
}

/// Collects every .ccss file in `dir`, descending into subdirectories
/// when `recursive` is set. Results are sorted for a stable batch order.
fn collect_dir(dir: &Path, recursive: bool) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if recursive {
                files.extend(collect_dir(&path, true)?);
            }
        } else if path.extension().is_some_and(|ext| ext == "ccss") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
