use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ccss")]
#[command(version)]
#[command(about = "Convert CCSS files to CSS")]
pub struct Cli {
    /// One or more .ccss files to convert.
    #[arg(value_name = "file")]
    pub input_files: Vec<PathBuf>,

    /// Convert all .ccss files in a directory. Overrides any other input
    /// files, and ignores -o/--out.
    #[arg(short, long, value_name = "directory")]
    pub dir: Option<PathBuf>,

    /// Look for .ccss files in subdirectories.
    #[arg(short, long)]
    pub recursive: bool,

    /// Files to write output to, consumed in input order. Inputs without
    /// a matching entry are written next to the source with a .css
    /// extension.
    #[arg(short, long, value_name = "file", num_args = 1..)]
    pub out: Vec<PathBuf>,
}
