use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, anyhow};
use clap::Parser;
use rayon::prelude::*;
use tablepaste::{GenerateOptions, LineBreaks, convert_with, markdown_to_html};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    version,
    about = "Convert tab-separated spreadsheet text into Markdown tables"
)]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    #[command(flatten)]
    opts: OutputOpts,
    /// Files holding pasted table text; reads standard input when omitted
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone, Copy)]
struct OutputOpts {
    /// Print the table as HTML instead of Markdown
    #[arg(long = "html")]
    html: bool,
    /// Write line breaks inside cells as `<br>` instead of a space
    #[arg(long = "br")]
    br: bool,
}

impl OutputOpts {
    fn generate_options(self) -> GenerateOptions {
        GenerateOptions {
            line_breaks: if self.br {
                LineBreaks::HtmlBreak
            } else {
                LineBreaks::Space
            },
        }
    }
}

fn convert_text(input: &str, opts: OutputOpts) -> anyhow::Result<String> {
    let conversion = convert_with(input, &opts.generate_options())?;
    if !opts.html {
        return Ok(conversion.markdown);
    }
    markdown_to_html(&conversion.markdown)
        .map(|html| html + "\n")
        .ok_or_else(|| anyhow!("Failed to generate HTML table"))
}

fn convert_path(path: &Path, opts: OutputOpts) -> anyhow::Result<String> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    convert_text(&content, opts).with_context(|| format!("failed to convert {}", path.display()))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Entry point for the command-line converter.
///
/// Reads pasted table text from each file argument, or from standard input
/// when no files are given, and prints the converted table. Files are
/// converted in parallel; output keeps argument order.
///
/// # Examples
///
/// ```sh
/// # Convert the clipboard (Linux, X11)
/// xclip -o | tablepaste
///
/// # Render a pasted table as HTML
/// tablepaste --html pasted.txt
///
/// # Replace the pasted text in a file with the Markdown table
/// tablepaste --in-place pasted.md
/// ```
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        print!("{}", convert_text(&input, cli.opts)?);
        return Ok(());
    }

    let results: Vec<anyhow::Result<String>> = cli
        .files
        .par_iter()
        .map(|path| convert_path(path, cli.opts))
        .collect();

    for (path, result) in cli.files.iter().zip(results) {
        let out = result?;
        if cli.in_place {
            fs::write(path, out)
                .with_context(|| format!("failed to write {}", path.display()))?;
        } else {
            print!("{out}");
        }
    }

    Ok(())
}
