//! layoutdoc CLI - export layout analysis results

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use layoutdoc::export::{self, OutputFormat};
use layoutdoc::{load_document, Document, JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "layoutdoc")]
#[command(version)]
#[command(about = "Export layout analysis results to JSON, CSV, HTML, and Markdown", long_about = None)]
struct Cli {
    /// Input document JSON
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Remove line breaks from text instead of rendering them
    #[arg(long, global = true, env = "LAYOUTDOC_IGNORE_LINE_BREAK")]
    ignore_line_break: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export to all formats (JSON, CSV, HTML, Markdown)
    Convert {
        /// Input document JSON
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Export to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input document JSON
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Export to HTML
    Html {
        /// Input document JSON
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Export to CSV
    Csv {
        /// Input document JSON
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Export to JSON
    Json {
        /// Input document JSON
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input document JSON
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Check that every table's cells tile its grid
    Validate {
        /// Input document JSON
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = RenderOptions::new().with_ignore_line_break(cli.ignore_line_break);

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => {
            cmd_convert(&input, output.as_deref(), &options)
        }
        Some(Commands::Markdown { input, output }) => {
            cmd_single(&input, output.as_deref(), OutputFormat::Markdown, &options)
        }
        Some(Commands::Html { input, output }) => {
            cmd_single(&input, output.as_deref(), OutputFormat::Html, &options)
        }
        Some(Commands::Csv { input, output }) => {
            cmd_single(&input, output.as_deref(), OutputFormat::Csv, &options)
        }
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact, &options),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Validate { input }) => cmd_validate(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), &options)
            } else {
                println!("{}", "Usage: layoutdoc <FILE> [OUTPUT]".yellow());
                println!("       layoutdoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn default_output_dir(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    PathBuf::from(format!("{}_output", stem))
}

fn file_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

fn cmd_convert(input: &Path, output: Option<&Path>, options: &RenderOptions) -> CmdResult {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| default_output_dir(input));
    let stem = file_stem(input);

    let pb = ProgressBar::new(OutputFormat::ALL.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Loading document...");
    let doc = load_document(input)?;
    warn_malformed_tables(&doc);
    pb.inc(1);

    let mut written = Vec::new();
    for format in OutputFormat::ALL {
        pb.set_message(format!("Writing {}...", format));
        let path = output_dir.join(format!("{}.{}", stem, format.extension()));
        export::export_to_path(&doc, format, options, &path)?;
        written.push(path);
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, path) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        println!("  {} {}", branch.dimmed(), name);
    }

    Ok(())
}

fn cmd_single(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    options: &RenderOptions,
) -> CmdResult {
    if let Some(path) = output {
        match OutputFormat::from_path(path) {
            Ok(inferred) if inferred != format => log::warn!(
                "Writing {} to {} whose extension suggests {}",
                format,
                path.display(),
                inferred
            ),
            Ok(_) => {}
            Err(e) => log::debug!("{}", e),
        }
    }

    let doc = load_document(input)?;
    warn_malformed_tables(&doc);

    let artifact = layoutdoc::export(&doc, format, options)?;
    emit(output, &artifact.content, artifact.mime_type())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: &RenderOptions,
) -> CmdResult {
    let doc = load_document(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = layoutdoc::render::to_json(&doc, format, options)?;
    emit(output, &json, OutputFormat::Json.mime_type())
}

fn emit(output: Option<&Path>, content: &str, mime_type: &str) -> CmdResult {
    if let Some(path) = output {
        export::write_atomic(path, content.as_bytes())?;
        println!(
            "{} {} {}",
            "Saved to".green(),
            path.display(),
            format!("({})", mime_type).dimmed()
        );
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn warn_malformed_tables(doc: &Document) {
    for table in &doc.tables {
        if let Err(e) = table.validate() {
            log::warn!("Table at order {}: {}", table.order, e);
        }
    }
}

fn cmd_info(input: &Path) -> CmdResult {
    let doc = load_document(input)?;
    let stats = doc.stats();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {} bytes", "Size".bold(), fs::metadata(input)?.len());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Paragraphs".bold(), stats.paragraphs);
    println!("{}: {}", "Tables".bold(), stats.tables);
    println!(
        "{}: {} ({} merged)",
        "Cells".bold(),
        stats.cells,
        stats.merged_cells
    );
    println!("{}: {}", "Figures".bold(), stats.figures);
    println!("{}: {}", "Words".bold(), stats.words);

    if stats.empty_paragraphs > 0 {
        println!("{}: {}", "Empty paragraphs".yellow().bold(), stats.empty_paragraphs);
    }
    if stats.inverted_boxes > 0 {
        println!("{}: {}", "Inverted boxes".yellow().bold(), stats.inverted_boxes);
    }

    let malformed = doc.tables.iter().filter(|t| t.validate().is_err()).count();
    if malformed > 0 {
        println!("{}: {}", "Malformed tables".yellow().bold(), malformed);
    }

    Ok(())
}

fn cmd_validate(input: &Path) -> CmdResult {
    let doc = load_document(input)?;

    let mut failures = 0;
    for (i, table) in doc.tables.iter().enumerate() {
        match table.validate() {
            Ok(()) => println!(
                "{} table #{} ({}x{})",
                "OK".green(),
                i,
                table.n_row,
                table.n_col
            ),
            Err(e) => {
                failures += 1;
                println!("{} table #{}: {}", "FAIL".red(), i, e);
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} tables are malformed", failures, doc.tables.len()).into());
    }
    println!("\n{} {} tables checked", "Done!".green().bold(), doc.tables.len());
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "layoutdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Layout analysis export tool");
    println!();
    println!("License: MIT");
}
