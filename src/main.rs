//! # rdesk CLI
//!
//! Command-line interface for the reviewdesk checklist converter and
//! review session.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use reviewdesk::{
    commands::{self, ConvertArgs, PreviewArgs, SessionArgs},
    OutputMode,
};

const GLOBAL_HELP: &str = "\
Configuration File:
  .reviewdesk        Project configuration (paths, output mode, styles, trailer, session limits)

Checklist Lines:
  # Title            ## Heading          ### Subheading
  □ Step             **Result:** / **Notes:**
  ---                Vertical spacing

Getting Started:
  rdesk init                     Create .reviewdesk in the current directory
  rdesk convert                  Render the configured checklist to PDF
  rdesk preview                  Show how each line is classified
  rdesk session                  Open the interactive review session

Learn more:
  rdesk <COMMAND> --help         Show detailed help for a command";

#[derive(Parser)]
#[command(name = "rdesk")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Checklist to PDF conversion and an interactive document review session")]
#[command(
    long_about = "rdesk turns a Markdown test checklist into a printable PDF and hosts a small \
terminal session for collecting documents under review.\n\n\
Checklist lines are classified by prefix into title, headings, checkboxes, result fields, \
rules and paragraphs. A rule (---) adds vertical spacing. Each kind gets its own paragraph style, and inline markup is \
either removed (plain) or rendered with bold, oblique and monospace faces (styled)."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a .reviewdesk configuration in the current directory
    #[command(
        long_about = "Create a .reviewdesk configuration in the current directory.\n\n\
The file lists every option with comments. The directory of the configured checklist \
is created as well.",
        after_help = "Examples:\n  \
rdesk init                      Initialize in current directory\n\n\
Note: Fails if the directory already holds a .reviewdesk file."
    )]
    Init,

    /// Convert the checklist to PDF
    #[command(
        long_about = "Convert a Markdown checklist into a PDF document.\n\n\
Input and output default to the paths in .reviewdesk, or to \
docs/uat_quick_checklist.md and docs/UAT_Quick_Checklist_v1.0.0.pdf when there is \
no configuration. The closing completion section always starts on a new page.",
        after_help = "Examples:\n  \
rdesk convert                               Use configured paths\n  \
rdesk convert checklist.md out/check.pdf    Explicit paths\n  \
rdesk convert --mode styled                 Render bold, italic and code"
    )]
    Convert {
        /// Checklist to read
        input: Option<PathBuf>,

        /// PDF to write
        output: Option<PathBuf>,

        /// Inline markup handling (overrides the configured mode)
        #[arg(long, value_enum)]
        mode: Option<OutputMode>,
    },

    /// Print the classification of every checklist line
    #[command(
        long_about = "Print one line per styled block as <kind>TAB<text>.\n\n\
Blank lines are skipped. Output has no header, so it can be piped into other tools.",
        after_help = "Examples:\n  \
rdesk preview                          Preview the configured checklist\n  \
rdesk preview notes.md | cut -f1 | sort | uniq -c"
    )]
    Preview {
        /// Checklist to read
        input: Option<PathBuf>,

        /// Inline markup handling (overrides the configured mode)
        #[arg(long, value_enum)]
        mode: Option<OutputMode>,
    },

    /// Open the interactive review session
    #[command(
        long_about = "Open the interactive review session.\n\n\
The session has four pages: Home, Upload Documents, Review Queue and Settings. \
Uploaded documents are kept in memory and discarded when the session closes. \
Accepted types are .pdf, .docx and .doc. By default a document may be up to 50 MB \
and the queue holds 10 documents; [session] in .reviewdesk changes both.",
        after_help = "Examples:\n  \
rdesk session                               Start with an empty queue\n  \
rdesk session --add spec.pdf --add plan.docx"
    )]
    Session {
        /// Queue a document before the session opens (can repeat)
        #[arg(long, value_name = "FILE")]
        add: Vec<PathBuf>,
    },

    /// Print a shell completion script
    #[command(after_help = "Examples:\n  \
rdesk completions bash > /etc/bash_completion.d/rdesk\n  \
rdesk completions zsh > ~/.zfunc/_rdesk")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Init => commands::init(),

        Commands::Convert {
            input,
            output,
            mode,
        } => commands::convert(ConvertArgs {
            input,
            output,
            mode,
        }),

        Commands::Preview { input, mode } => commands::preview(PreviewArgs { input, mode }),

        Commands::Session { add } => commands::session(SessionArgs { add }),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "reviewdesk=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
