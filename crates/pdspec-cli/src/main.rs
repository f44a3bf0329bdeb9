use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod output;
mod stages;

use output::ColorMode;
use pdspec_core::PipelineConfig;

/// USB PD Spec Structure Extractor - build a section index from the specification PDF
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Options shared by every pipeline stage. Defaults target the USB PD
/// Rev 3.2 V1.1 release.
#[derive(Args, Debug, Clone)]
struct StageArgs {
    /// Path to the specification PDF
    #[arg(long, default_value = "data/USB_PD_R3_2 V1_1_2024_10.pdf")]
    pdf: PathBuf,

    /// Directory for intermediate record files and the report
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,

    /// 1-based first page of the table of contents
    #[arg(long, default_value_t = 13)]
    toc_start: u32,

    /// 1-based last page of the table of contents (inclusive)
    #[arg(long, default_value_t = 18)]
    toc_end: u32,

    /// Document title stamped into every emitted record
    #[arg(
        long,
        default_value = "USB Power Delivery Specification Rev 3.2 V1.1 2024-10"
    )]
    doc_title: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl StageArgs {
    fn into_config(self) -> (PipelineConfig, ColorMode) {
        let color = ColorMode(!self.no_color);
        let config = PipelineConfig {
            pdf_path: self.pdf,
            output_dir: self.out_dir,
            doc_title: self.doc_title,
            toc_start_page: self.toc_start,
            toc_end_page: self.toc_end,
            ..PipelineConfig::default()
        };
        (config, color)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the document metadata record
    Metadata(StageArgs),
    /// Extract and parse the table of contents
    Toc(StageArgs),
    /// Slice the document into per-section page ranges and tag them
    Sections(StageArgs),
    /// Cross-check parsed sections against the TOC index
    Validate(StageArgs),
    /// Run all four stages in order
    Run(StageArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Metadata(args) => {
            let (config, color) = args.into_config();
            stages::metadata(&config, color)
        }
        Command::Toc(args) => {
            let (config, color) = args.into_config();
            stages::toc(&config, color)
        }
        Command::Sections(args) => {
            let (config, color) = args.into_config();
            stages::sections(&config, color)
        }
        Command::Validate(args) => {
            let (config, color) = args.into_config();
            stages::validate(&config, color)
        }
        Command::Run(args) => {
            let (config, color) = args.into_config();
            stages::run_all(&config, color)
        }
    }
}
