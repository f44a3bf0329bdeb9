use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};

use pdspec_core::{PipelineConfig, SpecSection, TocEntry, ValidationReport};
use pdspec_parsing::{MetadataCollector, TagMap};
use pdspec_pdf_mupdf::MupdfBackend;

use crate::output::{self, ColorMode};

/// Extract the metadata record and write it as a single JSONL line.
pub fn metadata(config: &PipelineConfig, color: ColorMode) -> anyhow::Result<()> {
    ensure_output_dir(config)?;
    let backend = MupdfBackend::new();
    let meta = MetadataCollector::new(config).collect(&backend, &config.pdf_path);

    let path = config.metadata_path();
    pdspec_reporting::write_records(&path, &[meta])?;
    output::print_file_written(&format!("Metadata written: {}", path.display()), color);
    Ok(())
}

/// Extract and parse the TOC pages into the hierarchical section index.
pub fn toc(config: &PipelineConfig, color: ColorMode) -> anyhow::Result<()> {
    ensure_output_dir(config)?;
    let backend = MupdfBackend::new();
    let entries = pdspec_parsing::extract_toc(
        &config.pdf_path,
        &backend,
        &config.doc_title,
        config.toc_start_page,
        config.toc_end_page,
    )
    .with_context(|| format!("failed to read {}", config.pdf_path.display()))?;

    let path = config.toc_path();
    pdspec_reporting::write_records(&path, &entries)?;
    output::print_file_written(
        &format!("TOC extracted: {} sections -> {}", entries.len(), path.display()),
        color,
    );
    Ok(())
}

/// Slice the document per TOC entry and classify keyword tags.
///
/// Requires the TOC stage's output file; its absence is fatal.
pub fn sections(config: &PipelineConfig, color: ColorMode) -> anyhow::Result<()> {
    ensure_output_dir(config)?;
    let toc_path = config.toc_path();
    let entries: Vec<TocEntry> = pdspec_reporting::read_records(&toc_path)
        .with_context(|| format!("failed to read TOC records from {}", toc_path.display()))?;

    let backend = MupdfBackend::new();
    let tag_map = TagMap::usb_pd();

    let bar = ProgressBar::new(entries.len() as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} {msg:40!} [{bar:40.green/dim}] {pos}/{len}",
        )
        .unwrap()
        .progress_chars("=> "),
    );
    if !color.enabled() {
        bar.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    let sections: Vec<SpecSection> = pdspec_parsing::extract_sections(
        &config.pdf_path,
        &backend,
        &entries,
        &tag_map,
        |_, entry| {
            bar.set_message(entry.full_path.clone());
            bar.inc(1);
        },
    )
    .with_context(|| format!("failed to read {}", config.pdf_path.display()))?;
    bar.finish_and_clear();

    let path = config.sections_path();
    pdspec_reporting::write_records(&path, &sections)?;
    output::print_file_written(
        &format!(
            "Sections extracted with tags: {} -> {}",
            sections.len(),
            path.display()
        ),
        color,
    );
    Ok(())
}

/// Cross-check the parsed sections against the TOC index and write the
/// validation report spreadsheet.
pub fn validate(config: &PipelineConfig, color: ColorMode) -> anyhow::Result<()> {
    ensure_output_dir(config)?;
    let toc_path = config.toc_path();
    let sections_path = config.sections_path();

    let toc_entries: Vec<TocEntry> = pdspec_reporting::read_records(&toc_path)
        .with_context(|| format!("failed to read TOC records from {}", toc_path.display()))?;
    let sections: Vec<SpecSection> = pdspec_reporting::read_records(&sections_path)
        .with_context(|| {
            format!(
                "failed to read section records from {}",
                sections_path.display()
            )
        })?;

    let report = ValidationReport::compute(&toc_entries, &sections);
    let path = config.report_path();
    pdspec_reporting::write_validation_report(&report, &path)?;

    output::print_validation_summary(&report, color);
    output::print_file_written(&format!("Validation report saved: {}", path.display()), color);
    Ok(())
}

/// Run all stages in order, aborting on the first failure.
///
/// The stages are plain sequential function calls; a stage error carries
/// the stage name so the operator can see which step halted the run.
pub fn run_all(config: &PipelineConfig, color: ColorMode) -> anyhow::Result<()> {
    type StageFn = fn(&PipelineConfig, ColorMode) -> anyhow::Result<()>;
    let stages: [(&str, StageFn); 4] = [
        ("metadata", metadata),
        ("toc", toc),
        ("sections", sections),
        ("validate", validate),
    ];

    let total = stages.len();
    for (step, (name, stage)) in stages.into_iter().enumerate() {
        output::print_stage_start(step + 1, total, name, color);
        stage(config, color).with_context(|| format!("stage `{name}` failed"))?;
    }

    output::print_completion(color);
    Ok(())
}

fn ensure_output_dir(config: &PipelineConfig) -> anyhow::Result<()> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })
}
