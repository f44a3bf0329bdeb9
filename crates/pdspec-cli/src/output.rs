use owo_colors::OwoColorize;

use pdspec_core::ValidationReport;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the `[step/total]` banner for a pipeline stage.
pub fn print_stage_start(step: usize, total: usize, name: &str, color: ColorMode) {
    if color.enabled() {
        println!("{} {}", format!("[{}/{}]", step, total).bold().cyan(), name);
    } else {
        println!("[{}/{}] {}", step, total, name);
    }
}

/// Print a per-stage result line (record counts, output path).
pub fn print_file_written(message: &str, color: ColorMode) {
    if color.enabled() {
        println!("{}", message.green());
    } else {
        println!("{}", message);
    }
}

pub fn print_validation_summary(report: &ValidationReport, color: ColorMode) {
    let line = format!(
        "TOC sections: {}  Parsed sections: {}  Missing: {}",
        report.toc_count,
        report.parsed_count,
        report.missing_count()
    );
    if !color.enabled() {
        println!("{}", line);
    } else if report.missing.is_empty() {
        println!("{}", line.green());
    } else {
        println!("{}", line.yellow());
    }
}

pub fn print_completion(color: ColorMode) {
    if color.enabled() {
        println!("{}", "All stages completed.".bold().green());
    } else {
        println!("All stages completed.");
    }
}
