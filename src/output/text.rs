use std::io::Write;

use crate::checker::{FileReport, Finding, FindingKind, Summary};
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// One `path:line:col: message` line per finding, then a summary.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn kind_color(kind: FindingKind) -> &'static str {
        match kind {
            FindingKind::Mismatch | FindingKind::EmptyComment => ansi::YELLOW,
            FindingKind::MissingComment => ansi::RED,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_finding(&self, report: &FileReport, finding: &Finding, output: &mut Vec<u8>) {
        let location = format!("{}:{}", report.path().display(), finding.position);
        writeln!(
            output,
            "{}: {}",
            self.colorize(&location, ansi::BOLD),
            self.colorize(&finding.message, Self::kind_color(finding.kind))
        )
        .ok();
    }

    fn format_summary(&self, summary: &Summary) -> String {
        let findings = if summary.has_findings() {
            self.colorize(&summary.findings.to_string(), ansi::RED)
        } else {
            self.colorize("0", ansi::GREEN)
        };

        format!(
            "Summary: {} files checked, {} declarations, {findings} findings \
             ({} mismatch, {} empty, {} missing)",
            summary.files, summary.declarations, summary.mismatch, summary.empty, summary.missing
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = Vec::new();

        for report in reports {
            if report.is_clean() {
                if self.verbose >= 1 {
                    let ok = self.colorize("ok", ansi::GREEN);
                    writeln!(
                        output,
                        "{}: {ok} ({} declarations)",
                        report.path().display(),
                        report.declarations
                    )
                    .ok();
                }
                continue;
            }
            for finding in &report.findings {
                self.format_finding(report, finding, &mut output);
            }
        }

        if !output.is_empty() {
            writeln!(output).ok();
        }
        let summary = self.format_summary(&Summary::from_reports(reports));
        writeln!(output, "{summary}").ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
