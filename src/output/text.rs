use std::fmt::Write;

use crate::audit::{AuditReport, EntityReport, ExtractionReport, SubCheckReport};
use crate::error::Result;
use crate::validator::Classification;

use super::{ColorMode, OutputFormatter, ansi, is_no_color_set};

const RULE_WIDTH: usize = 50;

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
                !is_no_color_set() && std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn classification_icon(classification: Classification) -> &'static str {
        match classification {
            Classification::Complete => "✓",
            Classification::Partial => "⚠",
            Classification::Incomplete => "✗",
        }
    }

    const fn classification_color(classification: Classification) -> &'static str {
        match classification {
            Classification::Complete => ansi::GREEN,
            Classification::Partial => ansi::YELLOW,
            Classification::Incomplete => ansi::RED,
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_header(&self, report: &AuditReport, out: &mut String) {
        let title = report.title.as_deref().unwrap_or("Token Audit");
        let _ = writeln!(out, "{}", self.paint(title, ansi::BOLD));
        let _ = writeln!(out, "Project: {}", report.root().display());
        let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    }

    fn format_entity(&self, entity: &EntityReport, out: &mut String) {
        let _ = writeln!(out, "\nValidating {}...", entity.name.to_uppercase());
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH / 2));
        for sub in &entity.sub_checks {
            self.format_sub_check(sub, out);
        }
    }

    fn format_sub_check(&self, sub: &SubCheckReport, out: &mut String) {
        let completion = sub.completion();
        let status = if sub.passed {
            self.paint("[OK]", ansi::GREEN)
        } else {
            self.paint("[FAIL]", ansi::RED)
        };
        let _ = write!(
            out,
            "  {status} {} ({}/{}, rule: {})",
            sub.name,
            completion.found,
            completion.total,
            sub.rule.describe()
        );
        if let Some(file) = &sub.file {
            let _ = write!(out, " in {}", file.display());
        }
        out.push('\n');

        if let Some(issue) = &sub.file_issue {
            let _ = writeln!(out, "    {} file {issue}", self.paint("!", ansi::RED));
            return;
        }

        for (item, found) in &sub.items {
            if *found && self.verbose >= 1 {
                let _ = writeln!(out, "    {} {item}", self.paint("✓", ansi::GREEN));
            } else if !*found {
                let _ = writeln!(out, "    {} {item}", self.paint("✗", ansi::RED));
            }
        }
    }

    fn format_extraction(&self, extraction: &ExtractionReport, out: &mut String) {
        let _ = write!(
            out,
            "\n{} in {}: ",
            extraction.name,
            extraction.file.display()
        );
        if let Some(issue) = &extraction.file_issue {
            let _ = writeln!(out, "{} file {issue}", self.paint("!", ansi::RED));
            return;
        }
        let _ = writeln!(out, "{} unique records", extraction.records.len());
        for record in &extraction.records {
            let _ = writeln!(out, "  - {record}");
        }
    }

    fn format_summary(&self, report: &AuditReport, out: &mut String) {
        let _ = writeln!(out, "\nOverall System Validation");
        let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

        let (mut complete, mut partial, mut incomplete) = (0, 0, 0);
        for entity in &report.entities {
            match entity.classification {
                Classification::Complete => complete += 1,
                Classification::Partial => partial += 1,
                Classification::Incomplete => incomplete += 1,
            }
            let label = format!(
                "{} {}",
                Self::classification_icon(entity.classification),
                entity.classification.label()
            );
            let _ = writeln!(
                out,
                "{} {}: {:.1}% ({}/{})",
                self.paint(&label, Self::classification_color(entity.classification)),
                entity.name.to_uppercase(),
                entity.completion.percent(),
                entity.completion.found,
                entity.completion.total
            );
        }

        let _ = writeln!(
            out,
            "\nSummary: {} entities, {} complete, {} partial, {} incomplete",
            report.entities.len(),
            self.paint(&complete.to_string(), ansi::GREEN),
            self.paint(&partial.to_string(), ansi::YELLOW),
            self.paint(&incomplete.to_string(), ansi::RED)
        );
        let _ = write!(
            out,
            "Tokens: {}/{} found ({:.1}%)",
            report.overall.found,
            report.overall.total,
            report.overall.percent()
        );
        if let Some(min) = report.min_overall {
            let _ = write!(out, ", required {min:.1}%");
        }
        out.push('\n');
        let _ = writeln!(out, "System completion: {:.1}%", report.system.percent());

        let verdict = if report.is_success() {
            self.paint("SUCCESS: all audited systems are implemented", ansi::GREEN)
        } else {
            self.paint("WARNING: some systems need additional work", ansi::YELLOW)
        };
        let _ = writeln!(out, "\n{verdict}");
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let mut out = String::new();

        self.format_header(report, &mut out);
        for entity in &report.entities {
            self.format_entity(entity, &mut out);
        }

        if !report.extractions.is_empty() {
            let _ = writeln!(out, "\nRecords");
            let _ = write!(out, "{}", "-".repeat(RULE_WIDTH / 2));
            for extraction in &report.extractions {
                self.format_extraction(extraction, &mut out);
            }
        }

        if !report.entities.is_empty() {
            self.format_summary(report, &mut out);
        }

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
