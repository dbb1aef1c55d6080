//! Validation report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use super::LengthStatus;
use crate::config::ValidateConfig;
use crate::utils::plural_s;

/// One checked file.
#[derive(Debug, Clone)]
pub struct Finding {
    /// Permalink or file stem.
    pub name: String,
    /// Path relative to the project root.
    pub file: String,
    pub description: String,
    /// Length in characters.
    pub length: usize,
}

impl Finding {
    pub fn new(name: String, file: String, description: &str) -> Self {
        Self {
            name,
            file,
            length: description.chars().count(),
            description: description.to_string(),
        }
    }
}

/// Findings grouped by length status, in walk order.
#[derive(Debug, Default)]
pub struct DescriptionReport {
    pub checked: usize,
    /// Within the thresholds, or long.
    pub valid: usize,
    pub short: Vec<Finding>,
    pub long: Vec<Finding>,
    pub too_short: Vec<Finding>,
}

impl DescriptionReport {
    pub fn add(&mut self, finding: Finding, status: LengthStatus) {
        self.checked += 1;
        match status {
            LengthStatus::Ok => self.valid += 1,
            LengthStatus::Long => {
                self.valid += 1;
                self.long.push(finding);
            }
            LengthStatus::Short => self.short.push(finding),
            LengthStatus::TooShort => self.too_short.push(finding),
        }
    }

    /// Descriptions below `min_length`.
    pub fn error_count(&self) -> usize {
        self.too_short.len()
    }

    /// Print warnings, then errors (with the offending text).
    pub fn print(&self, thresholds: &ValidateConfig) {
        Self::print_warnings(
            &format!("below {} characters", thresholds.recommended_min),
            &self.short,
        );
        Self::print_warnings(
            &format!("above {} characters", thresholds.recommended_max),
            &self.long,
        );

        if self.too_short.is_empty() {
            return;
        }
        eprintln!();
        eprintln!(
            "{} {}",
            "too short".red().bold(),
            format!(
                "(below {} characters, {} file{})",
                thresholds.min_length,
                self.too_short.len(),
                plural_s(self.too_short.len())
            )
            .dimmed()
        );
        for f in &self.too_short {
            eprintln!("{}{}{}", "[".dimmed(), f.file.cyan(), "]".dimmed());
            eprintln!("{} {} ({} chars)", "→".red(), f.name, f.length);
            if f.description.is_empty() {
                eprintln!("  {}", "(no description)".dimmed());
            } else {
                eprintln!("  {}", format!("\"{}\"", f.description).dimmed());
            }
        }
    }

    fn print_warnings(title: &str, findings: &[Finding]) {
        if findings.is_empty() {
            return;
        }
        eprintln!();
        eprintln!(
            "{} {}",
            title.yellow().bold(),
            format!("({} file{})", findings.len(), plural_s(findings.len())).dimmed()
        );
        for f in findings {
            eprintln!("{} {} ({} chars)", "→".yellow(), f.name, f.length);
        }
    }
}

impl fmt::Display for DescriptionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let warnings = self.short.len() + self.long.len();
        write!(
            f,
            "{} file{} checked, {} valid, {} warning{}, ",
            self.checked,
            plural_s(self.checked),
            self.valid,
            warnings,
            plural_s(warnings)
        )?;

        let errors = self.too_short.len();
        if errors == 0 {
            write!(f, "{}", "no errors".green())
        } else {
            write!(f, "{} error{}", errors.to_string().red().bold(), plural_s(errors))
        }
    }
}

/// An image reference that resolved to nothing.
#[derive(Debug, Clone)]
pub struct MissingImage {
    /// The path as written in the document.
    pub reference: String,
    /// Where it was looked up, relative to the project root.
    pub expected: String,
}

/// Image reference counts, with missing ones grouped by source file.
#[derive(Debug, Default)]
pub struct ImageReport {
    /// Files scanned.
    pub files: usize,
    pub local: usize,
    pub external: usize,
    pub missing: BTreeMap<String, Vec<MissingImage>>,
}

impl ImageReport {
    pub fn add_missing(&mut self, source: String, reference: String, expected: String) {
        self.missing
            .entry(source)
            .or_default()
            .push(MissingImage { reference, expected });
    }

    pub fn missing_count(&self) -> usize {
        self.missing.values().map(Vec::len).sum()
    }

    pub fn total(&self) -> usize {
        self.local + self.external + self.missing_count()
    }

    /// Print missing references per file.
    pub fn print(&self) {
        if self.missing.is_empty() {
            return;
        }
        eprintln!();

        let file_count = self.missing.len();
        let error_count = self.missing_count();
        eprintln!(
            "{} {}",
            "missing images".red().bold(),
            format!(
                "({file_count} file{}, {error_count} error{})",
                plural_s(file_count),
                plural_s(error_count)
            )
            .dimmed()
        );

        for (path, images) in &self.missing {
            eprintln!("{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed());
            for image in images {
                eprintln!("{} {}", "→".red(), image.reference);
                eprintln!("  {}", format!("expected at {}", image.expected).dimmed());
            }
        }
    }
}

impl fmt::Display for ImageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total();
        write!(
            f,
            "{} file{} checked, {} image{}, {} local, {} external, ",
            self.files,
            plural_s(self.files),
            total,
            plural_s(total),
            self.local,
            self.external
        )?;

        let missing = self.missing_count();
        if missing == 0 {
            write!(f, "{}", "none missing".green())
        } else {
            write!(f, "{} missing", missing.to_string().red().bold())
        }
    }
}
