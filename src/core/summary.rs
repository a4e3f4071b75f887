// src/core/summary.rs

//! Headline severities for the report sections.
//!
//! A section's headline is the severity of its *first* entry, not the worst one.

use crate::core::models::{Finding, Severity, VulnerabilityReport};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// Severity of the first entry, or `None` for an empty section.
pub fn headline_severity<T: Finding>(section: &[T]) -> Option<&Severity> {
    section.first().map(Finding::severity)
}

/// Style key for a severity, e.g. `severity-high`. Unknown tokens pass through lowercased.
pub fn severity_class(severity: &Severity) -> String {
    format!("severity-{}", severity.token())
}

/// The sections of a report, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Section {
    Software,
    Directories,
    Files,
    XssInUrl,
    XssInForms,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Software => "Vulnerable Software",
            Section::Directories => "Vulnerable Directories",
            Section::Files => "Vulnerable Files",
            Section::XssInUrl => "XSS Vulnerability URL",
            Section::XssInForms => "XSS Vulnerability in Form Inputs",
        }
    }

    /// Text rendered when the section has no entries.
    pub fn empty_message(self) -> &'static str {
        match self {
            Section::Software => "No vulnerable software found.",
            Section::Directories => "No vulnerable directories found.",
            Section::Files => "No vulnerable files found.",
            Section::XssInUrl | Section::XssInForms => "No vulnerabilities found.",
        }
    }

    /// Whether the section header shows a headline severity. Software entries
    /// carry their own severity each.
    pub fn has_headline(self) -> bool {
        !matches!(self, Section::Software)
    }

    pub fn all() -> impl Iterator<Item = Section> {
        Section::iter()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Compact per-section view of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub directories: Option<Severity>,
    pub files: Option<Severity>,
    pub xss_in_url: Option<Severity>,
    pub xss_in_forms: Option<Severity>,
    pub total_findings: usize,
}

impl ReportSummary {
    pub fn from_report(report: &VulnerabilityReport) -> Self {
        Self {
            directories: headline_severity(&report.vulnerable_directories).cloned(),
            files: headline_severity(&report.vulnerable_files).cloned(),
            xss_in_url: headline_severity(&report.has_xss_in_url_data).cloned(),
            xss_in_forms: headline_severity(&report.has_xss_in_forms_data).cloned(),
            total_findings: report.finding_count(),
        }
    }

    pub fn headline(&self, section: Section) -> Option<&Severity> {
        match section {
            Section::Software => None,
            Section::Directories => self.directories.as_ref(),
            Section::Files => self.files.as_ref(),
            Section::XssInUrl => self.xss_in_url.as_ref(),
            Section::XssInForms => self.xss_in_forms.as_ref(),
        }
    }
}

/// Whether a section has no entries and renders as "none found".
///
/// A file group without paths still counts as an entry: its severity is the headline.
pub fn is_section_empty(report: &VulnerabilityReport, section: Section) -> bool {
    match section {
        Section::Software => report.vulnerable_software.is_empty(),
        Section::Directories => report.vulnerable_directories.is_empty(),
        Section::Files => report.vulnerable_files.is_empty(),
        Section::XssInUrl => report.has_xss_in_url_data.is_empty(),
        Section::XssInForms => report.has_xss_in_forms_data.is_empty(),
    }
}

/// Number of entries a section lists. File groups count their paths.
pub fn section_len(report: &VulnerabilityReport, section: Section) -> usize {
    match section {
        Section::Software => report.vulnerable_software.len(),
        Section::Directories => report.vulnerable_directories.len(),
        Section::Files => report.files().count(),
        Section::XssInUrl => report.has_xss_in_url_data.len(),
        Section::XssInForms => report.has_xss_in_forms_data.len(),
    }
}
