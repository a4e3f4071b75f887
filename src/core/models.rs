// src/core/models.rs

use crate::core::error::MalformedReportError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// --- Severity ---

/// Severity level attached to every finding reported by the backend.
///
/// The wire value is matched case-insensitively. Tokens outside the known set are
/// kept as-is in `Other` so they can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    Other(String),
}

impl Severity {
    /// Parses a wire token. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Severity::Low,
            "medium" => Severity::Medium,
            "high" => Severity::High,
            "critical" => Severity::Critical,
            _ => Severity::Other(raw.to_string()),
        }
    }

    /// Canonical lowercase token, used as a display/styling key.
    pub fn token(&self) -> String {
        match self {
            Severity::Low => "low".to_string(),
            Severity::Medium => "medium".to_string(),
            Severity::High => "high".to_string(),
            Severity::Critical => "critical".to_string(),
            Severity::Other(raw) => raw.to_lowercase(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Severity::Other(_))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
            Severity::Critical => write!(f, "Critical"),
            Severity::Other(raw) => write!(f, "{}", raw),
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Other(String::new())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| Severity::parse(&s)).unwrap_or_default())
    }
}

// --- Findings ---

// A vulnerable piece of software detected on the target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftwareFinding {
    pub software: String,
    pub version: String,
    pub severity: Severity,
    pub vulnerability: String,
}

// An exposed directory path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryFinding {
    pub directory: String,
    pub severity: Severity,
}

// Several exposed file paths sharing one severity tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFindingGroup {
    pub severity: Severity,
    #[serde(deserialize_with = "null_as_empty")]
    pub files: Vec<String>,
}

// A query parameter reflecting an XSS payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlXssFinding {
    pub parameter: String,
    pub severity: Severity,
}

// A form field reflecting an XSS payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormXssFinding {
    pub field: String,
    pub severity: Severity,
}

/// Anything carrying a severity tag. Used by the summarizer.
pub trait Finding {
    fn severity(&self) -> &Severity;
}

impl Finding for SoftwareFinding {
    fn severity(&self) -> &Severity {
        &self.severity
    }
}

impl Finding for DirectoryFinding {
    fn severity(&self) -> &Severity {
        &self.severity
    }
}

impl Finding for FileFindingGroup {
    fn severity(&self) -> &Severity {
        &self.severity
    }
}

impl Finding for UrlXssFinding {
    fn severity(&self) -> &Severity {
        &self.severity
    }
}

impl Finding for FormXssFinding {
    fn severity(&self) -> &Severity {
        &self.severity
    }
}

// --- Main Report ---

/// The report returned by the scanning backend for a single URL.
///
/// Every section is optional on the wire: a missing or `null` section becomes an empty
/// list, which is the "none found" signal for that section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityReport {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vulnerable_software: Vec<SoftwareFinding>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vulnerable_directories: Vec<DirectoryFinding>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vulnerable_files: Vec<FileFindingGroup>,
    #[serde(rename = "hasXSSInURLData", default, deserialize_with = "null_as_empty")]
    pub has_xss_in_url_data: Vec<UrlXssFinding>,
    #[serde(rename = "hasXSSInFormsData", default, deserialize_with = "null_as_empty")]
    pub has_xss_in_forms_data: Vec<FormXssFinding>,
}

impl VulnerabilityReport {
    /// Parses a wire payload.
    ///
    /// The body must be a JSON object; sections that are present must have the
    /// right shape.
    pub fn from_json(body: &str) -> Result<Self, MalformedReportError> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(MalformedReportError::NotAnObject);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// All reported file paths, group by group.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.vulnerable_files
            .iter()
            .flat_map(|group| group.files.iter().map(String::as_str))
    }

    /// Total number of findings. A file group without paths still counts once.
    pub fn finding_count(&self) -> usize {
        let files: usize = self
            .vulnerable_files
            .iter()
            .map(|group| group.files.len().max(1))
            .sum();
        self.vulnerable_software.len()
            + self.vulnerable_directories.len()
            + files
            + self.has_xss_in_url_data.len()
            + self.has_xss_in_forms_data.len()
    }

    pub fn is_clean(&self) -> bool {
        self.vulnerable_software.is_empty()
            && self.vulnerable_directories.is_empty()
            && self.vulnerable_files.is_empty()
            && self.has_xss_in_url_data.is_empty()
            && self.has_xss_in_forms_data.is_empty()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// --- Scan State ---

/// Lifecycle of a scan request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// State held by the scan client for the lifetime of the UI session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    pub url: String,
    pub phase: ScanPhase,
    pub report: Option<VulnerabilityReport>,
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_case_insensitive() {
        assert_eq!(Severity::parse("HIGH"), Severity::High);
        assert_eq!(Severity::parse("high"), Severity::High);
        assert_eq!(Severity::parse("Critical"), Severity::Critical);
        assert_eq!(
            Severity::parse("Informational"),
            Severity::Other("Informational".into())
        );
        assert_eq!(Severity::parse("Informational").token(), "informational");
    }

    #[test]
    fn missing_sections_are_empty() {
        let body = r#"{"vulnerableSoftware": []}"#;
        let report = VulnerabilityReport::from_json(body).unwrap();
        assert!(report.vulnerable_directories.is_empty());
        assert!(report.vulnerable_files.is_empty());
        assert!(report.has_xss_in_url_data.is_empty());
        assert!(report.has_xss_in_forms_data.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn null_sections_are_empty() {
        let body = r#"{
            "vulnerableDirectories": null,
            "vulnerableFiles": [{"severity": "Low", "files": null}]
        }"#;
        let report = VulnerabilityReport::from_json(body).unwrap();
        assert!(report.vulnerable_directories.is_empty());
        assert_eq!(report.vulnerable_files.len(), 1);
        assert_eq!(report.files().count(), 0);
    }

    #[test]
    fn file_group_without_paths_is_still_a_finding() {
        let body = r#"{"vulnerableFiles": [{"severity": "High", "files": []}]}"#;
        let report = VulnerabilityReport::from_json(body).unwrap();
        assert!(!report.is_clean());
        assert_eq!(report.finding_count(), 1);
    }

    #[test]
    fn rejects_non_object_bodies() {
        assert!(matches!(
            VulnerabilityReport::from_json("[]"),
            Err(MalformedReportError::NotAnObject)
        ));
        assert!(matches!(
            VulnerabilityReport::from_json("\"ok\""),
            Err(MalformedReportError::NotAnObject)
        ));
        assert!(matches!(
            VulnerabilityReport::from_json("<html>"),
            Err(MalformedReportError::Json(_))
        ));
        let wrong_type = r#"{"vulnerableDirectories": "none"}"#;
        assert!(VulnerabilityReport::from_json(wrong_type).is_err());
    }

    #[test]
    fn parses_full_payload() {
        let body = r#"{
            "vulnerableSoftware": [{
                "software": "nginx",
                "version": "1.14.0",
                "severity": "MEDIUM",
                "vulnerability": "CVE-2019-9511"
            }],
            "vulnerableDirectories": [{"directory": "/admin", "severity": "High"}],
            "vulnerableFiles": [
                {"severity": "Low", "files": ["/.env", "/backup.zip"]},
                {"severity": "High", "files": ["/.git/config"]}
            ],
            "hasXSSInURLData": [{"parameter": "q", "severity": "Critical"}],
            "hasXSSInFormsData": [{"field": "comment", "severity": "High"}]
        }"#;
        let report = VulnerabilityReport::from_json(body).unwrap();
        assert_eq!(report.vulnerable_software[0].severity, Severity::Medium);
        assert_eq!(report.vulnerable_software[0].software, "nginx");
        assert_eq!(
            report.files().collect::<Vec<_>>(),
            vec!["/.env", "/backup.zip", "/.git/config"]
        );
        assert_eq!(report.has_xss_in_url_data[0].parameter, "q");
        assert_eq!(report.has_xss_in_forms_data[0].field, "comment");
        assert_eq!(report.finding_count(), 7);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let report = VulnerabilityReport {
            has_xss_in_url_data: vec![UrlXssFinding {
                parameter: "id".into(),
                severity: Severity::High,
            }],
            ..Default::default()
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["hasXSSInURLData"][0]["severity"], "High");
        assert!(value["hasXSSInFormsData"].as_array().unwrap().is_empty());
        assert!(value["vulnerableSoftware"].is_array());
    }
}
