//! Integration tests for the PDF export path using wiremock and a temporary download directory

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use xssorcist::config::Config;
use xssorcist::core::backend::Backend;
use xssorcist::core::export::{
    DiskDownloader, ExportClient, ExportStatus, FileDownloader, REPORT_FILENAME,
};
use xssorcist::core::models::{DirectoryFinding, Severity, VulnerabilityReport};

const PDF_BYTES: &[u8] = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n1 0 obj\n<<>>\nendobj\n";

fn create_backend(mock_server: &MockServer) -> Backend {
    let config = Config::new(&mock_server.uri())
        .unwrap()
        .with_timeout(Duration::from_secs(10));
    Backend::new(&config).unwrap()
}

fn sample_report() -> VulnerabilityReport {
    VulnerabilityReport {
        vulnerable_directories: vec![DirectoryFinding {
            directory: "/admin".into(),
            severity: Severity::High,
        }],
        ..Default::default()
    }
}

/// Records saves in memory instead of touching the disk. Clones share the record.
#[derive(Clone, Default)]
struct RecordingDownloader {
    saved: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl RecordingDownloader {
    fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().unwrap().clone()
    }
}

impl FileDownloader for RecordingDownloader {
    fn save(&self, bytes: &[u8], filename: &str) -> io::Result<PathBuf> {
        self.saved
            .lock()
            .unwrap()
            .push((filename.to_string(), bytes.to_vec()));
        Ok(PathBuf::from(filename))
    }
}

#[tokio::test]
async fn test_export_posts_report_and_saves_pdf() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-pdf"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "vulnerabilityReport": {
                "vulnerableSoftware": [],
                "vulnerableDirectories": [{ "directory": "/admin", "severity": "High" }],
                "vulnerableFiles": [],
                "hasXSSInURLData": [],
                "hasXSSInFormsData": [],
                "url": "example.com"
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/pdf")
                .set_body_bytes(PDF_BYTES),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let downloader = DiskDownloader::new(dir.path());
    let exporter = ExportClient::new(create_backend(&mock_server), downloader);
    let report = sample_report();

    let status = exporter.export_report(Some(&report), "example.com").await;

    let expected = dir.path().join(REPORT_FILENAME);
    assert_eq!(status, ExportStatus::Success(expected.clone()));
    assert_eq!(std::fs::read(expected).unwrap(), PDF_BYTES);
}

#[tokio::test]
async fn test_export_without_report_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let downloader = RecordingDownloader::default();
    let exporter = ExportClient::new(create_backend(&mock_server), downloader.clone());
    let status = exporter.export_report(None, "example.com").await;
    assert_eq!(status, ExportStatus::Idle);
    assert!(downloader.saved().is_empty());
}

#[tokio::test]
async fn test_export_failure_is_reported_not_propagated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-pdf"))
        .respond_with(ResponseTemplate::new(503).set_body_string("renderer offline"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let downloader = DiskDownloader::new(dir.path());
    let exporter = ExportClient::new(create_backend(&mock_server), downloader);
    let report = sample_report();

    let status = exporter.export_report(Some(&report), "example.com").await;
    match status {
        ExportStatus::Error(message) => assert!(!message.contains("renderer offline")),
        other => panic!("expected an error status, got {:?}", other),
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_export_uses_fixed_filename() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PDF_BYTES))
        .mount(&mock_server)
        .await;

    let downloader = RecordingDownloader::default();
    let exporter = ExportClient::new(create_backend(&mock_server), downloader.clone());
    let report = sample_report();
    let status = exporter
        .export_report(Some(&report), "https://example.com")
        .await;

    let filename = "Vulnerability Report - XSSorcist.pdf";
    assert_eq!(status, ExportStatus::Success(PathBuf::from(filename)));
    assert_eq!(
        downloader.saved(),
        vec![(filename.to_string(), PDF_BYTES.to_vec())]
    );
}
