// src/core/export.rs

use crate::core::backend::Backend;
use crate::core::error::{EXPORT_FAILED_MESSAGE, ExportError};
use crate::core::models::VulnerabilityReport;
use crate::logging::get_data_dir;
use directories::UserDirs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::task::spawn_blocking;
use tracing::{error, info};

/// Name of the downloaded PDF.
pub const REPORT_FILENAME: &str = "Vulnerability Report - XSSorcist.pdf";

/// Outcome of the last export, shown as a banner by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExportStatus {
    #[default]
    Idle,
    InProgress,
    Success(PathBuf),
    Error(String),
}

/// Delivers a binary payload to the user as a saved file.
pub trait FileDownloader: Send + Sync + 'static {
    fn save(&self, bytes: &[u8], filename: &str) -> io::Result<PathBuf>;
}

/// Saves downloads into a directory on disk.
#[derive(Debug, Clone)]
pub struct DiskDownloader {
    directory: PathBuf,
}

impl DiskDownloader {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The user's Downloads folder, or the application data dir when there is none.
    pub fn from_user_dirs() -> Self {
        let directory = UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(get_data_dir);
        Self::new(directory)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl FileDownloader for DiskDownloader {
    fn save(&self, bytes: &[u8], filename: &str) -> io::Result<PathBuf> {
        std::fs::create_dir_all(&self.directory)?;
        let destination = self.directory.join(filename);

        // The temp file is removed on drop unless it is persisted.
        let mut file = NamedTempFile::new_in(&self.directory)?;
        file.write_all(bytes)?;
        file.as_file().sync_all()?;
        file.persist(&destination).map_err(|e| e.error)?;
        Ok(destination)
    }
}

/// Sends the current report to the rendering service and saves the returned PDF.
pub struct ExportClient<D: FileDownloader> {
    backend: Backend,
    downloader: Arc<D>,
}

impl<D: FileDownloader> Clone for ExportClient<D> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            downloader: Arc::clone(&self.downloader),
        }
    }
}

impl<D: FileDownloader> ExportClient<D> {
    pub fn new(backend: Backend, downloader: D) -> Self {
        Self {
            backend,
            downloader: Arc::new(downloader),
        }
    }

    /// Exports `report`, if there is one. Never fails: errors are logged and reported
    /// through the returned status.
    pub async fn export_report(
        &self,
        report: Option<&VulnerabilityReport>,
        url: &str,
    ) -> ExportStatus {
        let Some(report) = report else {
            return ExportStatus::Idle;
        };

        match self.try_export(report, url).await {
            Ok(path) => {
                info!(path = %path.display(), "Report saved.");
                ExportStatus::Success(path)
            }
            Err(err) => {
                error!(url, error = %err, "Report export failed.");
                ExportStatus::Error(EXPORT_FAILED_MESSAGE.to_string())
            }
        }
    }

    async fn try_export(
        &self,
        report: &VulnerabilityReport,
        url: &str,
    ) -> Result<PathBuf, ExportError> {
        let bytes = self.backend.render_pdf(report, url).await?;
        let downloader = Arc::clone(&self.downloader);
        let path = spawn_blocking(move || downloader.save(&bytes, REPORT_FILENAME))
            .await
            .map_err(io::Error::other)??;
        Ok(path)
    }
}
