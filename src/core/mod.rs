// src/core/mod.rs

// The non-visual part of the client: the report data contract, the backend calls
// and the state that drives the UI.

/// Report data structures (`VulnerabilityReport`, `Severity`, findings) and `ScanState`.
pub mod models;

/// Typed errors and the user-facing messages they map to.
pub mod error;

/// HTTP access to the scanning and PDF rendering service.
pub mod backend;

/// The scan request lifecycle (idle, loading, success, error).
pub mod scan_client;

/// Headline severity per report section.
pub mod summary;

/// PDF export and local file delivery.
pub mod export;
