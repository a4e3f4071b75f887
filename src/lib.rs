// src/lib.rs

//! XSSorcist terminal client: submits a website to a remote scanning service,
//! renders the vulnerability report and downloads it as a PDF.

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod ui;
