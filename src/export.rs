//! Logo export - pretty-printed JSON for download.
//!
//! Export is one-way by design; the document format for reopening a logo is
//! [`crate::project::LogoConfig`], not this payload.

use crate::canvas::Canvas;
use crate::types::CanvasElement;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// The exported payload: elements plus enough context to reproduce the
/// design elsewhere.
#[derive(Clone, Debug, Serialize)]
pub struct ExportedLogo {
    pub elements: Vec<CanvasElement>,
    pub canvas_size: (f32, f32),
    pub template: Option<String>,
    /// Export timestamp, milliseconds since the Unix epoch
    pub exported_at: u64,
}

impl ExportedLogo {
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let exported_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            elements: canvas.elements.clone(),
            canvas_size: canvas.canvas_size,
            template: canvas.template_id.clone(),
            exported_at,
        }
    }
}

/// Serialize the canvas as pretty JSON into `writer`.
pub fn write_json(canvas: &Canvas, writer: &mut impl Write) -> Result<(), ExportError> {
    let payload = ExportedLogo::from_canvas(canvas);
    serde_json::to_writer_pretty(&mut *writer, &payload)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Serialize the canvas as pretty JSON to a file.
pub fn write_json_file(canvas: &Canvas, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let mut file = std::fs::File::create(path)?;
    write_json(canvas, &mut file)
}
