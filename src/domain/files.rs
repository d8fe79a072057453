use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fallback MIME type when none is supplied or guessable.
const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Metadata for a file attached to the pending message.
///
/// The bytes themselves never enter the engine; upload transport happens
/// elsewhere and hands over the resulting metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedFile {
    /// Unique identifier for the attachment.
    pub id: String,
    /// Original filename.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type of the file.
    pub mime_type: String,
    /// Whether the file is an image (rendered as a thumbnail).
    pub is_image: bool,
    /// When the file was attached.
    pub uploaded_at: DateTime<Utc>,
}

impl AttachedFile {
    /// Create attachment metadata with a fresh id and the current timestamp.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, size, mime_type)
    }

    /// Create attachment metadata with a caller-chosen id.
    #[must_use]
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        size: u64,
        mime_type: impl Into<String>,
    ) -> Self {
        let mut mime_type = mime_type.into();
        if mime_type.trim().is_empty() {
            mime_type = DEFAULT_MIME_TYPE.to_string();
        }
        let is_image = mime_type.starts_with("image/");
        Self {
            id: id.into(),
            name: name.into(),
            size,
            mime_type,
            is_image,
            uploaded_at: Utc::now(),
        }
    }

    /// Create attachment metadata, guessing the MIME type from the extension.
    #[must_use]
    pub fn from_name(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let mime_type = mime_guess::from_path(&name)
            .first_raw()
            .unwrap_or(DEFAULT_MIME_TYPE);
        Self::new(name, size, mime_type)
    }

    /// Size formatted for display, e.g. `"1.5 MB"`.
    #[must_use]
    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }
}

/// Format a byte count with binary units (B, KB, MB, GB).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{value:.1}");
    let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{trimmed} {}", UNITS[unit])
}
