//! Client-side checks for paper and avatar uploads.
//!
//! # Design
//! - Validate before any simulated transfer starts so failures surface as a toast.
//! - Type checks accept either the browser MIME type or the file extension, since some
//!   platforms report an empty MIME type for PDFs.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{Datelike, NaiveDate};
use thiserror::Error;
use uuid::Uuid;

use crate::models::Paper;

const PDF_MIME: &str = "application/pdf";
const AVATAR_TYPES: [(&str, &str); 4] = [
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/jpeg", "jpeg"),
    ("image/webp", "webp"),
];

/// Reasons an upload is refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    /// File has no content.
    #[error("file is empty")]
    Empty,
    /// File exceeds the configured limit.
    #[error("file is too large")]
    TooLarge {
        /// File size in bytes.
        size: u64,
        /// Limit in bytes.
        limit: u64,
    },
    /// File type is not accepted.
    #[error("unsupported file type")]
    UnsupportedType {
        /// Reported MIME type, possibly empty.
        mime: String,
    },
}

impl UploadError {
    /// Toast copy for the failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Empty => "The selected file is empty.".to_string(),
            Self::TooLarge { limit, .. } => {
                format!("Files must be {} or smaller.", human_size(*limit))
            }
            Self::UnsupportedType { .. } => "That file type is not supported.".to_string(),
        }
    }
}

/// Metadata of a picked file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    /// File name including extension.
    pub name: String,
    /// Browser-reported MIME type.
    pub mime: String,
    /// Size in bytes.
    pub size: u64,
}

fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

fn check_size(file: &FileMeta, limit: u64) -> Result<(), UploadError> {
    if file.size == 0 {
        return Err(UploadError::Empty);
    }
    if file.size > limit {
        return Err(UploadError::TooLarge {
            size: file.size,
            limit,
        });
    }
    Ok(())
}

/// Accepts non-empty PDFs up to `limit` bytes.
///
/// # Errors
///
/// Returns [`UploadError`] describing the first failed check.
pub fn validate_paper(file: &FileMeta, limit: u64) -> Result<(), UploadError> {
    let is_pdf = file.mime.eq_ignore_ascii_case(PDF_MIME)
        || extension(&file.name).as_deref() == Some("pdf");
    if !is_pdf {
        return Err(UploadError::UnsupportedType {
            mime: file.mime.clone(),
        });
    }
    check_size(file, limit)
}

/// Accepts PNG, JPEG and WebP images up to `limit` bytes.
///
/// # Errors
///
/// Returns [`UploadError`] describing the first failed check.
pub fn validate_avatar(file: &FileMeta, limit: u64) -> Result<(), UploadError> {
    let ext = extension(&file.name);
    let accepted = AVATAR_TYPES.iter().any(|(mime, known_ext)| {
        file.mime.eq_ignore_ascii_case(mime) || ext.as_deref() == Some(*known_ext)
    });
    if !accepted {
        return Err(UploadError::UnsupportedType {
            mime: file.mime.clone(),
        });
    }
    check_size(file, limit)
}

/// MIME type for an accepted avatar, inferred from the extension when the browser
/// reports none.
#[must_use]
pub fn avatar_mime(file: &FileMeta) -> String {
    if !file.mime.is_empty() {
        return file.mime.to_ascii_lowercase();
    }
    let ext = extension(&file.name);
    AVATAR_TYPES
        .iter()
        .find(|(_, known_ext)| ext.as_deref() == Some(*known_ext))
        .map_or_else(|| "application/octet-stream".to_string(), |(mime, _)| (*mime).to_string())
}

/// Inline data URL for an avatar preview.
#[must_use]
pub fn avatar_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Next simulated progress value, saturating at 100.
#[must_use]
pub fn advance_progress(current: u8, step: u8) -> u8 {
    current.saturating_add(step).min(100)
}

/// Progress of the simulated transfer for one accepted file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadSession {
    /// File being transferred, `None` when idle.
    pub file: Option<FileMeta>,
    /// Transfer progress, 0–100.
    pub percent: u8,
}

impl UploadSession {
    /// Starts a transfer at zero percent.
    #[must_use]
    pub const fn start(file: FileMeta) -> Self {
        Self {
            file: Some(file),
            percent: 0,
        }
    }

    /// Session advanced by `step`; idle sessions stay idle.
    #[must_use]
    pub fn tick(&self, step: u8) -> Self {
        if self.file.is_none() {
            return self.clone();
        }
        Self {
            file: self.file.clone(),
            percent: advance_progress(self.percent, step),
        }
    }

    /// A transfer is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.file.is_some() && self.percent < 100
    }

    /// The transfer reached 100 percent.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.file.is_some() && self.percent >= 100
    }
}

/// Library entry for a finished upload, titled after the file name.
#[must_use]
pub fn paper_from_upload(file: &FileMeta, added_on: NaiveDate) -> Paper {
    let stem = file
        .name
        .rsplit_once('.')
        .map_or(file.name.as_str(), |(stem, _)| stem);
    let title = stem.replace(['_', '-'], " ").trim().to_string();
    Paper {
        id: Uuid::new_v4(),
        title: if title.is_empty() {
            "Untitled paper".to_string()
        } else {
            title
        },
        authors: Vec::new(),
        venue: "Uploaded".to_string(),
        year: u16::try_from(added_on.year()).unwrap_or_default(),
        citations: 0,
        tags: Vec::new(),
        reading_progress: 0,
        is_bookmarked: false,
        added_on,
    }
}

/// Size with a binary unit (`2.0 MB`, `512 KB`).
#[must_use]
pub fn human_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    if bytes >= MIB {
        let tenths = u128::from(bytes) * 10 / u128::from(MIB);
        format!("{}.{} MB", tenths / 10, tenths % 10)
    } else if bytes >= KIB {
        format!("{} KB", bytes / KIB)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u64 = 25 * 1024 * 1024;

    fn meta(name: &str, mime: &str, size: u64) -> FileMeta {
        FileMeta {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    #[test]
    fn pdf_accepted_by_mime_or_extension() {
        assert_eq!(
            validate_paper(&meta("paper.bin", "application/pdf", 10), LIMIT),
            Ok(())
        );
        assert_eq!(validate_paper(&meta("Paper.PDF", "", 10), LIMIT), Ok(()));
    }

    #[test]
    fn paper_checks_type_then_size() {
        assert_eq!(
            validate_paper(&meta("notes.docx", "application/msword", 0), LIMIT),
            Err(UploadError::UnsupportedType {
                mime: "application/msword".into()
            })
        );
        assert_eq!(
            validate_paper(&meta("empty.pdf", PDF_MIME, 0), LIMIT),
            Err(UploadError::Empty)
        );
        assert_eq!(
            validate_paper(&meta("huge.pdf", PDF_MIME, LIMIT + 1), LIMIT),
            Err(UploadError::TooLarge {
                size: LIMIT + 1,
                limit: LIMIT
            })
        );
        assert_eq!(validate_paper(&meta("edge.pdf", PDF_MIME, LIMIT), LIMIT), Ok(()));
    }

    #[test]
    fn avatar_types() {
        let limit = 2 * 1024 * 1024;
        assert_eq!(validate_avatar(&meta("me.webp", "", 5), limit), Ok(()));
        assert_eq!(validate_avatar(&meta("me", "image/png", 5), limit), Ok(()));
        assert!(validate_avatar(&meta("me.gif", "image/gif", 5), limit).is_err());
    }

    #[test]
    fn avatar_mime_falls_back_to_extension() {
        assert_eq!(avatar_mime(&meta("me.JPG", "", 5)), "image/jpeg");
        assert_eq!(avatar_mime(&meta("me.bin", "Image/PNG", 5)), "image/png");
        assert_eq!(avatar_mime(&meta("me", "", 5)), "application/octet-stream");
    }

    #[test]
    fn data_url_and_progress() {
        assert_eq!(avatar_data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
        assert_eq!(advance_progress(90, 12), 100);
        assert_eq!(advance_progress(250, 12), 100);
        assert_eq!(advance_progress(12, 12), 24);
    }

    #[test]
    fn session_ticks_to_completion() {
        let idle = UploadSession::default();
        assert_eq!(idle.tick(50), idle);
        assert!(!idle.is_active());

        let mut session = UploadSession::start(meta("a.pdf", PDF_MIME, 10));
        assert!(session.is_active());
        for _ in 0..9 {
            session = session.tick(12);
        }
        assert!(session.is_complete());
        assert!(!session.is_active());
        assert_eq!(session.percent, 100);
    }

    #[test]
    fn uploaded_paper_is_titled_from_file_name() {
        let added_on = NaiveDate::from_ymd_opt(2025, 5, 4).unwrap_or_default();
        let paper = paper_from_upload(&meta("graph_neural-nets.pdf", PDF_MIME, 10), added_on);
        assert_eq!(paper.title, "graph neural nets");
        assert_eq!(paper.year, 2025);
        assert_eq!(paper.reading_progress, 0);
        assert_eq!(
            paper_from_upload(&meta(".pdf", PDF_MIME, 10), added_on).title,
            "Untitled paper"
        );
    }

    #[test]
    fn sizes_and_messages() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2 KB");
        assert_eq!(human_size(LIMIT), "25.0 MB");
        assert_eq!(human_size(u64::MAX), "17592186044415.9 MB");
        assert_eq!(
            UploadError::TooLarge {
                size: 1,
                limit: LIMIT
            }
            .user_message(),
            "Files must be 25.0 MB or smaller."
        );
        assert_eq!(
            UploadError::TooLarge {
                size: u64::MAX,
                limit: u64::MAX
            }
            .user_message(),
            "Files must be 17592186044415.9 MB or smaller."
        );
    }
}
