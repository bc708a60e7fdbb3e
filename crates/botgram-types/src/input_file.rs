//! Files going *to* Telegram: by id, by URL, or uploaded bytes.

use serde::{Serialize, Serializer};

/// A file to send. Three forms the API accepts:
///
/// - `FileId`: reuse a file already on Telegram's servers (no size limits,
///   cannot change the file's type).
/// - `Url`: Telegram downloads the file itself (5 MB photos, 20 MB other).
/// - `Bytes`: upload via `multipart/form-data` (10 MB photos, 50 MB other).
///
/// The first two serialize as a plain string; `Bytes` serializes as an
/// `attach://<file_name>` reference and the HTTP layer attaches the matching
/// multipart part under that name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFile {
    FileId(String),
    Url(String),
    Bytes { file_name: String, data: Vec<u8> },
}

impl InputFile {
    pub fn file_id(id: impl Into<String>) -> Self {
        InputFile::FileId(id.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        InputFile::Url(url.into())
    }

    pub fn bytes(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        InputFile::Bytes {
            file_name: file_name.into(),
            data,
        }
    }

    /// True when sending this file requires a multipart request.
    pub fn needs_upload(&self) -> bool {
        matches!(self, InputFile::Bytes { .. })
    }

    /// Multipart part name and content, for `Bytes` only.
    pub fn as_part(&self) -> Option<(&str, &[u8])> {
        match self {
            InputFile::Bytes { file_name, data } => Some((file_name, data)),
            _ => None,
        }
    }
}

impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            InputFile::FileId(id) => serializer.serialize_str(id),
            InputFile::Url(url) => serializer.serialize_str(url),
            InputFile::Bytes { file_name, .. } => {
                serializer.serialize_str(&format!("attach://{file_name}"))
            }
        }
    }
}
