use std::fmt;

use bytes::Bytes;
use http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};

use crate::{
    utils::{parse_content_disposition, parse_content_type, parse_part_headers},
    Error, Result,
};

/// What a part's header block declares about it.
#[derive(Debug, Clone, PartialEq)]
pub struct PartHeaders {
    /// The field name of the part.
    pub name: String,
    /// The filename of the part, optional. Present on file parts, an empty
    /// value is still a file.
    pub filename: Option<String>,
    /// The declared content type of the part, optional.
    pub content_type: Option<mime::Mime>,
}

impl PartHeaders {
    /// Parses a raw header block, terminating blank line included.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut headers = parse_part_headers(bytes)?;

        let (name, filename) = headers
            .remove(CONTENT_DISPOSITION)
            .ok_or(Error::InvalidContentDisposition)
            .and_then(|v| parse_content_disposition(v.as_bytes()))?;

        let content_type = parse_content_type(headers.remove(CONTENT_TYPE).as_ref());

        Ok(Self {
            name,
            filename,
            content_type,
        })
    }

    /// Whether the part is an uploaded file rather than a plain field.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.filename.is_some()
    }
}

/// An uploaded file captured from one part.
#[derive(Clone, PartialEq)]
pub struct FileEntry {
    /// The filename as sent by the client.
    pub filename: String,
    /// The substring after the filename's last `.`, empty when there is none.
    pub extension: String,
    /// The declared content type, optional.
    pub content_type: Option<mime::Mime>,
    /// The payload bytes, a view into the request buffer.
    pub data: Bytes,
}

impl FileEntry {
    pub(crate) fn new(filename: String, content_type: Option<mime::Mime>, data: Bytes) -> Self {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_owned())
            .unwrap_or_default();

        Self {
            filename,
            extension,
            content_type,
            data,
        }
    }
}

impl fmt::Debug for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileEntry")
            .field("filename", &self.filename)
            .field("extension", &self.extension)
            .field("content_type", &self.content_type)
            .field("length", &self.data.len())
            .finish()
    }
}
