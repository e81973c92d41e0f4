use std::collections::HashMap;

use bytes::Bytes;
use tracing::{debug, trace};

use crate::{Boundary, FileEntry, PartHeaders, Scanner};

/// Fields and files extracted from one request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    /// Plain fields, UTF-8 decoded and trimmed, keyed by field name.
    pub fields: HashMap<String, String>,
    /// Uploaded files, keyed by field name.
    pub files: HashMap<String, FileEntry>,
}

impl FormData {
    /// Extracts fields and files from a fully buffered request body.
    ///
    /// Bodies whose content type is not `multipart/form-data` leave both
    /// maps empty. Parts with a broken header block are dropped, the rest of
    /// the body still parses. Within each map, a repeated name keeps the
    /// last part.
    pub fn parse<B>(content_type: &str, body: B) -> Self
    where
        B: Into<Bytes>,
    {
        let Some(boundary) = Boundary::from_content_type(content_type) else {
            trace!("not a multipart/form-data content type");
            return Self::default();
        };

        let body = body.into();
        let mut form = Self::default();

        for raw in Scanner::new(&body, &boundary) {
            match PartHeaders::parse(&body[raw.headers]) {
                Ok(headers) => form.insert(headers, body.slice(raw.body)),
                Err(e) => debug!("part dropped: {}", e),
            }
        }

        debug!(
            fields = form.fields.len(),
            files = form.files.len(),
            "body parsed"
        );

        form
    }

    /// Stores one part under its field name.
    fn insert(&mut self, headers: PartHeaders, data: Bytes) {
        let PartHeaders {
            name,
            filename,
            content_type,
        } = headers;

        match filename {
            Some(filename) => {
                trace!("file {} {}", name, data.len());
                self.files
                    .insert(name, FileEntry::new(filename, content_type, data));
            }
            None => {
                let value = String::from_utf8_lossy(&data).trim().to_owned();
                trace!("text {} {}", name, value.len());
                self.fields.insert(name, value);
            }
        }
    }
}
