use std::fmt;

use bytes::{Bytes, BytesMut};

use crate::utils::{unquote, DASHES};

/// Max boundary token size, RFC 2046 4.1.1.
pub(crate) const MAX_BOUNDARY_SIZE: usize = 70;

/// The part delimiter of one request, derived from its `Content-Type`.
#[derive(Clone)]
pub struct Boundary {
    delimiter: Bytes,
}

impl Boundary {
    /// Creates a boundary from a raw token.
    ///
    /// The token is taken as-is. Use [`Boundary::from_content_type`] when
    /// starting from a request header.
    pub fn new(token: impl AsRef<[u8]>) -> Self {
        let token = token.as_ref();

        // `--boundary`
        let mut delimiter = BytesMut::with_capacity(2 + token.len());
        delimiter.extend_from_slice(&DASHES);
        delimiter.extend_from_slice(token);

        Self {
            delimiter: delimiter.freeze(),
        }
    }

    /// Extracts the boundary token from a `multipart/form-data` content type.
    ///
    /// Returns `None` when the header does not parse, is not
    /// `multipart/form-data`, or carries no usable `boundary` parameter,
    /// quoted or not.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let m = content_type.parse::<mime::Mime>().ok()?;

        if m.type_() != mime::MULTIPART || m.subtype() != mime::FORM_DATA {
            return None;
        }

        let param = m.get_param(mime::BOUNDARY)?;
        let token = unquote(param.as_str());
        if token.is_empty() || token.len() > MAX_BOUNDARY_SIZE {
            return None;
        }

        Some(Self::new(token))
    }

    /// Gets the boundary token.
    #[must_use]
    pub fn token(&self) -> &[u8] {
        &self.delimiter[2..]
    }

    /// Gets the wire delimiter, `--` plus the token.
    pub(crate) fn delimiter(&self) -> &[u8] {
        &self.delimiter
    }
}

impl fmt::Debug for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boundary")
            .field("token", &String::from_utf8_lossy(self.token()))
            .finish()
    }
}
