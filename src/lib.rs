//! Buffered `multipart/form-data` extraction, after [rfc7578].
//!
//! Takes a request's `Content-Type` header and its fully buffered body,
//! gives back the plain fields and the uploaded files found in it. One pass,
//! no I/O, payload bytes stay views into the original buffer.
//!
//! # Example
//!
//! ```rust
//! use multipart_buffer::FormData;
//!
//! let body = concat!(
//!     "--AaB03x\r\n",
//!     "Content-Disposition: form-data; name=\"title\"\r\n",
//!     "\r\n",
//!     "lorem\r\n",
//!     "--AaB03x\r\n",
//!     "Content-Disposition: form-data; name=\"doc\"; filename=\"notes.txt\"\r\n",
//!     "Content-Type: text/plain\r\n",
//!     "\r\n",
//!     "Hello world!\r\n",
//!     "--AaB03x--\r\n",
//! );
//!
//! let form = FormData::parse("multipart/form-data; boundary=AaB03x", body);
//!
//! assert_eq!(form.fields["title"], "lorem");
//!
//! let doc = &form.files["doc"];
//! assert_eq!(doc.filename, "notes.txt");
//! assert_eq!(doc.extension, "txt");
//! assert_eq!(doc.content_type, Some(mime::TEXT_PLAIN));
//! assert_eq!(doc.data.as_ref(), b"Hello world!");
//! ```
//!
//! [rfc7578]: <https://tools.ietf.org/html/rfc7578>

#![forbid(unsafe_code)]
#![deny(nonstandard_style)]
#![warn(missing_docs, rustdoc::missing_doc_code_examples, unreachable_pub)]

mod boundary;
mod error;
mod field;
mod form;
mod limits;
mod scanner;
mod utils;

pub use form::FormData;

pub use field::{FileEntry, PartHeaders};

pub use scanner::{RawPart, Scanner};

pub use boundary::Boundary;

pub use limits::Limits;

pub use error::Error;

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;
