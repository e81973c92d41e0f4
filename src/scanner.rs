use std::{fmt, ops::Range};

use memchr::memmem;
use tracing::{debug, trace};

use crate::{
    utils::{CRLF, CRLFS, DASHES},
    Boundary,
};

#[derive(Debug, PartialEq)]
enum Flag {
    Seeking,
    Opened(usize),
    Eof,
}

/// Byte ranges of one part within the scanned buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPart {
    /// The header block, terminating blank line included.
    pub headers: Range<usize>,
    /// The payload bytes, exactly as uploaded.
    pub body: Range<usize>,
}

/// Single-pass part locator over a fully buffered body.
///
/// Yields raw byte ranges, delimiters and the CRLF framing around them
/// excluded. Parts without a header terminator and parts still open at the
/// end of the buffer are dropped.
pub struct Scanner<'a> {
    buffer: &'a [u8],
    delimiter: &'a [u8],
    flag: Flag,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over a full body buffer.
    pub fn new(buffer: &'a [u8], boundary: &'a Boundary) -> Self {
        Self {
            buffer,
            delimiter: boundary.delimiter(),
            flag: Flag::Seeking,
        }
    }

    /// Finds the next delimiter occurrence that starts the buffer or follows
    /// a CRLF. Unanchored occurrences are payload bytes, they are stepped
    /// over.
    fn anchored_find(&self, mut from: usize) -> Option<usize> {
        loop {
            let window = self.buffer.get(from..)?;
            let at = from + memmem::find(window, self.delimiter)?;
            if at == 0 || (at >= 2 && self.buffer[at - 2..at] == CRLF) {
                return Some(at);
            }
            trace!("unanchored delimiter bytes at {}", at);
            from = at + 1;
        }
    }

    /// Transitions on the two bytes after a delimiter: CRLF opens the next
    /// part's header block, `--` closes the stream, anything else stops the
    /// scan.
    fn after_delimiter(&self, at: usize) -> Flag {
        let tail = at + self.delimiter.len();
        let Some(suffix) = self.buffer.get(tail..tail + 2) else {
            return Flag::Eof;
        };

        if suffix == CRLF {
            Flag::Opened(tail + 2)
        } else if suffix == DASHES {
            trace!("closing delimiter at {}", at);
            Flag::Eof
        } else {
            // we dont parse other formats, like `\n`
            debug!("junk after delimiter at {}, scan stopped", at);
            Flag::Eof
        }
    }

    /// Slices the open part into header and body ranges. The CRLF separating
    /// the payload from the next delimiter belongs to the wire, it stays out
    /// of the body.
    fn slice_part(&self, start: usize, end: usize) -> Option<RawPart> {
        let n = memmem::find(&self.buffer[start..end], &CRLFS)?;
        let header_end = start + n + CRLFS.len();
        let body_end = end.saturating_sub(CRLF.len()).max(header_end);

        Some(RawPart {
            headers: start..header_end,
            body: header_end..body_end,
        })
    }
}

impl Iterator for Scanner<'_> {
    type Item = RawPart;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.flag {
                Flag::Seeking => match self.anchored_find(0) {
                    Some(at) => {
                        trace!("first delimiter at {}", at);
                        self.flag = self.after_delimiter(at);
                    }
                    None => {
                        self.flag = Flag::Eof;
                    }
                },
                Flag::Opened(start) => {
                    let Some(at) = self.anchored_find(start) else {
                        debug!("part unterminated at end of buffer, dropped");
                        self.flag = Flag::Eof;
                        continue;
                    };

                    let part = self.slice_part(start, at);
                    self.flag = self.after_delimiter(at);

                    match part {
                        Some(part) => {
                            trace!("part headers {:?}, body {:?}", part.headers, part.body);
                            return Some(part);
                        }
                        None => debug!("part without header terminator, dropped"),
                    }
                }
                Flag::Eof => return None,
            }
        }
    }
}

impl fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("flag", &self.flag)
            .field("length", &self.buffer.len())
            .field("delimiter", &String::from_utf8_lossy(self.delimiter))
            .finish()
    }
}
