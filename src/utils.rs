use http::header::{HeaderMap, HeaderName, HeaderValue};
use httparse::{parse_headers, Status, EMPTY_HEADER};

use crate::{Error, Result};

pub(crate) const MAX_HEADERS: usize = 8 * 2;
pub(crate) const DASHES: [u8; 2] = [b'-', b'-']; // `--`
pub(crate) const CRLF: [u8; 2] = [b'\r', b'\n']; // `\r\n`
pub(crate) const CRLFS: [u8; 4] = [b'\r', b'\n', b'\r', b'\n']; // `\r\n\r\n`

const FORM_DATA: &str = "form-data";
const NAME: &str = "name";
const FILE_NAME: &str = "filename";

pub(crate) fn parse_content_type(header: Option<&HeaderValue>) -> Option<mime::Mime> {
    header
        .map(HeaderValue::to_str)
        .and_then(Result::ok)
        .map(str::parse)
        .and_then(Result::ok)
}

pub(crate) fn parse_part_headers(bytes: &[u8]) -> Result<HeaderMap> {
    let mut headers = [EMPTY_HEADER; MAX_HEADERS];
    match parse_headers(bytes, &mut headers) {
        Ok(Status::Complete((_, hs))) => {
            let len = hs.len();
            let mut header_map = HeaderMap::with_capacity(len);
            for h in hs.iter().take(len) {
                header_map.append(
                    HeaderName::from_bytes(h.name.as_bytes()).map_err(|_| Error::InvalidHeader)?,
                    HeaderValue::from_bytes(h.value).map_err(|_| Error::InvalidHeader)?,
                );
            }
            Ok(header_map)
        }
        Ok(Status::Partial) | Err(_) => Err(Error::InvalidHeader),
    }
}

/// Splits a `Content-Disposition` value into the part's name and optional
/// filename. Parameters are `;`-separated `key=value` pairs, values may be
/// double-quoted. The disposition type must be `form-data` and `name` must
/// be present, its value may be empty.
pub(crate) fn parse_content_disposition(hv: &[u8]) -> Result<(String, Option<String>)> {
    let value = std::str::from_utf8(hv).map_err(|_| Error::InvalidContentDisposition)?;
    let mut params = value.split(';').map(str::trim);

    if params.next() != Some(FORM_DATA) {
        return Err(Error::InvalidContentDisposition);
    }

    let mut name = None;
    let mut filename = None;

    for param in params {
        let Some((key, val)) = param.split_once('=') else {
            continue;
        };
        let val = unquote(val.trim());
        match key.trim() {
            NAME => name = Some(val.to_owned()),
            FILE_NAME => filename = Some(val.to_owned()),
            _ => {}
        }
    }

    match name {
        Some(name) => Ok((name, filename)),
        None => Err(Error::InvalidContentDisposition),
    }
}

pub(crate) fn unquote(val: &str) -> &str {
    val.strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(val)
}
