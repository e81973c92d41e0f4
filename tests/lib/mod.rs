#![allow(dead_code)]

use rand::RngCore;

pub fn tracing_init() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        // From env var: `RUST_LOG`
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

/// One-file multipart body with the given boundary token.
pub fn file_body(
    token: &str,
    name: &str,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", token).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            name, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", token).as_bytes());
    body
}

/// Random payload salted with CRLF and dash runs, the byte patterns a
/// delimiter scan trips over.
pub fn adversarial_payload(len: usize) -> Vec<u8> {
    let mut data = vec![0; len];
    rand::thread_rng().fill_bytes(&mut data);

    let mut at = 97;
    while at + 8 <= data.len() {
        data[at..at + 8].copy_from_slice(b"\r\n------");
        at += 997;
    }

    data
}
