use std::{env, fs::File, io::Cursor, io::Read, io::Write, sync::Arc, thread::spawn};

use anyhow::Result;
use multipart_buffer::{Error, FormData, Limits};
use tempfile::tempdir;
use tiny_http::{Header, Response, Server};

fn hello(
    limits: &Limits,
    content_type: &str,
    reader: &mut dyn Read,
) -> Result<Response<Cursor<Vec<u8>>>> {
    let mut body = Vec::new();
    reader.read_to_end(&mut body)?;

    if let Some(max) = limits.checked_body_size(body.len()) {
        let e = Error::PayloadTooLarge(max);
        tracing::info!("{}", e);
        return Ok(Response::from_string(e.to_string()).with_status_code(413));
    }

    let form = FormData::parse(content_type, body);

    let dir = tempdir()?;
    let mut txt = String::new();

    txt.push_str(&dir.path().to_string_lossy());
    txt.push_str("\r\n");

    for (name, value) in &form.fields {
        tracing::info!("text {} {}", name, value.len());
        txt.push_str(&format!("text {} {}\r\n", name, value.len()));
    }

    for (name, file) in &form.files {
        if !file.filename.is_empty() {
            let filepath = dir.path().join(&file.filename);
            let mut writer = File::create(&filepath)?;
            writer.write_all(&file.data)?;
            writer.flush()?;
        }

        tracing::info!("file {} {}", name, file.data.len());
        txt.push_str(&format!("file {} {} {}\r\n", name, file.filename, file.data.len()));
    }

    dir.close()?;

    Ok(Response::from_string(txt))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        // From env var: `RUST_LOG`
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut arg = env::args()
        .find(|a| a.starts_with("--limit="))
        .unwrap_or_else(|| "--limit=100kb".to_string());

    // `100kb`
    // `15mb`
    let limits = arg.split_off(8).parse::<Limits>()?;
    let server = Arc::new(Server::http("0.0.0.0:3000").unwrap());
    println!("Now listening on port 3000");

    for mut request in server.incoming_requests() {
        let limits = limits.clone();
        spawn(move || {
            let content_type = request
                .headers()
                .iter()
                .find(|h: &&Header| h.field.equiv("Content-Type"))
                .map(|h| h.value.to_string())
                .unwrap_or_default();
            let reader = request.as_reader();
            let response = hello(&limits, &content_type, reader).unwrap();
            let _ = request.respond(response);
        });
    }

    Ok(())
}
