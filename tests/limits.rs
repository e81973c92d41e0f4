//!
//! ```
//! RUST_LOG=trace cargo test --test limits -- --nocapture
//! ```

use anyhow::Result;

use multipart_buffer::{Error, Limits};

#[test]
fn default_is_100kb() -> Result<()> {
    let limits = Limits::default();

    assert_eq!(limits.body_size, 100 * 1024);
    assert_eq!(limits.checked_body_size(100 * 1024), None);
    assert_eq!(limits.checked_body_size(100 * 1024 + 1), Some(100 * 1024));

    Ok(())
}

#[test]
fn parses_human_readable_sizes() -> Result<()> {
    assert_eq!("100".parse::<Limits>()?.body_size, 100);
    assert_eq!("512b".parse::<Limits>()?.body_size, 512);
    assert_eq!("1kb".parse::<Limits>()?.body_size, 1024);
    assert_eq!("1.5kb".parse::<Limits>()?.body_size, 1536);
    assert_eq!("15mb".parse::<Limits>()?.body_size, 15 * 1024 * 1024);
    assert_eq!("1gb".parse::<Limits>()?.body_size, 1024 * 1024 * 1024);
    assert_eq!("2KB".parse::<Limits>()?.body_size, 2048);
    assert_eq!(" 10 kb ".parse::<Limits>()?.body_size, 10 * 1024);

    Ok(())
}

#[test]
fn rejects_bad_sizes() -> Result<()> {
    for s in ["", "kb", "abc", "12xyz", "-1kb", "1..5kb"] {
        assert!(
            matches!(s.parse::<Limits>(), Err(Error::InvalidSizeLimit(_))),
            "{:?} should not parse",
            s
        );
    }

    Ok(())
}

#[test]
fn guards_buffered_bodies() -> Result<()> {
    // a 15mb limit lets a body of exactly 15MB through
    let limits = "15mb".parse::<Limits>()?;
    assert_eq!(limits.checked_body_size(15 * 1024 * 1024), None);

    // a 1kb limit rejects a 2KB body
    let limits = "1kb".parse::<Limits>()?;
    let max = limits.checked_body_size(2 * 1024);
    assert_eq!(max, Some(1024));

    let e = Error::PayloadTooLarge(1024);
    assert_eq!(e.to_string(), "payload is too large, limit to `1024`");

    Ok(())
}

#[test]
fn builder_overrides() -> Result<()> {
    let limits = Limits::default().body_size(5);

    assert_eq!(limits.checked_body_size(6), Some(5));
    assert_eq!(limits.checked_body_size(5), None);

    Ok(())
}
