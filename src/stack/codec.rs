//! Shareable stack encoding.
//!
//! Format: `v1.<hex(deflate(payload))>.<checksum>` where `payload` is the id
//! sequence joined by newlines and `checksum` is the first 8 hex characters
//! of the payload's MD5 digest. Every character is URL-query safe.

use super::stack::Stack;
use crate::error::{GicmError, Result};
use crate::registry::definition::is_valid_slug;
use crate::registry::Registry;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::{Read, Write};

const VERSION: &str = "v1";
const CHECKSUM_LEN: usize = 8;
const MAX_PAYLOAD: usize = 1024 * 1024;

/// Encode a stack's id sequence into an opaque, order-preserving token.
///
/// Ids that are not slugs can never resolve against a registry and are left
/// out. Fails with `StackTooLarge` when the id payload exceeds the size
/// [`decode`] accepts.
pub fn encode(stack: &Stack) -> Result<String> {
    let ids: Vec<&str> = stack
        .ids()
        .iter()
        .map(String::as_str)
        .filter(|id| is_valid_slug(id))
        .collect();
    if ids.len() < stack.len() {
        tracing::debug!(skipped = stack.len() - ids.len(), "left non-slug ids out of token");
    }

    let payload = ids.join("\n");
    if payload.len() > MAX_PAYLOAD {
        return Err(GicmError::StackTooLarge {
            size: payload.len(),
            max: MAX_PAYLOAD,
        });
    }

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(payload.as_bytes())?;
    let compressed = encoder.finish()?;

    Ok(format!(
        "{}.{}.{}",
        VERSION,
        hex::encode(compressed),
        checksum(&payload)
    ))
}

/// Decode a token produced by [`encode`].
///
/// Structural problems fail with `MalformedStack`. Ids that do not resolve
/// against `registry` are dropped.
pub fn decode(token: &str, registry: &Registry) -> Result<Stack> {
    let ids = decode_ids(token)?;
    let mut stack = Stack::from_ids(ids);

    let dropped = stack.retain_resolvable(registry);
    if !dropped.is_empty() {
        tracing::debug!(?dropped, "dropped stack ids missing from registry");
    }

    Ok(stack)
}

/// Decode the raw id sequence without consulting a registry
pub fn decode_ids(token: &str) -> Result<Vec<String>> {
    let mut parts = token.trim().split('.');
    let (version, body, sum) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(v), Some(b), Some(s), None) => (v, b, s),
        _ => return Err(malformed("expected three dot-separated parts")),
    };

    if version != VERSION {
        return Err(malformed(format!("unsupported version '{}'", version)));
    }
    if sum.len() != CHECKSUM_LEN {
        return Err(malformed("bad checksum length"));
    }

    let compressed = hex::decode(body).map_err(|e| malformed(format!("bad hex body: {}", e)))?;

    let mut raw = Vec::new();
    DeflateDecoder::new(compressed.as_slice())
        .take(MAX_PAYLOAD as u64 + 1)
        .read_to_end(&mut raw)
        .map_err(|e| malformed(format!("bad payload: {}", e)))?;
    if raw.len() > MAX_PAYLOAD {
        return Err(malformed("payload too large"));
    }
    let payload = String::from_utf8(raw).map_err(|_| malformed("payload is not UTF-8"))?;

    if checksum(&payload) != sum {
        return Err(malformed("checksum mismatch"));
    }

    if payload.is_empty() {
        return Ok(Vec::new());
    }

    payload
        .split('\n')
        .map(|id| {
            if id.is_empty() {
                Err(malformed("empty item id"))
            } else {
                Ok(id.to_string())
            }
        })
        .collect()
}

fn checksum(payload: &str) -> String {
    let digest = format!("{:x}", md5::compute(payload.as_bytes()));
    digest[..CHECKSUM_LEN].to_string()
}

fn malformed(reason: impl Into<String>) -> GicmError {
    GicmError::MalformedStack(reason.into())
}
