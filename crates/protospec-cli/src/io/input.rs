use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use url::Url;

use protospec_core::model::ProtoDocument;

/// Resolve a document argument (local file path or http(s) URL) into a
/// decoded document.
pub async fn resolve_document(input: &str) -> Result<ProtoDocument> {
    let value = resolve_to_json(input).await?;
    ProtoDocument::from_json(value).map_err(|e| anyhow!("{input}: {e}"))
}

pub async fn resolve_to_json(input: &str) -> Result<serde_json::Value> {
    if looks_like_url(input) {
        return fetch_url_json(input).await;
    }
    read_json_file(input)
}

pub fn read_json_file<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let raw = fs::read_to_string(path.as_ref())
        .map_err(|e| anyhow!("{}: {e}", path.as_ref().display()))?;
    let v: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| anyhow!("invalid json: {e}"))?;
    Ok(v)
}

async fn fetch_url_json(url: &str) -> Result<serde_json::Value> {
    let resp = reqwest::get(url).await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(anyhow!("http error: {status}"));
    }
    let v = resp.json::<serde_json::Value>().await?;
    Ok(v)
}

fn looks_like_url(s: &str) -> bool {
    Url::parse(s)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_not_urls() {
        assert!(!looks_like_url("specs/orders.json"));
        assert!(!looks_like_url("/tmp/orders.json"));
    }

    #[test]
    fn http_urls_are_detected() {
        assert!(looks_like_url("https://example.com/spec.json"));
        assert!(looks_like_url("http://localhost:3000/spec.json"));
        assert!(!looks_like_url("ftp://example.com/spec.json"));
    }
}
