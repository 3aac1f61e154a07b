use std::time::Duration;

use anyhow::{Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Builds the HTTP client shared by every request in a run: one
/// browser-identifying user agent and one total timeout per request.
pub fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .context("failed to build HTTP client")
}

/// Fetches one URL and returns the decoded response body.
///
/// Non-2xx statuses are errors. Decoding honors the charset declared in
/// the `Content-Type` header; when no charset is declared the bytes are
/// sniffed instead, which guards against mojibake from servers that omit
/// charset metadata. The sniff is a best-effort guess and can be wrong;
/// a page that declares an incorrect charset is taken at its word.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request to '{}' failed", url))?;
    let response = response
        .error_for_status()
        .with_context(|| format!("'{}' returned an error status", url))?;

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());
    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("failed to read response body from '{}'", url))?;

    Ok(decode_body(&bytes, content_type.as_deref()))
}

/// Decodes a response body: declared charset wins, otherwise sniff.
fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = match content_type.and_then(charset_label) {
        Some(label) => Encoding::for_label(label.as_bytes()).unwrap_or(UTF_8),
        None => {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        }
    };

    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Pulls the charset parameter out of a `Content-Type` header value,
/// e.g. `text/html; charset=Shift_JIS` -> `shift_jis`.
fn charset_label(content_type: &str) -> Option<String> {
    let lowered = content_type.to_ascii_lowercase();
    let after = lowered.split("charset=").nth(1)?;
    let label = after
        .split(';')
        .next()
        .unwrap_or(after)
        .trim()
        .trim_matches('"');
    if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    }
}
