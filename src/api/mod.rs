// SPDX-License-Identifier: MPL-2.0
//! Client for the remote cat image service.
//!
//! One fetch is two requests: a `GET` to the search endpoint which returns a
//! JSON array of image records, then a `GET` for the bytes of the first
//! record's `url`. The bytes are validated as a decodable image format before
//! being handed to the renderer, so an HTML error page served with a 200
//! never reaches the image widget.

use crate::error::ApiError;
use iced::widget::image;
use serde::Deserialize;

/// Default search endpoint. One call returns one random image record.
pub const DEFAULT_API_URL: &str = "https://api.thecatapi.com/v1/images/search";

const USER_AGENT: &str = concat!("MeowMatch/", env!("CARGO_PKG_VERSION"));

/// Upper bound on a single image payload. The service serves photos of a few
/// MB; anything beyond this is a misbehaving response, not a cat.
const MAX_IMAGE_BYTES: u64 = 32 * 1024 * 1024;

/// One record of the search endpoint's JSON array. Only `url` is guaranteed;
/// the remaining fields are present for most records but not committed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// A fetched cat ready for display: the remote record plus the decoded
/// widget handle for its image bytes.
#[derive(Debug, Clone)]
pub struct CatCard {
    pub record: CatRecord,
    pub handle: image::Handle,
}

fn client() -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Fetches one random cat: record from the search endpoint, then the image
/// bytes behind it. This is the single network operation of the application;
/// the caller (the update loop) ensures at most one is in flight at a time.
pub async fn fetch_card(api_url: String) -> Result<CatCard, ApiError> {
    let client = client()?;
    let record = fetch_record(&client, &api_url).await?;
    let bytes = fetch_image_bytes(&client, &record.url).await?;

    if image_rs::guess_format(&bytes).is_err() {
        return Err(ApiError::NotAnImage(record.url.clone()));
    }

    Ok(CatCard {
        handle: image::Handle::from_bytes(bytes),
        record,
    })
}

async fn fetch_record(client: &reqwest::Client, api_url: &str) -> Result<CatRecord, ApiError> {
    let response = client.get(api_url).send().await?;

    if !response.status().is_success() {
        return Err(ApiError::HttpStatus(response.status().as_u16()));
    }

    let records: Vec<CatRecord> = response
        .json()
        .await
        .map_err(|e| ApiError::MalformedPayload(e.to_string()))?;

    records.into_iter().next().ok_or(ApiError::EmptyResponse)
}

async fn fetch_image_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, ApiError> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(ApiError::HttpStatus(response.status().as_u16()));
    }

    if let Some(total) = response.content_length() {
        if total > MAX_IMAGE_BYTES {
            return Err(ApiError::PayloadTooLarge(total));
        }
    }

    collect_limited(response.bytes_stream()).await
}

/// Accumulates a chunked body, aborting once the size cap is crossed. The
/// content-length check above is advisory; this is the enforced bound for
/// chunked or lying responses.
async fn collect_limited<S, B, E>(stream: S) -> Result<Vec<u8>, ApiError>
where
    S: futures_util::Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    use futures_util::StreamExt;

    futures_util::pin_mut!(stream);
    let mut bytes = Vec::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| ApiError::Network(e.to_string()))?;
        bytes.extend_from_slice(chunk.as_ref());

        if bytes.len() as u64 > MAX_IMAGE_BYTES {
            return Err(ApiError::PayloadTooLarge(bytes.len() as u64));
        }
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_minimal_payload() {
        let records: Vec<CatRecord> =
            serde_json::from_str(r#"[{"url":"https://x/1.jpg"}]"#).expect("should parse");
        assert_eq!(records[0].url, "https://x/1.jpg");
        assert!(records[0].id.is_none());
        assert!(records[0].width.is_none());
    }

    #[test]
    fn record_parses_full_payload() {
        let json = r#"[{"id":"abc","url":"https://x/2.jpg","width":640,"height":480}]"#;
        let records: Vec<CatRecord> = serde_json::from_str(json).expect("should parse");
        assert_eq!(records[0].id.as_deref(), Some("abc"));
        assert_eq!(records[0].width, Some(640));
        assert_eq!(records[0].height, Some(480));
    }

    #[test]
    fn record_rejects_missing_url() {
        let result: Result<Vec<CatRecord>, _> = serde_json::from_str(r#"[{"id":"abc"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_array_parses_to_no_records() {
        let records: Vec<CatRecord> = serde_json::from_str("[]").expect("should parse");
        assert!(records.is_empty());
    }

    #[test]
    fn non_image_bytes_are_rejected_by_format_guess() {
        let html = b"<html><body>rate limited</body></html>";
        assert!(image_rs::guess_format(html).is_err());
    }

    #[test]
    fn png_magic_passes_format_guess() {
        // Minimal PNG signature is enough for format detection.
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(image_rs::guess_format(&png).is_ok());
    }

    fn ok_chunks(count: usize, chunk_len: usize) -> Vec<std::result::Result<Vec<u8>, String>> {
        (0..count).map(|_| Ok(vec![0u8; chunk_len])).collect()
    }

    #[tokio::test]
    async fn collect_limited_preserves_chunk_order() {
        let chunks: Vec<std::result::Result<Vec<u8>, String>> =
            vec![Ok(vec![1, 2]), Ok(vec![3]), Ok(vec![4, 5])];
        let bytes = collect_limited(futures_util::stream::iter(chunks))
            .await
            .expect("small body should collect");
        assert_eq!(bytes, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected_mid_stream() {
        // 33 chunks of 1 MB cross the 32 MB cap on the last chunk.
        let result = collect_limited(futures_util::stream::iter(ok_chunks(33, 1024 * 1024))).await;
        assert!(matches!(result, Err(ApiError::PayloadTooLarge(n)) if n > MAX_IMAGE_BYTES));
    }

    #[tokio::test]
    async fn body_at_the_cap_is_accepted() {
        let result = collect_limited(futures_util::stream::iter(ok_chunks(32, 1024 * 1024))).await;
        assert_eq!(result.map(|b| b.len() as u64), Ok(MAX_IMAGE_BYTES));
    }

    #[tokio::test]
    async fn failed_chunk_surfaces_as_network_error() {
        let chunks: Vec<std::result::Result<Vec<u8>, String>> =
            vec![Ok(vec![1]), Err("connection reset".to_string())];
        let result = collect_limited(futures_util::stream::iter(chunks)).await;
        assert!(matches!(result, Err(ApiError::Network(msg)) if msg.contains("connection reset")));
    }
}
