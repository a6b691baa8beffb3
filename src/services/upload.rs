//! HTTP service for uploading fundraiser documents to the storage backend.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::types::{AppError, AppResult};

/// What a single upload sends to the storage backend.
///
/// The payload stays binary end-to-end; the backend decides how to
/// interpret the bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct PutRequest {
    /// Storage key, taken verbatim from the form's name field.
    pub name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// Receipt returned by the storage backend after a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutReceipt {
    /// Key the object was stored under.
    pub key: String,
    /// Stored size in bytes.
    pub size: usize,
    /// Entity tag, when the backend computes one.
    #[serde(default)]
    pub etag: Option<String>,
}

/// Read a file's entire contents into memory.
pub async fn read_file_bytes(file: &File) -> AppResult<Vec<u8>> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| AppError::Upload(format!("Failed to read file: {:?}", e)))?;

    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Upload one object to the storage backend.
pub async fn put_object(request: &PutRequest, storage_url: &str) -> AppResult<PutReceipt> {
    let key = String::from(js_sys::encode_uri_component(&request.name));
    let url = format!("{}/api/objects/{}", storage_url, key);

    let body = js_sys::Uint8Array::from(request.bytes.as_slice());
    let response = Request::put(&url)
        .header("content-type", "application/octet-stream")
        .body(body)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Upload(format!(
            "Server error ({}): {}",
            response.status(),
            error_text
        )));
    }

    response
        .json::<PutReceipt>()
        .await
        .map_err(|e| AppError::Upload(format!("Failed to parse receipt: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_deserialization() {
        let json = r#"{
            "key": "impact-report.pdf",
            "size": 48213,
            "etag": "\"9bb58f26192e4ba00f01e2e7b136bbd8\""
        }"#;

        let result: Result<PutReceipt, _> = serde_json::from_str(json);
        assert!(result.is_ok());

        let receipt = result.unwrap();
        assert_eq!(receipt.key, "impact-report.pdf");
        assert_eq!(receipt.size, 48213);
        assert!(receipt.etag.is_some());
    }

    #[test]
    fn test_receipt_without_etag() {
        let json = r#"{"key": "a", "size": 0}"#;

        let receipt: PutReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.etag, None);
    }
}
