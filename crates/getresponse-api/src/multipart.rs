// Hand-built multipart body for `POST multimedia/`.
//
// The multimedia endpoint's parser expects this exact layout (fixed
// boundary, `attributes` part first, `file` part second), so the body is
// assembled byte by byte rather than through reqwest's multipart builder.

use std::path::Path;

use bytes::Bytes;

use crate::error::Error;

/// Boundary token shared by every upload.
pub const BOUNDARY: &str = "labnol";

/// File content plus the name and content type to upload it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    name: String,
    content_type: String,
    bytes: Bytes,
}

impl Blob {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk. The display name is the file name and the
    /// content type is guessed from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();
        Ok(Self::new(name, content_type, bytes))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// `Content-Type` header value for upload requests.
pub fn content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

/// Assemble the multipart body: a JSON `attributes` part carrying the
/// display name, then the `file` part with the raw bytes, then the closing
/// boundary.
pub fn encode_body(blob: &Blob) -> Vec<u8> {
    let attributes = serde_json::json!({ "name": blob.name }).to_string();

    let head = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"attributes\"\r\n\r\n\
         {attributes}\r\n\
         --{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{name}\"\r\n\
         Content-Type: {content_type}\r\n\r\n",
        name = blob.name,
        content_type = blob.content_type,
    );
    let tail = format!("\r\n--{BOUNDARY}--\r\n");

    let mut body = Vec::with_capacity(head.len() + blob.bytes.len() + tail.len());
    body.extend_from_slice(head.as_bytes());
    body.extend_from_slice(&blob.bytes);
    body.extend_from_slice(tail.as_bytes());
    body
}
