//! Content checksums for a share file.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

/// MD5 and CRC64 digests of a file's content. Either may be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChecksum {
    #[serde(skip_serializing_if = "Option::is_none")]
    md5: Option<Vec<u8>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    crc64: Option<Vec<u8>>,
}

impl FileChecksum {
    /// Creates a checksum with both digests unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn md5(&self) -> Option<&[u8]> {
        self.md5.as_deref()
    }

    pub fn crc64(&self) -> Option<&[u8]> {
        self.crc64.as_deref()
    }

    /// Sets the MD5 digest. The CRC64 digest is left as is.
    pub fn set_md5(&mut self, md5: Option<Vec<u8>>) {
        self.md5 = md5;
    }

    /// CRC64 is only ever reported by the service.
    pub(crate) fn set_crc64(&mut self, crc64: Option<Vec<u8>>) {
        self.crc64 = crc64;
    }

    /// Returns true if neither digest is set.
    pub fn is_empty(&self) -> bool {
        self.md5.is_none() && self.crc64.is_none()
    }

    /// The MD5 digest rendered as a `Content-MD5` style base64 string.
    pub fn md5_base64(&self) -> Option<String> {
        self.md5.as_ref().map(|d| STANDARD.encode(d))
    }

    /// The MD5 digest rendered as lowercase hex.
    pub fn md5_hex(&self) -> Option<String> {
        self.md5.as_ref().map(hex::encode)
    }

    /// Calculate the MD5 digest of `data`.
    pub fn compute_md5(data: &[u8]) -> Vec<u8> {
        let mut hasher = Md5::new();
        hasher.update(data);
        hasher.finalize().to_vec()
    }
}

/// Incremental MD5 over content that arrives in chunks.
#[derive(Debug, Clone, Default)]
pub struct Md5Accumulator {
    hasher: Md5,
    len: u64,
}

impl Md5Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, chunk: &[u8]) {
        self.hasher.update(chunk);
        self.len += chunk.len() as u64;
    }

    /// Number of bytes hashed so far.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn finish(self) -> Vec<u8> {
        self.hasher.finalize().to_vec()
    }
}
