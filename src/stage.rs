//! Staging property changes from local content.
//!
//! Before uploading a local file to a share, callers usually want the remote
//! copy to carry the local timestamps, attributes, content type and MD5. These
//! helpers stage those values on a [`FileProperties`]; nothing observed is
//! written.

use std::path::Path;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use tokio::io::AsyncReadExt;

use crate::attributes::NtfsAttributes;
use crate::checksum::Md5Accumulator;
use crate::detection::detect_content_type;
use crate::error::{PropertiesError, Result};
use crate::properties::FileProperties;

/// Bytes kept from the start of a stream for content-type detection.
const DETECTION_HEAD_LEN: usize = 4096;

const READ_CHUNK_LEN: usize = 64 * 1024;

/// Which values to stage from a local source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageOptions {
    /// Compute and set the content MD5.
    pub compute_md5: bool,
    /// Detect and set the content type when none is set yet.
    pub detect_content_type: bool,
    /// Stage the local creation and last-write times.
    pub preserve_timestamps: bool,
    /// Stage attributes derived from the local file.
    pub preserve_attributes: bool,
}

impl Default for StageOptions {
    fn default() -> Self {
        Self {
            compute_md5: true,
            detect_content_type: true,
            preserve_timestamps: true,
            preserve_attributes: true,
        }
    }
}

impl FileProperties {
    /// Stage properties from a file on the local filesystem.
    ///
    /// The file is read in chunks before anything is staged, so a failed call
    /// leaves `self` untouched. Directories are rejected with
    /// [`PropertiesError::InvalidArgument`].
    pub async fn stage_from_local_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        options: &StageOptions,
    ) -> Result<()> {
        let path = path.as_ref();
        let fs_meta = tokio::fs::metadata(path).await?;
        if fs_meta.is_dir() {
            return Err(PropertiesError::InvalidArgument(format!(
                "cannot stage file properties from directory: {}",
                path.display()
            )));
        }

        let content = if options.compute_md5 || options.detect_content_type {
            Some(read_local_content(path).await?)
        } else {
            None
        };

        if options.preserve_timestamps {
            // Not every platform reports a creation time.
            if let Ok(created) = fs_meta.created() {
                self.set_creation_time(Some(DateTime::<Utc>::from(created)));
            }
            if let Ok(modified) = fs_meta.modified() {
                self.set_last_write_time(Some(DateTime::<Utc>::from(modified)));
            }
        }

        if options.preserve_attributes {
            let mut attributes = NtfsAttributes::ARCHIVE;
            if fs_meta.permissions().readonly() {
                attributes.insert(NtfsAttributes::READ_ONLY);
            }
            self.set_ntfs_attributes(Some(attributes));
        }

        if let Some(content) = content {
            if options.compute_md5 {
                self.set_content_md5(Some(content.md5));
            }
            if options.detect_content_type && self.content_type().is_none() {
                let name = path.file_name().and_then(|n| n.to_str());
                self.set_content_type(detect_content_type(&content.head, name));
            }
        }

        tracing::info!(
            path = %path.display(),
            size = fs_meta.len(),
            content_type = ?self.content_type(),
            pending = ?self.pending_changes(),
            "Staged file properties from local file"
        );

        Ok(())
    }

    /// Stage content MD5 and content type from an async byte stream.
    ///
    /// The stream is consumed chunk by chunk; only its first few kilobytes are
    /// buffered. Returns the number of bytes read.
    pub async fn stage_from_stream<S>(
        &mut self,
        mut stream: S,
        filename: Option<&str>,
        options: &StageOptions,
    ) -> Result<u64>
    where
        S: futures::Stream<Item = std::result::Result<Bytes, std::io::Error>> + Unpin,
    {
        let mut md5 = Md5Accumulator::new();
        let mut head = Vec::new();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if head.len() < DETECTION_HEAD_LEN {
                let take = chunk.len().min(DETECTION_HEAD_LEN - head.len());
                head.extend_from_slice(&chunk[..take]);
            }
            md5.update(&chunk);
        }

        let size = md5.len();
        if options.compute_md5 {
            self.set_content_md5(Some(md5.finish()));
        }
        if options.detect_content_type && self.content_type().is_none() {
            self.set_content_type(detect_content_type(&head, filename));
        }

        tracing::info!(
            size,
            filename = ?filename,
            content_type = ?self.content_type(),
            "Staged file properties from stream"
        );

        Ok(size)
    }
}

/// Digest and leading bytes of a local file.
struct LocalContent {
    md5: Vec<u8>,
    head: Vec<u8>,
}

async fn read_local_content(path: &Path) -> Result<LocalContent> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut buf = vec![0u8; READ_CHUNK_LEN];
    let mut md5 = Md5Accumulator::new();
    let mut head = Vec::new();

    loop {
        let n = file.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        let chunk = &buf[..n];
        if head.len() < DETECTION_HEAD_LEN {
            let take = n.min(DETECTION_HEAD_LEN - head.len());
            head.extend_from_slice(&chunk[..take]);
        }
        md5.update(chunk);
    }

    tracing::debug!(path = %path.display(), size = md5.len(), "Read local content");

    Ok(LocalContent {
        md5: md5.finish(),
        head,
    })
}
