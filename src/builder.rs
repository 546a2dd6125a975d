//! Trusted construction of [`FileProperties`] from service responses.
//!
//! Server-reported fields have no setters on [`FileProperties`]. The layer
//! that parses service responses fills them in here and hands the result to
//! callers, who can then only stage changes on top.

use chrono::{DateTime, Utc};

use crate::attributes::NtfsAttributes;
use crate::properties::FileProperties;

/// Builds [`FileProperties`] holding observed state and nothing staged.
#[derive(Debug, Clone, Default)]
pub struct FilePropertiesBuilder {
    props: FileProperties,
}

impl FilePropertiesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(mut self, length: i64) -> Self {
        self.props.length = length;
        self
    }

    pub fn e_tag(mut self, e_tag: impl Into<String>) -> Self {
        self.props.e_tag = Some(e_tag.into());
        self
    }

    pub fn last_modified(mut self, at: DateTime<Utc>) -> Self {
        self.props.last_modified = Some(at);
        self
    }

    pub fn server_encrypted(mut self, encrypted: bool) -> Self {
        self.props.is_server_encrypted = encrypted;
        self
    }

    pub fn change_time(mut self, at: DateTime<Utc>) -> Self {
        self.props.change_time = Some(at);
        self
    }

    pub fn file_id(mut self, id: impl Into<String>) -> Self {
        self.props.file_id = Some(id.into());
        self
    }

    pub fn parent_id(mut self, id: impl Into<String>) -> Self {
        self.props.parent_id = Some(id.into());
        self
    }

    pub fn cache_control(mut self, value: impl Into<String>) -> Self {
        self.props.set_cache_control(Some(value.into()));
        self
    }

    pub fn content_disposition(mut self, value: impl Into<String>) -> Self {
        self.props.set_content_disposition(Some(value.into()));
        self
    }

    pub fn content_encoding(mut self, value: impl Into<String>) -> Self {
        self.props.set_content_encoding(Some(value.into()));
        self
    }

    pub fn content_language(mut self, value: impl Into<String>) -> Self {
        self.props.set_content_language(Some(value.into()));
        self
    }

    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.props.set_content_type(Some(value.into()));
        self
    }

    pub fn content_md5(mut self, digest: Vec<u8>) -> Self {
        self.props.set_content_md5(Some(digest));
        self
    }

    pub fn content_crc64(mut self, digest: Vec<u8>) -> Self {
        self.props.checksum_mut().set_crc64(Some(digest));
        self
    }

    pub fn observed_file_permission_key(mut self, key: impl Into<String>) -> Self {
        self.props.file_permission_key.set_observed(Some(key.into()));
        self
    }

    pub fn observed_ntfs_attributes(mut self, attributes: NtfsAttributes) -> Self {
        self.props.ntfs_attributes.set_observed(Some(attributes));
        self
    }

    pub fn observed_creation_time(mut self, at: DateTime<Utc>) -> Self {
        self.props.creation_time.set_observed(Some(at));
        self
    }

    pub fn observed_last_write_time(mut self, at: DateTime<Utc>) -> Self {
        self.props.last_write_time.set_observed(Some(at));
        self
    }

    pub fn build(self) -> FileProperties {
        tracing::trace!(props = ?self.props, "Built file properties");
        self.props
    }
}
