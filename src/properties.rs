//! Properties of a remote share file.
//!
//! [`FileProperties`] is a snapshot of what the service last reported about a
//! file, plus any property changes staged locally for the next create or
//! update call.
//!
//! Four attributes (permission key, NTFS attributes, creation time and
//! last-write time) are held as [`Overlay`]s: reading them yields the staged
//! value when there is one, otherwise the observed one, and writing them only
//! ever stages. The observed state is written through
//! [`FilePropertiesBuilder`](crate::builder::FilePropertiesBuilder).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attributes::NtfsAttributes;
use crate::checksum::FileChecksum;
use crate::content_disposition::ContentDisposition;
use crate::error::{PropertiesError, Result};
use crate::overlay::Overlay;

/// Length value meaning the size is not known.
pub const UNKNOWN_LENGTH: i64 = -1;

fn unknown_length() -> i64 {
    UNKNOWN_LENGTH
}

/// Metadata and staged property updates for a share file.
///
/// # Examples
///
/// ```
/// # use smooai_file_properties::{FileProperties, FilePropertiesBuilder};
/// let mut props = FilePropertiesBuilder::new()
///     .observed_file_permission_key("B")
///     .build();
/// props.set_file_permission_key(Some("A".to_string()));
/// assert_eq!(props.file_permission_key(), Some("A"));
/// assert_eq!(props.observed_file_permission_key(), Some("B"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    cache_control: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    content_disposition: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    content_encoding: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    content_language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    content_type: Option<String>,

    #[serde(default)]
    checksum: FileChecksum,

    #[serde(default = "unknown_length")]
    pub(crate) length: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) e_tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified: Option<DateTime<Utc>>,

    #[serde(default)]
    pub(crate) is_server_encrypted: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) change_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) file_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) parent_id: Option<String>,

    #[serde(default)]
    pub(crate) file_permission_key: Overlay<String>,

    #[serde(default)]
    pub(crate) ntfs_attributes: Overlay<NtfsAttributes>,

    #[serde(default)]
    pub(crate) creation_time: Overlay<DateTime<Utc>>,

    #[serde(default)]
    pub(crate) last_write_time: Overlay<DateTime<Utc>>,
}

impl Default for FileProperties {
    fn default() -> Self {
        Self {
            cache_control: None,
            content_disposition: None,
            content_encoding: None,
            content_language: None,
            content_type: None,
            checksum: FileChecksum::new(),
            length: UNKNOWN_LENGTH,
            e_tag: None,
            last_modified: None,
            is_server_encrypted: false,
            change_time: None,
            file_id: None,
            parent_id: None,
            file_permission_key: Overlay::new(),
            ntfs_attributes: Overlay::new(),
            creation_time: Overlay::new(),
            last_write_time: Overlay::new(),
        }
    }
}

impl FileProperties {
    /// Creates empty properties with an unknown length.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies every field of `source`, observed and pending slots alike.
    ///
    /// Fails with [`PropertiesError::InvalidArgument`] when `source` is absent.
    pub fn try_clone_from(source: Option<&FileProperties>) -> Result<Self> {
        let source = source.ok_or_else(|| {
            PropertiesError::InvalidArgument("source properties must be provided".to_string())
        })?;
        tracing::debug!(
            pending = source.has_pending_changes(),
            "Cloning file properties"
        );
        Ok(source.clone())
    }

    // -----------------------------------------------------------------------
    // Content headers
    // -----------------------------------------------------------------------

    /// The Cache-Control value, if set.
    pub fn cache_control(&self) -> Option<&str> {
        self.cache_control.as_deref()
    }

    /// Sets or clears the Cache-Control value.
    pub fn set_cache_control(&mut self, value: Option<String>) {
        self.cache_control = value;
    }

    /// The Content-Disposition value, if set.
    pub fn content_disposition(&self) -> Option<&str> {
        self.content_disposition.as_deref()
    }

    /// Sets or clears the Content-Disposition value.
    pub fn set_content_disposition(&mut self, value: Option<String>) {
        self.content_disposition = value;
    }

    /// The filename carried by the Content-Disposition value, if any.
    pub fn content_disposition_filename(&self) -> Option<String> {
        self.content_disposition
            .as_deref()
            .and_then(ContentDisposition::parse)
            .and_then(|cd| cd.filename)
    }

    /// The Content-Encoding value, if set.
    pub fn content_encoding(&self) -> Option<&str> {
        self.content_encoding.as_deref()
    }

    /// Sets or clears the Content-Encoding value.
    pub fn set_content_encoding(&mut self, value: Option<String>) {
        self.content_encoding = value;
    }

    /// The Content-Language value, if set.
    pub fn content_language(&self) -> Option<&str> {
        self.content_language.as_deref()
    }

    /// Sets or clears the Content-Language value.
    pub fn set_content_language(&mut self, value: Option<String>) {
        self.content_language = value;
    }

    /// The content type (e.g., "text/plain"), if set.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Sets or clears the content type.
    pub fn set_content_type(&mut self, value: Option<String>) {
        self.content_type = value;
    }

    // -----------------------------------------------------------------------
    // Checksums
    // -----------------------------------------------------------------------

    /// The MD5 and CRC64 digests of the content.
    pub fn checksum(&self) -> &FileChecksum {
        &self.checksum
    }

    pub(crate) fn checksum_mut(&mut self) -> &mut FileChecksum {
        &mut self.checksum
    }

    /// The MD5 digest of the content, if known.
    pub fn content_md5(&self) -> Option<&[u8]> {
        self.checksum.md5()
    }

    /// Sets the MD5 digest. The CRC64 digest is left as is.
    pub fn set_content_md5(&mut self, value: Option<Vec<u8>>) {
        self.checksum.set_md5(value);
    }

    // -----------------------------------------------------------------------
    // Server-reported state
    // -----------------------------------------------------------------------

    /// Size in bytes, or [`UNKNOWN_LENGTH`].
    pub fn length(&self) -> i64 {
        self.length
    }

    /// Size in bytes, or `None` when unknown.
    pub fn known_length(&self) -> Option<u64> {
        u64::try_from(self.length).ok()
    }

    /// The entity tag the service reported.
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// When the service last modified the file.
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    /// Whether the service stores the content encrypted.
    pub fn is_server_encrypted(&self) -> bool {
        self.is_server_encrypted
    }

    /// When the file's properties last changed on the service.
    pub fn change_time(&self) -> Option<DateTime<Utc>> {
        self.change_time
    }

    /// The service-assigned file id.
    pub fn file_id(&self) -> Option<&str> {
        self.file_id.as_deref()
    }

    /// The service-assigned id of the parent directory.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    // -----------------------------------------------------------------------
    // Overlay attributes
    // -----------------------------------------------------------------------

    /// The staged permission key, else the one the service reported.
    pub fn file_permission_key(&self) -> Option<&str> {
        self.file_permission_key.get().map(String::as_str)
    }

    /// Stages a permission key. `None` drops a previously staged key.
    pub fn set_file_permission_key(&mut self, value: Option<String>) {
        tracing::debug!(?value, "Staging file permission key");
        self.file_permission_key.stage(value);
    }

    /// The permission key the service last reported.
    pub fn observed_file_permission_key(&self) -> Option<&str> {
        self.file_permission_key.observed_value().map(String::as_str)
    }

    /// The staged permission key, if any.
    pub fn pending_file_permission_key(&self) -> Option<&str> {
        self.file_permission_key.pending_value().map(String::as_str)
    }

    /// The staged attributes, else the ones the service reported.
    pub fn ntfs_attributes(&self) -> Option<NtfsAttributes> {
        self.ntfs_attributes.get_cloned()
    }

    /// Stages attributes. `None` drops previously staged attributes.
    pub fn set_ntfs_attributes(&mut self, value: Option<NtfsAttributes>) {
        tracing::debug!(?value, "Staging NTFS attributes");
        self.ntfs_attributes.stage(value);
    }

    /// The attributes the service last reported.
    pub fn observed_ntfs_attributes(&self) -> Option<NtfsAttributes> {
        self.ntfs_attributes.observed_value().copied()
    }

    /// The staged attributes, if any.
    pub fn pending_ntfs_attributes(&self) -> Option<NtfsAttributes> {
        self.ntfs_attributes.pending_value().copied()
    }

    /// The staged creation time, else the one the service reported.
    pub fn creation_time(&self) -> Option<DateTime<Utc>> {
        self.creation_time.get_cloned()
    }

    /// Stages a creation time. `None` drops a previously staged time.
    pub fn set_creation_time(&mut self, value: Option<DateTime<Utc>>) {
        tracing::debug!(?value, "Staging creation time");
        self.creation_time.stage(value);
    }

    /// The creation time the service last reported.
    pub fn observed_creation_time(&self) -> Option<DateTime<Utc>> {
        self.creation_time.observed_value().copied()
    }

    /// The staged creation time, if any.
    pub fn pending_creation_time(&self) -> Option<DateTime<Utc>> {
        self.creation_time.pending_value().copied()
    }

    /// The staged last-write time, else the one the service reported.
    pub fn last_write_time(&self) -> Option<DateTime<Utc>> {
        self.last_write_time.get_cloned()
    }

    /// Stages a last-write time. `None` drops a previously staged time.
    pub fn set_last_write_time(&mut self, value: Option<DateTime<Utc>>) {
        tracing::debug!(?value, "Staging last write time");
        self.last_write_time.stage(value);
    }

    /// The last-write time the service last reported.
    pub fn observed_last_write_time(&self) -> Option<DateTime<Utc>> {
        self.last_write_time.observed_value().copied()
    }

    /// The staged last-write time, if any.
    pub fn pending_last_write_time(&self) -> Option<DateTime<Utc>> {
        self.last_write_time.pending_value().copied()
    }

    // -----------------------------------------------------------------------
    // Pending changes
    // -----------------------------------------------------------------------

    /// Returns true if any overlay attribute has a staged value.
    pub fn has_pending_changes(&self) -> bool {
        self.file_permission_key.has_pending()
            || self.ntfs_attributes.has_pending()
            || self.creation_time.has_pending()
            || self.last_write_time.has_pending()
    }

    /// An owned copy of every staged overlay value.
    pub fn pending_changes(&self) -> PendingChanges {
        PendingChanges {
            file_permission_key: self.file_permission_key.pending_value().cloned(),
            ntfs_attributes: self.pending_ntfs_attributes(),
            creation_time: self.pending_creation_time(),
            last_write_time: self.pending_last_write_time(),
        }
    }

    /// Drops every staged overlay value. Observed values are untouched.
    ///
    /// Nothing calls this implicitly; the owner decides when staged values
    /// have been committed.
    pub fn discard_pending_changes(&mut self) {
        tracing::debug!("Discarding pending property changes");
        self.file_permission_key.discard_pending();
        self.ntfs_attributes.discard_pending();
        self.creation_time.discard_pending();
        self.last_write_time.discard_pending();
    }

    /// Returns a JSON string representation of the properties.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl std::fmt::Display for FileProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

/// The overlay values staged for the next create or update call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_permission_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntfs_attributes: Option<NtfsAttributes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_write_time: Option<DateTime<Utc>>,
}

impl PendingChanges {
    /// Returns true if nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.file_permission_key.is_none()
            && self.ntfs_attributes.is_none()
            && self.creation_time.is_none()
            && self.last_write_time.is_none()
    }
}
