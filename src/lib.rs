//! SmooAI File Properties Library for Rust.
//!
//! Properties of a file stored on a remote SMB-style share: content headers,
//! checksums, size, timestamps, server-side attributes, and property changes
//! staged for the next create or update call.
//!
//! # Overview
//!
//! - [`FileProperties`]: the property record. Server-reported fields are
//!   read-only; the permission key, NTFS attributes, creation time and
//!   last-write time read "staged value, else observed value" and write only
//!   the staged value.
//! - [`FilePropertiesBuilder`]: how a response parser fills in observed state.
//! - [`StageOptions`]: staging values from a local file or byte stream.
//!
//! # Examples
//!
//! ```
//! # use smooai_file_properties::{FilePropertiesBuilder, NtfsAttributes};
//! let mut props = FilePropertiesBuilder::new()
//!     .length(42)
//!     .content_type("text/plain")
//!     .observed_ntfs_attributes(NtfsAttributes::ARCHIVE)
//!     .build();
//!
//! props.set_ntfs_attributes(Some(NtfsAttributes::ARCHIVE | NtfsAttributes::READ_ONLY));
//! assert!(props.ntfs_attributes().unwrap().contains(NtfsAttributes::READ_ONLY));
//! assert_eq!(props.observed_ntfs_attributes(), Some(NtfsAttributes::ARCHIVE));
//! assert!(props.has_pending_changes());
//! ```

pub mod attributes;
pub mod builder;
pub mod checksum;
pub mod content_disposition;
pub mod detection;
pub mod error;
pub mod overlay;
pub mod properties;
pub mod stage;

// Re-export primary types at the crate root for convenience.
pub use crate::attributes::NtfsAttributes;
pub use crate::builder::FilePropertiesBuilder;
pub use crate::checksum::FileChecksum;
pub use crate::error::PropertiesError;
pub use crate::properties::{FileProperties, PendingChanges, UNKNOWN_LENGTH};
pub use crate::stage::StageOptions;

/// The crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
