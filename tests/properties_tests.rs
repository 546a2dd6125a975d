//! Integration tests for FileProperties.

use chrono::{DateTime, TimeZone, Utc};
use smooai_file_properties::{
    FileProperties, FilePropertiesBuilder, NtfsAttributes, PropertiesError, UNKNOWN_LENGTH,
};

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn fetched() -> FileProperties {
    FilePropertiesBuilder::new()
        .length(42)
        .e_tag("\"0x8DC\"")
        .content_type("text/plain")
        .content_md5(vec![0xAB; 16])
        .content_crc64(vec![0xCD; 8])
        .observed_file_permission_key("B")
        .observed_ntfs_attributes(NtfsAttributes::ARCHIVE)
        .observed_creation_time(at(2024, 1, 1))
        .observed_last_write_time(at(2024, 1, 2))
        .build()
}

#[test]
fn test_empty_properties() {
    let p = FileProperties::new();
    assert_eq!(p.length(), UNKNOWN_LENGTH);
    assert!(p.content_type().is_none());
    assert!(p.content_md5().is_none());
    assert!(p.file_permission_key().is_none());
    assert!(p.pending_changes().is_empty());
}

#[test]
fn test_clone_of_absent_source_fails() {
    let result = FileProperties::try_clone_from(None);
    assert!(matches!(result, Err(PropertiesError::InvalidArgument(_))));
}

#[test]
fn test_clone_is_deep_and_independent() {
    let mut source = fetched();
    source.set_file_permission_key(Some("A".to_string()));
    source.set_last_write_time(Some(at(2025, 6, 1)));

    let mut copy = FileProperties::try_clone_from(Some(&source)).unwrap();
    assert_eq!(copy, source);
    assert_eq!(copy.content_type(), Some("text/plain"));
    assert_eq!(copy.length(), 42);
    assert_eq!(copy.pending_file_permission_key(), Some("A"));
    assert_eq!(copy.observed_file_permission_key(), Some("B"));

    copy.set_content_type(Some("application/json".to_string()));
    copy.set_file_permission_key(Some("C".to_string()));
    copy.set_content_md5(None);
    copy.discard_pending_changes();

    assert_eq!(source.content_type(), Some("text/plain"));
    assert_eq!(source.file_permission_key(), Some("A"));
    assert_eq!(source.content_md5(), Some(&[0xAB; 16][..]));
    assert_eq!(source.last_write_time(), Some(at(2025, 6, 1)));
}

#[test]
fn test_overlay_pairs_prefer_pending() {
    let mut p = fetched();

    assert_eq!(p.file_permission_key(), Some("B"));
    assert_eq!(p.ntfs_attributes(), Some(NtfsAttributes::ARCHIVE));
    assert_eq!(p.creation_time(), Some(at(2024, 1, 1)));
    assert_eq!(p.last_write_time(), Some(at(2024, 1, 2)));

    p.set_file_permission_key(Some("A".to_string()));
    p.set_ntfs_attributes(Some(NtfsAttributes::HIDDEN));
    p.set_creation_time(Some(at(2020, 5, 5)));
    p.set_last_write_time(Some(at(2020, 5, 6)));

    assert_eq!(p.file_permission_key(), Some("A"));
    assert_eq!(p.ntfs_attributes(), Some(NtfsAttributes::HIDDEN));
    assert_eq!(p.creation_time(), Some(at(2020, 5, 5)));
    assert_eq!(p.last_write_time(), Some(at(2020, 5, 6)));

    assert_eq!(p.observed_file_permission_key(), Some("B"));
    assert_eq!(p.observed_ntfs_attributes(), Some(NtfsAttributes::ARCHIVE));
    assert_eq!(p.observed_creation_time(), Some(at(2024, 1, 1)));
    assert_eq!(p.observed_last_write_time(), Some(at(2024, 1, 2)));
}

#[test]
fn test_clearing_pending_falls_back_to_observed() {
    let mut p = fetched();
    p.set_creation_time(Some(at(2030, 1, 1)));
    p.set_creation_time(None);
    assert_eq!(p.creation_time(), Some(at(2024, 1, 1)));
    assert!(p.pending_creation_time().is_none());
}

#[test]
fn test_content_md5_leaves_crc64() {
    let mut p = fetched();
    p.set_content_md5(Some(vec![1; 16]));
    assert_eq!(p.content_md5(), Some(&[1u8; 16][..]));
    assert_eq!(p.checksum().crc64(), Some(&[0xCD; 8][..]));
}

#[test]
fn test_pending_changes_snapshot() {
    let mut p = fetched();
    p.set_ntfs_attributes(Some(NtfsAttributes::ARCHIVE | NtfsAttributes::READ_ONLY));

    let pending = p.pending_changes();
    assert_eq!(
        pending.ntfs_attributes,
        Some(NtfsAttributes::ARCHIVE | NtfsAttributes::READ_ONLY)
    );
    assert!(pending.file_permission_key.is_none());

    // The snapshot is owned; later staging does not alter it.
    p.set_file_permission_key(Some("Z".to_string()));
    assert!(pending.file_permission_key.is_none());
    assert_eq!(p.pending_changes().file_permission_key.as_deref(), Some("Z"));
}

#[test]
fn test_pending_survives_without_explicit_discard() {
    let mut p = fetched();
    p.set_file_permission_key(Some("A".to_string()));
    let _ = p.pending_changes();
    let _ = p.to_json();
    assert_eq!(p.pending_file_permission_key(), Some("A"));
}

#[test]
fn test_clone_pending_overlays_are_independent() {
    let mut source = fetched();
    source.set_ntfs_attributes(Some(NtfsAttributes::READ_ONLY));
    source.set_creation_time(Some(at(2021, 3, 3)));

    let mut copy = source.clone();
    copy.set_ntfs_attributes(Some(NtfsAttributes::HIDDEN | NtfsAttributes::SYSTEM));
    copy.set_creation_time(None);
    copy.set_last_write_time(Some(at(2022, 4, 4)));

    assert_eq!(source.pending_ntfs_attributes(), Some(NtfsAttributes::READ_ONLY));
    assert_eq!(source.observed_ntfs_attributes(), Some(NtfsAttributes::ARCHIVE));
    assert_eq!(source.pending_creation_time(), Some(at(2021, 3, 3)));
    assert!(source.pending_last_write_time().is_none());
    assert_eq!(source.last_write_time(), Some(at(2024, 1, 2)));

    assert_eq!(
        copy.ntfs_attributes(),
        Some(NtfsAttributes::HIDDEN | NtfsAttributes::SYSTEM)
    );
    assert_eq!(copy.creation_time(), Some(at(2024, 1, 1)));
}

#[test]
fn test_unknown_attribute_bits_dropped_through_properties_json() {
    let json = r#"{"length":7,"ntfs_attributes":{"observed":2147483680}}"#;
    let p: FileProperties = serde_json::from_str(json).unwrap();
    assert_eq!(p.ntfs_attributes(), Some(NtfsAttributes::ARCHIVE));
    assert_eq!(p.ntfs_attributes().unwrap().to_string(), "Archive");
    assert_eq!(p.length(), 7);
}
