//! NTFS / SMB file attribute flags.
//!
//! Bit values follow MS-FSCC 2.6.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// A set of file-system attribute flags for a share file.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NtfsAttributes: u32 {
        const READ_ONLY = 0x0000_0001;
        const HIDDEN = 0x0000_0002;
        const SYSTEM = 0x0000_0004;
        const DIRECTORY = 0x0000_0010;
        const ARCHIVE = 0x0000_0020;
        /// Only meaningful when no other flag is set.
        const NORMAL = 0x0000_0080;
        const TEMPORARY = 0x0000_0100;
        const SPARSE_FILE = 0x0000_0200;
        const REPARSE_POINT = 0x0000_0400;
        const COMPRESSED = 0x0000_0800;
        const OFFLINE = 0x0000_1000;
        const NOT_CONTENT_INDEXED = 0x0000_2000;
        const ENCRYPTED = 0x0000_4000;
        const INTEGRITY_STREAM = 0x0000_8000;
        const NO_SCRUB_DATA = 0x0002_0000;
    }
}

const DISPLAY_NAMES: [(NtfsAttributes, &str); 15] = [
    (NtfsAttributes::READ_ONLY, "ReadOnly"),
    (NtfsAttributes::HIDDEN, "Hidden"),
    (NtfsAttributes::SYSTEM, "System"),
    (NtfsAttributes::DIRECTORY, "Directory"),
    (NtfsAttributes::ARCHIVE, "Archive"),
    (NtfsAttributes::NORMAL, "Normal"),
    (NtfsAttributes::TEMPORARY, "Temporary"),
    (NtfsAttributes::SPARSE_FILE, "SparseFile"),
    (NtfsAttributes::REPARSE_POINT, "ReparsePoint"),
    (NtfsAttributes::COMPRESSED, "Compressed"),
    (NtfsAttributes::OFFLINE, "Offline"),
    (NtfsAttributes::NOT_CONTENT_INDEXED, "NotContentIndexed"),
    (NtfsAttributes::ENCRYPTED, "Encrypted"),
    (NtfsAttributes::INTEGRITY_STREAM, "IntegrityStream"),
    (NtfsAttributes::NO_SCRUB_DATA, "NoScrubData"),
];

impl NtfsAttributes {
    /// Iterates the display names of the set flags in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        DISPLAY_NAMES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

impl Default for NtfsAttributes {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for NtfsAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        let names: Vec<&str> = self.names().collect();
        write!(f, "{}", names.join(" | "))
    }
}

// Serialized as raw bits; unknown bits are dropped on the way in.
impl Serialize for NtfsAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for NtfsAttributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self::from_bits_truncate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let a = NtfsAttributes::empty();
        assert!(a.is_empty());
        assert_eq!(a.bits(), 0);
        assert_eq!(a, NtfsAttributes::default());
    }

    #[test]
    fn test_insert_remove_contains() {
        let mut a = NtfsAttributes::ARCHIVE;
        a.insert(NtfsAttributes::READ_ONLY);
        assert!(a.contains(NtfsAttributes::READ_ONLY | NtfsAttributes::ARCHIVE));
        a.remove(NtfsAttributes::ARCHIVE);
        assert!(!a.contains(NtfsAttributes::ARCHIVE));
        assert_eq!(a, NtfsAttributes::READ_ONLY);
    }

    #[test]
    fn test_from_bits_truncate_drops_unknown() {
        let a = NtfsAttributes::from_bits_truncate(0x0000_0021 | 0x8000_0000);
        assert_eq!(a, NtfsAttributes::READ_ONLY | NtfsAttributes::ARCHIVE);
    }

    #[test]
    fn test_display() {
        assert_eq!(NtfsAttributes::empty().to_string(), "None");
        let a = NtfsAttributes::READ_ONLY | NtfsAttributes::HIDDEN | NtfsAttributes::ARCHIVE;
        assert_eq!(a.to_string(), "ReadOnly | Hidden | Archive");
    }

    #[test]
    fn test_bitor_assign() {
        let mut a = NtfsAttributes::empty();
        a |= NtfsAttributes::TEMPORARY;
        assert_eq!(a.bits(), 0x100);
    }

    #[test]
    fn test_serialize_as_bits() {
        let json = serde_json::to_string(&NtfsAttributes::ARCHIVE).unwrap();
        assert_eq!(json, "32");
        let back: NtfsAttributes = serde_json::from_str("33").unwrap();
        assert_eq!(back, NtfsAttributes::READ_ONLY | NtfsAttributes::ARCHIVE);
    }

    #[test]
    fn test_deserialize_drops_unknown_bits() {
        let only_unknown: NtfsAttributes = serde_json::from_str("2147483648").unwrap();
        assert!(only_unknown.is_empty());
        assert_eq!(only_unknown.to_string(), "None");

        let mixed: NtfsAttributes = serde_json::from_str("2147483681").unwrap();
        assert_eq!(mixed, NtfsAttributes::READ_ONLY | NtfsAttributes::ARCHIVE);
        assert_eq!(mixed.to_string(), "ReadOnly | Archive");
        assert_eq!(serde_json::to_string(&mixed).unwrap(), "33");
    }
}
