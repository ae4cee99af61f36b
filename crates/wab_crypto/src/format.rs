//! Historical backup container layouts.
//!
//! The container header changed across app generations, moving the IV and
//! ciphertext start. The catalog lists every known layout in trial order,
//! newest (most common in the wild) first. It is static configuration:
//! nothing in a backup file announces its own layout.

/// Length of the GCM authentication tag trailing the ciphertext.
pub const TAG_LEN: usize = 16;

/// Byte layout of one backup container generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerFormat {
    pub name: &'static str,
    pub iv_offset: usize,
    pub iv_len: usize,
    pub ciphertext_offset: usize,
}

impl ContainerFormat {
    /// Smallest file that can structurally hold this layout: the header up
    /// to the ciphertext start plus the trailing authentication tag.
    pub const fn min_file_len(&self) -> usize {
        self.ciphertext_offset + TAG_LEN
    }
}

/// Known layouts, in trial order.
pub const FORMAT_CATALOG: [ContainerFormat; 2] = [
    ContainerFormat {
        name: "crypt14/15",
        iv_offset: 67,
        iv_len: 16,
        ciphertext_offset: 83,
    },
    ContainerFormat {
        name: "crypt12",
        iv_offset: 51,
        iv_len: 16,
        ciphertext_offset: 67,
    },
];
