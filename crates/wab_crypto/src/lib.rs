//! wab_crypto — WhatsApp backup decryption primitives
//!
//! # Design principles
//! - NO custom crypto; all primitives come from audited Rust crates.
//! - Key material is zeroized on drop and never printed or logged.
//! - Container format detection works by authenticated trial: a wrong
//!   offset choice fails GCM tag verification instead of yielding garbage
//!   plaintext, so layouts can be tried blindly in priority order.
//!
//! # Module layout
//! - `key`     — 158-byte key file validation + fixed-offset AES key slice
//! - `format`  — catalog of historical backup container layouts
//! - `decrypt` — format-fallback AEAD decryption + zlib inflate
//! - `error`   — unified error type

pub mod decrypt;
pub mod error;
pub mod format;
pub mod key;

pub use decrypt::decrypt_backup;
pub use error::CryptoError;
pub use format::{ContainerFormat, FORMAT_CATALOG};
pub use key::KeyMaterial;
