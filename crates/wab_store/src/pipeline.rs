//! One-call pipeline: key file bytes + backup file bytes → [`ChatData`].

use tracing::debug;
use wab_crypto::{decrypt_backup, KeyMaterial};

use crate::error::StoreError;
use crate::models::ChatData;
use crate::store::MessageStore;

/// Decrypt, decompress and extract a backup in one call.
///
/// Every invocation is independent and side-effect free given the same
/// inputs; concurrent callers need no locking as long as each call gets its
/// own buffers.
pub fn process_backup(key_bytes: &[u8], backup_bytes: &[u8]) -> Result<ChatData, StoreError> {
    let key = KeyMaterial::load(key_bytes)?;
    let image = decrypt_backup(&key, backup_bytes)?;
    debug!(bytes = image.len(), "backup decrypted, extracting chats");
    MessageStore::open(&image)?.extract()
}
