//! wab_store — chat extraction from a decrypted WhatsApp backup
//!
//! # Extraction strategy
//! The decrypted, decompressed backup is a plain SQLite database image.
//! SQLite wants a file, so the image is spooled into a temp file that is
//! unlinked when the handle drops; nothing durable is ever written. The
//! connection is read-only. Two fixed queries pull chats (newest activity
//! first, hidden and broadcast conversations excluded) and per-chat
//! messages (oldest first, internal sentinel rows excluded).
//!
//! # Module layout
//! - `models`   — `Chat`, `Message`, `ChatData` handed to the UI layer
//! - `queries`  — embedded SQL targeting the backup's msgstore schema
//! - `store`    — read-only store handle + extraction
//! - `pipeline` — one-call entry: key file + backup file → `ChatData`
//! - `error`    — unified error type

pub mod error;
pub mod models;
pub mod pipeline;
pub mod queries;
pub mod store;

pub use error::StoreError;
pub use models::{Chat, ChatData, Message};
pub use pipeline::process_backup;
pub use store::MessageStore;
