//! Read-only extraction from a decrypted SQLite image.

use std::collections::HashMap;
use std::io::Write;

use rusqlite::{Connection, OpenFlags};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::StoreError;
use crate::models::{Chat, ChatData, Message};
use crate::queries;

/// Group conversations carry this jid suffix.
const GROUP_JID_SUFFIX: &str = "@g.us";

/// Handle over one decrypted message store.
///
/// The image is spooled into a temp file (SQLite needs one to open) that is
/// unlinked when the handle drops. The connection is read-only; extraction
/// never mutates the store, so extracting twice yields identical results.
pub struct MessageStore {
    conn: Connection,
    _spool: NamedTempFile,
}

impl MessageStore {
    /// Open a decrypted, decompressed database image.
    pub fn open(image: &[u8]) -> Result<Self, StoreError> {
        let mut spool = NamedTempFile::new()?;
        spool.write_all(image)?;
        spool.flush()?;
        let conn = Connection::open_with_flags(
            spool.path(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self {
            conn,
            _spool: spool,
        })
    }

    /// Extract every visible chat and its messages.
    ///
    /// Chats come back most recently active first; each chat's messages are
    /// in ascending timestamp order. Chats without messages keep an empty
    /// entry in the map.
    pub fn extract(&self) -> Result<ChatData, StoreError> {
        let chats = self.list_chats()?;
        let mut messages = HashMap::with_capacity(chats.len());
        for chat in &chats {
            messages.insert(chat.jid.clone(), self.list_messages(&chat.jid)?);
        }
        debug!(chats = chats.len(), "store extracted");
        Ok(ChatData { chats, messages })
    }

    fn list_chats(&self) -> Result<Vec<Chat>, StoreError> {
        let mut stmt = self.conn.prepare(queries::GET_CHATS)?;
        let rows = stmt.query_map([], |row| {
            let jid: String = row.get(0)?;
            let group_name: Option<String> = row.get(1)?;
            let contact_name: Option<String> = row.get(2)?;
            let last_message_text: Option<String> = row.get(3)?;
            let last_message_timestamp: Option<i64> = row.get(4)?;
            Ok(Chat {
                name: resolve_chat_name(&jid, group_name, contact_name),
                jid,
                last_message_text,
                last_message_timestamp: last_message_timestamp.unwrap_or(0),
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn list_messages(&self, jid: &str) -> Result<Vec<Message>, StoreError> {
        let mut stmt = self.conn.prepare(queries::GET_MESSAGES)?;
        let rows = stmt.query_map([jid], |row| {
            Ok(Message {
                id: row.get(0)?,
                chat_jid: row.get(1)?,
                from_me: row.get::<_, i64>(2)? != 0,
                status: row.get(3)?,
                text: row.get(4)?,
                timestamp: row.get(5)?,
                message_type: row.get(6)?,
                media_caption: row.get(7)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

/// Group chats use the group subject. One-to-one chats prefer the contact
/// name; when it is missing or empty the jid local part (the segment before
/// `@`) stands in, which is a best-effort label for unregistered contacts.
fn resolve_chat_name(
    jid: &str,
    group_name: Option<String>,
    contact_name: Option<String>,
) -> Option<String> {
    if jid.ends_with(GROUP_JID_SUFFIX) {
        group_name
    } else {
        contact_name
            .filter(|name| !name.is_empty())
            .or_else(|| jid.split('@').next().map(str::to_owned))
    }
}
