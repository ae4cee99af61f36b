//! Embedded SQL.
//!
//! Column and view names target the backup's msgstore schema (`chat_view`,
//! `message_view`, `wa_contacts`) and must not drift: the filter and order
//! clauses here ARE the extraction semantics.

/// Chats with both name sources, the last message text and the recency
/// timestamp, most recently active first. Hidden conversations and
/// broadcast channels are excluded here, not in Rust.
pub const GET_CHATS: &str = "\
SELECT
    c.jid AS jid,
    c.subject AS group_name,
    wc.given_name AS contact_name,
    m.data AS last_message_text,
    c.last_message_timestamp AS last_message_timestamp
FROM chat_view c
LEFT JOIN message_view m ON c.last_message_row_id = m._id
LEFT JOIN wa_contacts wc ON c.jid = wc.jid
WHERE c.hidden = 0 AND c.jid NOT LIKE '%@broadcast'
ORDER BY c.last_message_timestamp DESC";

/// All messages of one chat, oldest first. Rows with `_id <= 0` are
/// internal sentinels and never shown.
pub const GET_MESSAGES: &str = "\
SELECT
    _id,
    key_remote_jid,
    from_me,
    status,
    data,
    timestamp,
    message_type,
    media_caption
FROM message_view
WHERE key_remote_jid = ?1 AND _id > 0
ORDER BY timestamp ASC";
