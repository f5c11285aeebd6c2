//! Single lookup table for every DOM selector the workflow touches.
//!
//! WhatsApp Web ships new markup regularly; when a selector rots, update it
//! here without touching workflow logic.

/// Chat list in the sidebar — present once login has completed.
pub const CHAT_LIST: &str = r#"[data-testid="chat-list"]"#;

/// Message compose input on a chat page. Must be present before text entry.
pub const COMPOSE_BOX: &str = r#"[data-testid="conversation-compose-box-input"]"#;

/// Paperclip control that opens the attachment menu.
pub const ATTACH_BUTTON: &str = r#"[data-testid="attach-clip"]"#;

/// Hidden file input behind the attachment menu.
pub const FILE_INPUT: &str = r#"input[type="file"]"#;

/// Send button on the compose bar.
pub const SEND_BUTTON: &str = r#"[data-testid="send"]"#;

/// Build the deep-link URL for a target's chat.
///
/// The number is passed through without normalization — no country-code
/// validation, no E.164 enforcement. The message text is query-encoded.
pub fn chat_url(base_url: &str, number: &str, message: Option<&str>) -> String {
    match message {
        Some(text) => format!(
            "{base_url}/send?phone={number}&text={}",
            urlencoding::encode(text)
        ),
        None => format!("{base_url}/send?phone={number}"),
    }
}
