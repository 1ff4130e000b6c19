//! MIME interop: lift `mail-parser` messages into owned [`MimePart`] trees.
//!
//! Raw-MIME parsing, charset handling, and transfer-encoding are all the
//! collaborator's job; this module only translates its structured view into
//! the crate's own tree model.

use mail_parser::{Message, MessagePart, MessageParser, MimeHeaders, PartType};
use tracing::warn;

use crate::error::{Result, StripError};
use crate::model::part::MimePart;

/// Content-Type attributes probed from the collaborator's structured view.
const KNOWN_ATTRIBUTES: [&str; 4] = ["name", "filename", "charset", "boundary"];

/// Parse a complete raw message and lift it into an owned part tree.
///
/// Uses `mail-parser` internally; fails only when the collaborator cannot
/// make sense of the bytes at all.
pub fn parse_message_tree(raw: &[u8]) -> Result<MimePart> {
    let parser = MessageParser::default();
    match parser.parse(raw) {
        Some(msg) => Ok(message_to_tree(&msg)),
        None => {
            warn!(len = raw.len(), "message could not be parsed");
            Err(StripError::MimeError(
                "failed to parse raw message".to_string(),
            ))
        }
    }
}

/// Lift an already-parsed message into an owned part tree.
pub fn message_to_tree(msg: &Message<'_>) -> MimePart {
    lift_part(msg, msg.root_part())
}

fn lift_part(msg: &Message<'_>, part: &MessagePart<'_>) -> MimePart {
    let mut lifted = match part.content_type() {
        Some(ct) => {
            let mut lifted = MimePart::new(ct.ctype(), ct.subtype().unwrap_or_default());
            for name in KNOWN_ATTRIBUTES {
                if let Some(value) = ct.attribute(name) {
                    lifted.push_attribute(name, value);
                }
            }
            lifted
        }
        // No Content-Type header: text parts get the RFC 2045 default,
        // anything else falls back to octet-stream.
        None => match &part.body {
            PartType::Text(_) => MimePart::new("text", "plain"),
            _ => MimePart::new("application", "octet-stream"),
        },
    };

    if let Some(cd) = part.content_disposition() {
        let mut value = cd.ctype().to_string();
        if let Some(filename) = cd.attribute("filename") {
            value.push_str(&format!("; filename=\"{filename}\""));
        }
        lifted.set_header("content-disposition", value);
    }

    match &part.body {
        PartType::Text(text) | PartType::Html(text) => {
            lifted.body = text.as_ref().to_string();
        }
        PartType::Binary(data) | PartType::InlineBinary(data) => {
            lifted.body = String::from_utf8_lossy(data.as_ref()).into_owned();
        }
        // Embedded full messages stay opaque: their raw text is the payload,
        // their internal structure is never lifted.
        PartType::Message(nested) => {
            lifted.body = String::from_utf8_lossy(nested.raw_message.as_ref()).into_owned();
        }
        PartType::Multipart(ids) => {
            for id in ids {
                if let Some(child) = msg.part(*id) {
                    lifted.children.push(lift_part(msg, child));
                }
            }
        }
    }

    lifted
}
