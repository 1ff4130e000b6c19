//! Detached attachment records.
//!
//! Produced by the [`Stripper`](crate::stripper::Stripper) in depth-first
//! order; owned by the caller after extraction.

/// One attachment detached from a message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Attachment {
    /// Filename resolved from the Content-Type `filename` attribute, falling
    /// back to the Content-Disposition `filename` parameter. Empty when the
    /// part carried no name.
    pub filename: String,

    /// MIME content type (e.g. `"application/pdf"`, `"message/rfc822"`).
    pub content_type: String,

    /// Raw body payload, exactly as carried by the source part
    /// (transfer-encoding is the parsing collaborator's concern).
    pub payload: String,
}
