//! `mimestrip` — detach attachments from parsed MIME messages.
//!
//! This crate provides the core library for splitting an already-parsed MIME
//! part tree into two outputs: the message body (the concatenation of its
//! inline plain-text parts) and an ordered list of attachment records.

pub mod error;
pub mod model;
pub mod parser;
pub mod stripper;
