//! Attachment detachment: one depth-first traversal splits a message tree
//! into inline body text and detached attachment records.
//!
//! Classification, per part: `text/plain` parts that are declared `inline`
//! or carry no filename are body text; containers with more than one child
//! are recursed into; everything else — including embedded `message/rfc822`
//! messages, which are never traversed — is detached as an attachment.

use tracing::debug;

use crate::error::{Result, StripError};
use crate::model::attachment::Attachment;
use crate::model::part::MimePart;
use crate::parser::params::parse_params;

/// The walk runs at most once, on first access of either output.
#[derive(Debug)]
enum Traversal {
    Untraversed,
    Traversed,
}

/// Splits one message tree into a stripped message and its attachments.
///
/// The traversal is lazy: it runs on the first call to [`Stripper::message`]
/// or [`Stripper::attachments`] and its result is cached — repeated calls
/// return the same outputs without walking again. The stripper owns the tree
/// exclusively; the root is rewritten in place (body replaced, part list
/// rebuilt) and the root itself is never classified, only its descendants.
#[derive(Debug)]
pub struct Stripper {
    root: MimePart,
    state: Traversal,
    attachments: Vec<Attachment>,
}

impl Stripper {
    /// Wrap a part tree for stripping.
    ///
    /// Fails with [`StripError::InvalidInput`] when a node carries both
    /// children and a non-empty body: payloads are meaningful only at leaves.
    pub fn new(root: MimePart) -> Result<Self> {
        validate(&root)?;
        Ok(Stripper {
            root,
            state: Traversal::Untraversed,
            attachments: Vec::new(),
        })
    }

    /// The message with attachments removed.
    ///
    /// Its body is the concatenation of all inline text fragments, in
    /// traversal order and with no separator (fragment boundaries are
    /// whatever whitespace the fragments carry); its part list is rebuilt to
    /// reflect only the remaining non-attachment content.
    pub fn message(&mut self) -> &MimePart {
        self.detach_all();
        &self.root
    }

    /// The attachments detached from the message, in depth-first
    /// left-to-right source order. Empty when none were found.
    pub fn attachments(&mut self) -> &[Attachment] {
        self.detach_all();
        &self.attachments
    }

    /// Consume the stripper, returning both outputs by value.
    pub fn into_parts(mut self) -> (MimePart, Vec<Attachment>) {
        self.detach_all();
        (self.root, self.attachments)
    }

    fn detach_all(&mut self) {
        if matches!(self.state, Traversal::Traversed) {
            return;
        }
        self.state = Traversal::Traversed;

        let children = std::mem::take(&mut self.root.children);
        let mut body_parts = Vec::new();
        for child in children {
            self.walk(child, &mut body_parts);
        }
        self.root.body = body_parts.concat();
    }

    /// Classify one part and act: inline text joins the body, containers are
    /// descended into, everything else is detached.
    fn walk(&mut self, part: MimePart, body_parts: &mut Vec<String>) {
        if is_inline_text(&part) {
            body_parts.push(part.body);
        } else if should_recurse(&part) {
            for child in part.children {
                self.walk(child, body_parts);
            }
        } else {
            let record = Attachment {
                filename: resolve_filename(&part),
                content_type: part.content_type(),
                payload: part.body,
            };
            debug!(
                filename = %record.filename,
                content_type = %record.content_type,
                "detached attachment"
            );
            self.attachments.push(record);
        }
    }
}

/// Reject trees where a container also carries a payload.
fn validate(part: &MimePart) -> Result<()> {
    if !part.children.is_empty() && !part.body.is_empty() {
        return Err(StripError::invalid_input(format!(
            "{} part carries both {} children and a body",
            part.content_type(),
            part.children.len()
        )));
    }
    for child in &part.children {
        validate(child)?;
    }
    Ok(())
}

/// Is this part inline body text?
///
/// True when the raw content-type value contains `text/plain` and the part
/// either declares an `inline` disposition or has no resolvable filename —
/// unnamed plain text defaults to inline body. A missing content-type header
/// never matches.
fn is_inline_text(part: &MimePart) -> bool {
    let content_type = part.header("content-type").unwrap_or("");
    if !content_type.to_lowercase().contains("text/plain") {
        return false;
    }
    let disposition = part.header("content-disposition").unwrap_or("");
    disposition.to_lowercase().contains("inline") || resolve_filename(part).is_empty()
}

/// Should this part be recursed into rather than detached?
///
/// Embedded `message/rfc822` messages are opaque attachments and are never
/// traversed, whatever their internal structure. Anything else is recursed
/// only when it has more than one child part.
fn should_recurse(part: &MimePart) -> bool {
    let content_type = part.header("content-type").unwrap_or("");
    if content_type.to_lowercase().contains("message/rfc822") {
        return false;
    }
    part.children.len() > 1
}

/// Resolve a part's filename.
///
/// The structured Content-Type `filename` attribute wins; otherwise the raw
/// Content-Disposition value is parsed as a parameter string and its
/// `filename` parameter is taken. Empty when neither source names the part.
fn resolve_filename(part: &MimePart) -> String {
    if let Some(name) = part.attribute("filename") {
        return name.to_string();
    }
    if let Some(disposition) = part.header("content-disposition") {
        let (_, params) = parse_params(disposition);
        if let Some((_, value)) = params.into_iter().find(|(name, _)| name == "filename") {
            return value;
        }
    }
    String::new()
}
