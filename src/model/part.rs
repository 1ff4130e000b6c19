//! The owned MIME part tree.
//!
//! A [`MimePart`] is one node of a parsed multipart message: its content-type
//! split into discrete/composite tokens, the structured attributes of that
//! content-type, the raw header values, and either a body payload (leaves) or
//! ordered child parts (containers).

/// One node of a parsed MIME message tree.
///
/// The structured content-type view (`ctype`/`subtype`/`attributes`) and the
/// raw header view (`headers`) are kept consistent by the constructors:
/// [`MimePart::new`] seeds the raw `content-type` header and
/// [`MimePart::push_attribute`] refreshes it.
///
/// Contract: `body` is meaningful only for leaf parts. A node carrying both
/// children and a non-empty body is rejected by
/// [`Stripper::new`](crate::stripper::Stripper::new).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MimePart {
    /// Discrete content-type token (the `"text"` in `text/plain`).
    pub ctype: String,

    /// Composite content-type token (the `"plain"` in `text/plain`).
    pub subtype: String,

    /// Structured Content-Type attributes (lowercase names, in order):
    /// `filename`, `charset`, `boundary`, …
    pub attributes: Vec<(String, String)>,

    /// Raw header values keyed by lowercase header name, in order of
    /// appearance. Lookups take the first match.
    pub headers: Vec<(String, String)>,

    /// Ordered child parts. Empty for leaf parts.
    pub children: Vec<MimePart>,

    /// Raw body payload, exactly as carried by the source message.
    pub body: String,
}

impl MimePart {
    /// Create a leaf part with the given content-type tokens.
    ///
    /// The raw `content-type` header is seeded with `"ctype/subtype"` so the
    /// structured and raw views agree from the start.
    pub fn new(ctype: impl Into<String>, subtype: impl Into<String>) -> Self {
        let mut part = MimePart {
            ctype: ctype.into(),
            subtype: subtype.into(),
            attributes: Vec::new(),
            headers: Vec::new(),
            children: Vec::new(),
            body: String::new(),
        };
        part.sync_content_type_header();
        part
    }

    /// Get the first raw value for a header name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set a raw header value: replaces the first occurrence, appends if absent.
    ///
    /// Header names are stored lowercase.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        let name = name.to_lowercase();
        let value = value.into();
        match self.headers.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.headers.push((name, value)),
        }
    }

    /// Get a structured Content-Type attribute value (case-insensitive).
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Append a structured Content-Type attribute and refresh the raw
    /// `content-type` header to include it.
    pub fn push_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.push((name.to_lowercase(), value.into()));
        self.sync_content_type_header();
    }

    /// The content type as a single `"discrete/composite"` string.
    pub fn content_type(&self) -> String {
        format!("{}/{}", self.ctype, self.subtype)
    }

    /// Rewrite the raw `content-type` header from the structured view.
    fn sync_content_type_header(&mut self) {
        let mut value = self.content_type();
        for (name, attr) in &self.attributes {
            value.push_str(&format!("; {name}=\"{attr}\""));
        }
        self.set_header("content-type", value);
    }
}
