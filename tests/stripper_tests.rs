//! Integration tests: raw fixture messages through the parsing collaborator
//! and the stripper, end to end.

use std::path::Path;

use mimestrip::parser::mime::parse_message_tree;
use mimestrip::stripper::Stripper;

fn fixture(name: &str) -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read(&path).unwrap()
}

// ─── Test 1: multipart message with named attachments ───────────────

#[test]
fn test_strip_named_attachments() {
    let tree = parse_message_tree(&fixture("strip_attachments.eml")).unwrap();
    let mut stripper = Stripper::new(tree).unwrap();

    let attachments = stripper.attachments();
    assert_eq!(
        attachments.len(),
        3,
        "expected 3 attachments, got: {:?}",
        attachments
            .iter()
            .map(|a| a.content_type.as_str())
            .collect::<Vec<_>>()
    );

    // Traversal order matches source order.
    assert_eq!(attachments[0].content_type, "application/postscript");
    assert_eq!(attachments[0].filename, "wzl.ps");
    assert!(
        attachments[0].payload.contains("%!PS-Adobe-3.0"),
        "PostScript payload should match the source part, got: '{}'",
        attachments[0].payload
    );

    assert_eq!(attachments[1].content_type, "text/html");
    assert_eq!(attachments[1].filename, "zeldo.html");
    assert!(attachments[1].payload.contains("Zeldo lives."));

    // The unnamed HTML part is not plain text, so it detaches too.
    assert_eq!(attachments[2].content_type, "text/html");
    assert_eq!(attachments[2].filename, "");
    assert!(attachments[2].payload.contains("Unnamed HTML rendition."));
}

// ─── Test 2: stripped message keeps only the inline text ────────────

#[test]
fn test_stripped_message_has_no_multipart_structure() {
    let tree = parse_message_tree(&fixture("strip_attachments.eml")).unwrap();
    let mut stripper = Stripper::new(tree).unwrap();

    let message = stripper.message();
    assert!(
        message.children.is_empty(),
        "stripped message should have no remaining part structure"
    );
    assert!(
        message.body.contains("Here come the files."),
        "inline text should survive as the body, got: '{}'",
        message.body
    );
    assert!(
        !message.body.contains("Zeldo"),
        "attachment content must not leak into the body"
    );
}

// ─── Test 3: embedded message/rfc822 stays opaque ───────────────────

#[test]
fn test_embedded_message_detaches_whole() {
    let tree = parse_message_tree(&fixture("embedded_message.eml")).unwrap();
    let mut stripper = Stripper::new(tree).unwrap();

    let attachments = stripper.attachments();
    assert_eq!(
        attachments.len(),
        1,
        "the embedded message must be one attachment, not its sub-parts"
    );
    assert_eq!(attachments[0].content_type, "message/rfc822");
    assert_eq!(attachments[0].filename, "");
    assert!(
        attachments[0].payload.contains("we agreed to ship on Friday"),
        "payload should carry the embedded message text, got: '{}'",
        attachments[0].payload
    );

    let message = stripper.message();
    assert!(message.children.is_empty());
    assert!(message.body.contains("Forwarding the minutes from Monday."));
}

// ─── Test 4: accessors are idempotent across calls ──────────────────

#[test]
fn test_accessors_idempotent_end_to_end() {
    let tree = parse_message_tree(&fixture("strip_attachments.eml")).unwrap();
    let mut stripper = Stripper::new(tree).unwrap();

    let attachments = stripper.attachments().to_vec();
    let body = stripper.message().body.clone();

    for _ in 0..3 {
        assert_eq!(stripper.attachments(), attachments.as_slice());
        assert_eq!(stripper.message().body, body);
    }
}

// ─── Test 5: attachment records serialize with the expected shape ───

#[test]
fn test_attachment_record_serialization() {
    let tree = parse_message_tree(&fixture("strip_attachments.eml")).unwrap();
    let mut stripper = Stripper::new(tree).unwrap();

    let value = serde_json::to_value(&stripper.attachments()[0]).unwrap();
    assert_eq!(value["filename"], "wzl.ps");
    assert_eq!(value["content_type"], "application/postscript");
    assert!(value["payload"].as_str().unwrap().contains("showpage"));
}

// ─── Test 6: ownership hand-off via into_parts ──────────────────────

#[test]
fn test_into_parts_end_to_end() {
    let tree = parse_message_tree(&fixture("embedded_message.eml")).unwrap();
    let (message, attachments) = Stripper::new(tree).unwrap().into_parts();

    assert!(message.body.contains("Forwarding the minutes"));
    assert_eq!(attachments.len(), 1);
    assert_eq!(attachments[0].content_type, "message/rfc822");
}
