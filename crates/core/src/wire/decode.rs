use super::blocks::extract_blocks;
use super::headers::{decode_app, decode_basic, decode_subfields};
use super::record::{AppHeader, ParsedMessage};
use super::text::tokenize_fields;

/// Decode a raw FIN message into a [`ParsedMessage`].
///
/// Decoding never fails: missing blocks produce empty header structures,
/// and malformed block delimiters produce a record with no blocks at all.
/// An input containing no block delimiter whatsoever is handed to
/// [`decode_body`] — the documented lenient mode for bodies supplied
/// without header wrapping.
///
/// Decoding is pure and idempotent: equal inputs yield structurally equal
/// records, and nothing is shared between calls.
pub fn decode(input: &str) -> ParsedMessage {
    if !input.contains('{') {
        return decode_body(input);
    }

    let blocks = extract_blocks(input);

    let basic_header = blocks.get(&1).map(|c| decode_basic(c)).unwrap_or_default();
    let app_header: Option<AppHeader> = blocks.get(&2).map(|c| decode_app(c));
    let message_type = app_header
        .as_ref()
        .map(|h| format!("MT{}", h.type_digits()))
        .unwrap_or_default();

    ParsedMessage {
        message_type,
        basic_header,
        app_header,
        user_header: blocks.get(&3).map(|c| decode_subfields(c)).unwrap_or_default(),
        fields: blocks.get(&4).map(|c| tokenize_fields(c)).unwrap_or_default(),
        trailers: blocks.get(&5).map(|c| decode_subfields(c)).unwrap_or_default(),
        raw: input.to_string(),
    }
}

/// Decode bare block-4 content into a [`ParsedMessage`].
///
/// The lenient alternate entry point: the entire input is treated as text
/// block content, and all header structures are empty. The record's message
/// type is unknown (empty), so validation of such a record reports an
/// unknown message type unless the caller knows better.
pub fn decode_body(input: &str) -> ParsedMessage {
    ParsedMessage {
        message_type: String::new(),
        basic_header: Default::default(),
        app_header: None,
        user_header: Default::default(),
        fields: tokenize_fields(input),
        trailers: Default::default(),
        raw: input.to_string(),
    }
}
