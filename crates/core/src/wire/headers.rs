//! Fixed-width header codecs for blocks 1, 2, 3, and 5.
//!
//! Decoders slice the block content at fixed positions; a slice past the end
//! of a truncated header yields a shortened or empty string, never an error.
//! Each decoder has an encoding inverse used by the generator.

use super::record::{AppHeader, BasicHeader, SubFields};

/// Return the fixed-width slice of `len` bytes starting at `start`, clamped
/// to the end of `s`.
///
/// Header content is ASCII in well-formed messages; both bounds are snapped
/// to character boundaries so malformed multi-byte input degrades to a
/// shorter slice instead of panicking.
fn slice_at(s: &str, start: usize, len: usize) -> &str {
    let from = prev_char_boundary(s, start.min(s.len()));
    let to = prev_char_boundary(s, (start + len).min(s.len()));
    if from >= to { "" } else { &s[from..to] }
}

/// Largest index <= `pos` that is a valid UTF-8 char boundary.
fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos;
    while p > 0 && !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

// ── Basic header (block 1) ──────────────────────────────────────────────

/// Decode a block-1 payload into a [`BasicHeader`].
pub fn decode_basic(content: &str) -> BasicHeader {
    BasicHeader {
        application_id: slice_at(content, 0, 1).to_string(),
        service_id: slice_at(content, 1, 2).to_string(),
        address: slice_at(content, 3, 12).to_string(),
        session_number: slice_at(content, 15, 4).to_string(),
        sequence_number: slice_at(content, 19, 6).to_string(),
    }
}

/// Encode a [`BasicHeader`] back to its block-1 payload.
pub fn encode_basic(header: &BasicHeader) -> String {
    let mut out = String::with_capacity(25);
    out.push_str(&header.application_id);
    out.push_str(&header.service_id);
    out.push_str(&header.address);
    out.push_str(&header.session_number);
    out.push_str(&header.sequence_number);
    out
}

// ── Application header (block 2) ────────────────────────────────────────

/// Decode a block-2 payload into an [`AppHeader`].
///
/// The first character selects the variant: `O` decodes the output layout,
/// anything else (including a missing direction character) decodes the
/// input layout, which degrades to empty components on truncated content.
pub fn decode_app(content: &str) -> AppHeader {
    if content.starts_with('O') {
        AppHeader::Output {
            type_digits: slice_at(content, 1, 3).to_string(),
            input_time: slice_at(content, 4, 4).to_string(),
            input_date: slice_at(content, 8, 6).to_string(),
            message_input_reference: slice_at(content, 14, 28).to_string(),
            output_date: slice_at(content, 42, 6).to_string(),
            output_time: slice_at(content, 48, 4).to_string(),
            priority: slice_at(content, 52, 1).to_string(),
        }
    } else {
        AppHeader::Input {
            type_digits: slice_at(content, 1, 3).to_string(),
            receiver: slice_at(content, 4, 12).to_string(),
            priority: slice_at(content, 16, 1).to_string(),
            delivery_monitor: slice_at(content, 17, 1).to_string(),
            obsolescence_period: slice_at(content, 18, 3).to_string(),
        }
    }
}

/// Encode an [`AppHeader`] back to its block-2 payload.
///
/// Components are concatenated in layout order; empty trailing components
/// simply shorten the payload (the decoder's defensive slicing accepts the
/// shortened form).
pub fn encode_app(header: &AppHeader) -> String {
    match header {
        AppHeader::Input {
            type_digits,
            receiver,
            priority,
            delivery_monitor,
            obsolescence_period,
        } => {
            let mut out = String::with_capacity(21);
            out.push('I');
            out.push_str(type_digits);
            out.push_str(receiver);
            out.push_str(priority);
            out.push_str(delivery_monitor);
            out.push_str(obsolescence_period);
            out
        }
        AppHeader::Output {
            type_digits,
            input_time,
            input_date,
            message_input_reference,
            output_date,
            output_time,
            priority,
        } => {
            let mut out = String::with_capacity(53);
            out.push('O');
            out.push_str(type_digits);
            out.push_str(input_time);
            out.push_str(input_date);
            out.push_str(message_input_reference);
            out.push_str(output_date);
            out.push_str(output_time);
            out.push_str(priority);
            out
        }
    }
}

// ── User header (block 3) and trailers (block 5) ────────────────────────

/// Decode a block-3 or block-5 payload into ordered sub-fields.
///
/// The payload is a sequence of `{KKK:value}` pairs with fixed 3-character
/// keys. Insertion order is preserved for re-encoding fidelity. Content
/// outside brace pairs is ignored; a pair without a colon after its key
/// treats everything past the key as the value.
pub fn decode_subfields(content: &str) -> SubFields {
    let b = content.as_bytes();
    let mut subs = SubFields::new();
    let mut i = 0usize;

    while i < b.len() {
        if b[i] != b'{' {
            i += 1;
            continue;
        }
        i += 1;
        let inner_start = i;
        let mut depth = 1u32;
        while i < b.len() {
            match b[i] {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            i += 1;
        }
        // Unterminated sub-field: take what is there.
        let inner = &content[inner_start..i.min(content.len())];
        i += 1;

        let key = slice_at(inner, 0, 3);
        if key.is_empty() {
            continue;
        }
        let value = if inner.len() > key.len() && inner.as_bytes()[key.len()] == b':' {
            &inner[key.len() + 1..]
        } else {
            &inner[key.len()..]
        };
        subs.insert(key, value);
    }

    subs
}

/// Encode sub-fields back to a block-3/block-5 payload.
pub fn encode_subfields(subs: &SubFields) -> String {
    let mut out = String::new();
    for (key, value) in subs.iter() {
        out.push('{');
        out.push_str(key);
        out.push(':');
        out.push_str(value);
        out.push('}');
    }
    out
}
