//! Text-block (block 4) tokenizer and its emission inverse.
//!
//! Block 4 is a sequence of physical lines separated by CRLF. A line of the
//! form `:TAG:rest` — colon, two digits, optional uppercase option letter,
//! colon — opens a new field; every following line that does not match that
//! shape, and is not the single-dash terminator line, is a continuation of
//! the current field's value. Within one text block a tag occurs at most
//! once: logical repetition happens only through multi-line values.

use super::record::{FieldMap, FieldValue, Tag};

/// Decode block-4 content into an ordered field map.
///
/// Bare-LF line breaks are tolerated on input; the emitter always produces
/// CRLF. The terminator line (a single dash) closes the block and is
/// discarded, never appended as content. Lines appearing before the first
/// tag line (such as the conventional leading line break after `{4:`) are
/// skipped. A tag line with empty rest-of-line still opens its field; its
/// first continuation line, if any, becomes line one of the value.
pub fn tokenize_fields(content: &str) -> FieldMap {
    // One trailing line break is block framing, not a continuation line.
    let content = content
        .strip_suffix('\n')
        .map(|c| c.strip_suffix('\r').unwrap_or(c))
        .unwrap_or(content);

    let mut fields = FieldMap::new();
    let mut current: Option<(Tag, Vec<String>)> = None;

    for raw_line in content.split('\n') {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

        if let Some((tag, rest)) = match_tag_line(line) {
            flush(&mut fields, current.take());
            let lines = if rest.is_empty() {
                Vec::new()
            } else {
                vec![rest.to_string()]
            };
            current = Some((tag, lines));
        } else if line == "-" {
            // Terminator: closes the block, never content.
            flush(&mut fields, current.take());
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(line.to_string());
        }
        // Lines before the first field are skipped.
    }

    flush(&mut fields, current);
    fields
}

/// Collapse the accumulated lines of one field and record it.
///
/// Exactly one line collapses to a scalar; zero lines (a tag line with
/// empty rest and no continuation) records an empty scalar; two or more
/// stay a sequence.
fn flush(fields: &mut FieldMap, field: Option<(Tag, Vec<String>)>) {
    let Some((tag, mut lines)) = field else {
        return;
    };
    let value = match lines.len() {
        0 => FieldValue::Single(String::new()),
        1 => FieldValue::Single(lines.remove(0)),
        _ => FieldValue::Lines(lines),
    };
    fields.insert(tag, value);
}

/// Match `:DD:rest` or `:DDA:rest` strictly at line start.
///
/// An embedded colon-tag-colon pattern later in a line is continuation
/// content, never a new field.
fn match_tag_line(line: &str) -> Option<(Tag, &str)> {
    let rest = line.strip_prefix(':')?;
    let b = rest.as_bytes();
    if b.len() < 3 || !b[0].is_ascii_digit() || !b[1].is_ascii_digit() {
        return None;
    }
    let tag_len = if b[2] == b':' {
        2
    } else if b[2].is_ascii_uppercase() && b.get(3) == Some(&b':') {
        3
    } else {
        return None;
    };
    Some((Tag::parse(&rest[..tag_len]), &rest[tag_len + 1..]))
}

/// Emit an ordered field map as block-4 lines.
///
/// Each field becomes `:TAG:first-line`, with further lines of a multi-line
/// value on their own physical lines; every line is CRLF-terminated. The
/// terminator and block braces are the caller's framing.
pub fn emit_fields(fields: &FieldMap) -> String {
    let mut out = String::new();
    for (tag, value) in fields.iter() {
        out.push(':');
        out.push_str(tag.as_str());
        out.push(':');
        match value {
            FieldValue::Single(s) => out.push_str(s),
            FieldValue::Lines(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        out.push_str("\r\n");
                    }
                    out.push_str(line);
                }
            }
        }
        out.push_str("\r\n");
    }
    out
}
