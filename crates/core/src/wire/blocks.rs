use std::collections::BTreeMap;

/// Split a raw FIN message into its numbered blocks.
///
/// Scans for `{N:…}` delimiter pairs whose payload begins with an integer
/// block number and a colon. Extraction tracks nesting depth rather than
/// matching the first closing brace, because block 3 and block 5 payloads
/// contain their own `{key:value}` sub-field pairs.
///
/// Blocks not present in the input are simply absent from the result.
/// Malformed input — a brace not opening a `{N:` payload, or an unclosed
/// block — yields an **empty** map rather than an error; downstream decoding
/// tolerates missing blocks as empty header structures. Content between
/// blocks (stray whitespace, line breaks) is ignored.
///
/// # Safety of `b[i] as char`
///
/// All delimiter tests compare against ASCII values. UTF-8 continuation
/// bytes are in the range 0x80–0xBF and never match `{`, `}`, `:`, or a
/// digit, so byte-wise scanning is safe without full UTF-8 decoding.
pub fn extract_blocks(input: &str) -> BTreeMap<u8, String> {
    let b = input.as_bytes();
    let mut blocks = BTreeMap::new();
    let mut i = 0usize;

    while i < b.len() {
        if b[i] != b'{' {
            i += 1;
            continue;
        }
        i += 1;

        // Block number: one or more digits, then a colon.
        let num_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == num_start || i >= b.len() || b[i] != b':' {
            return BTreeMap::new();
        }
        let Ok(number) = input[num_start..i].parse::<u8>() else {
            return BTreeMap::new();
        };
        i += 1;

        // Payload: scan to the matching close brace, tracking nesting.
        let content_start = i;
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
        if depth != 0 {
            return BTreeMap::new();
        }
        blocks.insert(number, input[content_start..i].to_string());
        i += 1; // past the closing brace
    }

    blocks
}
