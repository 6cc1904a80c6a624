//! ISO 20022 (MX) element extraction.
//!
//! Deliberately simple tag scraping over `<Tag>…</Tag>` pairs — enough to
//! pull individual values (a message id, an amount, an end-to-end
//! reference) out of an MX document without pretending to be an XML
//! grammar. Nested same-name elements and CDATA are out of scope.

/// Extract the text content of the first `<name>…</name>` element.
///
/// Opening tags with attributes (`<Tag attr="…">`) are matched; the
/// returned content is trimmed of surrounding whitespace. Returns `None`
/// when no complete element is found.
pub fn first_element<'a>(xml: &'a str, name: &str) -> Option<&'a str> {
    element_from(xml, name, 0).map(|(content, _)| content)
}

/// Extract the text content of every `<name>…</name>` element, in document
/// order.
pub fn elements<'a>(xml: &'a str, name: &str) -> Vec<&'a str> {
    let mut found = Vec::new();
    let mut from = 0;
    while let Some((content, next)) = element_from(xml, name, from) {
        found.push(content);
        from = next;
    }
    found
}

/// Find one element at or after byte offset `from`; returns the trimmed
/// content and the offset to resume scanning at.
fn element_from<'a>(xml: &'a str, name: &str, mut from: usize) -> Option<(&'a str, usize)> {
    let open = format!("<{name}");
    let close = format!("</{name}>");

    loop {
        let at = xml.get(from..)?.find(&open)? + from;
        let after_name = at + open.len();

        // The opening tag must end here or continue with attributes;
        // `<MsgId` must not match `<MsgIdX>`.
        let content_start = match xml[after_name..].chars().next() {
            Some('>') => after_name + 1,
            Some(c) if c.is_whitespace() => {
                let gt = xml[after_name..].find('>')? + after_name;
                // Self-closing tags carry no content.
                if xml[..gt].ends_with('/') {
                    from = gt + 1;
                    continue;
                }
                gt + 1
            }
            _ => {
                from = after_name;
                continue;
            }
        };

        let end = xml[content_start..].find(&close)? + content_start;
        return Some((xml[content_start..end].trim(), end + close.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<Document xmlns="urn:iso:std:iso:20022:tech:xsd:pacs.008.001.08">
  <FIToFICstmrCdtTrf>
    <GrpHdr>
      <MsgId>MSG-2024-0001</MsgId>
      <NbOfTxs>2</NbOfTxs>
    </GrpHdr>
    <CdtTrfTxInf><EndToEndId>E2E-1</EndToEndId></CdtTrfTxInf>
    <CdtTrfTxInf><EndToEndId>E2E-2</EndToEndId></CdtTrfTxInf>
  </FIToFICstmrCdtTrf>
</Document>"#;

    #[test]
    fn first_element_finds_content() {
        assert_eq!(first_element(SAMPLE, "MsgId"), Some("MSG-2024-0001"));
        assert_eq!(first_element(SAMPLE, "NbOfTxs"), Some("2"));
    }

    #[test]
    fn first_element_missing_is_none() {
        assert_eq!(first_element(SAMPLE, "IntrBkSttlmAmt"), None);
    }

    #[test]
    fn elements_in_document_order() {
        assert_eq!(elements(SAMPLE, "EndToEndId"), ["E2E-1", "E2E-2"]);
    }

    #[test]
    fn attributes_on_opening_tag() {
        let xml = r#"<Amt Ccy="USD">100.00</Amt>"#;
        assert_eq!(first_element(xml, "Amt"), Some("100.00"));
    }

    #[test]
    fn name_prefix_does_not_match() {
        let xml = "<MsgIdX>wrong</MsgIdX><MsgId>right</MsgId>";
        assert_eq!(first_element(xml, "MsgId"), Some("right"));
    }

    #[test]
    fn content_is_trimmed() {
        let xml = "<Nm>\n  ACME CORP\n</Nm>";
        assert_eq!(first_element(xml, "Nm"), Some("ACME CORP"));
    }
}
