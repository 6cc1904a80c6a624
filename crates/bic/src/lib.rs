//! BIC and IBAN structural validation for the MT toolchain.
//!
//! A BIC (Bank Identifier Code) is an 8- or 11-character institution
//! identifier: 4-letter institution code, 2-letter country code, 2-character
//! location code, and an optional 3-character branch code. [`Bic::parse`]
//! decomposes and validates a candidate string; the generator treats a parse
//! failure as a hard precondition failure.
//!
//! Validation here is structural only: character classes, lengths, and (for
//! IBAN) the mod-97 check digits. No directory lookup is performed.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by BIC or IBAN validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BicError {
    /// The candidate has a length other than 8 or 11 characters.
    #[error("invalid BIC length {len}: expected 8 or 11 characters")]
    InvalidLength {
        /// The length of the rejected candidate.
        len: usize,
    },

    /// A component of the candidate contains characters outside its class.
    #[error("invalid {component}: {reason}")]
    InvalidComponent {
        /// The name of the offending component (e.g., `"country code"`).
        component: &'static str,
        /// A human-readable explanation of the rejection.
        reason: String,
    },
}

/// A structurally valid, decomposed Bank Identifier Code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bic {
    /// 4-letter institution (bank) code.
    pub institution: String,
    /// 2-letter ISO country code.
    pub country: String,
    /// 2-character location code.
    pub location: String,
    /// 3-character branch code, absent for the 8-character head-office form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// Branch code used to address an institution's head office.
const HEAD_OFFICE_BRANCH: &str = "XXX";

impl Bic {
    /// Parse and structurally validate a candidate BIC string.
    ///
    /// Accepts the 8-character head-office form and the 11-character
    /// branch form. Lowercase input is accepted and normalized to upper
    /// case. Returns the decomposed components on success.
    pub fn parse(candidate: &str) -> Result<Self, BicError> {
        let s = candidate.trim().to_ascii_uppercase();
        if s.len() != 8 && s.len() != 11 {
            return Err(BicError::InvalidLength { len: s.len() });
        }
        if !s.is_ascii() {
            return Err(BicError::InvalidComponent {
                component: "identifier",
                reason: "non-ASCII characters".to_string(),
            });
        }

        let institution = &s[0..4];
        if !institution.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(BicError::InvalidComponent {
                component: "institution code",
                reason: format!("{institution:?} must be 4 letters"),
            });
        }
        let country = &s[4..6];
        if !country.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(BicError::InvalidComponent {
                component: "country code",
                reason: format!("{country:?} must be 2 letters"),
            });
        }
        let location = &s[6..8];
        if !location.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(BicError::InvalidComponent {
                component: "location code",
                reason: format!("{location:?} must be 2 letters or digits"),
            });
        }
        let branch = if s.len() == 11 {
            let branch = &s[8..11];
            if !branch.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return Err(BicError::InvalidComponent {
                    component: "branch code",
                    reason: format!("{branch:?} must be 3 letters or digits"),
                });
            }
            Some(branch.to_string())
        } else {
            None
        };

        Ok(Self {
            institution: institution.to_string(),
            country: country.to_string(),
            location: location.to_string(),
            branch,
        })
    }

    /// Whether a candidate string is a structurally valid BIC.
    pub fn is_valid(candidate: &str) -> bool {
        Self::parse(candidate).is_ok()
    }

    /// The normalized 8-or-11-character form: 11 characters when a branch
    /// code is present and is not the head-office marker, 8 otherwise.
    pub fn normalized(&self) -> String {
        let mut s = self.prefix8();
        if let Some(branch) = &self.branch
            && branch != HEAD_OFFICE_BRANCH
        {
            s.push_str(branch);
        }
        s
    }

    /// The fixed 12-character logical terminal address used in the basic
    /// and application headers: the 8-character prefix, an `X` logical
    /// terminal placeholder, and the branch code (padded with the `XXX`
    /// head-office marker when absent).
    pub fn terminal_address(&self) -> String {
        let mut s = self.prefix8();
        s.push('X');
        s.push_str(self.branch.as_deref().unwrap_or(HEAD_OFFICE_BRANCH));
        s
    }

    fn prefix8(&self) -> String {
        let mut s = String::with_capacity(12);
        s.push_str(&self.institution);
        s.push_str(&self.country);
        s.push_str(&self.location);
        s
    }
}

impl std::fmt::Display for Bic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.normalized())
    }
}

// ─── IBAN ───────────────────────────────────────────────────────────────────

/// Whether a candidate string is a structurally valid IBAN.
///
/// Checks the 2-letter country code, 2-digit check digits, the overall
/// length bounds (15–34 characters), the alphanumeric character class, and
/// the ISO 7064 mod-97 checksum. Embedded spaces (paper format) are
/// tolerated and stripped before checking.
pub fn is_valid_iban(candidate: &str) -> bool {
    let s: String = candidate
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();
    if s.len() < 15 || s.len() > 34 {
        return false;
    }
    let bytes = s.as_bytes();
    if !bytes[0].is_ascii_uppercase() || !bytes[1].is_ascii_uppercase() {
        return false;
    }
    if !bytes[2].is_ascii_digit() || !bytes[3].is_ascii_digit() {
        return false;
    }
    if !bytes.iter().all(|b| b.is_ascii_alphanumeric()) {
        return false;
    }

    // ISO 7064: move the first four characters to the end, expand letters
    // to two digits (A=10..Z=35), and take the whole number mod 97.
    // Computed incrementally to avoid big-integer arithmetic.
    let rearranged = bytes[4..].iter().chain(&bytes[..4]);
    let mut rem: u32 = 0;
    for &b in rearranged {
        if b.is_ascii_digit() {
            rem = (rem * 10 + u32::from(b - b'0')) % 97;
        } else {
            rem = (rem * 100 + u32::from(b - b'A') + 10) % 97;
        }
    }
    rem == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── BIC parsing ─────────────────────────────────────────────────────

    #[test]
    fn parse_8_char_bic() {
        let bic = Bic::parse("DEUTDEFF").unwrap();
        assert_eq!(bic.institution, "DEUT");
        assert_eq!(bic.country, "DE");
        assert_eq!(bic.location, "FF");
        assert_eq!(bic.branch, None);
    }

    #[test]
    fn parse_11_char_bic() {
        let bic = Bic::parse("DEUTDEFF500").unwrap();
        assert_eq!(bic.branch.as_deref(), Some("500"));
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let bic = Bic::parse("  deutdeff  ").unwrap();
        assert_eq!(bic.normalized(), "DEUTDEFF");
    }

    #[test]
    fn parse_rejects_bad_lengths() {
        assert_eq!(
            Bic::parse("DEUTDEFF5"),
            Err(BicError::InvalidLength { len: 9 })
        );
        assert!(Bic::parse("").is_err());
    }

    #[test]
    fn parse_rejects_digit_in_institution() {
        let err = Bic::parse("DEU1DEFF").unwrap_err();
        assert!(matches!(
            err,
            BicError::InvalidComponent {
                component: "institution code",
                ..
            }
        ));
    }

    #[test]
    fn parse_rejects_digit_in_country() {
        assert!(Bic::parse("DEUT12FF").is_err());
    }

    // ── Normalization ───────────────────────────────────────────────────

    #[test]
    fn normalized_drops_head_office_branch() {
        assert_eq!(Bic::parse("DEUTDEFFXXX").unwrap().normalized(), "DEUTDEFF");
        assert_eq!(
            Bic::parse("DEUTDEFF500").unwrap().normalized(),
            "DEUTDEFF500"
        );
    }

    #[test]
    fn terminal_address_is_12_chars() {
        assert_eq!(
            Bic::parse("DEUTDEFF").unwrap().terminal_address(),
            "DEUTDEFFXXXX"
        );
        assert_eq!(
            Bic::parse("DEUTDEFF500").unwrap().terminal_address(),
            "DEUTDEFFX500"
        );
        assert_eq!(Bic::parse("AAAABBCC").unwrap().terminal_address().len(), 12);
    }

    #[test]
    fn display_uses_normalized_form() {
        assert_eq!(Bic::parse("deutdeffxxx").unwrap().to_string(), "DEUTDEFF");
    }

    #[test]
    fn bic_serde_roundtrip() {
        let bic = Bic::parse("DEUTDEFF500").unwrap();
        let json = serde_json::to_string(&bic).unwrap();
        let back: Bic = serde_json::from_str(&json).unwrap();
        assert_eq!(bic, back);
    }

    // ── IBAN ────────────────────────────────────────────────────────────

    #[test]
    fn valid_ibans() {
        assert!(is_valid_iban("GB82WEST12345698765432"));
        assert!(is_valid_iban("DE89370400440532013000"));
        assert!(is_valid_iban("FR1420041010050500013M02606"));
        // Paper format with spaces.
        assert!(is_valid_iban("GB82 WEST 1234 5698 7654 32"));
    }

    #[test]
    fn invalid_ibans() {
        // Wrong check digits.
        assert!(!is_valid_iban("GB82WEST12345698765433"));
        // Too short / empty.
        assert!(!is_valid_iban("GB82"));
        assert!(!is_valid_iban(""));
        // Check digits not numeric.
        assert!(!is_valid_iban("GBXXWEST12345698765432"));
        // Non-alphanumeric content.
        assert!(!is_valid_iban("GB82WEST1234569876543!"));
    }
}
