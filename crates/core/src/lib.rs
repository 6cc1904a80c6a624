//! MT toolchain core library.
//!
//! Provides decoding, validation, and generation of SWIFT FIN ("MT")
//! financial messages. The main entry points are [`decode`] for parsing raw
//! wire text into a structured record, [`validate`] for checking a record
//! against the field specification tables, and [`generate`] for producing
//! wire text from typed inputs.
//!
//! All operations are pure, synchronous functions over immutable inputs:
//! they perform no I/O and share no mutable state beyond the read-only
//! specification registry, so any number of calls may run in parallel.

#![warn(missing_docs)]

/// SWIFT amount and value-date helpers.
pub mod amount;
/// Wire-format generation from typed per-message-type inputs.
pub mod generate;
/// ISO 20022 (MX) element extraction by tag scraping.
pub mod mx;
/// Decoded-record validation against the field specification tables.
pub mod validate;
/// FIN wire format: blocks, headers, text-block tokenizer, record model.
pub mod wire;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Decoder
pub use wire::decode::{decode, decode_body};

// Record model
pub use wire::record::{
    AppHeader, BasicHeader, FieldMap, FieldValue, ParsedMessage, SubFields, Tag,
};

// Diagnostics (re-exported from the diagnostics crate)
pub use wire::diag::{Diagnostic, Severity, codes};

// Validator
pub use validate::{ValidationResult, validate, validate_str};

// Generator
pub use generate::{GenerateError, GenerateRequest, MessageBody, generate};

// Tables
pub use wire::tables::{SpecTables, registry};

// Serialization helpers
pub use wire::dump::to_pretty_json;
