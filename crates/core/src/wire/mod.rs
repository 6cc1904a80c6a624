/// Block extractor — splits a raw message into its numbered blocks.
pub mod blocks;
/// Decoder entry points for whole messages and bare bodies.
pub mod decode;
/// Re-exports from the diagnostics crate.
pub mod diag;
/// JSON serialization helpers for the decoded record.
pub mod dump;
/// Fixed-width header codecs for blocks 1, 2, 3, and 5.
pub mod headers;
/// Decoded record model: tags, field values, headers.
pub mod record;
/// Re-exports of spec tables types used by the validator and generator.
pub mod tables;
/// Text-block tokenizer and its emission inverse.
pub mod text;
