//! Placeholder handling for document numbering formats.
//!
//! A numbering format such as `INV-{YY}{MM}-{NO}` mixes literal text with
//! placeholder tokens enclosed in `{` and `}`. This crate only lists the
//! tokens; substituting values for them happens elsewhere.

mod extract;

pub use extract::{
    BraceExtractor, PlaceholderExtractor, Placeholders, extract,
    has_placeholders, placeholders,
};
