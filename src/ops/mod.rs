//! Terminal algorithms written once against the cursor protocol.
//!
//! The provided methods of [`Sequence`](crate::Sequence) call into these;
//! sources with cheaper answers (a known count, positional access) override the
//! trait methods instead of these functions.

pub mod aggregate;
pub mod conversion;
pub mod element;
pub mod quantifier;
