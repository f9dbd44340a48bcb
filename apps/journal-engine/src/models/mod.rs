//! Trade record and raw-input types.

mod draft;
mod trade;

pub use draft::{TradeDraft, ValidationError};
pub use trade::{Market, Outcome, Side, Trade, UnknownVariant};

#[cfg(test)]
pub(crate) use draft::test_support;
