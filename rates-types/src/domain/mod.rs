//! Pure domain types.

mod currency;
mod quote;
mod snapshot;
mod source;

pub use currency::Currency;
pub use quote::{RateQuote, RawQuote, StoredQuote};
pub use snapshot::RateSnapshot;
pub use source::{ParserKind, SourceDocument, SourceId, SourceSpec};
