//! One extraction strategy per page shape.
//!
//! Ordering within a chain is declared in [`crate::strategy`], not here.

mod card;
mod fulltext;
mod keyed;
mod labeled;
mod quote_page;
mod tabular;

pub use card::CardColumns;
pub use fulltext::FullTextPattern;
pub use keyed::KeyedElements;
pub use labeled::LabeledColumns;
pub use quote_page::QuoteMarker;
pub use tabular::TableRows;
