//! Classification Module - Assignment of alternatives to ordered categories.
//!
//! Turns the outranking relation table into optimistic and pessimistic
//! category assignments.

mod category;
mod result;
mod scanner;

pub use category::Category;
pub use result::{Assignment, ClassificationResult, RankEntry, SortedCategory};
pub use scanner::{CategoryScanner, Procedure};
