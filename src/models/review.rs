use serde::{Deserialize, Serialize};

/// A single post-race review. Append-only: records carry no id and are
/// never updated or deleted, so insertion order is the only order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
  /// Run date as entered on the review form
  pub run_date: String,

  /// Overall rating, 1-5
  pub rating: u8,

  /// Free-text notes; keyword matching drives future plan adjustments
  pub notes: String,
}

/// The full review log, read and written as a whole collection.
pub type ReviewHistory = Vec<ReviewRecord>;
