//! Review domain types.

use serde::{Deserialize, Serialize};

/// Lowest accepted rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

/// Ratings at or above this value mark a book as "highly rated" by a user.
pub const HIGH_RATING_THRESHOLD: i32 = 4;

/// A user's review of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub book_id: i64,
    pub user_id: i64,
    pub review_text: String,
    pub rating: i32,
}

/// Data for creating a new review.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub book_id: i64,
    pub user_id: i64,
    pub review_text: String,
    pub rating: i32,
}

/// Whether a rating counts towards recommendations.
#[must_use]
pub const fn is_highly_rated(rating: i32) -> bool {
    rating >= HIGH_RATING_THRESHOLD
}
