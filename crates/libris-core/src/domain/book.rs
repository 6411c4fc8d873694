//! Book domain types.

use serde::{Deserialize, Serialize};

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year_published: i32,
    pub summary: String,
}

impl Book {
    /// Render the book as `"<title> by <author>"`, the form used in prompts.
    #[must_use]
    pub fn title_by_author(&self) -> String {
        format!("{} by {}", self.title, self.author)
    }
}

/// Data for creating a book, or for replacing all fields of an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year_published: i32,
    pub summary: String,
}

impl NewBook {
    /// Attach a database ID, producing the persisted form.
    #[must_use]
    pub fn with_id(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            year_published: self.year_published,
            summary: self.summary,
        }
    }
}

/// Aggregate view of a book and its reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub title: String,
    pub author: String,
    pub summary: String,
    /// Mean rating across all reviews, `0.0` when there are none.
    pub average_rating: f64,
    pub total_reviews: usize,
}

impl BookSummary {
    /// Build the aggregate from a book and the ratings of its reviews.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_ratings(book: &Book, ratings: &[i32]) -> Self {
        let average_rating = if ratings.is_empty() {
            0.0
        } else {
            ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64
        };
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            summary: book.summary.clone(),
            average_rating,
            total_reviews: ratings.len(),
        }
    }
}
