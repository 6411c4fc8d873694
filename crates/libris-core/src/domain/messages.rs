//! Fixed user-facing outcome messages.
//!
//! Every response envelope carries one of these, so clients can rely on
//! stable wording instead of free-form strings built at each call site.

use serde::{Serialize, Serializer};

/// Outcome message attached to API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    BookCreated,
    BookAlreadyExists,
    BookNotFound,
    BooksRetrieved,
    BookRetrieved,
    BookUpdated,
    BookDeleted,
    ReviewAdded,
    ReviewsRetrieved,
    InvalidRating,
    BookSummaryRetrieved,
    RecommendationsGenerated,
    SummaryGenerated,
    GenerationFailed,
    UserRegistered,
    UsernameAlreadyRegistered,
    UserLoggedIn,
    InvalidCredentials,
    ProfileRetrieved,
    Unauthorized,
}

impl Message {
    /// The exact text sent to clients.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BookCreated => "Book created successfully",
            Self::BookAlreadyExists => "Book already exists",
            Self::BookNotFound => "Book not found",
            Self::BooksRetrieved => "Books retrieved successfully",
            Self::BookRetrieved => "Book retrieved successfully",
            Self::BookUpdated => "Book updated successfully",
            Self::BookDeleted => "Book deleted successfully",
            Self::ReviewAdded => "Review added successfully",
            Self::ReviewsRetrieved => "Reviews retrieved successfully",
            Self::InvalidRating => "Rating must be between 1 and 5",
            Self::BookSummaryRetrieved => "Book summary retrieved successfully",
            Self::RecommendationsGenerated => "Recommendations generated successfully",
            Self::SummaryGenerated => "Summary generated successfully",
            Self::GenerationFailed => "Failed to generate content",
            Self::UserRegistered => "User registered successfully",
            Self::UsernameAlreadyRegistered => "Username already registered",
            Self::UserLoggedIn => "User logged in successfully",
            Self::InvalidCredentials => "Invalid credentials",
            Self::ProfileRetrieved => "User profile retrieved successfully",
            Self::Unauthorized => "Invalid or expired token",
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
