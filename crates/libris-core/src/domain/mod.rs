//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, text-generation backends).
//!
//! # Structure
//!
//! - `book` - Catalog entries (`Book`, `NewBook`, `BookSummary`)
//! - `review` - User reviews (`Review`, `NewReview`)
//! - `user` - Accounts and verified identities (`User`, `Role`, `Claims`)
//! - `messages` - Fixed user-facing outcome messages

mod book;
pub mod messages;
mod review;
mod user;

pub use book::{Book, BookSummary, NewBook};
pub use messages::Message;
pub use review::{
    HIGH_RATING_THRESHOLD, MAX_RATING, MIN_RATING, NewReview, Review, is_highly_rated,
};
pub use user::{Claims, NewUser, Profile, Role, User};
