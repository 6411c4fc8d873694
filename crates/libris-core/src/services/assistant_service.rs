//! Assistant service - model-backed recommendations and summaries.
//!
//! Each operation follows the same pipeline: gather domain data, render a
//! prompt, call the text generator, and (for recommendations only) normalize
//! the answer into structured data. A generator that returns
//! [`ModelOutput::NoContent`] surfaces as [`CoreError::GenerationFailed`].

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{Book, HIGH_RATING_THRESHOLD, Message};
use crate::normalize::{Normalized, normalize};
use crate::ports::{BookRepository, CoreError, ModelOutput, RepositoryError, TextGenerationPort};
use crate::prompts::{Prompt, PromptRequest};

/// Summary generated for arbitrary text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSummary {
    pub summary: String,
}

/// Summary generated for a catalog book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookIdSummary {
    pub book_id: i64,
    pub summary: String,
}

/// Summary generated for a book known only by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookNameSummary {
    pub book_name: String,
    pub summary: String,
}

/// Service for model-backed features.
pub struct AssistantService {
    books: Arc<dyn BookRepository>,
    generator: Arc<dyn TextGenerationPort>,
}

impl AssistantService {
    /// Create a new assistant service.
    pub fn new(books: Arc<dyn BookRepository>, generator: Arc<dyn TextGenerationPort>) -> Self {
        Self { books, generator }
    }

    /// Recommend books based on what the user rated highly.
    ///
    /// The model's answer is normalized; text that cannot be parsed is
    /// returned as [`Normalized::Raw`] rather than treated as an error.
    pub async fn recommendations(&self, user_id: i64) -> Result<Normalized, CoreError> {
        let liked: Vec<String> = self
            .books
            .list_rated_by_user(user_id, HIGH_RATING_THRESHOLD)
            .await?
            .iter()
            .map(Book::title_by_author)
            .collect();
        tracing::debug!(user_id, liked = liked.len(), "Building recommendation prompt");

        let prompt = PromptRequest::Recommendation { books: liked }.build();
        let text = self.generate(&prompt).await?;
        let normalized = normalize(&text);
        if !normalized.is_structured() {
            tracing::info!(user_id, "Recommendations returned as raw text");
        }
        Ok(normalized)
    }

    /// Summarize free text.
    pub async fn summarize_text(&self, content: String) -> Result<GeneratedSummary, CoreError> {
        let prompt = PromptRequest::ContentSummary { text: content }.build();
        let summary = self.generate(&prompt).await?;
        Ok(GeneratedSummary { summary })
    }

    /// Summarize a catalog book by ID.
    pub async fn summarize_book(&self, book_id: i64) -> Result<BookIdSummary, CoreError> {
        let book = self.books.get_by_id(book_id).await.map_err(|e| match e {
            RepositoryError::NotFound(_) => CoreError::NotFound(Message::BookNotFound),
            other => CoreError::Repository(other),
        })?;

        let prompt = PromptRequest::SummaryByTitleAuthor {
            title: book.title,
            author: book.author,
        }
        .build();
        let summary = self.generate(&prompt).await?;
        Ok(BookIdSummary { book_id, summary })
    }

    /// Summarize a book identified only by name. The catalog is not consulted.
    pub async fn summarize_by_name(&self, book_name: String) -> Result<BookNameSummary, CoreError> {
        let prompt = PromptRequest::SummaryByName {
            name: book_name.clone(),
        }
        .build();
        let summary = self.generate(&prompt).await?;
        Ok(BookNameSummary { book_name, summary })
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, CoreError> {
        match self.generator.generate(prompt).await {
            ModelOutput::Text(text) => Ok(text),
            ModelOutput::NoContent => {
                tracing::warn!(prompt_len = prompt.len(), "Text generation produced no content");
                Err(CoreError::GenerationFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewBook;
    use crate::ports::book_repository::MockBookRepository;
    use crate::ports::text_generation::MockTextGenerationPort;
    use serde_json::json;

    fn book(id: i64, title: &str, author: &str) -> Book {
        NewBook {
            title: title.to_string(),
            author: author.to_string(),
            genre: "Fiction".to_string(),
            year_published: 2000,
            summary: String::new(),
        }
        .with_id(id)
    }

    fn service(books: MockBookRepository, generator: MockTextGenerationPort) -> AssistantService {
        AssistantService::new(Arc::new(books), Arc::new(generator))
    }

    #[tokio::test]
    async fn test_recommendations_use_highly_rated_books() {
        let mut books = MockBookRepository::new();
        books
            .expect_list_rated_by_user()
            .withf(|user_id, min| *user_id == 7 && *min == 4)
            .returning(|_, _| Ok(vec![book(1, "Dune", "Frank Herbert")]));

        let mut generator = MockTextGenerationPort::new();
        generator
            .expect_generate()
            .withf(|p| p.as_str().contains("highly rated books: Dune by Frank Herbert,"))
            .times(1)
            .returning(|_| {
                ModelOutput::Text(
                    "Sure!\n```json\n{\"recommendations\": [{\"title\": \"Emma\"}]}\n```".into(),
                )
            });

        let out = service(books, generator).recommendations(7).await.unwrap();
        assert_eq!(
            out,
            Normalized::Structured(json!({"recommendations": [{"title": "Emma"}]}))
        );
    }

    #[tokio::test]
    async fn test_recommendations_without_ratings_use_none() {
        let mut books = MockBookRepository::new();
        books
            .expect_list_rated_by_user()
            .returning(|_, _| Ok(vec![]));

        let mut generator = MockTextGenerationPort::new();
        generator
            .expect_generate()
            .withf(|p| p.as_str().contains("highly rated books: none,"))
            .returning(|_| ModelOutput::Text("I can't help with that".into()));

        let out = service(books, generator).recommendations(1).await.unwrap();
        assert_eq!(out, Normalized::Raw("I can't help with that".to_string()));
    }

    #[tokio::test]
    async fn test_no_content_is_generation_failure() {
        let mut generator = MockTextGenerationPort::new();
        generator
            .expect_generate()
            .returning(|_| ModelOutput::NoContent);

        let err = service(MockBookRepository::new(), generator)
            .summarize_text("anything".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::GenerationFailed));
        assert_eq!(err.to_string(), "Failed to generate content");
    }

    #[tokio::test]
    async fn test_empty_text_is_still_success() {
        let mut generator = MockTextGenerationPort::new();
        generator
            .expect_generate()
            .returning(|_| ModelOutput::Text(String::new()));

        let out = service(MockBookRepository::new(), generator)
            .summarize_text(String::new())
            .await
            .unwrap();
        assert_eq!(out.summary, "");
    }

    #[tokio::test]
    async fn test_summarize_book_uses_title_and_author() {
        let mut books = MockBookRepository::new();
        books
            .expect_get_by_id()
            .returning(|id| Ok(book(id, "Emma", "Jane Austen")));
        let mut generator = MockTextGenerationPort::new();
        generator
            .expect_generate()
            .withf(|p| p.as_str() == "Provide a short summary for book - Emma by Jane Austen.")
            .returning(|_| ModelOutput::Text("A matchmaker.".into()));

        let out = service(books, generator).summarize_book(3).await.unwrap();
        assert_eq!(
            out,
            BookIdSummary {
                book_id: 3,
                summary: "A matchmaker.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_summarize_missing_book_skips_generation() {
        let mut books = MockBookRepository::new();
        books
            .expect_get_by_id()
            .returning(|id| Err(RepositoryError::NotFound(format!("id={id}"))));
        let mut generator = MockTextGenerationPort::new();
        generator.expect_generate().never();

        let err = service(books, generator).summarize_book(3).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(Message::BookNotFound)));
    }

    #[tokio::test]
    async fn test_summarize_by_name() {
        let mut generator = MockTextGenerationPort::new();
        generator
            .expect_generate()
            .withf(|p| p.as_str() == "Provide a short summary for book - Walden.")
            .returning(|_| ModelOutput::Text("Woods.".into()));

        let out = service(MockBookRepository::new(), generator)
            .summarize_by_name("Walden".to_string())
            .await
            .unwrap();
        assert_eq!(out.book_name, "Walden");
        assert_eq!(out.summary, "Woods.");
    }
}
