//! Prompt templates for the text-generation backends.
//!
//! Every builder is a pure function: interpolated values are inserted
//! verbatim (no HTML or JSON escaping) and no input is ever rejected.
//! An empty list of highly rated books is rendered as the word `none`.

use std::fmt;

/// Number of recommendations requested from the model.
pub const RECOMMENDATION_COUNT: usize = 5;

/// Placeholder used when the user has no highly rated books.
pub const NO_BOOKS_SENTINEL: &str = "none";

/// A fully rendered prompt. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// Wrap an already rendered prompt string.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the prompt text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The four prompt use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRequest {
    /// Recommend books based on `"title by author"` entries.
    Recommendation { books: Vec<String> },
    /// Summarize arbitrary text.
    ContentSummary { text: String },
    /// Summarize a known book.
    SummaryByTitleAuthor { title: String, author: String },
    /// Summarize a book identified only by name.
    SummaryByName { name: String },
}

impl PromptRequest {
    /// Render the prompt for this use case.
    #[must_use]
    pub fn build(&self) -> Prompt {
        match self {
            Self::Recommendation { books } => recommendation_prompt(books),
            Self::ContentSummary { text } => content_summary_prompt(text),
            Self::SummaryByTitleAuthor { title, author } => {
                summary_by_title_author_prompt(title, author)
            }
            Self::SummaryByName { name } => summary_by_name_prompt(name),
        }
    }
}

/// Recommendation prompt with structured-output instructions.
#[must_use]
pub fn recommendation_prompt(books: &[String]) -> Prompt {
    let books_for_prompt = if books.is_empty() {
        NO_BOOKS_SENTINEL.to_string()
    } else {
        books.join(", ")
    };

    Prompt(format!(
        r#"<Instruction>
    <prompt>
        Based on the user's highly rated books: {books_for_prompt}, provide a list of {RECOMMENDATION_COUNT} book recommendations with their titles and authors.
    </prompt>
    <responseFormat>
        <format>JSON</format>
        <guidelines>
            Ensure the output is in JSON format and follows this structure:
            {{
                "recommendations": [
                    {{
                        "title": "string",
                        "author": "string",
                        "genre": "string",
                        "year_published": "string"
                    }}
                ]
            }}
        </guidelines>
    </responseFormat>
</Instruction>"#
    ))
}

#[must_use]
pub fn content_summary_prompt(text: &str) -> Prompt {
    Prompt(format!("Provide a short summary for the following - {text}."))
}

#[must_use]
pub fn summary_by_title_author_prompt(title: &str, author: &str) -> Prompt {
    Prompt(format!(
        "Provide a short summary for book - {title} by {author}."
    ))
}

#[must_use]
pub fn summary_by_name_prompt(name: &str) -> Prompt {
    Prompt(format!("Provide a short summary for book - {name}."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_prompt_empty_uses_none() {
        let prompt = recommendation_prompt(&[]);
        assert!(prompt.as_str().contains("highly rated books: none,"));
    }

    #[test]
    fn test_recommendation_prompt_lists_books() {
        let prompt = recommendation_prompt(&["Dune by Frank Herbert".to_string()]);
        assert!(prompt.as_str().contains("Dune by Frank Herbert"));
        assert!(!prompt.as_str().contains("books: none"));
    }

    #[test]
    fn test_recommendation_prompt_joins_with_comma() {
        let books = vec![
            "Dune by Frank Herbert".to_string(),
            "Emma by Jane Austen".to_string(),
        ];
        let prompt = recommendation_prompt(&books);
        assert!(
            prompt
                .as_str()
                .contains("Dune by Frank Herbert, Emma by Jane Austen")
        );
    }

    #[test]
    fn test_recommendation_prompt_describes_shape() {
        let prompt = recommendation_prompt(&[]);
        let text = prompt.as_str();
        assert!(text.contains("\"recommendations\""));
        assert!(text.contains("\"year_published\""));
        assert!(text.contains("list of 5 book recommendations"));
    }

    #[test]
    fn test_values_are_not_escaped() {
        let prompt = content_summary_prompt(r#"<b>"quoted" & {braced}</b>"#);
        assert_eq!(
            prompt.as_str(),
            r#"Provide a short summary for the following - <b>"quoted" & {braced}</b>."#
        );
    }

    #[test]
    fn test_summary_templates() {
        assert_eq!(
            summary_by_title_author_prompt("Dune", "Frank Herbert").as_str(),
            "Provide a short summary for book - Dune by Frank Herbert."
        );
        assert_eq!(
            summary_by_name_prompt("Dune").as_str(),
            "Provide a short summary for book - Dune."
        );
    }

    #[test]
    fn test_request_build_matches_free_functions() {
        let request = PromptRequest::SummaryByTitleAuthor {
            title: "Emma".to_string(),
            author: "Jane Austen".to_string(),
        };
        assert_eq!(
            request.build(),
            summary_by_title_author_prompt("Emma", "Jane Austen")
        );

        let request = PromptRequest::Recommendation { books: vec![] };
        assert_eq!(request.build(), recommendation_prompt(&[]));
    }

    #[test]
    fn test_empty_input_is_legal() {
        let prompt = content_summary_prompt("");
        assert_eq!(
            prompt.as_str(),
            "Provide a short summary for the following - ."
        );
    }
}
