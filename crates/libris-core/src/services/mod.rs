//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod app_core;
mod assistant_service;
mod catalog_service;
mod user_service;

pub use app_core::AppCore;
pub use assistant_service::{AssistantService, BookIdSummary, BookNameSummary, GeneratedSummary};
pub use catalog_service::CatalogService;
pub use user_service::{AccessToken, TOKEN_TYPE, UserService};
