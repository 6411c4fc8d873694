//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, Web)
//! receive an `AppCore` instance and use it to access all functionality.

use std::sync::Arc;

use crate::ports::{PasswordHasherPort, Repos, TextGenerationPort, TokenIssuerPort};

use super::{AssistantService, CatalogService, UserService};

/// The core application facade.
///
/// `AppCore` provides access to all core services. It's constructed at the
/// adapter's composition root (bootstrap.rs) with concrete implementations
/// of repositories, the text generator, and credential adapters.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos, generator, hasher, tokens);
///
/// let books = core.catalog().list().await?;
/// ```
pub struct AppCore {
    catalog: CatalogService,
    assistant: AssistantService,
    users: UserService,
}

impl AppCore {
    /// Create a new `AppCore` from repositories and adapters.
    pub fn new(
        repos: Repos,
        generator: Arc<dyn TextGenerationPort>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenIssuerPort>,
    ) -> Self {
        Self {
            catalog: CatalogService::new(repos.books.clone(), repos.reviews),
            assistant: AssistantService::new(repos.books, generator),
            users: UserService::new(repos.users, hasher, tokens),
        }
    }

    /// Access the catalog service.
    pub const fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// Access the assistant service.
    pub const fn assistant(&self) -> &AssistantService {
        &self.assistant
    }

    /// Access the user service.
    pub const fn users(&self) -> &UserService {
        &self.users
    }
}
