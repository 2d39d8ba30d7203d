//! Shelve Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::LibraryRepositoryPort;
use crate::application::queries::{GetShelve, ListShelves};
use crate::domain::{Shelve, ShelveId};

/// GetShelve Handler
pub struct GetShelveHandler {
    library_repo: Arc<dyn LibraryRepositoryPort>,
}

impl GetShelveHandler {
    pub fn new(library_repo: Arc<dyn LibraryRepositoryPort>) -> Self {
        Self { library_repo }
    }

    pub async fn handle(&self, query: GetShelve) -> Result<Shelve, ApplicationError> {
        let Some(id) = ShelveId::parse(&query.id) else {
            return Err(ApplicationError::not_found("Shelve", query.id));
        };

        self.library_repo
            .find_shelve(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Shelve", query.id))
    }
}

/// ListShelves Handler
pub struct ListShelvesHandler {
    library_repo: Arc<dyn LibraryRepositoryPort>,
}

impl ListShelvesHandler {
    pub fn new(library_repo: Arc<dyn LibraryRepositoryPort>) -> Self {
        Self { library_repo }
    }

    pub async fn handle(&self, _query: ListShelves) -> Result<Vec<Shelve>, ApplicationError> {
        Ok(self.library_repo.list_shelves().await?)
    }
}
