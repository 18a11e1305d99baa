// src/application/error.rs
use crate::application::ports::markdown::RenderError;
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Errors surfaced by the post use cases.
///
/// Collaborator failures are wrapped without translation: a store error stays
/// a `DomainError`, a renderer error stays a `RenderError`.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ApplicationError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(DomainError::NotFound(_)))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Domain(DomainError::Conflict(_)))
    }
}
