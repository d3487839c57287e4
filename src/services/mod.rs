//! Orchestration layer between routes and the repository/gateway.
//!
//! Service functions are generic over the repository traits they need, check
//! roles up front and translate lower-level failures into [`ServiceError`].

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::gateway::GatewayError;
use crate::repository::errors::RepositoryError;

pub mod api;
pub mod commission;
pub mod dealer;
pub mod main;
pub mod sale;
pub mod selfcare;
pub mod stock;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    /// User-facing message about a rejected form submission.
    #[error("{0}")]
    Form(String),

    #[error("type constraint: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(RepositoryError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(err.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
