// src/presentation/http/extractors.rs
//
// Authentication itself happens outside this core: the auth middleware in
// front of the router resolves the session/token and inserts an `Identity`
// into the request extensions. These extractors only read that result.
use crate::{application::error::ApplicationError, domain::identity::Identity};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub Identity);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(Self)
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::forbidden("authentication required"))
            })
    }
}
