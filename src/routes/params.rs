use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::{Uri, request::Parts},
};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

/// Decoded query string pairs in request order. An undecodable query is
/// treated as empty so the handler reports the parameter as missing.
struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    fn from_uri(uri: &Uri) -> Self {
        match Query::<Vec<(String, String)>>::try_from_uri(uri) {
            Ok(Query(pairs)) => Self(pairs),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "query string ignored");
                Self(Vec::new())
            }
        }
    }

    /// First value for `key`; later repeats are ignored.
    fn first(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

/// Present-but-empty query values are treated as missing.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Debug, Default, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemIdQuery {
    /// Item id
    pub id: Option<String>,
}

impl ItemIdQuery {
    pub fn require(&self) -> AppResult<&str> {
        non_empty(&self.id)
            .ok_or_else(|| AppError::BadRequest("missing id query parameter".into()))
    }
}

impl<S> FromRequestParts<S> for ItemIdQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = QueryPairs::from_uri(&parts.uri);
        Ok(Self {
            id: pairs.first("id"),
        })
    }
}

#[derive(Debug, Default, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WishlistEntryQuery {
    /// Owner of the wishlist
    pub user_id: Option<String>,
    /// Item id to add or remove
    pub item_id: Option<String>,
}

impl WishlistEntryQuery {
    pub fn require(&self) -> AppResult<(&str, &str)> {
        match (non_empty(&self.user_id), non_empty(&self.item_id)) {
            (Some(user_id), Some(item_id)) => Ok((user_id, item_id)),
            _ => Err(AppError::BadRequest(
                "missing user_id or item_id query parameter".into(),
            )),
        }
    }
}

impl<S> FromRequestParts<S> for WishlistEntryQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = QueryPairs::from_uri(&parts.uri);
        Ok(Self {
            user_id: pairs.first("user_id"),
            item_id: pairs.first("item_id"),
        })
    }
}

#[derive(Debug, Default, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WishlistUserQuery {
    /// Owner of the wishlist
    pub user_id: Option<String>,
}

impl WishlistUserQuery {
    pub fn require(&self) -> AppResult<&str> {
        non_empty(&self.user_id)
            .ok_or_else(|| AppError::BadRequest("missing user_id query parameter".into()))
    }
}

impl<S> FromRequestParts<S> for WishlistUserQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = QueryPairs::from_uri(&parts.uri);
        Ok(Self {
            user_id: pairs.first("user_id"),
        })
    }
}
