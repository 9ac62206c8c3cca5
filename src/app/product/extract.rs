//! Request extraction for the product routes
//!
//! Only the path id can reject a request. The list filter and the submitted
//! form read what they can and fall back to empty values.

use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Form,
};
use tracing::debug;

use super::model::{first_value, ProductForm};
use crate::core::error::AppError;

/// The `:id` path segment parsed as a base-10 product id. Anything that is
/// not a valid `i32` is rejected with 400 before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i32);

impl std::str::FromStr for ProductId {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.parse::<i32>()
            .map(ProductId)
            .map_err(|_| AppError::InvalidProductId)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidProductId)?;

        raw.parse()
    }
}

/// `?filter=` on the list page; empty when absent, first value when repeated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ListFilter
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => pairs,
            Err(rejection) => {
                debug!("Ignoring unreadable query string: {}", rejection);
                Vec::new()
            }
        };

        Ok(ListFilter(first_value(&pairs, "filter").to_string()))
    }
}

/// Add/edit form body. A body that is missing or not urlencoded reads as an
/// empty form, which then fails at the store on its empty price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmittedForm(pub ProductForm);

#[async_trait]
impl<S> FromRequest<S> for SubmittedForm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(pairs)) => pairs,
            Err(rejection) => {
                debug!("Reading unusable form body as empty: {}", rejection);
                Vec::new()
            }
        };

        Ok(SubmittedForm(ProductForm::from_pairs(&pairs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_ids() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId(42));
        assert_eq!("-3".parse::<ProductId>().unwrap(), ProductId(-3));
    }

    #[test]
    fn rejects_non_numeric_and_out_of_range() {
        for raw in ["abc", "", "1.5", "12abc", " 7", "2147483648", "99999999999999999999"] {
            assert!(
                matches!(raw.parse::<ProductId>(), Err(AppError::InvalidProductId)),
                "{raw:?} should be rejected"
            );
        }
    }
}
