//! Product handlers

use axum::{
    extract::State,
    response::{Html, Redirect},
};
use minijinja::context;

use super::{
    extract::{ListFilter, ProductId, SubmittedForm},
    service::ProductService,
};
use crate::core::error::AppError;
use crate::infrastructure::templates::{Views, ADD_TEMPLATE, EDIT_TEMPLATE, LIST_TEMPLATE};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    pub views: Views,
}

/// GET / with optional `?filter=`
pub async fn list_products(
    State(state): State<AppState>,
    ListFilter(filter): ListFilter,
) -> Result<Html<String>, AppError> {
    let products = state.product_service.list(&filter).await?;

    Ok(state
        .views
        .render(LIST_TEMPLATE, context! { filter => filter, products => products })?)
}

/// GET /add-product
pub async fn add_product_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(state.views.render(ADD_TEMPLATE, context! {})?)
}

/// POST /add-product-post
pub async fn add_product(
    State(state): State<AppState>,
    SubmittedForm(form): SubmittedForm,
) -> Result<Redirect, AppError> {
    state.product_service.create(&form).await?;
    Ok(Redirect::to("/"))
}

/// GET /edit/:id
pub async fn edit_product_form(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Html<String>, AppError> {
    let product = state
        .product_service
        .get(id)
        .await?
        .ok_or(AppError::ProductMissing(id))?;

    Ok(state.views.render(EDIT_TEMPLATE, context! { product => product })?)
}

/// POST /edit-product-post/:id
pub async fn edit_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    SubmittedForm(form): SubmittedForm,
) -> Result<Redirect, AppError> {
    state.product_service.update(id, &form).await?;
    Ok(Redirect::to("/"))
}

/// POST /delete/:id
pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Redirect, AppError> {
    state.product_service.delete(id).await?;
    Ok(Redirect::to("/"))
}

/// Any method other than POST on the form targets.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
