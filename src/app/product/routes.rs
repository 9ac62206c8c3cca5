//! Product routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handler::{
    add_product, add_product_form, delete_product, edit_product, edit_product_form,
    list_products, method_not_allowed, AppState,
};

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/add-product", get(add_product_form))
        .route(
            "/add-product-post",
            post(add_product).fallback(method_not_allowed),
        )
        .route("/edit/:id", get(edit_product_form))
        .route(
            "/edit-product-post/:id",
            post(edit_product).fallback(method_not_allowed),
        )
        .route("/delete/:id", post(delete_product).fallback(method_not_allowed))
}
