//! Router configuration for the product screens

use yew_router::prelude::*;

/// Application routes
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/products")]
    Products,
    #[at("/products/:id")]
    ProductEdit { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}
