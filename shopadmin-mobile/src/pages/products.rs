//! Product card grid for mobile UI

use chrono::{DateTime, Utc};
use shopadmin_common::format::{date_or_now, format_date, format_price};
use shopadmin_common::{Product, TextKey};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Card, StatusBadge};
use crate::context::{use_view_context, ViewContext};
use crate::router::Route;

/// Callback that requests deletion of `product` through `on_delete`.
pub fn delete_request(on_delete: &Callback<Product>, product: &Product) -> Callback<()> {
    let on_delete = on_delete.clone();
    let product = product.clone();
    Callback::from(move |_| {
        tracing::debug!(product_id = %product.product_id, "delete requested");
        on_delete.emit(product.clone());
    })
}

#[derive(Properties, PartialEq)]
pub struct ProductsMobileViewProps {
    pub data: Vec<Product>,
    pub on_delete: Callback<Product>,
    /// Shown in place of missing created/updated timestamps.
    #[prop_or_else(Utc::now)]
    pub now: DateTime<Utc>,
}

/// Responsive grid with one card per product
#[function_component(ProductsMobileView)]
pub fn products_mobile_view(props: &ProductsMobileViewProps) -> Html {
    let ctx = use_view_context();

    tracing::debug!(cards = props.data.len(), "rendering product grid");

    html! {
        <div class="products-grid" dir={ctx.locale().direction()}>
            {for props.data.iter().map(|product| html! {
                <ProductCard
                    key={product.product_id.clone()}
                    product={product.clone()}
                    on_delete={props.on_delete.clone()}
                    now={props.now}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    pub on_delete: Callback<Product>,
    pub now: DateTime<Utc>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let ctx = use_view_context();
    let product = &props.product;
    let title = product.display_title().to_string();
    let status = product.status();

    let on_delete = delete_request(&props.on_delete, product).reform(|_: MouseEvent| ());

    let media = html! {
        <img
            class="card-media"
            src={product.image_src(&ctx.config.placeholder_image).to_string()}
            alt={title.clone()}
        />
    };

    let actions = html! {
        <>
            <Link<Route>
                to={Route::ProductEdit { id: product.product_id.clone() }}
                classes={classes!("mobile-button", "primary")}
            >
                {ctx.t(TextKey::Edit)}
            </Link<Route>>
            <button
                class="icon-button danger"
                aria-label="delete"
                title={ctx.t(TextKey::Delete)}
                onclick={on_delete}
            >
                {"🗑️"}
            </button>
        </>
    };

    html! {
        <Card class="product-card" media={media} actions={actions}>
            <h3 class="product-title">
                <span class="label">{label(&ctx, TextKey::ProductTitle)}</span>
                {" "}
                {title}
            </h3>
            <div class="product-status">
                <span class="label">{label(&ctx, TextKey::Status)}</span>
                <StatusBadge status={status} label={ctx.t(status.label_key())} />
            </div>
            <p class="product-price">
                <span class="label">{label(&ctx, TextKey::Price)}</span>
                {" "}
                {format_price(&ctx.config.currency_symbol, product.price)}
            </p>
            {if let Some(price_sale) = product.price_sale {
                html! {
                    <p class="product-sale-price">
                        <span class="label">{label(&ctx, TextKey::PriceSale)}</span>
                        {" "}
                        {format_price(&ctx.config.currency_symbol, price_sale)}
                    </p>
                }
            } else {
                html! {}
            }}
            <p class="product-date">
                <span class="label">{label(&ctx, TextKey::CreatedAt)}</span>
                {" "}
                {format_date(date_or_now(product.created_at, props.now), ctx.locale())}
            </p>
            <p class="product-date">
                <span class="label">{label(&ctx, TextKey::UpdatedAt)}</span>
                {" "}
                {format_date(date_or_now(product.updated_at, props.now), ctx.locale())}
            </p>
        </Card>
    }
}

fn label(ctx: &ViewContext, key: TextKey) -> String {
    format!("{}:", ctx.t(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopadmin_common::LocalizedText;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Callback<Product>, Rc<RefCell<Vec<Product>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let callback = Callback::from(move |product: Product| sink.borrow_mut().push(product));
        (callback, calls)
    }

    #[test]
    fn test_delete_request_emits_product_once() {
        let (on_delete, calls) = recorder();
        let shirt = Product::new("p1", LocalizedText::en("Shirt"), 20.0);

        delete_request(&on_delete, &shirt).emit(());

        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(calls.borrow()[0], shirt);
    }

    #[test]
    fn test_delete_request_targets_its_own_card() {
        let (on_delete, calls) = recorder();
        let shirt = Product::new("p1", LocalizedText::en("Shirt"), 20.0);
        let hat = Product::new("p2", LocalizedText::en("Hat"), 12.0);

        let delete_shirt = delete_request(&on_delete, &shirt);
        let delete_hat = delete_request(&on_delete, &hat);

        delete_hat.emit(());
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(calls.borrow()[0].product_id, "p2");

        delete_shirt.emit(());
        assert_eq!(calls.borrow().len(), 2);
        assert_eq!(calls.borrow()[1].product_id, "p1");
    }

    #[test]
    fn test_label_appends_colon() {
        let ctx = ViewContext::default();
        assert_eq!(label(&ctx, TextKey::Price), "Price:");
    }
}
