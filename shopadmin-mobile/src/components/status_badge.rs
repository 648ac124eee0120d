//! Status badge component

use shopadmin_common::ProductStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: ProductStatus,
    pub label: String,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let class = match props.status {
        ProductStatus::Active => "status-badge status-active",
        ProductStatus::Inactive => "status-badge status-inactive",
    };

    html! {
        <span class={class}>{&props.label}</span>
    }
}
