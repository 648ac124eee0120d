//! ShopAdmin Mobile UI
//!
//! Touch-friendly product administration screens built with Yew.
//! [`ProductsMobileView`] renders already-fetched products as a responsive
//! card grid with edit links and delete buttons; fetching, confirming and
//! performing deletes stay with the host application.

mod components;
pub mod context;
pub mod logging;
mod pages;
pub mod router;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

pub use components::{Card, StatusBadge};
pub use context::{use_view_context, ViewContext};
pub use pages::products::{
    delete_request, ProductCard, ProductCardProps, ProductsMobileView, ProductsMobileViewProps,
};
pub use router::Route;

#[derive(Properties, PartialEq)]
pub struct MobileShellProps {
    #[prop_or_default]
    pub context: ViewContext,
    #[prop_or_default]
    pub children: Children,
}

/// Browser router, view context and stylesheet around the host's screens
#[function_component(MobileShell)]
pub fn mobile_shell(props: &MobileShellProps) -> Html {
    html! {
        <BrowserRouter>
            <ContextProvider<ViewContext> context={props.context.clone()}>
                <style>{styles::MOBILE_STYLES}</style>
                <div class="mobile-app" lang={props.context.locale().code()}>
                    {props.children.clone()}
                </div>
            </ContextProvider<ViewContext>>
        </BrowserRouter>
    }
}
