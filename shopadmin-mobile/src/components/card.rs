//! Card component for mobile UI

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub media: Option<Html>,
    #[prop_or_default]
    pub actions: Option<Html>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            {if let Some(ref media) = props.media {
                media.clone()
            } else {
                html! {}
            }}
            <div class="card-content">
                {props.children.clone()}
            </div>
            {if let Some(ref actions) = props.actions {
                html! { <div class="card-actions">{actions.clone()}</div> }
            } else {
                html! {}
            }}
        </div>
    }
}
