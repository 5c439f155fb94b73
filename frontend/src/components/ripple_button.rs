use yew::prelude::*;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::interactions::motion::{Ripple, RippleAction, Ripples, RIPPLE_LIFETIME_MS};

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

/// A `.btn` that spawns a fading circle wherever it's clicked.
#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    let ripples = use_reducer(Ripples::default);

    let onclick = {
        let ripples = ripples.clone();
        let user_onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(button) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) {
                let rect = button.get_bounding_client_rect();
                ripples.dispatch(RippleAction::Spawn(Ripple::from_click(
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                    f64::from(e.client_x()),
                    f64::from(e.client_y()),
                )));

                let dispatcher = ripples.dispatcher();
                Timeout::new(RIPPLE_LIFETIME_MS, move || dispatcher.dispatch(RippleAction::ExpireOldest)).forget();
            }
            user_onclick.emit(e);
        })
    };

    html! {
        <button
            class={classes!("btn", props.class.clone())}
            type={props.button_type.clone()}
            disabled={props.disabled}
            style="position: relative; overflow: hidden;"
            onclick={onclick}
        >
            { for props.children.iter() }
            { for ripples.live().iter().map(|(id, ripple)| html! {
                <span key={*id} class="ripple" style={ripple.style()}></span>
            }) }
        </button>
    }
}
