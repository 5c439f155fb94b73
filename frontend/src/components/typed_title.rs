use yew::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::interactions::typing::{Typewriter, TypewriterAction, TYPING_SPEED_MS, TYPING_START_DELAY_MS};

#[derive(Properties, PartialEq)]
pub struct TypedTitleProps {
    pub text: AttrValue,
}

#[function_component(TypedTitle)]
pub fn typed_title(props: &TypedTitleProps) -> Html {
    let writer = {
        let text = props.text.clone();
        use_reducer(move || Typewriter::new(text.to_string()))
    };

    {
        let dispatcher = writer.dispatcher();
        let steps = writer.char_count();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    TimeoutFuture::new(TYPING_START_DELAY_MS).await;
                    dispatcher.dispatch(TypewriterAction::Start);
                    for _ in 0..steps {
                        dispatcher.dispatch(TypewriterAction::Advance);
                        TimeoutFuture::new(TYPING_SPEED_MS).await;
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <h1 class={classes!("hero-title", (!writer.is_complete()).then_some("typing"))}>
            { writer.visible().to_string() }
        </h1>
    }
}
