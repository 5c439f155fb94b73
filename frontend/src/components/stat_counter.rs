use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::hooks::frames::drive_frames;
use crate::hooks::viewport::use_reveal;
use crate::interactions::counter::{StatCounter, COUNT_DURATION_MS, COUNT_START_DELAY_MS};
use crate::interactions::visibility::{reveal_classes, WatchOptions};

#[derive(Properties, PartialEq)]
pub struct StatProps {
    /// Label as written, e.g. `1200+`.
    pub value: AttrValue,
    pub caption: AttrValue,
}

#[function_component(Stat)]
pub fn stat(props: &StatProps) -> Html {
    let node = use_node_ref();
    // Same element, two observers: the fade starts early, counting waits
    // until half the stat is on screen.
    let faded_in = use_reveal(node.clone(), WatchOptions::FADE_IN);
    let in_view = use_reveal(node.clone(), WatchOptions::STATS);

    let counter = {
        let value = props.value.clone();
        use_mut_ref(move || StatCounter::new(&value))
    };
    let display = {
        let value = props.value.clone();
        use_state(move || value.to_string())
    };

    {
        let counter = counter.clone();
        let display = display.setter();
        use_effect_with_deps(
            move |in_view: &bool| {
                let mut pending = None;
                let animation = if *in_view && !counter.borrow().is_counted() {
                    counter.borrow_mut().start(COUNT_DURATION_MS)
                } else {
                    None
                };
                if let Some(animation) = animation {
                    display.set(counter.borrow().display().to_string());

                    let on_frame = {
                        let counter = counter.clone();
                        let display = display.clone();
                        Callback::from(move |value: u64| {
                            counter.borrow_mut().show_frame(value);
                            display.set(counter.borrow().display().to_string());
                        })
                    };
                    let on_done = Callback::from(move |_| {
                        counter.borrow_mut().finish();
                        display.set(counter.borrow().display().to_string());
                    });
                    pending = Some(Timeout::new(COUNT_START_DELAY_MS, move || {
                        drive_frames(animation, on_frame, on_done)
                    }));
                }

                move || drop(pending)
            },
            in_view,
        );
    }

    html! {
        <div ref={node} class={classes!("stat", reveal_classes(faded_in))}>
            <h4>{ (*display).clone() }</h4>
            <p>{ props.caption.clone() }</p>
        </div>
    }
}
