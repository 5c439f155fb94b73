use yew::prelude::*;

use crate::hooks::viewport::use_reveal;
use crate::interactions::visibility::{reveal_classes, WatchOptions};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), WatchOptions::FADE_IN);

    html! {
        <div ref={node} class={classes!(props.class.clone(), reveal_classes(visible))}>
            { for props.children.iter() }
        </div>
    }
}
