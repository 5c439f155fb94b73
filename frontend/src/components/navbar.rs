use yew::prelude::*;

use crate::interactions::nav::is_active_link;
use crate::interactions::page::hamburger_bars;

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#companies", "Companies"),
    ("#services", "Services"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active_section: Option<String>,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    /// Called with the section id (without `#`) of a clicked link.
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let NavbarProps { active_section, menu_open, on_toggle_menu, on_navigate } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let bars = hamburger_bars(*menu_open);

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="#home" class="nav-logo">{"LiteNode"}</a>
                <ul class={classes!("nav-menu", menu_open.then_some("active"))}>
                    { for NAV_LINKS.iter().map(|&(href, label)| {
                        let onclick = {
                            let on_navigate = on_navigate.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_navigate.emit(href.trim_start_matches('#'));
                            })
                        };
                        let active = is_active_link(href, active_section.as_deref());
                        html! {
                            <li>
                                <a href={href} class={classes!(active.then_some("active"))} onclick={onclick}>{ label }</a>
                            </li>
                        }
                    }) }
                </ul>
                <button class={classes!("hamburger", menu_open.then_some("active"))} onclick={toggle_menu}>
                    { for bars.iter().map(|bar| html! { <span style={bar.css()}></span> }) }
                </button>
            </div>
        </nav>
    }
}
