use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::interactions::notify::{
    NotificationAction, Notifications, Phase, Toast, AUTO_DISMISS_MS, SLIDE_IN_DELAY_MS, SLIDE_OUT_MS,
};

pub type NotificationContext = UseReducerHandle<Notifications>;

/// Dispatcher for pushing toasts from anywhere under a
/// `NotificationProvider`. `None` if there is no provider above.
#[hook]
pub fn use_notifier() -> Option<UseReducerDispatcher<Notifications>> {
    use_context::<NotificationContext>().map(|context| context.dispatcher())
}

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &ProviderProps) -> Html {
    let notifications = use_reducer(Notifications::default);

    html! {
        <ContextProvider<NotificationContext> context={notifications.clone()}>
            { for props.children.iter() }
            <div class="notification-stack">
                { for notifications.toasts().iter().map(|toast| html! {
                    <ToastView key={toast.id} toast={toast.clone()} dispatcher={notifications.dispatcher()} />
                }) }
            </div>
            <style>
                {r#"
                    .notification-stack {
                        position: fixed;
                        top: 100px;
                        right: 20px;
                        z-index: 10000;
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                    }
                    .notification {
                        color: white;
                        padding: 16px 20px;
                        border-radius: 8px;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                        transition: transform 0.3s ease;
                        max-width: 400px;
                    }
                    .notification-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 12px;
                    }
                    .notification-close {
                        background: none;
                        border: none;
                        color: white;
                        font-size: 20px;
                        cursor: pointer;
                        padding: 0;
                        width: 24px;
                        height: 24px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        transition: background-color 0.2s;
                    }
                    .notification-close:hover {
                        background-color: rgba(255, 255, 255, 0.2);
                    }
                "#}
            </style>
        </ContextProvider<NotificationContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    toast: Toast,
    dispatcher: UseReducerDispatcher<Notifications>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastProps) -> Html {
    let ToastProps { toast, dispatcher } = props;

    // Each phase owns one timer; moving to the next phase drops it.
    {
        let dispatcher = dispatcher.clone();
        use_effect_with_deps(
            move |(id, phase): &(u32, Phase)| {
                let id = *id;
                let (delay, action): (u32, fn(u32) -> NotificationAction) = match phase {
                    Phase::Entering => (SLIDE_IN_DELAY_MS, NotificationAction::Reveal),
                    Phase::Shown => (AUTO_DISMISS_MS, NotificationAction::Dismiss),
                    Phase::Leaving => (SLIDE_OUT_MS, NotificationAction::Remove),
                };
                let timeout = Timeout::new(delay, move || dispatcher.dispatch(action(id)));

                move || drop(timeout)
            },
            (toast.id, toast.phase),
        );
    }

    let on_close = {
        let dispatcher = dispatcher.clone();
        let id = toast.id;
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NotificationAction::Dismiss(id)))
    };

    let style = format!(
        "background: {}; transform: {};",
        toast.severity.color(),
        toast.transform()
    );

    html! {
        <div class={classes!("notification", toast.severity.class())} style={style}>
            <div class="notification-content">
                <span>{ toast.message.clone() }</span>
                <button class="notification-close" onclick={on_close}>{"×"}</button>
            </div>
        </div>
    }
}
