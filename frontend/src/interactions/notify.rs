use std::rc::Rc;

use yew::prelude::*;

pub const SLIDE_IN_DELAY_MS: u32 = 100;
pub const AUTO_DISMISS_MS: u32 = 5000;
pub const SLIDE_OUT_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn color(self) -> &'static str {
        match self {
            Severity::Success => "#10B981",
            Severity::Error => "#EF4444",
            Severity::Info => "#3B82F6",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
            Severity::Info => "notification-info",
        }
    }
}

/// Anything that can put a transient message in front of the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Mounted off-screen, waiting to slide in.
    Entering,
    Shown,
    /// Sliding out; removed once the transition ends.
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

impl Toast {
    pub fn transform(&self) -> &'static str {
        match self.phase {
            Phase::Shown => "translateX(0)",
            Phase::Entering | Phase::Leaving => "translateX(100%)",
        }
    }
}

pub enum NotificationAction {
    Push { message: String, severity: Severity },
    Reveal(u32),
    Dismiss(u32),
    Remove(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl Notifications {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    fn set_phase(&mut self, id: u32, from: &[Phase], to: Phase) {
        if let Some(toast) = self
            .toasts
            .iter_mut()
            .find(|toast| toast.id == id && from.contains(&toast.phase))
        {
            toast.phase = to;
        }
    }
}

impl Reducible for Notifications {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NotificationAction::Push { message, severity } => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    message,
                    severity,
                    phase: Phase::Entering,
                });
                next.next_id = next.next_id.wrapping_add(1);
            }
            NotificationAction::Reveal(id) => next.set_phase(id, &[Phase::Entering], Phase::Shown),
            // A close click and the auto-dismiss timer can both land; only
            // the first one starts the slide-out.
            NotificationAction::Dismiss(id) => {
                next.set_phase(id, &[Phase::Entering, Phase::Shown], Phase::Leaving)
            }
            NotificationAction::Remove(id) => next.toasts.retain(|toast| toast.id != id),
        }
        Rc::new(next)
    }
}

impl Notifier for UseReducerDispatcher<Notifications> {
    fn notify(&self, message: &str, severity: Severity) {
        self.dispatch(NotificationAction::Push {
            message: message.to_string(),
            severity,
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn push(state: Rc<Notifications>, message: &str) -> Rc<Notifications> {
        state.reduce(NotificationAction::Push {
            message: message.to_string(),
            severity: Severity::Info,
        })
    }

    #[test]
    fn test_toast_lifecycle() {
        let state = push(Rc::new(Notifications::default()), "hello");
        let id = state.toasts()[0].id;
        assert_eq!(state.toasts()[0].phase, Phase::Entering);
        assert_eq!(state.toasts()[0].transform(), "translateX(100%)");

        let state = state.reduce(NotificationAction::Reveal(id));
        assert_eq!(state.toasts()[0].transform(), "translateX(0)");

        let state = state.reduce(NotificationAction::Dismiss(id));
        assert_eq!(state.toasts()[0].phase, Phase::Leaving);

        let state = state.reduce(NotificationAction::Remove(id));
        assert!(state.toasts().is_empty());
    }

    #[test]
    fn test_reveal_after_dismiss_keeps_toast_leaving() {
        let state = push(Rc::new(Notifications::default()), "bye");
        let id = state.toasts()[0].id;

        let state = state
            .reduce(NotificationAction::Dismiss(id))
            .reduce(NotificationAction::Reveal(id));

        assert_eq!(state.toasts()[0].phase, Phase::Leaving);
    }

    #[test]
    fn test_ids_are_unique() {
        let state = push(push(Rc::new(Notifications::default()), "a"), "b");
        let ids: Vec<u32> = state.toasts().iter().map(|toast| toast.id).collect();

        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_remove_only_touches_one_toast() {
        let state = push(push(Rc::new(Notifications::default()), "a"), "b");
        let state = state.reduce(NotificationAction::Remove(0));

        assert_eq!(state.toasts().len(), 1);
        assert_eq!(state.toasts()[0].message, "b");
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Success.color(), "#10B981");
        assert_eq!(Severity::Error.color(), "#EF4444");
        assert_eq!(Severity::Info.color(), "#3B82F6");
    }
}
