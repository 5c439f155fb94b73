use std::rc::Rc;

use yew::prelude::*;

pub const HERO_PARALLAX_SPEED: f64 = 0.5;
pub const RIPPLE_LIFETIME_MS: u32 = 600;

pub fn hero_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * HERO_PARALLAX_SPEED)
}

/// Each floating element drifts a little faster than the one before it.
pub fn floating_transform(index: usize, scroll_y: f64) -> String {
    let speed = 0.3 + index as f64 * 0.1;
    format!("translateY({}px) rotate({}deg)", scroll_y * speed, scroll_y * 0.1)
}

/// A click ripple: a circle as large as the button's longer side, centred
/// on the click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    /// `left`/`top`/`width`/`height` are the button's client rect.
    pub fn from_click(left: f64, top: f64, width: f64, height: f64, client_x: f64, client_y: f64) -> Self {
        let size = width.max(height);
        Self {
            size,
            x: client_x - left - size / 2.0,
            y: client_y - top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {x}px; top: {y}px;",
            size = self.size,
            x = self.x,
            y = self.y
        )
    }
}

/// Ripples currently alive on one button. They all live equally long, so
/// they expire in the order they were spawned.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ripples {
    next_id: u32,
    live: Vec<(u32, Ripple)>,
}

pub enum RippleAction {
    Spawn(Ripple),
    ExpireOldest,
}

impl Ripples {
    pub fn live(&self) -> &[(u32, Ripple)] {
        &self.live
    }
}

impl Reducible for Ripples {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RippleAction::Spawn(ripple) => {
                next.live.push((next.next_id, ripple));
                next.next_id = next.next_id.wrapping_add(1);
            }
            RippleAction::ExpireOldest => {
                if next.live.is_empty() {
                    return self;
                }
                next.live.remove(0);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_hero_moves_at_half_speed() {
        assert_eq!(hero_transform(200.0), "translateY(100px)");
        assert_eq!(hero_transform(0.0), "translateY(0px)");
    }

    #[test]
    fn test_floating_elements_speed_up_by_index() {
        assert_eq!(floating_transform(0, 100.0), "translateY(30px) rotate(10deg)");
        assert_eq!(floating_transform(2, 100.0), "translateY(50px) rotate(10deg)");
    }

    #[test]
    fn test_ripple_is_centred_on_click() {
        let ripple = Ripple::from_click(10.0, 20.0, 120.0, 40.0, 70.0, 40.0);

        assert_eq!(ripple, Ripple { size: 120.0, x: 0.0, y: -40.0 });
        assert_eq!(ripple.style(), "width: 120px; height: 120px; left: 0px; top: -40px;");
    }

    #[test]
    fn test_oldest_ripple_expires_first() {
        let ripple = Ripple { size: 10.0, x: 0.0, y: 0.0 };
        let state = Rc::new(Ripples::default())
            .reduce(RippleAction::Spawn(ripple))
            .reduce(RippleAction::Spawn(ripple))
            .reduce(RippleAction::ExpireOldest);

        let ids: Vec<u32> = state.live().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1]);

        let state = state.reduce(RippleAction::ExpireOldest).reduce(RippleAction::ExpireOldest);
        assert!(state.live().is_empty());
    }
}
