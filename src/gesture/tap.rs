// SPDX-License-Identifier: MPL-2.0
//! Tap routing.
//!
//! Tapping the banner body opens the notification; tapping the dimmed backdrop
//! (or the close button) of an expanded banner only closes it. Touches that
//! land on the action list never reach the backdrop recognizer, so tapping a
//! button cannot close the card by accident.

use crate::banner::Presentation;

/// A point in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// What a tap landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapTarget {
    /// The banner itself (collapsed bar or expanded message card).
    BannerBody,
    /// The dimmed area around the expanded card.
    Backdrop,
    /// The list of action buttons.
    ActionList,
    /// The close button of the expanded card.
    CloseButton,
}

/// What a tap asks the banner to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapDecision {
    /// Open the notification: completion handler runs with `true`.
    SelectBanner,
    /// Close without notifying the caller.
    Dismiss,
}

/// Maps a tap to a decision for the current presentation.
#[must_use]
pub fn route_tap(target: TapTarget, presentation: Presentation) -> Option<TapDecision> {
    match (target, presentation) {
        (TapTarget::BannerBody, _) => Some(TapDecision::SelectBanner),
        (TapTarget::Backdrop | TapTarget::CloseButton, Presentation::Expanded) => {
            Some(TapDecision::Dismiss)
        }
        (TapTarget::Backdrop | TapTarget::CloseButton, Presentation::Collapsed) => None,
        (TapTarget::ActionList, _) => None,
    }
}

/// Delegate rule of the backdrop recognizer: touches inside the action list
/// are not delivered to it.
#[must_use]
pub fn backdrop_receives(point: Point, action_list: Option<Rect>) -> bool {
    !action_list.is_some_and(|rect| rect.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_tap_selects_in_both_presentations() {
        assert_eq!(
            route_tap(TapTarget::BannerBody, Presentation::Collapsed),
            Some(TapDecision::SelectBanner)
        );
        assert_eq!(
            route_tap(TapTarget::BannerBody, Presentation::Expanded),
            Some(TapDecision::SelectBanner)
        );
    }

    #[test]
    fn backdrop_tap_dismisses_only_when_expanded() {
        assert_eq!(
            route_tap(TapTarget::Backdrop, Presentation::Expanded),
            Some(TapDecision::Dismiss)
        );
        assert_eq!(route_tap(TapTarget::Backdrop, Presentation::Collapsed), None);
    }

    #[test]
    fn action_list_taps_are_not_routed() {
        assert_eq!(route_tap(TapTarget::ActionList, Presentation::Expanded), None);
    }

    #[test]
    fn backdrop_ignores_touches_in_action_list() {
        let list = Rect::new(10.0, 300.0, 300.0, 150.0);
        assert!(!backdrop_receives(Point::new(100.0, 320.0), Some(list)));
        assert!(backdrop_receives(Point::new(100.0, 50.0), Some(list)));
        assert!(backdrop_receives(Point::new(100.0, 320.0), None));
    }

    #[test]
    fn rect_edges_are_inclusive() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(!rect.contains(Point::new(10.1, 5.0)));
    }
}
