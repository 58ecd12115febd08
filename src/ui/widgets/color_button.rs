// SPDX-License-Identifier: MPL-2.0
//! Custom-painted toggle-style color button.
//!
//! The painted part is a [`ColorSwatch`] canvas that only turns raw mouse
//! events into [`PointerGesture`]s. The persistent [`ColorButton`] lives in
//! the owning screen's state, keeps the toggle flag, and owns the
//! [`NotificationHub`] through which a double-click is announced as
//! [`ObservedAction::EditObjectRequested`].

use crate::ui::design_tokens::{palette, sizing};
use crate::ui::observer::{NotificationHub, NotifyError, ObservedAction};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use std::time::{Duration, Instant};

/// Time threshold for double-click detection.
const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

/// Cursor travel (in logical pixels) after which a press becomes a drag.
const DRAG_THRESHOLD: f32 = 4.0;

/// Pointer gesture kinds the swatch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Press,
    Drag,
    Release,
}

/// A pointer gesture on its way through the handlers.
///
/// Once a handler consumes it, later handlers must ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerGesture {
    pub kind: GestureKind,
    /// Consecutive presses within the double-click threshold, starting at 1.
    pub click_count: u8,
    consumed: bool,
}

impl PointerGesture {
    #[must_use]
    pub fn press(click_count: u8) -> Self {
        Self {
            kind: GestureKind::Press,
            click_count,
            consumed: false,
        }
    }

    #[must_use]
    pub fn drag() -> Self {
        Self {
            kind: GestureKind::Drag,
            click_count: 0,
            consumed: false,
        }
    }

    #[must_use]
    pub fn release() -> Self {
        Self {
            kind: GestureKind::Release,
            click_count: 0,
            consumed: false,
        }
    }

    pub fn consume(&mut self) {
        self.consumed = true;
    }

    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

/// Persistent state of one color button.
#[derive(Debug)]
pub struct ColorButton {
    color: Color,
    selected: bool,
    hub: NotificationHub,
}

impl ColorButton {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            selected: false,
            hub: NotificationHub::new(),
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Listeners interested in this button's actions.
    pub fn hub_mut(&mut self) -> &mut NotificationHub {
        &mut self.hub
    }

    /// Reacts to one gesture.
    ///
    /// A double-click that nobody consumed yet raises `EditObjectRequested`
    /// and consumes the gesture. A single press flips the toggle. Everything
    /// else, including consumed gestures, drags, and triple clicks, is
    /// ignored. The first press of a double-click toggles like any single press.
    ///
    /// Returns whether an action was raised.
    ///
    /// # Errors
    ///
    /// Forwards the hub's [`NotifyError`]; the gesture is consumed regardless.
    pub fn handle_gesture(&mut self, gesture: &mut PointerGesture) -> Result<bool, NotifyError> {
        if gesture.is_consumed() || gesture.kind != GestureKind::Press {
            return Ok(false);
        }

        match gesture.click_count {
            1 => {
                self.selected = !self.selected;
                Ok(false)
            }
            2 => {
                gesture.consume();
                self.hub
                    .notify(ObservedAction::EditObjectRequested)
                    .map(|()| true)
            }
            _ => Ok(false),
        }
    }

    /// Canvas element painting this button.
    pub fn view<'a, Message: 'a>(
        &self,
        on_gesture: impl Fn(PointerGesture) -> Message + 'a,
    ) -> Element<'a, Message> {
        ColorSwatch::new(self.color, self.selected, on_gesture).into_element()
    }
}

/// Press tracking kept by the canvas between events.
#[derive(Debug, Clone, Default)]
pub struct ClickTracker {
    last_press: Option<Instant>,
    click_count: u8,
    pressed_at: Option<Point>,
    dragging: bool,
}

impl ClickTracker {
    /// Records a press and returns its click count.
    pub fn register_press(&mut self, position: Point, now: Instant) -> u8 {
        let continues = self
            .last_press
            .is_some_and(|t| now.duration_since(t) < DOUBLE_CLICK_THRESHOLD);

        self.click_count = if continues {
            self.click_count.saturating_add(1)
        } else {
            1
        };
        self.last_press = Some(now);
        self.pressed_at = Some(position);
        self.dragging = false;
        self.click_count
    }

    /// Records cursor movement; returns `true` when a drag just started.
    pub fn register_move(&mut self, position: Point) -> bool {
        let Some(origin) = self.pressed_at else {
            return false;
        };
        if self.dragging || origin.distance(position) < DRAG_THRESHOLD {
            return false;
        }
        self.dragging = true;
        // A drag breaks any click sequence.
        self.last_press = None;
        true
    }

    /// Records a release; returns `false` if no press was being tracked.
    pub fn register_release(&mut self) -> bool {
        self.dragging = false;
        self.pressed_at.take().is_some()
    }
}

/// Canvas program painting a swatch and reporting gestures.
pub struct ColorSwatch<'a, Message> {
    color: Color,
    selected: bool,
    on_gesture: Box<dyn Fn(PointerGesture) -> Message + 'a>,
}

impl<'a, Message: 'a> ColorSwatch<'a, Message> {
    pub fn new(
        color: Color,
        selected: bool,
        on_gesture: impl Fn(PointerGesture) -> Message + 'a,
    ) -> Self {
        Self {
            color,
            selected,
            on_gesture: Box::new(on_gesture),
        }
    }

    /// Creates a Canvas widget from this swatch.
    pub fn into_element(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::SWATCH))
            .height(Length::Fixed(sizing::SWATCH))
            .into()
    }

    fn publish(&self, gesture: PointerGesture) -> Option<Action<Message>> {
        Some(Action::publish((self.on_gesture)(gesture)).and_capture())
    }
}

impl<Message> canvas::Program<Message> for ColorSwatch<'_, Message> {
    type State = ClickTracker;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                let click_count = state.register_press(position, Instant::now());
                self.publish(PointerGesture::press(click_count))
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let position = cursor.position_in(bounds)?;
                if state.register_move(position) {
                    self.publish(PointerGesture::drag())
                } else {
                    None
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.register_release() {
                    self.publish(PointerGesture::release())
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let inset = if self.selected { 4.0 } else { 2.0 };
        let swatch = Path::rectangle(
            Point::new(inset, inset),
            Size::new(bounds.width - inset * 2.0, bounds.height - inset * 2.0),
        );
        frame.fill(&swatch, self.color);

        let outline = if self.selected {
            Stroke::default().with_width(3.0).with_color(palette::PRIMARY_500)
        } else if cursor.is_over(bounds) {
            Stroke::default().with_width(2.0).with_color(palette::GRAY_200)
        } else {
            Stroke::default().with_width(1.0).with_color(palette::GRAY_400)
        };
        frame.stroke(&swatch, outline);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::observer::{Listener, ListenerError};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Inbox {
        actions: RefCell<Vec<ObservedAction>>,
    }

    impl Listener for Inbox {
        fn on_action(&self, action: ObservedAction) -> Result<(), ListenerError> {
            self.actions.borrow_mut().push(action);
            Ok(())
        }
    }

    struct Refuses;

    impl Listener for Refuses {
        fn on_action(&self, _action: ObservedAction) -> Result<(), ListenerError> {
            Err(ListenerError::new("busy"))
        }
    }

    fn button_with(inbox: &Rc<Inbox>) -> ColorButton {
        let mut button = ColorButton::new(Color::from_rgb8(200, 40, 40));
        button.hub_mut().add_listener(inbox);
        button
    }

    #[test]
    fn double_click_raises_edit_request_and_consumes() {
        let inbox = Rc::new(Inbox::default());
        let mut button = button_with(&inbox);

        let mut gesture = PointerGesture::press(2);
        assert_eq!(button.handle_gesture(&mut gesture), Ok(true));
        assert!(gesture.is_consumed());
        assert_eq!(
            *inbox.actions.borrow(),
            vec![ObservedAction::EditObjectRequested]
        );
    }

    #[test]
    fn single_click_toggles_without_notifying() {
        let inbox = Rc::new(Inbox::default());
        let mut button = button_with(&inbox);

        let mut gesture = PointerGesture::press(1);
        assert_eq!(button.handle_gesture(&mut gesture), Ok(false));
        assert!(button.is_selected());
        assert!(!gesture.is_consumed());

        button.handle_gesture(&mut PointerGesture::press(1)).unwrap();
        assert!(!button.is_selected());
        assert!(inbox.actions.borrow().is_empty());
    }

    #[test]
    fn consumed_gesture_is_ignored() {
        let inbox = Rc::new(Inbox::default());
        let mut button = button_with(&inbox);

        let mut gesture = PointerGesture::press(2);
        gesture.consume();
        assert_eq!(button.handle_gesture(&mut gesture), Ok(false));
        assert!(inbox.actions.borrow().is_empty());
    }

    #[test]
    fn drags_releases_and_triple_clicks_raise_nothing() {
        let inbox = Rc::new(Inbox::default());
        let mut button = button_with(&inbox);

        for mut gesture in [
            PointerGesture::drag(),
            PointerGesture::release(),
            PointerGesture::press(3),
        ] {
            assert_eq!(button.handle_gesture(&mut gesture), Ok(false));
        }
        assert!(inbox.actions.borrow().is_empty());
        assert!(!button.is_selected());
    }

    #[test]
    fn listener_failure_still_consumes_gesture() {
        let refuses = Rc::new(Refuses);
        let inbox = Rc::new(Inbox::default());
        let mut button = ColorButton::new(Color::BLACK);
        button.hub_mut().add_listener(&refuses);
        button.hub_mut().add_listener(&inbox);

        let mut gesture = PointerGesture::press(2);
        let err = button.handle_gesture(&mut gesture).unwrap_err();
        assert!(gesture.is_consumed());
        assert_eq!(err.failures.len(), 1);
        assert_eq!(inbox.actions.borrow().len(), 1);
    }

    #[test]
    fn tracker_counts_presses_within_threshold() {
        let mut tracker = ClickTracker::default();
        let start = Instant::now();
        let origin = Point::new(5.0, 5.0);

        assert_eq!(tracker.register_press(origin, start), 1);
        assert!(tracker.register_release());
        assert_eq!(
            tracker.register_press(origin, start + Duration::from_millis(100)),
            2
        );
        assert_eq!(
            tracker.register_press(origin, start + Duration::from_millis(1000)),
            1
        );
    }

    #[test]
    fn tracker_reports_drag_once_and_breaks_click_sequence() {
        let mut tracker = ClickTracker::default();
        let start = Instant::now();

        tracker.register_press(Point::new(0.0, 0.0), start);
        assert!(!tracker.register_move(Point::new(1.0, 1.0)));
        assert!(tracker.register_move(Point::new(10.0, 0.0)));
        assert!(!tracker.register_move(Point::new(20.0, 0.0)));
        assert!(tracker.register_release());

        assert_eq!(
            tracker.register_press(Point::new(0.0, 0.0), start + Duration::from_millis(50)),
            1
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = ClickTracker::default();
        assert!(!tracker.register_release());
    }
}
