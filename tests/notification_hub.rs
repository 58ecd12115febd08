// SPDX-License-Identifier: MPL-2.0
use iced::Color;
use iced_labeler::ui::observer::{Listener, ListenerError, ObservedAction};
use iced_labeler::ui::widgets::{ColorButton, PointerGesture};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Recorder {
    seen: RefCell<Vec<ObservedAction>>,
}

impl Listener for Recorder {
    fn on_action(&self, action: ObservedAction) -> Result<(), ListenerError> {
        self.seen.borrow_mut().push(action);
        Ok(())
    }
}

#[test]
fn double_click_reaches_registered_listener() {
    let recorder = Rc::new(Recorder::default());
    let mut button = ColorButton::new(Color::from_rgb8(230, 57, 70));
    button.hub_mut().add_listener(&recorder);

    let mut gesture = PointerGesture::press(2);
    let raised = button
        .handle_gesture(&mut gesture)
        .expect("recorder never fails");

    assert!(raised);
    assert!(gesture.is_consumed());
    assert_eq!(
        *recorder.seen.borrow(),
        vec![ObservedAction::EditObjectRequested]
    );
}

#[test]
fn removed_listener_hears_nothing() {
    let recorder = Rc::new(Recorder::default());
    let mut button = ColorButton::new(Color::BLACK);
    button.hub_mut().add_listener(&recorder);
    button.hub_mut().remove_listener(&recorder);

    button
        .handle_gesture(&mut PointerGesture::press(2))
        .expect("no listeners, no failures");

    assert!(recorder.seen.borrow().is_empty());
}

#[test]
fn consumed_double_click_is_not_raised_twice() {
    let first = Rc::new(Recorder::default());
    let second = Rc::new(Recorder::default());
    let mut outer = ColorButton::new(Color::BLACK);
    let mut inner = ColorButton::new(Color::WHITE);
    outer.hub_mut().add_listener(&first);
    inner.hub_mut().add_listener(&second);

    // The same gesture bubbles through two handlers; only the first may act on it.
    let mut gesture = PointerGesture::press(2);
    assert!(inner.handle_gesture(&mut gesture).unwrap());
    assert!(!outer.handle_gesture(&mut gesture).unwrap());

    assert_eq!(second.seen.borrow().len(), 1);
    assert!(first.seen.borrow().is_empty());
}

#[test]
fn dropped_listener_is_skipped() {
    let mut button = ColorButton::new(Color::BLACK);
    {
        let transient = Rc::new(Recorder::default());
        button.hub_mut().add_listener(&transient);
    }
    let survivor = Rc::new(Recorder::default());
    button.hub_mut().add_listener(&survivor);

    button.handle_gesture(&mut PointerGesture::press(2)).unwrap();

    assert_eq!(survivor.seen.borrow().len(), 1);
    assert_eq!(button.hub_mut().len(), 1);
}
