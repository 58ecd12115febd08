// SPDX-License-Identifier: MPL-2.0
//! Label class list with one color button per class.
//!
//! Every row's [`ColorButton`] gets its own [`EditRequestListener`]. The
//! button never learns about this screen: it only raises
//! `EditObjectRequested` through its hub, and the listener queues the row
//! index for the screen to pick up after the gesture was handled.

use crate::labels::{self, LabelClass, RenameError};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::observer::{Listener, ListenerError, ObservedAction};
use crate::ui::widgets::color_button::{ColorButton, PointerGesture};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, text_input, Column, Row, Text},
    Element, Length,
};
use std::cell::RefCell;
use std::rc::Rc;

type RequestInbox = Rc<RefCell<Vec<usize>>>;

/// Queues edit requests raised by one row's color button.
#[derive(Debug)]
pub struct EditRequestListener {
    index: usize,
    inbox: RequestInbox,
}

impl Listener for EditRequestListener {
    fn on_action(&self, action: ObservedAction) -> Result<(), ListenerError> {
        match action {
            ObservedAction::EditObjectRequested => {
                let mut inbox = self
                    .inbox
                    .try_borrow_mut()
                    .map_err(|_| ListenerError::new("edit request inbox is busy"))?;
                inbox.push(self.index);
                Ok(())
            }
        }
    }
}

struct Entry {
    class: LabelClass,
    button: ColorButton,
}

/// Inline rename editor for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Editor {
    index: usize,
    draft: String,
    error: Option<&'static str>,
}

/// Messages emitted by the label class screen.
#[derive(Debug, Clone)]
pub enum Message {
    Gesture {
        index: usize,
        gesture: PointerGesture,
    },
    DraftChanged(String),
    SaveEdit,
    CancelEdit,
    OpenAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenAbout,
}

/// State for the label class screen.
pub struct State {
    entries: Vec<Entry>,
    // The hubs only hold weak references; these keep the listeners alive.
    listeners: Vec<Rc<EditRequestListener>>,
    requests: RequestInbox,
    editor: Option<Editor>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(labels::default_classes())
    }
}

impl State {
    #[must_use]
    pub fn new(classes: Vec<LabelClass>) -> Self {
        let requests = RequestInbox::default();
        let mut entries = Vec::with_capacity(classes.len());
        let mut listeners = Vec::with_capacity(classes.len());

        for (index, class) in classes.into_iter().enumerate() {
            let mut button = ColorButton::new(class.color());
            let listener = Rc::new(EditRequestListener {
                index,
                inbox: Rc::clone(&requests),
            });
            button.hub_mut().add_listener(&listener);
            listeners.push(listener);
            entries.push(Entry { class, button });
        }

        Self {
            entries,
            listeners,
            requests,
            editor: None,
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &LabelClass> {
        self.entries.iter().map(|entry| &entry.class)
    }

    /// Index of the row whose rename editor is open.
    #[must_use]
    pub fn editing(&self) -> Option<usize> {
        self.editor.as_ref().map(|editor| editor.index)
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.entries
            .get(index)
            .is_some_and(|entry| entry.button.is_selected())
    }

    /// Stops `index`'s button from opening the editor.
    pub fn detach_listener(&mut self, index: usize) {
        if let (Some(entry), Some(listener)) =
            (self.entries.get_mut(index), self.listeners.get(index))
        {
            entry.button.hub_mut().remove_listener(listener);
        }
    }

    fn handle_gesture(&mut self, index: usize, mut gesture: PointerGesture) {
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        if let Err(err) = entry.button.handle_gesture(&mut gesture) {
            tracing::warn!(index, %err, "edit request listeners failed");
        }

        let requested = self.requests.borrow_mut().drain(..).last();
        if let Some(index) = requested {
            self.open_editor(index);
        }
    }

    fn open_editor(&mut self, index: usize) {
        let Some(entry) = self.entries.get(index) else {
            return;
        };
        tracing::debug!(index, class = entry.class.name(), "editing label class");
        self.editor = Some(Editor {
            index,
            draft: entry.class.name().to_string(),
            error: None,
        });
    }

    fn save_edit(&mut self) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        let Some(entry) = self.entries.get_mut(editor.index) else {
            self.editor = None;
            return;
        };
        match entry.class.rename(&editor.draft) {
            Ok(()) => self.editor = None,
            Err(RenameError::Blank) => editor.error = Some("A class name cannot be blank."),
        }
    }
}

/// Process a label class message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Gesture { index, gesture } => {
            state.handle_gesture(index, gesture);
            Event::None
        }
        Message::DraftChanged(draft) => {
            if let Some(editor) = state.editor.as_mut() {
                editor.draft = draft;
                editor.error = None;
            }
            Event::None
        }
        Message::SaveEdit => {
            state.save_edit();
            Event::None
        }
        Message::CancelEdit => {
            state.editor = None;
            Event::None
        }
        Message::OpenAbout => Event::OpenAbout,
    }
}

/// Render the label class screen.
pub fn view(state: &State) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new("Label classes")
                .size(typography::TITLE_LG)
                .width(Length::Fill),
        )
        .push(button(Text::new("About").size(typography::BODY)).on_press(Message::OpenAbout));

    let hint = Text::new("Click a color to select it, double-click to rename its class.")
        .size(typography::CAPTION);

    let rows = state
        .entries
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::XS), |column, (index, entry)| {
            column.push(view_row(state, index, entry))
        });

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(header)
        .push(hint)
        .push(rows);

    scrollable(content).into()
}

fn view_row<'a>(state: &'a State, index: usize, entry: &'a Entry) -> Element<'a, Message> {
    let swatch = entry
        .button
        .view(move |gesture| Message::Gesture { index, gesture });

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(swatch);

    match &state.editor {
        Some(editor) if editor.index == index => {
            let input = text_input("Class name", &editor.draft)
                .on_input(Message::DraftChanged)
                .on_submit(Message::SaveEdit)
                .size(typography::BODY)
                .width(Length::Fixed(220.0));

            let mut row = row
                .push(input)
                .push(button(Text::new("Save").size(typography::BODY)).on_press(Message::SaveEdit))
                .push(
                    button(Text::new("Cancel").size(typography::BODY))
                        .on_press(Message::CancelEdit),
                );
            if let Some(error) = editor.error {
                row = row.push(
                    Text::new(error)
                        .size(typography::CAPTION)
                        .color(palette::ERROR_500),
                );
            }
            row.into()
        }
        _ => row
            .push(Text::new(entry.class.name()).size(typography::BODY))
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::color_button::PointerGesture;

    fn double_click(state: &mut State, index: usize) {
        update(
            state,
            Message::Gesture {
                index,
                gesture: PointerGesture::press(2),
            },
        );
    }

    #[test]
    fn double_click_opens_editor_for_that_row() {
        let mut state = State::default();
        double_click(&mut state, 2);
        assert_eq!(state.editing(), Some(2));
    }

    #[test]
    fn single_click_only_toggles_selection() {
        let mut state = State::default();
        update(
            &mut state,
            Message::Gesture {
                index: 1,
                gesture: PointerGesture::press(1),
            },
        );
        assert!(state.is_selected(1));
        assert_eq!(state.editing(), None);
    }

    #[test]
    fn pre_consumed_gesture_opens_nothing() {
        let mut state = State::default();
        let mut gesture = PointerGesture::press(2);
        gesture.consume();
        update(&mut state, Message::Gesture { index: 0, gesture });
        assert_eq!(state.editing(), None);
    }

    #[test]
    fn save_renames_class_and_closes_editor() {
        let mut state = State::default();
        double_click(&mut state, 0);
        update(&mut state, Message::DraftChanged("pedestrian".into()));
        update(&mut state, Message::SaveEdit);

        assert_eq!(state.editing(), None);
        assert_eq!(state.classes().next().map(LabelClass::name), Some("pedestrian"));
    }

    #[test]
    fn blank_name_keeps_editor_open() {
        let mut state = State::default();
        double_click(&mut state, 0);
        update(&mut state, Message::DraftChanged("  ".into()));
        update(&mut state, Message::SaveEdit);

        assert_eq!(state.editing(), Some(0));
        assert_eq!(state.classes().next().map(LabelClass::name), Some("person"));
    }

    #[test]
    fn cancel_discards_draft() {
        let mut state = State::default();
        double_click(&mut state, 0);
        update(&mut state, Message::DraftChanged("other".into()));
        update(&mut state, Message::CancelEdit);

        assert_eq!(state.editing(), None);
        assert_eq!(state.classes().next().map(LabelClass::name), Some("person"));
    }

    #[test]
    fn detached_listener_no_longer_opens_editor() {
        let mut state = State::default();
        state.detach_listener(3);
        double_click(&mut state, 3);
        assert_eq!(state.editing(), None);
    }

    #[test]
    fn gesture_for_unknown_row_is_ignored() {
        let mut state = State::default();
        double_click(&mut state, 99);
        assert_eq!(state.editing(), None);
    }

    #[test]
    fn about_button_bubbles_up() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::OpenAbout), Event::OpenAbout);
    }
}
