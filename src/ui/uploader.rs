// SPDX-License-Identifier: MPL-2.0
//! Image uploader for the car form.
//!
//! Click or drop a file to preview it; remove to fall back to the empty
//! drop-zone and raise the clear flag the server form understands
//! (`<fieldname>-clear`). A dropped file always lands in the underlying
//! selection so a form submission carries it; whether it previews is
//! decided afterwards by its media type ("image/" prefix only).

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{button, container, image as image_widget, mouse_area, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};
use std::path::{Path, PathBuf};

/// Visual state of the uploader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    /// Drop-zone shown, no image.
    Empty,
    /// The pre-existing (already stored) image is shown.
    Existing,
    /// A freshly chosen file is shown.
    New,
}

/// Uploader state.
#[derive(Debug, Clone)]
pub struct State {
    /// Form field name; the clear flag derives from it.
    field_name: String,
    /// Image already stored on the server, if any.
    existing: Option<PathBuf>,
    /// Current file selection (the underlying file input).
    selected: Option<PathBuf>,
    /// Which preview is shown.
    preview: Preview,
    /// Clear flag mirrored into the form on submission.
    clear: bool,
    /// Whether a drag hovers over the drop area.
    drag_over: bool,
}

/// Messages for the uploader.
#[derive(Debug, Clone)]
pub enum Message {
    /// The drop-zone or the preview (outside the remove control) was
    /// clicked; the file picker should open.
    PickerRequested,
    /// The native file picker returned.
    PickerResult(Option<PathBuf>),
    /// The remove control was pressed.
    RemovePressed,
    /// A drag entered or moved over the window.
    DragEntered,
    /// The drag left the window without dropping.
    DragLeft,
    /// A file was dropped.
    FileDropped(PathBuf),
}

/// Effects produced by the uploader.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// The native file picker should be opened.
    OpenPicker,
    /// The selection changed (picked, dropped, or removed).
    SelectionChanged,
}

impl Default for State {
    fn default() -> Self {
        Self::new("image", None)
    }
}

impl State {
    /// Creates an uploader for a form field, optionally pre-populated with
    /// the stored image.
    #[must_use]
    pub fn new(field_name: impl Into<String>, existing: Option<PathBuf>) -> Self {
        let preview = if existing.is_some() {
            Preview::Existing
        } else {
            Preview::Empty
        };
        Self {
            field_name: field_name.into(),
            existing,
            selected: None,
            preview,
            clear: false,
            drag_over: false,
        }
    }

    /// Current visual state.
    #[must_use]
    pub fn preview(&self) -> Preview {
        self.preview
    }

    /// Current file selection (what a form submission would carry).
    #[must_use]
    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    /// Whether the clear flag is raised.
    #[must_use]
    pub fn clear_flag(&self) -> bool {
        self.clear
    }

    /// Name of the companion boolean form field.
    #[must_use]
    pub fn clear_field_name(&self) -> String {
        format!("{}-clear", self.field_name)
    }

    /// Whether the drag affordance is active.
    #[must_use]
    pub fn drag_over(&self) -> bool {
        self.drag_over
    }

    /// Handle an uploader message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PickerRequested => Effect::OpenPicker,
            Message::PickerResult(None) => Effect::None,
            Message::PickerResult(Some(path)) => {
                self.inject(path);
                Effect::SelectionChanged
            }
            Message::RemovePressed => {
                self.remove();
                Effect::SelectionChanged
            }
            Message::DragEntered => {
                self.drag_over = true;
                Effect::None
            }
            Message::DragLeft => {
                self.drag_over = false;
                Effect::None
            }
            Message::FileDropped(path) => {
                self.drag_over = false;
                self.inject(path);
                Effect::SelectionChanged
            }
        }
    }

    /// Puts a file into the underlying selection, then refreshes the
    /// preview. Type filtering happens here, at preview time: a non-image
    /// file stays selected but changes nothing visually.
    fn inject(&mut self, path: PathBuf) {
        let previewable = is_image(&path);
        self.selected = Some(path);
        if previewable {
            self.preview = Preview::New;
            self.clear = false;
        }
    }

    /// Discards the selection and raises the clear flag.
    fn remove(&mut self) {
        self.selected = None;
        self.clear = true;
        self.preview = Preview::Empty;
    }

    /// Renders the uploader block.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let content: Element<'a, Message> = match self.preview {
            Preview::Empty => self.drop_zone(i18n),
            Preview::Existing | Preview::New => self.preview_block(i18n),
        };

        Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(i18n.tr("uploader-label"))
                    .size(typography::BODY),
            )
            .push(content)
            .into()
    }

    fn drop_zone<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let hint_key = if self.drag_over {
            "uploader-drop-hint-active"
        } else {
            "uploader-drop-hint"
        };

        let inner = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(icons::UPLOAD).size(sizing::ICON_MD))
            .push(Text::new(i18n.tr(hint_key)).size(typography::CAPTION));

        let drag_over = self.drag_over;
        mouse_area(
            Container::new(inner)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(move |theme: &Theme| drop_zone_style(theme, drag_over)),
        )
        .on_press(Message::PickerRequested)
        .into()
    }

    fn preview_block<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let shown = match self.preview {
            Preview::New => self.selected.as_deref(),
            _ => self.existing.as_deref(),
        };

        let picture: Element<'a, Message> = match shown {
            Some(path) => image_widget(image_widget::Handle::from_path(path))
                .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
                .into(),
            None => Container::new(Text::new(i18n.tr("uploader-preview-missing")))
                .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
                .into(),
        };

        let remove = button(Text::new(icons::REMOVE).size(typography::BODY))
            .on_press(Message::RemovePressed)
            .padding(spacing::XXS)
            .style(button::danger);

        // Clicking the preview (not the remove button) re-opens the picker.
        let clickable_picture = mouse_area(picture).on_press(Message::PickerRequested);

        Column::new()
            .spacing(spacing::XXS)
            .push(clickable_picture)
            .push(
                Container::new(remove)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            )
            .into()
    }
}

/// Media-type check for previewability: only files whose detected format
/// maps to an `image/` type qualify.
pub fn is_image(path: &Path) -> bool {
    image_rs::ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().starts_with("image/"))
        .unwrap_or(false)
}

fn drop_zone_style(theme: &Theme, drag_over: bool) -> container::Style {
    let accent = if drag_over {
        palette::PRIMARY_500
    } else {
        palette::GRAY_400
    };
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_without_existing_image() {
        let state = State::new("image", None);
        assert_eq!(state.preview(), Preview::Empty);
        assert!(!state.clear_flag());
        assert!(state.selected().is_none());
    }

    #[test]
    fn starts_previewing_existing_image() {
        let state = State::new("image", Some(PathBuf::from("stored/car.jpg")));
        assert_eq!(state.preview(), Preview::Existing);
    }

    #[test]
    fn selecting_png_previews_and_unsets_clear_flag() {
        let mut state = State::new("image", None);
        state.handle(Message::RemovePressed);
        assert!(state.clear_flag());

        let effect = state.handle(Message::PickerResult(Some(PathBuf::from("photo.png"))));
        assert!(matches!(effect, Effect::SelectionChanged));
        assert_eq!(state.preview(), Preview::New);
        assert!(!state.clear_flag());
        assert_eq!(state.selected(), Some(Path::new("photo.png")));
    }

    #[test]
    fn selecting_text_file_leaves_preview_unchanged() {
        let mut state = State::new("image", None);
        state.handle(Message::PickerResult(Some(PathBuf::from("notes.txt"))));
        assert_eq!(state.preview(), Preview::Empty);

        // The file is nonetheless in the selection; filtering happens at
        // preview time, not at drop time.
        assert_eq!(state.selected(), Some(Path::new("notes.txt")));
    }

    #[test]
    fn dropping_text_file_over_existing_preview_keeps_it() {
        let mut state = State::new("image", Some(PathBuf::from("stored/car.jpg")));
        state.handle(Message::FileDropped(PathBuf::from("notes.txt")));
        assert_eq!(state.preview(), Preview::Existing);
    }

    #[test]
    fn remove_sets_clear_flag_and_empties() {
        let mut state = State::new("image", Some(PathBuf::from("stored/car.jpg")));
        state.handle(Message::PickerResult(Some(PathBuf::from("photo.png"))));

        let effect = state.handle(Message::RemovePressed);
        assert!(matches!(effect, Effect::SelectionChanged));
        assert_eq!(state.preview(), Preview::Empty);
        assert!(state.clear_flag());
        assert!(state.selected().is_none());
    }

    #[test]
    fn drag_toggles_affordance() {
        let mut state = State::new("image", None);
        state.handle(Message::DragEntered);
        assert!(state.drag_over());
        state.handle(Message::DragLeft);
        assert!(!state.drag_over());

        state.handle(Message::DragEntered);
        state.handle(Message::FileDropped(PathBuf::from("photo.png")));
        assert!(!state.drag_over());
        assert_eq!(state.preview(), Preview::New);
    }

    #[test]
    fn picker_cancel_changes_nothing() {
        let mut state = State::new("image", None);
        let effect = state.handle(Message::PickerResult(None));
        assert!(matches!(effect, Effect::None));
        assert_eq!(state.preview(), Preview::Empty);
    }

    #[test]
    fn clear_field_name_follows_convention() {
        let state = State::new("image", None);
        assert_eq!(state.clear_field_name(), "image-clear");

        let state = State::new("photo", None);
        assert_eq!(state.clear_field_name(), "photo-clear");
    }

    #[test]
    fn is_image_accepts_common_formats() {
        assert!(is_image(Path::new("a.png")));
        assert!(is_image(Path::new("b.jpg")));
        assert!(is_image(Path::new("c.webp")));
        assert!(!is_image(Path::new("d.txt")));
        assert!(!is_image(Path::new("e")));
    }
}
