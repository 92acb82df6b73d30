//! Command builder — derive the submission target from form state.
//!
//! The receiving firmware keys on the token order, so the four checkboxes
//! always serialize as `living_room_door`, `living_room_window`,
//! `bedroom_door`, `bedroom_window`, in that order. The scale travels
//! verbatim; the device applies its own lenient parse.

/// Snapshot of the five named form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub living_room_door: bool,
    pub living_room_window: bool,
    pub bedroom_door: bool,
    pub bedroom_window: bool,
    /// Raw slider value, passed through unvalidated.
    pub shutter_scale: String,
}

impl Selection {
    fn is_empty(&self) -> bool {
        !self.living_room_door
            && !self.living_room_window
            && !self.bedroom_door
            && !self.bedroom_window
    }
}

/// A form whose submission target can be rewritten.
///
/// The browser's live document is one implementation; tests use plain
/// structs.
pub trait CommandForm {
    /// Read the current field values.
    fn selection(&self) -> Selection;
    /// Replace the form's submission target.
    fn set_action(&mut self, target: String);
}

/// Build the submission target for a selection, or [`None`] when nothing
/// is selected (the command is suppressed, with no feedback).
#[must_use]
pub fn command_target(selection: &Selection) -> Option<String> {
    if selection.is_empty() {
        return None;
    }
    let mut target = format!("/get?shutter_scale={}", selection.shutter_scale);
    if selection.living_room_door {
        target.push_str(",living_room_door");
    }
    if selection.living_room_window {
        target.push_str(",living_room_window");
    }
    if selection.bedroom_door {
        target.push_str(",bedroom_door");
    }
    if selection.bedroom_window {
        target.push_str(",bedroom_window");
    }
    Some(target)
}

/// Rewrite `form`'s submission target from its current selection.
/// Leaves the form untouched when nothing is selected.
pub fn apply_command_target(form: &mut impl CommandForm) {
    if let Some(target) = command_target(&form.selection()) {
        form.set_action(target);
    }
}
