//! The project input form: three raw text fields, focus handling, and the
//! validate-then-create submit path.

use crate::model::LimitsConfig;
use crate::state::ProjectStore;
use crate::util::unicode;
use crate::util::validation::{Constraints, FieldValue, validate};

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::People => "People",
        }
    }

    pub fn next(self) -> FormField {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::People,
            FormField::People => FormField::Title,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Title => FormField::People,
            FormField::Description => FormField::Title,
            FormField::People => FormField::Description,
        }
    }
}

/// Raw field buffers plus focus and a byte-offset cursor into the focused
/// buffer. The form holds no project data of its own; on submit it hands the
/// gathered values to the store and clears itself.
pub struct InputForm {
    pub title: String,
    pub description: String,
    pub people: String,
    pub focus: FormField,
    /// Byte offset into the focused buffer
    pub cursor: usize,
    limits: LimitsConfig,
}

impl InputForm {
    pub fn new(limits: LimitsConfig) -> Self {
        InputForm {
            title: String::new(),
            description: String::new(),
            people: String::new(),
            focus: FormField::Title,
            cursor: 0,
            limits,
        }
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    pub fn buf(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    fn focused_buf_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.cursor = self.buf(self.focus).len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.cursor = self.buf(self.focus).len();
    }

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor;
        self.focused_buf_mut().insert(cursor, c);
        self.cursor = cursor + c.len_utf8();
    }

    pub fn backspace(&mut self) {
        let cursor = self.cursor;
        let buf = self.focused_buf_mut();
        if let Some(prev) = unicode::prev_grapheme_boundary(buf, cursor) {
            buf.drain(prev..cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        let cursor = self.cursor;
        let buf = self.focused_buf_mut();
        if let Some(next) = unicode::next_grapheme_boundary(buf, cursor) {
            buf.drain(cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(self.buf(self.focus), self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(self.buf(self.focus), self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buf(self.focus).len();
    }

    /// Gather, validate, and submit the form.
    ///
    /// On success the new project is created in the store and all fields are
    /// cleared. On failure the fields are left intact for correction and the
    /// returned message names what was rejected.
    pub fn submit(&mut self, store: &mut ProjectStore) -> Result<String, String> {
        // Unparseable people input collapses to 0 and fails the minimum below
        let people: i64 = self.people.trim().parse().unwrap_or(0);

        if !validate(FieldValue::Text(&self.title), &self.title_constraints()) {
            return Err("Title is required".to_string());
        }
        if !validate(
            FieldValue::Text(&self.description),
            &self.description_constraints(),
        ) {
            return Err(format!(
                "Description must be {}-{} characters",
                self.limits.description_min_length, self.limits.description_max_length
            ));
        }
        if !validate(FieldValue::Number(people), &self.people_constraints()) {
            return Err(format!(
                "People must be a number between {} and {}",
                self.limits.people_min, self.limits.people_max
            ));
        }

        let id = store.create(&self.title, &self.description, people as u32);
        self.clear();
        Ok(id)
    }

    /// Reset all three fields to empty text
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
        self.focus = FormField::Title;
        self.cursor = 0;
    }

    fn title_constraints(&self) -> Constraints {
        Constraints {
            required: true,
            ..Default::default()
        }
    }

    fn description_constraints(&self) -> Constraints {
        Constraints {
            required: true,
            min_length: Some(self.limits.description_min_length),
            max_length: Some(self.limits.description_max_length),
            ..Default::default()
        }
    }

    fn people_constraints(&self) -> Constraints {
        Constraints {
            required: true,
            min: Some(self.limits.people_min as i64),
            max: Some(self.limits.people_max as i64),
            ..Default::default()
        }
    }
}
