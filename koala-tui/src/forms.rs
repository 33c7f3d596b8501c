//! Text forms used by create/edit dialogs.

use tui_textarea::{CursorMove, TextArea};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    Char(char),
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    NextField,
    PrevField,
    Submit,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Editing,
    Submit,
    Cancel,
}

/// One selectable value of a choice field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub enum FieldInput {
    Line(String),
    /// Free text spanning several lines, edited with a movable cursor.
    Lines(TextArea<'static>),
    Choice { options: Vec<Choice>, selected: usize },
}

#[derive(Debug, Clone)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub input: FieldInput,
}

impl Field {
    pub fn value(&self) -> String {
        match &self.input {
            FieldInput::Line(value) => value.clone(),
            FieldInput::Lines(area) => area.lines().join("\n"),
            FieldInput::Choice { options, selected } => options
                .get(*selected)
                .map(|choice| choice.value.clone())
                .unwrap_or_default(),
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.input, FieldInput::Lines(_))
    }

    fn set(&mut self, value: String) {
        match &mut self.input {
            FieldInput::Line(current) => *current = value,
            FieldInput::Lines(area) => *area = text_area(&value),
            FieldInput::Choice { options, selected } => {
                if let Some(index) = options.iter().position(|c| c.value == value) {
                    *selected = index;
                }
            }
        }
    }

    fn handle(&mut self, input: FormInput) -> FormOutcome {
        match &mut self.input {
            FieldInput::Line(value) => match input {
                FormInput::Char(c) => value.push(c),
                FormInput::Backspace => {
                    value.pop();
                }
                FormInput::Enter => return FormOutcome::Submit,
                _ => {}
            },
            FieldInput::Lines(area) => match input {
                FormInput::Char(c) => area.insert_char(c),
                FormInput::Backspace => {
                    area.delete_char();
                }
                FormInput::Enter => area.insert_newline(),
                FormInput::Left => area.move_cursor(CursorMove::Back),
                FormInput::Right => area.move_cursor(CursorMove::Forward),
                FormInput::Up => area.move_cursor(CursorMove::Up),
                FormInput::Down => area.move_cursor(CursorMove::Down),
                FormInput::Home => area.move_cursor(CursorMove::Head),
                FormInput::End => area.move_cursor(CursorMove::End),
                _ => {}
            },
            FieldInput::Choice { options, selected } => {
                let len = options.len();
                match input {
                    FormInput::Right | FormInput::Down | FormInput::Char(' ') if len > 0 => {
                        *selected = (*selected + 1) % len;
                    }
                    FormInput::Left | FormInput::Up if len > 0 => {
                        *selected = (*selected + len - 1) % len;
                    }
                    FormInput::Enter => return FormOutcome::Submit,
                    _ => {}
                }
            }
        }
        FormOutcome::Editing
    }
}

fn text_area(value: &str) -> TextArea<'static> {
    let lines: Vec<String> = value.split('\n').map(str::to_string).collect();
    let mut area = TextArea::new(lines);
    area.move_cursor(CursorMove::Bottom);
    area.move_cursor(CursorMove::End);
    area
}

#[derive(Debug, Clone)]
pub struct Form {
    pub title: String,
    pub fields: Vec<Field>,
    pub focus: usize,
}

impl Form {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            focus: 0,
        }
    }

    fn push(mut self, key: &'static str, label: &'static str, required: bool, input: FieldInput) -> Self {
        self.fields.push(Field {
            key,
            label,
            required,
            input,
        });
        self
    }

    pub fn field(self, key: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        self.push(key, label, false, FieldInput::Line(value.into()))
    }

    pub fn required(self, key: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        self.push(key, label, true, FieldInput::Line(value.into()))
    }

    pub fn multiline(self, key: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.push(key, label, false, FieldInput::Lines(text_area(&value)))
    }

    /// Required pick from `options`; the first option starts selected.
    pub fn choice(self, key: &'static str, label: &'static str, options: Vec<Choice>) -> Self {
        self.push(
            key,
            label,
            true,
            FieldInput::Choice {
                options,
                selected: 0,
            },
        )
    }

    /// Mark an existing field as required.
    pub fn require(mut self, key: &str) -> Self {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.required = true;
        }
        self
    }

    /// Current value of `key`; multi-line values are joined with `\n`.
    pub fn value(&self, key: &str) -> String {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(Field::value)
            .unwrap_or_default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.set(value.into());
        }
    }

    pub fn focused(&self) -> Option<&Field> {
        self.fields.get(self.focus)
    }

    pub fn handle(&mut self, input: FormInput) -> FormOutcome {
        match input {
            FormInput::NextField => {
                if !self.fields.is_empty() {
                    self.focus = (self.focus + 1) % self.fields.len();
                }
                FormOutcome::Editing
            }
            FormInput::PrevField => {
                if !self.fields.is_empty() {
                    self.focus = if self.focus == 0 {
                        self.fields.len() - 1
                    } else {
                        self.focus - 1
                    };
                }
                FormOutcome::Editing
            }
            FormInput::Submit => FormOutcome::Submit,
            FormInput::Cancel => FormOutcome::Cancel,
            other => match self.fields.get_mut(self.focus) {
                Some(field) => field.handle(other),
                None if other == FormInput::Enter => FormOutcome::Submit,
                None => FormOutcome::Editing,
            },
        }
    }
}

/// True when any of the values is empty after trimming.
pub fn any_blank(values: &[&str]) -> bool {
    values.iter().any(|v| v.trim().is_empty())
}
