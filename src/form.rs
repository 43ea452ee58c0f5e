//! Add-row form: per-field value/touched state, derived errors and warnings,
//! and the phone input mask.

use crate::types::Record;
use crate::validate::{self, Validator};

/// Display pattern the phone field's keystrokes are constrained to.
pub const PHONE_PATTERN: &str = "+7 (999) 999-9999";
const PHONE_DIGITS: usize = 10;

/// Static wiring for one form field: label, blocking rules, warning rule.
pub struct FieldSpec {
    pub name: &'static str,
    pub validators: &'static [Validator],
    pub warn: Option<Validator>,
    pub masked: bool,
}

/// Field order matches the table columns: id, firstName, lastName, email, phone.
pub static FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: "id",
        validators: &[
            validate::required as Validator,
            validate::number,
            validate::min_value_1,
        ],
        warn: Some(validate::too_much as Validator),
        masked: false,
    },
    FieldSpec {
        name: "firstName",
        validators: &[validate::required as Validator, validate::max_length_15],
        warn: Some(validate::letters_only as Validator),
        masked: false,
    },
    FieldSpec {
        name: "lastName",
        validators: &[validate::required as Validator, validate::max_length_15],
        warn: Some(validate::letters_only as Validator),
        masked: false,
    },
    FieldSpec {
        name: "email",
        validators: &[validate::required as Validator, validate::email],
        warn: Some(validate::aol as Validator),
        masked: false,
    },
    FieldSpec {
        name: "phone",
        validators: &[validate::required as Validator],
        warn: None,
        masked: true,
    },
];

#[derive(Debug, Clone, Default)]
struct FieldState {
    value: String,
    touched: bool,
}

/// Message rendered under a field, colored by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMessage {
    Error(String),
    Warning(String),
}

#[derive(Debug, Default)]
pub struct RecordForm {
    fields: [FieldState; 5],
    phone_digits: String,
    focus: usize,
}

impl RecordForm {
    pub fn new() -> Self {
        Self::default()
    }

    // ----- getters -----
    pub fn focus(&self) -> usize {
        self.focus
    }
    pub fn value(&self, idx: usize) -> &str {
        &self.fields[idx].value
    }
    pub fn touched(&self, idx: usize) -> bool {
        self.fields[idx].touched
    }

    /// First failing blocking rule for a field, touched or not.
    pub fn error(&self, idx: usize) -> Option<String> {
        validate::first_error(FIELDS[idx].validators, &self.fields[idx].value)
    }

    pub fn warning(&self, idx: usize) -> Option<String> {
        FIELDS[idx].warn.and_then(|w| w(&self.fields[idx].value))
    }

    /// What to render under a field: nothing until it has been interacted
    /// with, then its first blocking error, else its warning.
    pub fn message(&self, idx: usize) -> Option<FieldMessage> {
        if !self.fields[idx].touched {
            return None;
        }
        if let Some(e) = self.error(idx) {
            return Some(FieldMessage::Error(e));
        }
        self.warning(idx).map(FieldMessage::Warning)
    }

    pub fn has_blocking_errors(&self) -> bool {
        (0..FIELDS.len()).any(|i| self.error(i).is_some())
    }

    /// No values entered yet (reset is a no-op in this state).
    pub fn is_pristine(&self) -> bool {
        self.fields.iter().all(|f| f.value.is_empty())
    }

    // ----- input -----
    pub fn input_char(&mut self, c: char) {
        if FIELDS[self.focus].masked {
            // Mask: only digits land, formatted into the display pattern.
            if c.is_ascii_digit() && self.phone_digits.len() < PHONE_DIGITS {
                self.phone_digits.push(c);
                self.fields[self.focus].value = format_phone(&self.phone_digits);
            }
            return;
        }
        self.fields[self.focus].value.push(c);
    }

    pub fn backspace(&mut self) {
        if FIELDS[self.focus].masked {
            self.phone_digits.pop();
            self.fields[self.focus].value = format_phone(&self.phone_digits);
            return;
        }
        self.fields[self.focus].value.pop();
    }

    /// Moving focus away counts as the blur that makes messages visible.
    pub fn next_field(&mut self) {
        self.fields[self.focus].touched = true;
        self.focus = (self.focus + 1) % FIELDS.len();
    }

    pub fn prev_field(&mut self) {
        self.fields[self.focus].touched = true;
        self.focus = (self.focus + FIELDS.len() - 1) % FIELDS.len();
    }

    // ----- submit / reset -----

    /// Attempt submission. Marks every field touched so errors render, then
    /// either yields the validated record or nothing.
    pub fn submit(&mut self) -> Option<Record> {
        for f in self.fields.iter_mut() {
            f.touched = true;
        }
        if self.has_blocking_errors() {
            return None;
        }
        let id = self.fields[0].value.trim().parse::<f64>().ok()? as u64;
        Some(Record {
            id,
            first_name: self.fields[1].value.clone(),
            last_name: self.fields[2].value.clone(),
            email: self.fields[3].value.clone(),
            phone: self.fields[4].value.clone(),
            address: None,
            description: None,
        })
    }

    /// Clear all values and touched state. Does nothing while pristine.
    pub fn reset(&mut self) {
        if self.is_pristine() {
            return;
        }
        for f in self.fields.iter_mut() {
            f.value.clear();
            f.touched = false;
        }
        self.phone_digits.clear();
        self.focus = 0;
    }
}

/// Format up to ten digits into the `+7 (999) 999-9999` pattern.
pub fn format_phone(digits: &str) -> String {
    let ds: Vec<char> = digits
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_DIGITS)
        .collect();
    if ds.is_empty() {
        return String::new();
    }
    let mut out = String::from("+7 (");
    for (i, d) in ds.iter().enumerate() {
        match i {
            3 => out.push_str(") "),
            6 => out.push('-'),
            _ => {}
        }
        out.push(*d);
    }
    out
}
