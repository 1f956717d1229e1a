//! Departure/arrival input fields.

use crate::domain::{AirportCode, RoutePlanRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Origin,
    Dest,
}

/// The two code fields. Every edit re-normalizes through [`AirportCode`],
/// so the stored value is always uppercase and at most four characters.
#[derive(Debug, Clone)]
pub struct InputController {
    origin: AirportCode,
    dest: AirportCode,
}

impl InputController {
    pub fn new(origin: impl Into<AirportCode>, dest: impl Into<AirportCode>) -> Self {
        Self {
            origin: origin.into(),
            dest: dest.into(),
        }
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &AirportCode {
        match field {
            Field::Origin => &self.origin,
            Field::Dest => &self.dest,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut AirportCode {
        match field {
            Field::Origin => &mut self.origin,
            Field::Dest => &mut self.dest,
        }
    }

    pub fn set(&mut self, field: Field, text: &str) {
        *self.field_mut(field) = AirportCode::new(text);
    }

    /// Append a character. Input past the cap is dropped.
    pub fn push(&mut self, field: Field, ch: char) {
        let slot = self.field_mut(field);
        if slot.is_full() {
            return;
        }
        let mut text = slot.as_str().to_string();
        text.push(ch);
        *slot = AirportCode::new(text);
    }

    pub fn backspace(&mut self, field: Field) {
        let slot = self.field_mut(field);
        let mut text = slot.as_str().to_string();
        text.pop();
        *slot = AirportCode::new(text);
    }

    pub fn clear(&mut self, field: Field) {
        *self.field_mut(field) = AirportCode::default();
    }

    /// Freeze the current values into a request.
    #[must_use]
    pub fn snapshot(&self) -> RoutePlanRequest {
        RoutePlanRequest {
            origin: self.origin.clone(),
            dest: self.dest.clone(),
        }
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new("KJFK", "EGLL")
    }
}
