//! Contact form state: `Idle -> Submitting -> Idle`.
//!
//! Nothing is sent anywhere. The UI calls [`ContactForm::begin_submit`], waits
//! the configured delay, then calls [`ContactForm::finish_submit`], which
//! clears every field.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

/// Text of the toast shown after a submission completes.
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// Values typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub company: String,
    pub position: String,
    pub message: String,
}

/// Form inputs, addressable from event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Position,
    Message,
}

impl Field {
    /// Fields that must be non-empty before the form can be sent.
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Position => "position",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options of the "Position Type" select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
    Other,
}

impl PositionType {
    pub const ALL: [PositionType; 6] = [
        PositionType::FullTime,
        PositionType::PartTime,
        PositionType::Contract,
        PositionType::Freelance,
        PositionType::Internship,
        PositionType::Other,
    ];

    /// Value stored in [`ContactFormData::position`].
    pub fn value(self) -> &'static str {
        match self {
            PositionType::FullTime => "full-time",
            PositionType::PartTime => "part-time",
            PositionType::Contract => "contract",
            PositionType::Freelance => "freelance",
            PositionType::Internship => "internship",
            PositionType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PositionType::FullTime => "Full-time",
            PositionType::PartTime => "Part-time",
            PositionType::Contract => "Contract",
            PositionType::Freelance => "Freelance",
            PositionType::Internship => "Internship",
            PositionType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Field values plus submission phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    data: ContactFormData,
    phase: FormPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.data.name,
            Field::Email => &self.data.email,
            Field::Company => &self.data.company,
            Field::Position => &self.data.position,
            Field::Message => &self.data.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.data.name,
            Field::Email => &mut self.data.email,
            Field::Company => &mut self.data.company,
            Field::Position => &mut self.data.position,
            Field::Message => &mut self.data.message,
        };
        *slot = value.into();
    }

    /// First required field that is still empty.
    pub fn missing_field(&self) -> Option<Field> {
        Field::REQUIRED
            .into_iter()
            .find(|field| self.field(*field).is_empty())
    }

    /// Name, email and message are filled in. No format checks.
    pub fn is_valid(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.is_submitting()
    }

    /// Enter the submitting phase.
    pub fn begin_submit(&mut self) -> Result<(), SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }
        if let Some(field) = self.missing_field() {
            return Err(SubmitError::MissingField(field));
        }
        self.phase = FormPhase::Submitting;
        Ok(())
    }

    /// Leave the submitting phase, clearing every field. Returns what was
    /// entered. Outside a submission this is a no-op returning `None`.
    pub fn finish_submit(&mut self) -> Option<ContactFormData> {
        if !self.is_submitting() {
            return None;
        }
        self.phase = FormPhase::Idle;
        Some(std::mem::take(&mut self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "John Doe");
        form.set_field(Field::Email, "john@company.com");
        form.set_field(Field::Message, "Looking for two contractors.");
        form
    }

    #[test]
    fn optional_fields_do_not_gate_submit() {
        let form = filled();
        assert!(form.data().company.is_empty());
        assert!(form.can_submit());
    }

    #[test]
    fn missing_email_is_reported() {
        let mut form = filled();
        form.set_field(Field::Email, "");
        assert_eq!(form.missing_field(), Some(Field::Email));
        assert_eq!(form.begin_submit(), Err(SubmitError::MissingField(Field::Email)));
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn whitespace_counts_as_content() {
        let mut form = filled();
        form.set_field(Field::Message, " ");
        assert!(form.is_valid());
    }

    #[test]
    fn resubmission_is_blocked() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(SubmitError::AlreadySubmitting));
    }

    #[test]
    fn finish_returns_data_and_clears() {
        let mut form = filled();
        form.set_field(Field::Position, PositionType::Contract.value());
        form.begin_submit().unwrap();
        let sent = form.finish_submit().unwrap();
        assert_eq!(sent.position, "contract");
        assert_eq!(sent.name, "John Doe");
        assert_eq!(form.data(), &ContactFormData::default());
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn finish_without_begin_is_noop() {
        let mut form = filled();
        assert_eq!(form.finish_submit(), None);
        assert_eq!(form.field(Field::Name), "John Doe");
    }

    #[test]
    fn position_values_round_trip_through_serde() {
        let json = serde_json::to_string(&PositionType::FullTime).unwrap();
        assert_eq!(json, format!("\"{}\"", PositionType::FullTime.value()));
    }
}
