//! Contact form field rules.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s\-\+\(\)]+$").expect("phone pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}

/// Bootstrap-style validation state of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Pristine,
    Valid,
    Invalid(FieldError),
}

impl FieldStatus {
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            FieldStatus::Pristine => None,
            FieldStatus::Valid => Some("is-valid"),
            FieldStatus::Invalid(_) => Some("is-invalid"),
        }
    }

    pub fn error(&self) -> Option<FieldError> {
        match self {
            FieldStatus::Invalid(error) => Some(*error),
            _ => None,
        }
    }
}

/// Fields of the landing page contact form, in display order.
pub static CONTACT_FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: "name",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        name: "email",
        kind: FieldKind::Email,
        required: true,
    },
    FieldSpec {
        name: "phone",
        kind: FieldKind::Tel,
        required: false,
    },
    FieldSpec {
        name: "service",
        kind: FieldKind::Select,
        required: true,
    },
    FieldSpec {
        name: "message",
        kind: FieldKind::TextArea,
        required: true,
    },
];

pub fn contact_field(name: &str) -> Option<&'static FieldSpec> {
    CONTACT_FIELDS.iter().find(|spec| spec.name == name)
}

pub fn validate_field(spec: &FieldSpec, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return if spec.required {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }
    match spec.kind {
        FieldKind::Email if !EMAIL_RE.is_match(value) => Err(FieldError::InvalidEmail),
        FieldKind::Tel if !PHONE_RE.is_match(value) => Err(FieldError::InvalidPhone),
        _ => Ok(()),
    }
}

pub fn field_status(spec: &FieldSpec, raw: &str) -> FieldStatus {
    match validate_field(spec, raw) {
        Ok(()) => FieldStatus::Valid,
        Err(error) => FieldStatus::Invalid(error),
    }
}

/// Runs every rule and returns the status of each field by name. The form
/// is valid when no status is `Invalid`.
pub fn validate_form<'a>(
    fields: impl IntoIterator<Item = (&'a FieldSpec, &'a str)>,
) -> BTreeMap<&'static str, FieldStatus> {
    fields
        .into_iter()
        .map(|(spec, value)| (spec.name, field_status(spec, value)))
        .collect()
}

pub fn is_form_valid(statuses: &BTreeMap<&'static str, FieldStatus>) -> bool {
    statuses
        .values()
        .all(|status| !matches!(status, FieldStatus::Invalid(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: FieldSpec = FieldSpec {
        name: "email",
        kind: FieldKind::Email,
        required: true,
    };
    const PHONE: FieldSpec = FieldSpec {
        name: "phone",
        kind: FieldKind::Tel,
        required: false,
    };
    const NAME: FieldSpec = FieldSpec {
        name: "name",
        kind: FieldKind::Text,
        required: true,
    };

    #[test]
    fn required_fields_reject_blank_input() {
        assert_eq!(validate_field(&NAME, "   "), Err(FieldError::Required));
        assert_eq!(validate_field(&NAME, " Ada "), Ok(()));
    }

    #[test]
    fn email_rule() {
        assert_eq!(validate_field(&EMAIL, "ada@example.com"), Ok(()));
        assert_eq!(validate_field(&EMAIL, "ada@example"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_field(&EMAIL, "ada lovelace@example.com"), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn optional_phone_may_be_empty_but_not_letters() {
        assert_eq!(validate_field(&PHONE, ""), Ok(()));
        assert_eq!(validate_field(&PHONE, "+1 (555) 010-9999"), Ok(()));
        assert_eq!(validate_field(&PHONE, "call me"), Err(FieldError::InvalidPhone));
    }

    #[test]
    fn form_is_invalid_if_any_field_is() {
        let statuses = validate_form([(&NAME, "Ada"), (&EMAIL, "nope"), (&PHONE, "")]);
        assert!(!is_form_valid(&statuses));
        assert_eq!(statuses["email"].css_class(), Some("is-invalid"));
        assert_eq!(statuses["phone"], FieldStatus::Valid);

        let statuses = validate_form([(&NAME, "Ada"), (&EMAIL, "ada@example.com")]);
        assert!(is_form_valid(&statuses));
    }

    #[test]
    fn contact_form_requires_a_service_choice() {
        let service = contact_field("service").unwrap();
        assert_eq!(service.kind, FieldKind::Select);
        assert_eq!(validate_field(service, ""), Err(FieldError::Required));
        assert!(!contact_field("phone").unwrap().required);
        assert!(contact_field("company").is_none());
    }
}
