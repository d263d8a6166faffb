//! Server-side copy of the contact form rules.

use crate::models::contact_models::ContactRequest;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s\-\+\(\)]+$").expect("phone pattern compiles"));

const REQUIRED: &str = "This field is required.";
pub const MAX_FIELD_LEN: usize = 5000;

fn required(errors: &mut BTreeMap<&'static str, String>, field: &'static str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.insert(field, REQUIRED.to_string());
        return false;
    }
    if value.len() > MAX_FIELD_LEN {
        errors.insert(field, format!("Must be at most {MAX_FIELD_LEN} characters."));
        return false;
    }
    true
}

/// Returns every failing field with its message; empty means valid.
pub fn validate_contact(request: &ContactRequest) -> BTreeMap<&'static str, String> {
    let mut errors = BTreeMap::new();
    required(&mut errors, "name", &request.name);
    if required(&mut errors, "email", &request.email) && !EMAIL_RE.is_match(request.email.trim()) {
        errors.insert("email", "Please enter a valid email address.".to_string());
    }
    if let Some(phone) = request.phone.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        if !PHONE_RE.is_match(phone) {
            errors.insert("phone", "Please enter a valid phone number.".to_string());
        }
    }
    required(&mut errors, "service", &request.service);
    required(&mut errors, "message", &request.message);
    errors
}
