//! Input checks shared by the request handlers.
//!
//! Every check reports the first problem it finds as a [`ValidationError`]
//! whose message is shown to the client verbatim.

use std::borrow::Cow;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use validator::ValidationError;

pub type ValidationResult<T = ()> = Result<T, ValidationError>;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

lazy_static! {
    // Must not be tightened: stored emails were accepted by this exact pattern.
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles");
}

fn invalid(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Message to show the client for a failed check.
pub fn message_of(err: &ValidationError) -> String {
    err.message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| err.code.to_string())
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_registration(nom: &str, email: &str, password: &str) -> ValidationResult {
    if nom.trim().is_empty() || email.trim().is_empty() || password.trim().is_empty() {
        return Err(invalid("required", "Tous les champs sont requis"));
    }
    if !validate_email(email.trim()) {
        return Err(invalid("email", "Format d'email invalide"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(invalid(
            "password_length",
            format!("Le mot de passe doit contenir au moins {MIN_PASSWORD_LEN} caractères"),
        ));
    }
    Ok(())
}

/// Parses both bounds as `YYYY-MM-DD` and requires `date_fin > date_debut`.
pub fn validate_stage_dates(date_debut: &str, date_fin: &str) -> ValidationResult<(NaiveDate, NaiveDate)> {
    let parse = |raw: &str| NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT);
    let (Ok(debut), Ok(fin)) = (parse(date_debut), parse(date_fin)) else {
        return Err(invalid("date_format", "Format de date invalide. Utilisez YYYY-MM-DD"));
    };
    if fin <= debut {
        return Err(invalid("date_order", "La date de fin doit être après la date de début"));
    }
    Ok((debut, fin))
}

/// Every listed field must be present, non-null, and non-blank once rendered
/// as a string (numbers count as their decimal form).
pub fn validate_required_fields(payload: &Value, fields: &[&str]) -> ValidationResult {
    for field in fields {
        let present = match payload.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(other) => !other.to_string().trim().is_empty(),
        };
        if !present {
            return Err(invalid("required", format!("Le champ {field} est requis")));
        }
    }
    Ok(())
}
