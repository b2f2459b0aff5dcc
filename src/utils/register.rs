use std::sync::LazyLock;

use chrono::NaiveDate;
use email_address::EmailAddress;
use regex::Regex;

use crate::structs::register_form::{Field, RegisterForm};
use crate::structs::registration_submission::RegistrationSubmission;
use crate::utils::app_error::ValidationErrors;

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_SYMBOLS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];
pub const REQUIRED_EMAIL_SUFFIX: &str = "@gmail.com";

pub const REQUIRED: &str = "Required";
pub const FULL_NAME_EMPTY: &str = "String must contain at least 1 character(s)";
pub const FULL_NAME_HAS_DIGIT: &str = "Full name cannot contain numbers";
pub const EMAIL_INVALID: &str = "Email should be valid";
pub const EMAIL_NOT_GMAIL: &str = "Email should end in @gmail.com";
pub const PASSWORD_TOO_SHORT: &str = "String must contain at least 8 character(s)";
pub const PASSWORD_TOO_WEAK: &str = "Password should have at least one uppercase letter, one lowercase letter, one number, and one special character and a min of 8 characters";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords does not match";
pub const INVALID_DATE: &str = "Invalid date";

/// A single check on a field. `passes` sees the field's value and the whole
/// form, so cross-field checks fit the same shape.
struct Rule {
    field: Field,
    passes: fn(&str, &RegisterForm) -> bool,
    message: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        field: Field::FullName,
        passes: |value, _| !value.is_empty(),
        message: FULL_NAME_EMPTY,
    },
    Rule {
        field: Field::FullName,
        passes: |value, _| !value.chars().any(|c| c.is_ascii_digit()),
        message: FULL_NAME_HAS_DIGIT,
    },
    Rule {
        field: Field::Email,
        passes: |value, _| check_email_address(value),
        message: EMAIL_INVALID,
    },
    Rule {
        field: Field::Email,
        passes: |value, _| value.ends_with(REQUIRED_EMAIL_SUFFIX),
        message: EMAIL_NOT_GMAIL,
    },
    Rule {
        field: Field::Password,
        passes: |value, _| value.chars().count() >= PASSWORD_MIN_LENGTH,
        message: PASSWORD_TOO_SHORT,
    },
    Rule {
        field: Field::Password,
        passes: |value, _| check_password_strength(value),
        message: PASSWORD_TOO_WEAK,
    },
    // Only compared once every field is present.
    Rule {
        field: Field::ConfirmPassword,
        passes: |value, form| {
            Field::ALL.iter().any(|field| field.value(form).is_none())
                || Field::Password.value(form) == Some(value)
        },
        message: PASSWORDS_DO_NOT_MATCH,
    },
    Rule {
        field: Field::BirthDate,
        passes: |value, _| parse_iso_date(value).is_some(),
        message: INVALID_DATE,
    },
];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("EMAIL_RE is a valid regex pattern")
});

/// Plain `local@domain.tld` addresses only: no quoted local part, no leading
/// or doubled dot, and a TLD of at least two letters.
pub fn check_email_address(email: &str) -> bool {
    EmailAddress::is_valid(email)
        && !email.starts_with('.')
        && !email.contains("..")
        && EMAIL_RE.is_match(email)
}

fn is_password_symbol(c: char) -> bool {
    PASSWORD_SYMBOLS.contains(&c)
}

/// Lowercase, uppercase, digit and symbol each present, nothing outside
/// `[A-Za-z0-9@$!%*?&]`, and at least `PASSWORD_MIN_LENGTH` long.
pub fn check_password_strength(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LENGTH
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || is_password_symbol(c))
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(is_password_symbol)
}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Checks every field of a registration form.
///
/// All fields are always checked and every failing rule is reported under
/// the field it describes. A missing field only reports `Required`, and the
/// password confirmation is not compared until every field is present.
pub fn check_register_infos(form: &RegisterForm) -> Result<RegistrationSubmission, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for field in Field::ALL {
        let Some(value) = field.value(form) else {
            errors.push(field, REQUIRED);
            continue;
        };

        for rule in RULES.iter().filter(|rule| rule.field == field) {
            if !(rule.passes)(value, form) {
                errors.push(field, rule.message);
            }
        }
    }

    normalize(form).filter(|_| errors.is_empty()).ok_or(errors)
}

fn normalize(form: &RegisterForm) -> Option<RegistrationSubmission> {
    Some(RegistrationSubmission {
        full_name: Field::FullName.value(form)?.to_string(),
        email: Field::Email.value(form)?.parse().ok()?,
        password: Field::Password.value(form)?.to_string(),
        birth_date: parse_iso_date(Field::BirthDate.value(form)?)?,
    })
}
