use chrono::NaiveDate;
use email_address::EmailAddress;

/// A submission that passed every registration rule.
///
/// `confirmPassword` is only needed to validate `password` and is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSubmission {
    pub full_name: String,
    pub email: EmailAddress,
    pub password: String,
    pub birth_date: NaiveDate,
}
