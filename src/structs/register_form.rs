use std::collections::HashMap;
use std::fmt;

/// Raw, form-encoded body of `POST /`.
pub type RegisterForm = HashMap<String, String>;

/// Fields of the registration form, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    BirthDate,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FullName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::BirthDate,
    ];

    /// Name of the field in the form body and in the template's `errors` map.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::BirthDate => "birthDate",
        }
    }

    pub fn value(self, form: &RegisterForm) -> Option<&str> {
        form.get(self.as_str()).map(String::as_str)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
