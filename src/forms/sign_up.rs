use std::sync::LazyLock;

use regex::Regex;

use super::error::ValidationError;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zÁÉÍÓÚáéíóúÑñ ]+$").expect("name pattern is valid"));

/// Draft behind the "create account" screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignUpForm {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

/// Per-field validity, recomputed on every keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignUpCheck {
    pub name: bool,
    pub surname: bool,
    pub email: bool,
    pub passwords_match: bool,
    /// Show the "passwords differ" hint under the repeat field.
    pub show_repeat_error: bool,
}

impl SignUpCheck {
    pub fn is_valid(&self) -> bool {
        self.name && self.surname && self.email && self.passwords_match
    }
}

/// Letters (Spanish accents and ñ included) and spaces, at least one
/// letter.
fn letters_only(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && NAME.is_match(value)
}

impl SignUpForm {
    pub fn check(&self) -> SignUpCheck {
        SignUpCheck {
            name: letters_only(&self.name),
            surname: letters_only(&self.surname),
            email: EMAIL.is_match(self.email.trim()),
            passwords_match: !self.password.is_empty() && self.password == self.repeat_password,
            show_repeat_error: !self.repeat_password.is_empty()
                && self.password != self.repeat_password,
        }
    }

    /// First failing rule, in form order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let check = self.check();
        if !check.name {
            return Err(ValidationError::InvalidName);
        }
        if !check.surname {
            return Err(ValidationError::InvalidSurname);
        }
        if !check.email {
            return Err(ValidationError::InvalidEmail);
        }
        if !check.passwords_match {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.name.trim(), self.surname.trim())
    }
}
