use std::fmt;

use crate::models::Role;

/// Validation failures surfaced by the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    MissingCredentials,
}

impl AuthError {
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => "Please enter both email and password",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The portal's single credential check. Demo rule: any non-empty pair
/// signs in with the requested role. Swapping in a real identity
/// provider means replacing this function body and adding error
/// variants; the session transitions and the navigation guard stay
/// untouched.
pub fn authenticate(email: &str, password: &str, requested: Role) -> Result<Role, AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    log::info!("🔐 Demo sign-in as {} ({})", requested.as_str(), email);
    Ok(requested)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_non_empty_pair_succeeds() {
        assert_eq!(
            authenticate("ops@biomedpharma.com", "secret", Role::Customer),
            Ok(Role::Customer)
        );
        assert_eq!(authenticate("x", "y", Role::Admin), Ok(Role::Admin));
    }

    #[test]
    fn empty_email_is_rejected() {
        assert_eq!(
            authenticate("", "secret", Role::Customer),
            Err(AuthError::MissingCredentials)
        );
    }

    #[test]
    fn empty_password_is_rejected() {
        assert_eq!(
            authenticate("ops@biomedpharma.com", "", Role::Admin),
            Err(AuthError::MissingCredentials)
        );
    }

    #[test]
    fn validation_message_matches_form_copy() {
        assert_eq!(
            AuthError::MissingCredentials.message(),
            "Please enter both email and password"
        );
    }
}
