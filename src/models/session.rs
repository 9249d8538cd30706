/// Login form contents.
///
/// There is no authentication: any non-empty pair signs the user in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

/// Login screen lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
}

impl LoginState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_fields() {
        let mut credentials = Credentials::default();
        assert!(!credentials.is_complete());

        credentials.email = "ricardo@yla.com.br".to_string();
        assert!(!credentials.is_complete());

        credentials.password = "x".to_string();
        assert!(credentials.is_complete());
    }
}
