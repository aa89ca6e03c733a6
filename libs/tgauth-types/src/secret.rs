use secrecy::{ExposeSecret, SecretString};

use crate::SecretError;

/// The bot token the provider signs login payloads with.
///
/// Immutable once built. `Debug` never prints the token.
pub struct SharedSecret(SecretString);

impl SharedSecret {
    pub fn new(token: impl Into<String>) -> Result<Self, SecretError> {
        let token: String = token.into();
        if token.trim().is_empty() {
            return Err(SecretError::Empty);
        }
        Ok(Self(SecretString::new(token.into_boxed_str())))
    }

    pub(crate) fn expose_bytes(&self) -> &[u8] {
        self.0.expose_secret().as_bytes()
    }
}

impl TryFrom<SecretString> for SharedSecret {
    type Error = SecretError;

    fn try_from(value: SecretString) -> Result<Self, Self::Error> {
        if value.expose_secret().trim().is_empty() {
            return Err(SecretError::Empty);
        }
        Ok(Self(value))
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedSecret([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_rejected() {
        assert_eq!(SharedSecret::new("").unwrap_err(), SecretError::Empty);
        assert_eq!(SharedSecret::new("   ").unwrap_err(), SecretError::Empty);
        assert!(SharedSecret::try_from(SecretString::new(String::new().into())).is_err());
    }

    #[test]
    fn test_debug_is_redacted() {
        let secret = SharedSecret::new("123456:ABC-DEF").unwrap();
        let printed = format!("{secret:?}");
        assert!(!printed.contains("ABC-DEF"));
        assert!(printed.contains("REDACTED"));
    }
}
