use thiserror::Error;
use tgauth_types::SecretError;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages never include the bot token.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: environment variable {var} not set")]
    ConfigMissing { var: &'static str },

    #[error("Configuration error: environment variable {var} is invalid")]
    ConfigInvalid {
        var: &'static str,
        #[source]
        source: SecretError,
    },

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
