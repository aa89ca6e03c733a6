use std::sync::Arc;

use time::OffsetDateTime;
use tgauth_types::{ClaimSet, SharedSecret, VerificationError, verify};
use tracing::instrument;

use crate::app_error::{AppError, AppResult};

/// Source of the verification moment.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

#[derive(Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

#[derive(Clone)]
pub struct LoginUseCases {
    secret: Arc<SharedSecret>,
    clock: Arc<dyn Clock>,
}

impl LoginUseCases {
    pub fn new(secret: Arc<SharedSecret>, clock: Arc<dyn Clock>) -> Self {
        Self { secret, clock }
    }

    /// Verifies the fields the login widget redirected back with.
    #[instrument(skip_all)]
    pub fn check_widget_login<I>(&self, pairs: I) -> AppResult<ClaimSet>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let claims = ClaimSet::from_pairs(pairs).map_err(|e| self.rejected(e))?;
        self.check(&claims)
    }

    /// Re-verifies claims restored from the session cookie.
    #[instrument(skip_all)]
    pub fn check_session(&self, claims: &ClaimSet) -> AppResult<ClaimSet> {
        self.check(claims)
    }

    fn check(&self, claims: &ClaimSet) -> AppResult<ClaimSet> {
        let verified =
            verify(claims, &self.secret, self.clock.now()).map_err(|e| self.rejected(e))?;
        tracing::info!(user_id = verified.id().unwrap_or("?"), "login verified");
        Ok(verified)
    }

    fn rejected(&self, err: VerificationError) -> AppError {
        tracing::warn!(code = %err.code(), "login rejected");
        AppError::Verification(err)
    }
}
