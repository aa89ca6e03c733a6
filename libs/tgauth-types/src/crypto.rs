use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use time::{Duration, OffsetDateTime};

use crate::{ClaimSet, SharedSecret, VerificationError, claims::HASH_FIELD};

type HmacSha256 = Hmac<Sha256>;

/// How long a widget login stays valid after `auth_date`.
pub const FRESHNESS_WINDOW: Duration = Duration::hours(24);

/// Builds the newline-joined `key=value` string the provider signs.
///
/// Every claim except `hash` takes part, in ascending byte-wise key order,
/// with no trailing separator. This ordering is what the provider computes
/// its MAC over, so it must not change.
pub fn data_check_string(claims: &ClaimSet) -> String {
    claims
        .iter()
        .filter(|(key, _)| *key != HASH_FIELD)
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// SHA-256 of the raw bot token, used as the HMAC key.
pub fn derive_signing_key(secret: &SharedSecret) -> [u8; 32] {
    Sha256::digest(secret.expose_bytes()).into()
}

/// Computes the lowercase hex MAC the provider would send as `hash`.
pub fn compute_hash(claims: &ClaimSet, secret: &SharedSecret) -> String {
    let key = derive_signing_key(secret);
    let mut mac = HmacSha256::new_from_slice(&key).expect("HMAC accepts any key length");
    mac.update(data_check_string(claims).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verifies a widget login and returns the full claim set on success.
///
/// # Arguments
/// * `claims` - Every field the widget sent, `hash` included
/// * `secret` - The bot token the widget was configured with
/// * `now` - The verification moment
///
/// # Errors
/// `MissingHash` and `MissingAuthDate` are reported before any MAC work.
/// `HashMismatch` when the MAC differs, `MalformedTimestamp` when
/// `auth_date` is not a base-10 integer, `Expired` when it is more than
/// [`FRESHNESS_WINDOW`] in the past. Future timestamps are accepted.
pub fn verify(
    claims: &ClaimSet,
    secret: &SharedSecret,
    now: OffsetDateTime,
) -> Result<ClaimSet, VerificationError> {
    let provided = claims.hash().ok_or(VerificationError::MissingHash)?;
    let auth_date = claims
        .auth_date()
        .ok_or(VerificationError::MissingAuthDate)?;

    let expected = compute_hash(claims, secret);
    if !bool::from(expected.as_bytes().ct_eq(provided.as_bytes())) {
        return Err(VerificationError::HashMismatch);
    }

    let auth_date: i64 = auth_date
        .parse()
        .map_err(|_| VerificationError::MalformedTimestamp(auth_date.to_string()))?;

    let age = now.unix_timestamp().saturating_sub(auth_date);
    if age > FRESHNESS_WINDOW.whole_seconds() {
        return Err(VerificationError::Expired);
    }

    Ok(claims.clone())
}
