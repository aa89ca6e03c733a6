use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::VerificationError;

pub const HASH_FIELD: &str = "hash";
pub const AUTH_DATE_FIELD: &str = "auth_date";

/// Identity claims delivered by the login widget, including `hash`.
///
/// Serializes as a flat JSON object, e.g.
/// `{"auth_date":"1700000000","first_name":"Ann","hash":"…","id":"123"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet(BTreeMap<String, String>);

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a claim set from decoded form or query pairs.
    ///
    /// The widget sends exactly one value per field; a repeated field is
    /// rejected rather than truncated to its first value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, VerificationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut claims = BTreeMap::new();
        for (key, value) in pairs {
            let key = key.into();
            if claims.contains_key(&key) {
                return Err(VerificationError::MalformedClaims(key));
            }
            claims.insert(key, value.into());
        }
        Ok(Self(claims))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates claims in ascending byte-wise key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn hash(&self) -> Option<&str> {
        self.get(HASH_FIELD)
    }

    pub fn auth_date(&self) -> Option<&str> {
        self.get(AUTH_DATE_FIELD)
    }

    /// Telegram user id.
    pub fn id(&self) -> Option<&str> {
        self.get("id")
    }

    pub fn first_name(&self) -> Option<&str> {
        self.get("first_name")
    }

    pub fn username(&self) -> Option<&str> {
        self.get("username")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ClaimSet {
    /// Later values win on duplicate keys. Use [`ClaimSet::from_pairs`] for
    /// untrusted input.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_rejects_repeated_field() {
        let result = ClaimSet::from_pairs([("id", "1"), ("first_name", "Ann"), ("id", "2")]);
        assert_eq!(result, Err(VerificationError::MalformedClaims("id".into())));
    }

    #[test]
    fn test_iter_is_sorted_by_key() {
        let claims: ClaimSet = [("username", "ann"), ("auth_date", "1"), ("id", "123")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = claims.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["auth_date", "id", "username"]);
    }

    #[test]
    fn test_serde_flat_object() {
        let claims = ClaimSet::from_pairs([("id", "123"), ("hash", "abc")]).unwrap();
        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(json, r#"{"hash":"abc","id":"123"}"#);

        let parsed: ClaimSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, claims);
    }

    #[test]
    fn test_well_known_accessors() {
        let claims = ClaimSet::from_pairs([
            ("id", "123"),
            ("first_name", "Ann"),
            ("username", "ann_t"),
            ("auth_date", "1700000000"),
        ])
        .unwrap();
        assert_eq!(claims.id(), Some("123"));
        assert_eq!(claims.first_name(), Some("Ann"));
        assert_eq!(claims.username(), Some("ann_t"));
        assert_eq!(claims.auth_date(), Some("1700000000"));
        assert_eq!(claims.hash(), None);
    }
}
