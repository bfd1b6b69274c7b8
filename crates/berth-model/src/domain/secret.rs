use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::{EnvKey, SecretName};

const SEPARATOR: char = ':';

/// Pointer to a single field inside a secret-manager entry.
///
/// This is never the secret value itself: the provisioner turns it into a container secret that is read at task start.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretRef {
    /// Secret-manager entry name.
    pub secret_name: SecretName,
    /// JSON field inside the entry; empty when the reference names the whole secret.
    pub field_name: String,
}

impl SecretRef {
    pub fn new(secret_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            secret_name: secret_name.into(),
            field_name: field_name.into(),
        }
    }

    /// Parse a `"<secretName>:<fieldName>"` reference.
    ///
    /// Parsing never fails:
    /// - segments after the second `:` are dropped (`"a:b:c"` → `a`, `b`);
    /// - a value without `:` yields an empty field name.
    pub fn parse(value: &str) -> Self {
        let mut parts = value.split(SEPARATOR);
        let secret_name = parts.next().unwrap_or_default();
        let field_name = parts.next().unwrap_or_default();
        Self::new(secret_name, field_name)
    }

    /// Returns `true` if the reference carries a field name.
    #[inline]
    pub fn has_field(&self) -> bool {
        !self.field_name.is_empty()
    }
}

impl fmt::Display for SecretRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.secret_name, SEPARATOR, self.field_name)
    }
}

/// Raw secret references keyed by the variable name exposed to the container.
///
/// Values use the `"<secretName>:<fieldName>"` form; see [`SecretRef::parse`].
/// A `null` value deserializes as an empty string, which [`Secrets::resolve`] skips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Secrets(pub BTreeMap<EnvKey, String>);

impl<'de> Deserialize<'de> for Secrets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<EnvKey, Option<String>>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .map(|(k, v)| (k, v.unwrap_or_default()))
                .collect(),
        ))
    }
}

impl Secrets {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Resolve every non-empty reference.
    ///
    /// Entries with an empty value are skipped, so the result never holds more entries than the input.
    pub fn resolve(&self) -> BTreeMap<EnvKey, SecretRef> {
        self.0
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| {
                let secret = SecretRef::parse(value);
                if !secret.has_field() {
                    debug!(key = %key, secret = %secret.secret_name, "secret reference has no field name");
                }
                (key.clone(), secret)
            })
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Secrets
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
