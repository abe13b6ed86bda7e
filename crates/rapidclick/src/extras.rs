//! Typed extras for bundles and intents
//!
//! Structured values ("parcelables") are stored together with their type
//! name. How a lookup is resolved depends on the host API level:
//!
//! - From [`TYPED_EXTRAS_API`] on, the lookup is type checked: the stored
//!   type name must match the requested one.
//! - Older hosts only offer an untyped fetch followed by a cast, which is
//!   emulated by decoding the payload without looking at the type name.
//!
//! Callers never see the branch: [`Bundle::parcelable`] and
//! [`Intent::parcelable`] return `None` when the value is missing or cannot
//! be produced, and the cause is logged.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, error, trace};

/// First API level with type-checked extras lookup
pub const TYPED_EXTRAS_API: ApiLevel = ApiLevel(33);

/// Host platform API level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiLevel(pub u32);

impl ApiLevel {
    /// Most recent level this crate knows about
    pub const LATEST: ApiLevel = ApiLevel(34);

    pub fn supports_typed_extras(self) -> bool {
        self >= TYPED_EXTRAS_API
    }
}

impl Default for ApiLevel {
    fn default() -> Self {
        Self::LATEST
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API {}", self.0)
    }
}

/// A structured value that can travel in extras
pub trait Parcelable: Serialize + DeserializeOwned {
    /// Name stored alongside the payload and checked by typed lookups
    const TYPE_NAME: &'static str;
}

/// Errors from extras access
#[derive(Debug, Error)]
pub enum ExtrasError {
    #[error("no extra stored under '{key}'")]
    Missing { key: String },

    #[error("extra '{key}' holds {found}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: String,
    },

    #[error("failed to decode extra '{key}' as {expected}")]
    Decode {
        key: String,
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {type_name}")]
    Encode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum Extra {
    Parcel { type_name: String, payload: Value },
    Text(String),
}

impl Extra {
    fn describe(&self) -> String {
        match self {
            Extra::Parcel { type_name, .. } => type_name.clone(),
            Extra::Text(_) => "String".to_string(),
        }
    }
}

/// Key-value extras map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bundle {
    api: ApiLevel,
    entries: BTreeMap<String, Extra>,
}

impl Bundle {
    /// Empty bundle on a host with the given API level
    pub fn new(api: ApiLevel) -> Self {
        Self {
            api,
            entries: BTreeMap::new(),
        }
    }

    pub fn api_level(&self) -> ApiLevel {
        self.api
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Store a parcelable, replacing anything under `key`
    pub fn put_parcelable<T: Parcelable>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<(), ExtrasError> {
        let payload = serde_json::to_value(value).map_err(|source| ExtrasError::Encode {
            type_name: T::TYPE_NAME,
            source,
        })?;
        self.entries.insert(
            key.into(),
            Extra::Parcel {
                type_name: T::TYPE_NAME.to_string(),
                payload,
            },
        );
        Ok(())
    }

    /// Store a plain string, replacing anything under `key`
    pub fn put_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), Extra::Text(value.into()));
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(Extra::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Fetch a parcelable, reporting why it could not be produced
    pub fn try_parcelable<T: Parcelable>(&self, key: &str) -> Result<T, ExtrasError> {
        let extra = self.entries.get(key).ok_or_else(|| ExtrasError::Missing {
            key: key.to_string(),
        })?;

        if self.api.supports_typed_extras() {
            Self::typed_lookup(key, extra)
        } else {
            Self::legacy_cast(key, extra)
        }
    }

    /// Fetch a parcelable, or `None` if it is absent or has the wrong type
    pub fn parcelable<T: Parcelable>(&self, key: &str) -> Option<T> {
        match self.try_parcelable(key) {
            Ok(value) => Some(value),
            Err(ExtrasError::Missing { .. }) => {
                trace!(key, "no parcelable extra");
                None
            }
            Err(e) if self.api.supports_typed_extras() => {
                error!(key, api = %self.api, error = %e, "error retrieving parcelable");
                None
            }
            Err(e) => {
                debug!(key, api = %self.api, error = %e, "parcelable cast failed");
                None
            }
        }
    }

    fn typed_lookup<T: Parcelable>(key: &str, extra: &Extra) -> Result<T, ExtrasError> {
        match extra {
            Extra::Parcel { type_name, payload } if type_name == T::TYPE_NAME => {
                Self::decode(key, payload.clone())
            }
            other => Err(ExtrasError::TypeMismatch {
                key: key.to_string(),
                expected: T::TYPE_NAME,
                found: other.describe(),
            }),
        }
    }

    fn legacy_cast<T: Parcelable>(key: &str, extra: &Extra) -> Result<T, ExtrasError> {
        match extra {
            Extra::Parcel { payload, .. } => Self::decode(key, payload.clone()),
            Extra::Text(_) => Err(ExtrasError::TypeMismatch {
                key: key.to_string(),
                expected: T::TYPE_NAME,
                found: extra.describe(),
            }),
        }
    }

    fn decode<T: Parcelable>(key: &str, payload: Value) -> Result<T, ExtrasError> {
        serde_json::from_value(payload).map_err(|source| ExtrasError::Decode {
            key: key.to_string(),
            expected: T::TYPE_NAME,
            source,
        })
    }
}

/// A launch request carrying extras
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intent {
    action: String,
    extras: Bundle,
}

impl Intent {
    pub fn new(action: impl Into<String>, api: ApiLevel) -> Self {
        Self {
            action: action.into(),
            extras: Bundle::new(api),
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn extras(&self) -> &Bundle {
        &self.extras
    }

    /// Attach a parcelable extra
    pub fn put_extra<T: Parcelable>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<(), ExtrasError> {
        self.extras.put_parcelable(key, value)
    }

    pub fn put_string_extra(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extras.put_string(key, value);
    }

    /// See [`Bundle::parcelable`]
    pub fn parcelable<T: Parcelable>(&self, key: &str) -> Option<T> {
        self.extras.parcelable(key)
    }
}
