use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A named resource declared at the project level and mounted into
/// services. The value comes from exactly one of `content`, `environment`
/// or `file`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ConfigObject {
    /// Name of the resource on the platform, when it differs from the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Inline literal value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Name of the environment variable providing the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    /// Path to the file providing the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Managed outside of the project.
    pub external: bool,

    pub labels: FxHashMap<String, String>,
}

pub type SecretObject = ConfigObject;

/// A service's reference to a project level config or secret.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ServiceObjectReference {
    /// Key of the object in the project.
    pub source: String,

    /// Mount location within the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,
}

impl ServiceObjectReference {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }
}

pub type ServiceConfigReference = ServiceObjectReference;

pub type ServiceSecretReference = ServiceObjectReference;
