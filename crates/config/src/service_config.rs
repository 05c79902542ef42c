use crate::object_config::{ServiceConfigReference, ServiceSecretReference};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PullPolicy {
    Always,
    Build,
    IfNotPresent,
    #[default]
    Missing,
    Never,
}

/// How to build the service image from source.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct BuildConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dockerfile: Option<String>,

    pub args: FxHashMap<String, Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct DeployConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<u32>,

    pub labels: FxHashMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_mode: Option<String>,
}

/// One service of a project.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildConfig>,

    pub command: Vec<String>,

    pub entrypoint: Vec<String>,

    /// Variables without a value are passed through from the host.
    pub environment: FxHashMap<String, Option<String>>,

    pub labels: FxHashMap<String, String>,

    pub networks: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_policy: Option<PullPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy: Option<DeployConfig>,

    /// Services that must be started before this one.
    pub depends_on: Vec<String>,

    pub profiles: Vec<String>,

    pub configs: Vec<ServiceConfigReference>,

    pub secrets: Vec<ServiceSecretReference>,

    /// `x-*` extension fields, and any other key the schema doesn't know.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, serde_yml::Value>,
}

impl ServiceConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
