use crate::object_config::{ConfigObject, SecretObject};
use crate::service_config::ServiceConfig;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The full application definition.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Project {
    pub name: String,

    pub services: FxHashMap<String, ServiceConfig>,

    pub configs: FxHashMap<String, ConfigObject>,

    pub secrets: FxHashMap<String, SecretObject>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Insert a service keyed by its own name, replacing any previous
    /// service with that name.
    pub fn add_service(&mut self, service: ServiceConfig) {
        self.services.insert(service.name.clone(), service);
    }

    pub fn get_service(&self, name: &str) -> Option<&ServiceConfig> {
        self.services.get(name)
    }

    pub fn get_config(&self, name: &str) -> Option<&ConfigObject> {
        self.configs.get(name)
    }

    pub fn get_secret(&self, name: &str) -> Option<&SecretObject> {
        self.secrets.get(name)
    }

    /// Service names in lexicographic order.
    pub fn service_names(&self) -> Vec<&str> {
        let mut names = self.services.keys().map(|k| k.as_str()).collect::<Vec<_>>();
        names.sort();
        names
    }
}
