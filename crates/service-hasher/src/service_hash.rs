use convoy_config::{DeployConfig, ServiceConfig, ServiceObjectReference};
use crate::extension_value::serialize_extensions;
use convoy_hash::hash_content;
use std::collections::BTreeMap;

// Fields of a service that can change without recreating its container,
// and are therefore absent from `ServiceHash`:
//  - `build`: only affects how the image is produced
//  - `pull_policy`: only affects when the image is fetched
//  - `scale`, `deploy.replicas`: handled by scaling, not recreation
//  - `depends_on`, `profiles`: startup order and service selection

hash_content!(
    pub struct DeployHash<'cfg> {
        pub mode: Option<&'cfg str>,
        pub labels: BTreeMap<&'cfg str, &'cfg str>,
        pub endpoint_mode: Option<&'cfg str>,
    }
);

impl<'cfg> DeployHash<'cfg> {
    pub fn new(deploy: &'cfg DeployConfig) -> Self {
        Self {
            mode: deploy.mode.as_deref(),
            labels: deploy
                .labels
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect(),
            endpoint_mode: deploy.endpoint_mode.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mode.is_none() && self.labels.is_empty() && self.endpoint_mode.is_none()
    }
}

hash_content!(
    pub struct ServiceHash<'cfg> {
        pub name: &'cfg str,

        pub image: Option<&'cfg str>,

        pub command: Vec<&'cfg str>,

        pub entrypoint: Vec<&'cfg str>,

        pub environment: BTreeMap<&'cfg str, Option<&'cfg str>>,

        pub labels: BTreeMap<&'cfg str, &'cfg str>,

        pub networks: Vec<&'cfg str>,

        pub restart: Option<&'cfg str>,

        // Without `replicas`
        pub deploy: Option<DeployHash<'cfg>>,

        // Sorted by every reference field
        pub configs: Vec<&'cfg ServiceObjectReference>,

        pub secrets: Vec<&'cfg ServiceObjectReference>,

        #[serde(serialize_with = "serialize_extensions")]
        pub extensions: &'cfg BTreeMap<String, serde_yml::Value>,

        // Bump this to invalidate all hashes
        pub version: &'static str,
    }
);

impl<'cfg> ServiceHash<'cfg> {
    pub fn new(service: &'cfg ServiceConfig) -> Self {
        let mut networks = service
            .networks
            .iter()
            .map(|n| n.as_str())
            .collect::<Vec<_>>();
        networks.sort();
        networks.dedup();

        Self {
            name: &service.name,
            image: service.image.as_deref(),
            command: service.command.iter().map(|a| a.as_str()).collect(),
            entrypoint: service.entrypoint.iter().map(|a| a.as_str()).collect(),
            environment: service
                .environment
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_deref()))
                .collect(),
            labels: service
                .labels
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect(),
            networks,
            restart: service.restart.as_deref(),
            deploy: service
                .deploy
                .as_ref()
                .map(DeployHash::new)
                .filter(|deploy| !deploy.is_empty()),
            configs: sort_references(&service.configs),
            secrets: sort_references(&service.secrets),
            extensions: &service.extensions,
            version: "1",
        }
    }
}

fn sort_references(references: &[ServiceObjectReference]) -> Vec<&ServiceObjectReference> {
    let mut list = references.iter().collect::<Vec<_>>();
    list.sort_by(|a, b| {
        (&a.source, &a.target, &a.uid, &a.gid, a.mode)
            .cmp(&(&b.source, &b.target, &b.uid, &b.gid, b.mode))
    });
    list
}
