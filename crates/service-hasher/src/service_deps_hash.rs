use convoy_config::{ConfigObject, Project, ServiceConfig, ServiceObjectReference};
use convoy_hash::hash_content;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use tracing::trace;

hash_content!(
    pub struct ObjectHash<'cfg> {
        pub content: Option<&'cfg str>,
        pub environment: Option<&'cfg str>,
        pub file: Option<&'cfg str>,
    }
);

impl<'cfg> ObjectHash<'cfg> {
    pub fn new(object: &'cfg ConfigObject) -> Self {
        Self {
            content: object.content.as_deref(),
            environment: object.environment.as_deref(),
            file: object.file.as_deref(),
        }
    }
}

hash_content!(
    pub struct ServiceDepsHash<'cfg> {
        // Referenced objects keyed by source, `None` when the project
        // doesn't define them
        pub configs: BTreeMap<&'cfg str, Option<ObjectHash<'cfg>>>,

        pub secrets: BTreeMap<&'cfg str, Option<ObjectHash<'cfg>>>,
    }
);

impl<'cfg> ServiceDepsHash<'cfg> {
    pub fn new(project: &'cfg Project, service: &'cfg ServiceConfig) -> Self {
        Self {
            configs: collect_objects("config", &service.configs, &project.configs),
            secrets: collect_objects("secret", &service.secrets, &project.secrets),
        }
    }
}

fn collect_objects<'cfg>(
    kind: &str,
    references: &'cfg [ServiceObjectReference],
    objects: &'cfg FxHashMap<String, ConfigObject>,
) -> BTreeMap<&'cfg str, Option<ObjectHash<'cfg>>> {
    references
        .iter()
        .map(|reference| {
            let object = objects.get(&reference.source);

            if object.is_none() {
                trace!(
                    kind,
                    source = reference.source.as_str(),
                    "Referenced object is not defined in the project, hashing as absent"
                );
            }

            (reference.source.as_str(), object.map(ObjectHash::new))
        })
        .collect()
}
