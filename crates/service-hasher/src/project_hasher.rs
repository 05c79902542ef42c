use crate::service_hasher::{hash_service, hash_service_dependencies};
use crate::service_hasher_error::ServiceHasherError;
use convoy_config::{Project, ServiceConfig};
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceHashes {
    /// From the service definition alone.
    pub config_hash: String,

    /// From the service definition and its referenced configs and secrets.
    pub dependencies_hash: String,
}

impl ServiceHashes {
    pub fn new(project: &Project, service: &ServiceConfig) -> Result<Self, ServiceHasherError> {
        Ok(Self {
            config_hash: hash_service(service)?,
            dependencies_hash: hash_service_dependencies(project, service)?,
        })
    }
}

// Computes hashes for the services of a single project.
pub struct ProjectHasher<'proj> {
    pub project: &'proj Project,
}

impl<'proj> ProjectHasher<'proj> {
    pub fn new(project: &'proj Project) -> Self {
        Self { project }
    }

    pub fn hash_service(&self, name: &str) -> Result<ServiceHashes, ServiceHasherError> {
        let Some(service) = self.project.get_service(name) else {
            return Err(ServiceHasherError::UnknownService {
                name: name.to_owned(),
                project: self.project.name.clone(),
            });
        };

        ServiceHashes::new(self.project, service)
    }

    /// Hash every service. A service that fails to hash does not
    /// prevent the others from being hashed.
    pub fn hash_all(&self) -> BTreeMap<&'proj str, Result<ServiceHashes, ServiceHasherError>> {
        debug!(
            project = self.project.name.as_str(),
            services = self.project.services.len(),
            "Hashing project services"
        );

        self.project
            .services
            .iter()
            .map(|(name, service)| {
                let result = ServiceHashes::new(self.project, service);

                if let Err(error) = &result {
                    warn!(service = name.as_str(), "Failed to hash service: {error}");
                }

                (name.as_str(), result)
            })
            .collect()
    }
}
