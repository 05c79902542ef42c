use crate::service_deps_hash::ServiceDepsHash;
use crate::service_hash::ServiceHash;
use convoy_config::{Project, ServiceConfig};
use convoy_hash::{ContentHasher, HashError};
use tracing::instrument;

/// Hash the parts of a service definition that require its container to be
/// recreated when they change.
#[instrument(skip_all, fields(service = %service.name))]
pub fn hash_service(service: &ServiceConfig) -> Result<String, HashError> {
    let mut hasher = ContentHasher::new(&format!("service:{}", service.name));

    hasher.hash_content(ServiceHash::new(service))?;

    Ok(hasher.generate_hash())
}

/// Hash a service definition together with the content of every config and
/// secret it references from the project.
#[instrument(skip_all, fields(service = %service.name))]
pub fn hash_service_dependencies(
    project: &Project,
    service: &ServiceConfig,
) -> Result<String, HashError> {
    let mut hasher = ContentHasher::new(&format!("service-deps:{}", service.name));

    hasher.hash_content(ServiceHash::new(service))?;
    hasher.hash_content(ServiceDepsHash::new(project, service))?;

    Ok(hasher.generate_hash())
}
