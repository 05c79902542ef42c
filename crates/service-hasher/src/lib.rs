mod extension_value;
mod project_hasher;
mod service_deps_hash;
mod service_hash;
mod service_hasher;
mod service_hasher_error;

pub use project_hasher::*;
pub use service_deps_hash::*;
pub use service_hash::*;
pub use service_hasher::*;
pub use service_hasher_error::*;
