mod object_config;
mod project;
mod service_config;

pub use object_config::*;
pub use project::*;
pub use service_config::*;
