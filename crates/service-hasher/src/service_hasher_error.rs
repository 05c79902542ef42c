use convoy_hash::HashError;
use miette::Diagnostic;
use starbase_styles::{Style, Stylize};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ServiceHasherError {
    #[diagnostic(code(service_hasher::unknown_service))]
    #[error(
        "Unable to hash service {}, it does not exist in project {}.",
        .name.style(Style::Id),
        .project.style(Style::Id),
    )]
    UnknownService { name: String, project: String },

    #[diagnostic(transparent)]
    #[error(transparent)]
    Hash(#[from] HashError),
}
