use miette::Diagnostic;
use starbase_styles::{Style, Stylize};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum HashError {
    #[diagnostic(code(hash::serialize_failed))]
    #[error("Failed to serialize content for hasher {}.", .label.style(Style::Id))]
    Serialization {
        label: String,
        #[source]
        error: Box<serde_json::Error>,
    },
}
