mod canonical;
mod hash_error;
mod hasher;

pub use canonical::*;
pub use hash_error::*;
pub use hasher::*;

/// Declares a struct that can be passed to [`ContentHasher::hash_content`].
/// Only the fields listed in the struct take part in the hash.
#[macro_export]
macro_rules! hash_content {
    ($impl:item) => {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "snake_case")]
        $impl
    };
}
