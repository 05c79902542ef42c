use crate::canonical::to_canonical_json;
use crate::hash_error::HashError;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, instrument, trace};

/// Accumulates serializable content and digests it as a single
/// canonical JSON array.
pub struct ContentHasher {
    content_cache: Option<String>,
    contents: Vec<String>,
    hash_cache: Option<String>,

    pub label: String,
}

impl ContentHasher {
    pub fn new(label: &str) -> ContentHasher {
        trace!(label, "Created new content hasher");

        ContentHasher {
            content_cache: None,
            contents: Vec::new(),
            hash_cache: None,
            label: label.to_owned(),
        }
    }

    #[instrument(skip_all)]
    pub fn generate_hash(&mut self) -> String {
        if let Some(hash) = &self.hash_cache {
            debug!(
                hash,
                label = &self.label,
                "Using cached content hash (previously generated)"
            );

            return hash.to_owned();
        }

        let hash = format!("{:x}", Sha256::digest(self.serialize().as_bytes()));

        debug!(label = &self.label, hash, "Generated content hash");

        self.hash_cache = Some(hash.clone());

        hash
    }

    pub fn hash_content<T: Serialize>(&mut self, content: T) -> Result<(), HashError> {
        trace!(label = &self.label, "Adding content to hasher");

        let json = to_canonical_json(&content).map_err(|error| HashError::Serialization {
            label: self.label.clone(),
            error: Box::new(error),
        })?;

        self.contents.push(json);
        self.content_cache = None;
        self.hash_cache = None;

        Ok(())
    }

    pub fn serialize(&mut self) -> &str {
        self.content_cache
            .get_or_insert_with(|| format!("[{}]", self.contents.join(",")))
    }
}
