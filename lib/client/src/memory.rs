use crate::request::CreateCollectionRequest;
use crate::service::CollectionService;
use collectx_core::{CollectionSchema, Error, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// In-process stand-in for a remote vector search service
///
/// Every schema goes through the JSON wire payload before it is stored, and
/// the service-side checks (field validity, duplicate names) are applied here.
#[derive(Debug, Clone, Default)]
pub struct InMemoryService {
    collections: Arc<RwLock<HashMap<String, CollectionSchema>>>,
}

impl InMemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.collections.read().len()
    }

    fn receive(schema: &CollectionSchema) -> Result<CollectionSchema> {
        let payload = CreateCollectionRequest::from(schema).to_json()?;
        debug!("create_collection payload: {}", payload);
        CollectionSchema::try_from(CreateCollectionRequest::from_json(&payload)?)
    }
}

impl CollectionService for InMemoryService {
    fn create_collection(&self, schema: &CollectionSchema) -> Result<()> {
        let received = Self::receive(schema)?;
        if let Err(e) = received.validate() {
            warn!("Rejected {}: {}", received, e);
            return Err(e);
        }

        let mut collections = self.collections.write();
        if collections.contains_key(received.name()) {
            warn!("Collection {} already exists", received.name());
            return Err(Error::CollectionExists(received.name().to_string()));
        }

        info!("Created {}", received);
        collections.insert(received.name().to_string(), received);
        Ok(())
    }

    fn has_collection(&self, name: &str) -> bool {
        self.collections.read().contains_key(name)
    }

    fn describe_collection(&self, name: &str) -> Result<CollectionSchema> {
        self.collections
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::CollectionNotFound(name.to_string()))
    }

    fn drop_collection(&self, name: &str) -> Result<()> {
        match self.collections.write().remove(name) {
            Some(_) => {
                info!("Dropped collection {}", name);
                Ok(())
            }
            None => Err(Error::CollectionNotFound(name.to_string())),
        }
    }

    fn list_collections(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.read().keys().cloned().collect();
        names.sort();
        names
    }
}
