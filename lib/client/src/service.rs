use collectx_core::{CollectionSchema, Result};

/// Collection management operations offered by a vector search service
///
/// Implementations own serialization and any checks the service performs;
/// schemas arrive exactly as the builder produced them.
pub trait CollectionService {
    fn create_collection(&self, schema: &CollectionSchema) -> Result<()>;

    fn has_collection(&self, name: &str) -> bool;

    fn describe_collection(&self, name: &str) -> Result<CollectionSchema>;

    fn drop_collection(&self, name: &str) -> Result<()>;

    /// Collection names, sorted
    fn list_collections(&self) -> Vec<String>;
}
