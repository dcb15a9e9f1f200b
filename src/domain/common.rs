/// Identifies stored records that expose a stable unique identifier.
pub trait CatalogRecord {
    fn id(&self) -> &str;
}
