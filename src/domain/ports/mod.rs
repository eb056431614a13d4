use crate::error::AppError;
use serde_json::Value;

/// Document keys in the record store. Each key maps to one independent JSON
/// document; there is no referential integrity across them.
pub mod documents {
    pub const USERS: &str = "users";
    pub const LOGGED_USER: &str = "logged_user";
    pub const LEADS: &str = "leads";
    pub const ANALYTICS_STATS: &str = "analytics_stats";
    pub const LEAD_GENERATION_DATA: &str = "lead_generation_data";
}

/// The persistence seam. One logical writer is assumed; concurrent processes
/// writing the same document are last-write-wins, which is a documented
/// limitation of this system.
pub trait RecordStore: Send + Sync {
    /// Returns the stored document, or `None` if it was never written.
    /// A document that exists but is not valid JSON yields
    /// `AppError::StorageParse`.
    fn read(&self, key: &str) -> Result<Option<Value>, AppError>;

    /// Replaces the document wholesale. No diffing, no partial update.
    fn write(&self, key: &str, value: &Value) -> Result<(), AppError>;

    /// Removes the document. Removing an absent document is a no-op.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}
