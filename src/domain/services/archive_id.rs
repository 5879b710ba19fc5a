/// Deterministic identity for a past event derived from its source upcoming
/// event. Using the derived id as the create-if-absent key makes the
/// migration idempotent: two passes over the same expired event address the
/// same record.
///
/// The two prefixes are distinct so a persisted synthetic record can never
/// collide with the read-only transient projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveId(String);

const PERSISTED_PREFIX: &str = "past-";
const TRANSIENT_PREFIX: &str = "auto-";

impl ArchiveId {
    /// Key for the durable past-event mirror of an expired event.
    pub fn persisted(source_id: &str) -> Self {
        Self(format!("{}{}", PERSISTED_PREFIX, source_id))
    }

    /// Key for the display-only fallback projection.
    pub fn transient(source_id: &str) -> Self {
        Self(format!("{}{}", TRANSIENT_PREFIX, source_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
