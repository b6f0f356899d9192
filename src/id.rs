use uuid::Uuid;

/// Source of fresh unique identifiers for generated records. Abstracted so
/// tests can substitute a deterministic sequence for the random production
/// implementation.
pub trait IdSource {
    /// Produces a fresh identifier, never repeated within a run.
    fn next_id(&mut self) -> String;
}

/// Production identifier source backed by random UUIDv4 tokens.
#[derive(Debug, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}
