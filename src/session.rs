use uuid::Uuid;

/// A client session. Every command of one logical operation is sent over the
/// same session; the orchestration layer never starts sessions itself.
#[derive(Debug, Clone)]
pub struct ClientSession {
    id: Uuid,
    operations: u64,
}

impl ClientSession {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4(), operations: 0 }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Number of commands sent over this session so far.
    pub fn operation_count(&self) -> u64 {
        self.operations
    }

    pub(crate) fn advance(&mut self) {
        self.operations += 1;
    }
}

impl Default for ClientSession {
    fn default() -> Self {
        Self::new()
    }
}
