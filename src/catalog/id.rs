use uuid::Uuid;

use crate::catalog::product::ProductId;

/// Source of fresh product identifiers.
///
/// Random v4 UUIDs are checked against the ids already in use and redrawn on
/// a hit, so an id is never handed out twice while the catalog holds it.
pub trait IdGenerator {
    fn next_id(&mut self, taken: &dyn Fn(&ProductId) -> bool) -> ProductId;
}

#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self, taken: &dyn Fn(&ProductId) -> bool) -> ProductId {
        loop {
            let id = ProductId::new(Uuid::new_v4().to_string());
            if !taken(&id) {
                return id;
            }
            tracing::warn!(id = %id, "generated product id already in use, drawing again");
        }
    }
}

/// Deterministic generator yielding `<prefix>-1`, `<prefix>-2`, ...
///
/// Still honors the collision check, so it never returns an id in use.
#[derive(Debug)]
pub struct SequentialGenerator {
    prefix: String,
    counter: u64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&mut self, taken: &dyn Fn(&ProductId) -> bool) -> ProductId {
        loop {
            self.counter += 1;
            let id = ProductId::new(format!("{}-{}", self.prefix, self.counter));
            if !taken(&id) {
                return id;
            }
        }
    }
}
