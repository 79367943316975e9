use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully-qualified collection namespace, `<database>.<collection>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Namespace {
    pub db: String,
    pub coll: String,
}

impl Namespace {
    pub fn new(db: impl Into<String>, coll: impl Into<String>) -> Self {
        Self { db: db.into(), coll: coll.into() }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.db, self.coll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_displays_as_db_dot_collection() {
        assert_eq!(Namespace::new("app", "orders").to_string(), "app.orders");
    }

    #[test]
    fn namespace_serde_round_trip() {
        let ns = Namespace::new("app", "orders");
        let json = serde_json::to_string(&ns).unwrap();
        assert_eq!(serde_json::from_str::<Namespace>(&json).unwrap(), ns);
    }
}
