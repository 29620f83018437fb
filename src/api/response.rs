use serde::{Deserialize, Serialize};

/// Body returned by the mutating airplane endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
    pub id: i32,
}

impl Confirmation {
    pub fn saved(id: i32, label: &str) -> Self {
        Self::new(id, format!("Airplane {} was saved successfully", label))
    }

    pub fn updated(id: i32, label: &str) -> Self {
        Self::new(id, format!("Airplane {} was updated successfully", label))
    }

    pub fn deleted(id: i32, label: &str) -> Self {
        Self::new(id, format!("Airplane {} was deleted successfully", label))
    }

    fn new(id: i32, message: String) -> Self {
        Self { message, id }
    }
}
