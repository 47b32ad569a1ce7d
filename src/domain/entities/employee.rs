use serde::{Deserialize, Serialize};

/// Represents an employee record as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier assigned by the backend
    id: i64,

    /// Given name
    first_name: String,

    /// Family name
    last_name: String,

    /// Contact email
    email: String,
}

impl Employee {
    /// Creates an employee from its parts
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns a copy with the descriptive fields replaced, keeping the id
    pub fn with_details(
        &self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self::new(self.id, first_name, last_name, email)
    }

    /// Returns a copy carrying a different identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}
