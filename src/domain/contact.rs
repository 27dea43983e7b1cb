use serde::{Deserialize, Deserializer, Serialize};

/// Id carried by a contact that has not been stored yet.
pub const UNSET_ID: i64 = 0;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    // Rows imported without an id column (or with an empty one) come in unset.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: i64,

    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: String, phone: String, email: String) -> Self {
        Contact {
            id: UNSET_ID,
            name,
            phone,
            email,
        }
    }

    /// Whether storage has assigned this contact an id.
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Replace the editable fields, keeping the id.
    pub fn overlay(
        &mut self,
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        if let Some(email) = email {
            self.email = email;
        }
    }

    /// Same contact with surrounding whitespace stripped from every field.
    pub fn trimmed(&self) -> Self {
        Contact {
            id: self.id,
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.unwrap_or(UNSET_ID))
}
