use serde::{Deserialize, Serialize};

/// Contact fields for a vCard payload. Blank fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VCardFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    pub title: String,
    pub website: String,
}

impl VCardFields {
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.phone,
            &self.email,
            &self.company,
            &self.title,
            &self.website,
        ]
        .iter()
        .all(|f| f.is_empty())
    }
}

/// What the user asked to encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PayloadRequest {
    Text { text: String },
    Url { url: String },
    VCard(VCardFields),
}
