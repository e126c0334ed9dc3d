use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A cat document as stored in the collection.
///
/// `name` is the lookup key for every keyed operation but no uniqueness
/// is enforced; operations act on the first match. `features` behaves
/// like a set only on append (`$addToSet`), the initial insert keeps
/// whatever the caller provided.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cat {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: i32,
    pub features: Vec<String>,
}

impl Cat {
    pub fn new(name: impl Into<String>, age: i32, features: Vec<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
            features,
        }
    }
}

impl std::fmt::Display for Cat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = self
            .id
            .map(|oid| oid.to_hex())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Features: {:?}",
            id, self.name, self.age, self.features
        )
    }
}
