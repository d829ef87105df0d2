//! The teacher record as it appears in the backing file.
//!
//! JSON shape:
//! {
//!   "name": "Ann Lee",
//!   "age": 30,
//!   "dateOfBirth": "1994-01-01",   // free text, never parsed as a date
//!   "numClasses": 4
//! }
//!
//! Files written by the older tool used PascalCase keys (Name, Age, DOB,
//! NumClasses); those are accepted on read only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[serde(alias = "Name")]
    pub name: String,

    #[serde(alias = "Age")]
    pub age: i32,

    #[serde(alias = "DOB")]
    pub date_of_birth: String,

    #[serde(alias = "NumClasses")]
    pub num_classes: i32,
}

impl Teacher {
    pub fn new(
        name: impl Into<String>,
        age: i32,
        date_of_birth: impl Into<String>,
        num_classes: i32,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            date_of_birth: date_of_birth.into(),
            num_classes,
        }
    }

    /// Case-insensitive substring match on `name`. Empty `needle` always matches.
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
