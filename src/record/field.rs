use crate::error::{RegistryError, Result, parse_int};
use crate::record::Teacher;
use std::fmt;
use std::str::FromStr;

/// A teacher field that can be changed through update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    DateOfBirth,
    NumClasses,
}

impl Field {
    /// Set this field on `teacher` from raw user text.
    ///
    /// Numeric fields are parsed before anything is written, so a bad value
    /// leaves `teacher` untouched.
    pub fn apply(self, teacher: &mut Teacher, value: &str) -> Result<()> {
        match self {
            Field::Name => teacher.name = value.to_string(),
            Field::Age => teacher.age = parse_int("age", value)?,
            Field::DateOfBirth => teacher.date_of_birth = value.to_string(),
            Field::NumClasses => teacher.num_classes = parse_int("number of classes", value)?,
        }
        Ok(())
    }
}

impl FromStr for Field {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "age" => Ok(Field::Age),
            "dob" | "dateofbirth" | "date_of_birth" => Ok(Field::DateOfBirth),
            "num_classes" | "numclasses" => Ok(Field::NumClasses),
            _ => Err(RegistryError::InvalidField(s.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::DateOfBirth => "dob",
            Field::NumClasses => "num_classes",
        };
        f.write_str(key)
    }
}
