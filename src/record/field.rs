//! Known record fields

use std::fmt;
use std::str::FromStr;

use crate::error::EvaluationError;

/// The closed set of fields a rule may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Age,
    Department,
    Salary,
    Experience,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Age,
        Field::Department,
        Field::Salary,
        Field::Experience,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Department => "department",
            Field::Salary => "salary",
            Field::Experience => "experience",
        }
    }
}

impl FromStr for Field {
    type Err = EvaluationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "age" => Ok(Field::Age),
            "department" => Ok(Field::Department),
            "salary" => Ok(Field::Salary),
            "experience" => Ok(Field::Experience),
            _ => Err(EvaluationError::UnknownField(name.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved field value, borrowed from its record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
}
