//! Record structure

use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;
use crate::record::field::{Field, FieldValue};

/// Subject attributes a rule is evaluated against
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub age: i64,
    pub department: String,
    pub salary: f64,
    pub experience: f64,
}

impl Record {
    pub fn new(age: i64, department: impl Into<String>, salary: f64, experience: f64) -> Self {
        Self {
            age,
            department: department.into(),
            salary,
            experience,
        }
    }

    /// Value of a known field
    #[inline]
    pub fn field(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Age => FieldValue::Number(self.age as f64),
            Field::Department => FieldValue::Text(&self.department),
            Field::Salary => FieldValue::Number(self.salary),
            Field::Experience => FieldValue::Number(self.experience),
        }
    }

    /// Resolve a field by name, failing on names outside the known set
    pub fn get(&self, name: &str) -> Result<FieldValue<'_>, EvaluationError> {
        Ok(self.field(name.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_fields() {
        let record = Record::new(35, "Engineering", 72000.5, 6.0);

        assert_eq!(record.get("age").unwrap(), FieldValue::Number(35.0));
        assert_eq!(record.get("department").unwrap(), FieldValue::Text("Engineering"));
        assert_eq!(record.get("salary").unwrap(), FieldValue::Number(72000.5));
        assert_eq!(record.get("experience").unwrap(), FieldValue::Number(6.0));
    }

    #[test]
    fn test_get_unknown_field() {
        let record = Record::default();
        assert_eq!(
            record.get("foo"),
            Err(EvaluationError::UnknownField("foo".to_string()))
        );
    }

    #[test]
    fn test_deserialize_from_json() {
        let record: Record = serde_json::from_str(
            r#"{"age": 35, "department": "Sales", "salary": 60000, "experience": 3}"#,
        )
        .unwrap();
        assert_eq!(record, Record::new(35, "Sales", 60000.0, 3.0));
    }
}
