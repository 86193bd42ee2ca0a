//! The `Person` record.
//!
//! A person is a fixed-shape value with a name and an age. Nothing is
//! validated: an empty name or a surprising age is stored as given.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// A single person record.
///
/// Fields are private so a record cannot change after it is built; use the
/// accessors to read them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    /// Create a new person with exactly the given name and age.
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        let name = name.into();
        trace!(%name, age, "created person");
        Self { name, age }
    }

    /// The person's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's age in years.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person {{ name: '{}', age: {} }}", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_new() {
        let person = Person::new("Alice", 30);
        assert_eq!(person.name(), "Alice");
        assert_eq!(person.age(), 30);
    }

    #[test]
    fn test_person_new_from_string() {
        let person = Person::new(String::from("Bob"), 25);
        assert_eq!(person.name(), "Bob");
    }

    #[test]
    fn test_equal_arguments_give_equal_records() {
        let first = Person::new("Alice", 30);
        let second = Person::new("Alice", 30);
        assert_eq!(first, second);
        // Independently owned: distinct heap buffers for the names.
        assert_ne!(first.name().as_ptr(), second.name().as_ptr());
    }

    #[test]
    fn test_different_arguments_differ() {
        assert_ne!(Person::new("Alice", 30), Person::new("Alice", 31));
        assert_ne!(Person::new("Alice", 30), Person::new("Bob", 30));
    }

    #[test]
    fn test_no_validation() {
        let person = Person::new("", 0);
        assert_eq!(person.name(), "");
        assert_eq!(person.age(), 0);
    }

    #[test]
    fn test_person_display() {
        let person = Person::new("Charlie", 28);
        assert_eq!(person.to_string(), "Person { name: 'Charlie', age: 28 }");
    }

    #[test]
    fn test_person_debug() {
        let debug_str = format!("{:?}", Person::new("Alice", 30));
        assert!(debug_str.contains("Person"));
        assert!(debug_str.contains("Alice"));
        assert!(debug_str.contains("30"));
    }

    #[test]
    fn test_person_serialize() {
        let json = serde_json::to_string(&Person::new("Alice", 30)).unwrap();
        assert_eq!(json, r#"{"name":"Alice","age":30}"#);
    }

    #[test]
    fn test_person_deserialize() {
        let person: Person = serde_json::from_str(r#"{"name": "Bob", "age": 25}"#).unwrap();
        assert_eq!(person, Person::new("Bob", 25));
    }
}
