//! The ordered list of people.
//!
//! A `People` list is built in one step and never changes afterwards. Order
//! is the order records were supplied in.

use std::ops::Index;
use std::slice;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::person::Person;

/// The records that make up the default roster, in creation order.
const DEFAULT_ROSTER: &[(&str, u32)] = &[("Alice", 30), ("Bob", 25), ("Charlie", 28)];

/// An immutable, ordered sequence of [`Person`] records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct People {
    people: Vec<Person>,
}

impl People {
    /// Build the default roster: Alice (30), Bob (25) and Charlie (28).
    ///
    /// The result is the same on every call.
    #[must_use]
    pub fn assemble() -> Self {
        let people: Self = DEFAULT_ROSTER
            .iter()
            .map(|&(name, age)| Person::new(name, age))
            .collect();
        debug!(count = people.len(), "assembled roster");
        people
    }

    /// Build a list from the given records, keeping their order.
    #[must_use]
    pub fn from_vec(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Number of records in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Check if the list holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Get the record at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Person> {
        self.people.get(index)
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> slice::Iter<'_, Person> {
        self.people.iter()
    }

    /// View the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Person] {
        &self.people
    }
}

impl FromIterator<Person> for People {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Self {
            people: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a People {
    type Item = &'a Person;
    type IntoIter = slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for People {
    type Output = Person;

    fn index(&self, index: usize) -> &Self::Output {
        &self.people[index]
    }
}
