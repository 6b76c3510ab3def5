#![allow(dead_code)]

use keyedmap::{KeyedCollection, Merge};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub occupation: String,
}

#[derive(Clone, Debug, Default)]
pub struct PersonPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<u32>,
    pub occupation: Option<String>,
}

impl Merge for Person {
    type Patch = PersonPatch;

    fn merge(&mut self, patch: PersonPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(occupation) = patch.occupation {
            self.occupation = occupation;
        }
    }
}

pub fn person(id: &str, first: &str, last: &str, age: u32, occupation: &str) -> Person {
    Person {
        id: id.into(),
        first_name: first.into(),
        last_name: last.into(),
        age,
        occupation: occupation.into(),
    }
}

pub fn han() -> Person {
    person("less-than-12-parsecs", "Han", "Solo", 29, "Smuggler")
}

pub fn george() -> Person {
    person("1138", "George", "Lucas", 77, "Movie director")
}

pub fn doug() -> Person {
    person("42", "Douglas", "Adams", 49, "Author")
}

/// han, george, doug keyed by id, inserted in that order.
pub fn crew() -> KeyedCollection<Person> {
    [han(), george(), doug()]
        .into_iter()
        .map(|p| (p.id.clone(), p))
        .collect()
}
