#![allow(dead_code)]

use serde::Deserialize;
use std::collections::HashMap;

// ============================================================================
// Person parsing fixtures
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub city: String,
}

impl Person {
    pub fn new(name: &str, age: u32, city: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            city: city.to_string(),
        }
    }
}

/// The shapes a person can arrive in.
#[derive(Clone, Debug)]
pub enum PersonInput {
    Text(String),
    Fields(HashMap<String, String>),
}

impl PersonInput {
    pub fn text(s: &str) -> Self {
        PersonInput::Text(s.to_string())
    }

    pub fn fields(pairs: &[(&str, &str)]) -> Self {
        PersonInput::Fields(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    pub fn starts_with(&self, prefix: char) -> bool {
        matches!(self, PersonInput::Text(s) if s.trim_start().starts_with(prefix))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Mapping,
    Xml,
}

pub fn parse_json(input: PersonInput) -> Option<Person> {
    match input {
        PersonInput::Text(s) => serde_json::from_str(&s).ok(),
        PersonInput::Fields(_) => None,
    }
}

pub fn parse_fields(input: PersonInput) -> Option<Person> {
    match input {
        PersonInput::Fields(fields) => Some(Person {
            name: fields.get("name")?.clone(),
            age: fields.get("age")?.parse().ok()?,
            city: fields.get("city")?.clone(),
        }),
        PersonInput::Text(_) => None,
    }
}

/// Reads `name="value"` out of a single self-closing element.
fn attribute<'a>(element: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{name}=\"");
    let start = element.find(&needle)? + needle.len();
    let len = element[start..].find('"')?;
    Some(&element[start..start + len])
}

pub fn parse_xml(input: PersonInput) -> Option<Person> {
    match input {
        PersonInput::Text(s) => Some(Person {
            name: attribute(&s, "name")?.to_string(),
            age: attribute(&s, "age")?.parse().ok()?,
            city: attribute(&s, "city")?.to_string(),
        }),
        PersonInput::Fields(_) => None,
    }
}

pub const BOB_XML: &str = r#"<Person name="Bob" age="3" city="NYC" />"#;
pub const BOB_JSON: &str = r#"{"name": "Bob", "age": 3, "city": "NYC"}"#;
