//! Session 4: validated user record written out as `<name>.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("expected 'name age email phone', got {0} field(s)")]
    MalformedLine(usize),

    #[error("invalid age '{0}'")]
    InvalidAge(String),

    #[error("json marshal fail: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write user file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub lat: f64,
    pub lng: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: Address,
    ) -> Result<Self, UserError> {
        let (name, email, phone) = (name.into(), email.into(), phone.into());
        if name.is_empty() {
            return Err(UserError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(UserError::MissingField("email"));
        }
        if phone.is_empty() {
            return Err(UserError::MissingField("phone"));
        }

        Ok(Self {
            name,
            age,
            email,
            phone,
            address,
        })
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name.to_lowercase())
    }

    pub fn summary(&self) -> String {
        format!(
            "Name: {}\n Age: {}\n Email: {}\n Phone: {}",
            self.name, self.age, self.email, self.phone
        )
    }

    /// Serialises the record into `dir` and returns the written path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, UserError> {
        let json = serde_json::to_vec(self)?;
        let path = dir.join(self.file_name());
        fs::write(&path, json)?;
        info!(path = %path.display(), "user record written");
        Ok(path)
    }
}

/// Parses `name age email phone` separated by whitespace.
pub fn parse_user_line(line: &str) -> Result<User, UserError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[name, age, email, phone] = fields.as_slice() else {
        return Err(UserError::MalformedLine(fields.len()));
    };
    let age = age
        .parse::<u32>()
        .map_err(|_| UserError::InvalidAge(age.to_string()))?;
    User::new(name, age, email, phone, Address::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User::new("Alice", 30, "alice@example.com", "555-0100", Address::default()).unwrap()
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let err = User::new("", 1, "", "", Address::default()).unwrap_err();
        assert_eq!(err.to_string(), "name is required");
        let err = User::new("Bob", 1, "", "", Address::default()).unwrap_err();
        assert_eq!(err.to_string(), "email is required");
        let err = User::new("Bob", 1, "b@x", "", Address::default()).unwrap_err();
        assert_eq!(err.to_string(), "phone is required");
    }

    #[test]
    fn writes_lowercase_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = alice().write_to(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "alice.json");

        let value: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(value["name"], "Alice");
        assert_eq!(value["age"], 30);
        assert_eq!(value["address"]["text"], "");

        let back: User = serde_json::from_value(value).unwrap();
        assert_eq!(back, alice());
    }

    #[test]
    fn parses_input_line() {
        let user = parse_user_line("Alice 30 alice@example.com 555-0100\n").unwrap();
        assert_eq!(user, alice());
        assert!(matches!(parse_user_line("Alice 30"), Err(UserError::MalformedLine(2))));
        assert!(matches!(
            parse_user_line("Alice old a@b 1"),
            Err(UserError::InvalidAge(_))
        ));
    }

    #[test]
    fn summary_lists_contact_fields() {
        let summary = alice().summary();
        assert!(summary.starts_with("Name: Alice\n"));
        assert!(summary.contains(" Phone: 555-0100"));
    }
}
