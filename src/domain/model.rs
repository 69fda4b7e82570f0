use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A label attached to a person, kept in the case it was entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// An immutable contact record.
///
/// Field contents are not checked here; callers that read untrusted input
/// validate it first (see `config::toml_config`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    name: String,
    phone: String,
    email: String,
    address: String,
    tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new<I>(name: String, phone: String, email: String, address: String, tags: I) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Two entries describe the same person when their names match ignoring case.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {} Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}

/// How a list of persons is rendered for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

pub const DEFAULT_NAME: &str = "Amy Bee";
pub const DEFAULT_PHONE: &str = "85355255";
pub const DEFAULT_EMAIL: &str = "amy@gmail.com";
pub const DEFAULT_ADDRESS: &str = "123, Jurong West Ave 6, #08-111";

/// Builds a `Person`, starting from a fixed default contact.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    tags: BTreeSet<Tag>,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            tags: BTreeSet::new(),
        }
    }
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    /// Replaces the tag set.
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| Tag::new(*t)).collect();
        self
    }

    pub fn build(self) -> Person {
        Person::new(self.name, self.phone, self.email, self.address, self.tags)
    }
}
