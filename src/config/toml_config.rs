use crate::core::address_book::AddressBook;
use crate::domain::model::{Person, Tag};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_address, validate_email, validate_name, validate_phone, validate_tag, Validate,
};
use serde::Deserialize;

/// Contents of a TOML contact file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactFile {
    #[serde(default)]
    pub persons: Vec<PersonEntry>,
}

/// One `[[persons]]` table as written in the file.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonEntry {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PersonEntry {
    fn validate_at(&self, index: usize) -> Result<()> {
        let field = |name: &str| format!("persons[{}].{}", index, name);

        validate_name(&field("name"), &self.name)?;
        validate_phone(&field("phone"), &self.phone)?;
        validate_email(&field("email"), &self.email)?;
        validate_address(&field("address"), &self.address)?;
        for tag in &self.tags {
            validate_tag(&field("tags"), tag)?;
        }
        Ok(())
    }

    pub fn to_person(&self) -> Person {
        Person::new(
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.address.clone(),
            self.tags.iter().map(|t| Tag::new(t.as_str())),
        )
    }
}

impl ContactFile {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ContactFile = toml::from_str(content)?;
        Ok(file)
    }

    /// Validates every entry and collects them into an `AddressBook`.
    pub fn into_address_book(self) -> Result<AddressBook> {
        self.validate()?;
        let book = AddressBook::from_persons(self.persons.iter().map(PersonEntry::to_person))?;
        tracing::info!("Loaded {} persons", book.len());
        Ok(book)
    }
}

impl Validate for ContactFile {
    fn validate(&self) -> Result<()> {
        for (index, entry) in self.persons.iter().enumerate() {
            entry.validate_at(index)?;
        }
        Ok(())
    }
}
