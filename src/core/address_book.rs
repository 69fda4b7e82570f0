use crate::domain::model::Person;
use crate::domain::ports::PersonPredicate;
use crate::utils::error::{AddressBookError, Result};

/// In-memory list of unique persons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from `persons`, failing on the first duplicate.
    pub fn from_persons<I>(persons: I) -> Result<Self>
    where
        I: IntoIterator<Item = Person>,
    {
        let mut book = Self::new();
        for person in persons {
            book.add_person(person)?;
        }
        Ok(book)
    }

    pub fn add_person(&mut self, person: Person) -> Result<()> {
        if self.contains(&person) {
            return Err(AddressBookError::invalid_field(
                "name",
                person.name(),
                "This person already exists in the address book",
            ));
        }
        tracing::debug!("Adding person: {}", person.name());
        self.persons.push(person);
        Ok(())
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Persons accepted by `predicate`, in insertion order.
    pub fn filtered<P: PersonPredicate>(&self, predicate: &P) -> Vec<&Person> {
        let matches: Vec<&Person> = self
            .persons
            .iter()
            .filter(|person| predicate.test(person))
            .collect();
        tracing::debug!(
            "{} of {} persons matched {}",
            matches.len(),
            self.persons.len(),
            predicate
        );
        matches
    }
}
