pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::ContactFile};

pub use core::{
    address_book::AddressBook,
    finder::{FindEngine, FindOutcome},
    predicate::{AnyPredicate, NameContainsKeywordsPredicate, TagContainsKeywordsPredicate},
};
pub use domain::model::{OutputFormat, Person, PersonBuilder, Tag};
pub use domain::ports::PersonPredicate;
pub use utils::error::{AddressBookError, Result};
