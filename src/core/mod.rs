pub mod address_book;
pub mod finder;
pub mod predicate;
pub mod render;

pub use crate::domain::model::{Person, Tag};
pub use crate::domain::ports::{ConfigProvider, PersonPredicate, Storage};
pub use crate::utils::error::Result;
