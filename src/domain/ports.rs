use crate::domain::model::{OutputFormat, Person};
use crate::utils::error::Result;
use std::fmt::{Debug, Display};

/// A pure membership test over persons.
pub trait PersonPredicate: Send + Sync + Debug + Display {
    fn test(&self, person: &Person) -> bool;
}

impl<P: PersonPredicate + ?Sized> PersonPredicate for &P {
    fn test(&self, person: &Person) -> bool {
        (**self).test(person)
    }
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_file(&self) -> &str;
    fn tag_keywords(&self) -> &[String];
    fn name_keywords(&self) -> &[String];
    fn output_format(&self) -> OutputFormat;
    fn output_path(&self) -> Option<&str>;
}
