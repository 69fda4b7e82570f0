use crate::config::toml_config::ContactFile;
use crate::core::address_book::AddressBook;
use crate::core::predicate::{
    AnyPredicate, NameContainsKeywordsPredicate, TagContainsKeywordsPredicate,
};
use crate::core::render::render;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{AddressBookError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindOutcome {
    pub matched: usize,
    pub total: usize,
    pub rendered: String,
    pub written_to: Option<String>,
}

/// Loads the contact file, filters it and renders the matches.
pub struct FindEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FindEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Tag and name keywords narrow each other when both are given.
    pub fn predicate(&self) -> AnyPredicate {
        let tags = self.config.tag_keywords();
        let names = self.config.name_keywords();

        let tag: AnyPredicate = TagContainsKeywordsPredicate::new(tags.to_vec()).into();
        let name: AnyPredicate = NameContainsKeywordsPredicate::new(names.to_vec()).into();

        match (tags.is_empty(), names.is_empty()) {
            (false, false) => AnyPredicate::All(vec![tag, name]),
            (true, false) => name,
            _ => tag,
        }
    }

    pub fn load(&self) -> Result<AddressBook> {
        let bytes = self.storage.read_file(self.config.data_file())?;
        let content = String::from_utf8(bytes).map_err(|e| AddressBookError::ConfigError {
            message: format!("{} is not UTF-8: {}", self.config.data_file(), e),
        })?;
        ContactFile::from_toml_str(&content)?.into_address_book()
    }

    pub fn run(&self) -> Result<FindOutcome> {
        let book = self.load()?;
        let predicate = self.predicate();
        tracing::info!("Filtering with {}", predicate);

        let matches = book.filtered(&predicate);
        let rendered = render(&matches, self.config.output_format())?;

        let written_to = match self.config.output_path() {
            Some(path) => {
                self.storage.write_file(path, rendered.as_bytes())?;
                tracing::info!("Wrote {} matches to {}", matches.len(), path);
                Some(path.to_string())
            }
            None => None,
        };

        Ok(FindOutcome {
            matched: matches.len(),
            total: book.len(),
            rendered,
            written_to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::OutputFormat;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockStorage {
        files: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), content.as_bytes().to_vec());
            Self {
                files: Mutex::new(files),
            }
        }

        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.get_file(path).ok_or_else(|| {
                AddressBookError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    path.to_string(),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig {
        tags: Vec<String>,
        names: Vec<String>,
        format: OutputFormat,
        output: Option<String>,
    }

    impl TestConfig {
        fn tags(tags: &[&str]) -> Self {
            Self {
                tags: tags.iter().map(|t| t.to_string()).collect(),
                names: vec![],
                format: OutputFormat::Table,
                output: None,
            }
        }
    }

    impl ConfigProvider for TestConfig {
        fn data_file(&self) -> &str {
            "contacts.toml"
        }

        fn tag_keywords(&self) -> &[String] {
            &self.tags
        }

        fn name_keywords(&self) -> &[String] {
            &self.names
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }

        fn output_path(&self) -> Option<&str> {
            self.output.as_deref()
        }
    }

    const CONTACTS: &str = r#"
[[persons]]
name = "Alice Pauline"
phone = "94351253"
email = "alice@example.com"
address = "123, Jurong West Ave 6, #08-111"
tags = ["friends"]

[[persons]]
name = "Daniel Meier"
phone = "87652533"
email = "cornelia@example.com"
address = "10th street"
tags = ["Friends", "colleagues"]

[[persons]]
name = "Elle Meyer"
phone = "9482224"
email = "werner@example.com"
address = "michegan ave"
"#;

    #[test]
    fn test_run_filters_by_tag() {
        let engine = FindEngine::new(
            MockStorage::with_file("contacts.toml", CONTACTS),
            TestConfig::tags(&["FRIENDS"]),
        );
        let outcome = engine.run().unwrap();
        assert_eq!(outcome.matched, 2);
        assert_eq!(outcome.total, 3);
        assert!(outcome.rendered.ends_with("2 persons listed!"));
        assert!(outcome.written_to.is_none());
    }

    #[test]
    fn test_run_tags_and_names_narrow() {
        let mut config = TestConfig::tags(&["friends"]);
        config.names = vec!["meier".to_string()];
        let engine = FindEngine::new(MockStorage::with_file("contacts.toml", CONTACTS), config);

        assert!(matches!(engine.predicate(), AnyPredicate::All(_)));
        let outcome = engine.run().unwrap();
        assert_eq!(outcome.matched, 1);
        assert!(outcome.rendered.starts_with("1. Daniel Meier"));
    }

    #[test]
    fn test_run_writes_output() {
        let mut config = TestConfig::tags(&["colleagues"]);
        config.format = OutputFormat::Csv;
        config.output = Some("found.csv".to_string());
        let engine = FindEngine::new(MockStorage::with_file("contacts.toml", CONTACTS), config);

        let outcome = engine.run().unwrap();
        assert_eq!(outcome.written_to.as_deref(), Some("found.csv"));

        let written = engine.storage.get_file("found.csv").unwrap();
        let text = String::from_utf8(written).unwrap();
        assert!(text.starts_with("name,phone,email,address,tags\n"));
        assert!(text.contains("Daniel Meier"));
    }

    #[test]
    fn test_run_without_keywords_matches_nothing() {
        let engine = FindEngine::new(
            MockStorage::with_file("contacts.toml", CONTACTS),
            TestConfig::tags(&[]),
        );
        assert_eq!(engine.run().unwrap().matched, 0);
    }

    #[test]
    fn test_missing_data_file() {
        let engine = FindEngine::new(
            MockStorage::with_file("other.toml", CONTACTS),
            TestConfig::tags(&["friends"]),
        );
        assert!(matches!(engine.run(), Err(AddressBookError::IoError(_))));
    }
}
