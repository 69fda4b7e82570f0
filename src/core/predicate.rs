use crate::domain::model::Person;
use crate::domain::ports::PersonPredicate;
use std::fmt;

fn write_keywords<T>(f: &mut fmt::Formatter<'_>, keywords: &[String]) -> fmt::Result {
    write!(
        f,
        "{}{{keywords=[{}]}}",
        std::any::type_name::<T>(),
        keywords.join(", ")
    )
}

fn equals_ignore_case(left: &str, right: &str) -> bool {
    left == right || left.to_lowercase() == right.to_lowercase()
}

/// Matches a person whose tag set holds any of the keywords, ignoring case.
///
/// A keyword has to equal a whole tag; `"friend"` does not match the tag
/// `"friends"`. With no keywords nothing matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl TagContainsKeywordsPredicate {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl PersonPredicate for TagContainsKeywordsPredicate {
    fn test(&self, person: &Person) -> bool {
        self.keywords.iter().any(|keyword| {
            person
                .tags()
                .iter()
                .any(|tag| equals_ignore_case(keyword, tag.as_str()))
        })
    }
}

impl fmt::Display for TagContainsKeywordsPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_keywords::<Self>(f, &self.keywords)
    }
}

/// Matches a person when any keyword equals a whole word of their name, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl NameContainsKeywordsPredicate {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl PersonPredicate for NameContainsKeywordsPredicate {
    fn test(&self, person: &Person) -> bool {
        self.keywords.iter().any(|keyword| {
            person
                .name()
                .split_whitespace()
                .any(|word| equals_ignore_case(keyword, word))
        })
    }
}

impl fmt::Display for NameContainsKeywordsPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_keywords::<Self>(f, &self.keywords)
    }
}

/// Any of the predicates this crate knows, so predicates of different kinds
/// can be stored together and compared. Values of different variants are
/// never equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyPredicate {
    Tag(TagContainsKeywordsPredicate),
    Name(NameContainsKeywordsPredicate),
    /// Matches when every inner predicate matches; an empty list matches nothing.
    All(Vec<AnyPredicate>),
}

impl PersonPredicate for AnyPredicate {
    fn test(&self, person: &Person) -> bool {
        match self {
            Self::Tag(predicate) => predicate.test(person),
            Self::Name(predicate) => predicate.test(person),
            Self::All(predicates) => {
                !predicates.is_empty() && predicates.iter().all(|p| p.test(person))
            }
        }
    }
}

impl fmt::Display for AnyPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(predicate) => fmt::Display::fmt(predicate, f),
            Self::Name(predicate) => fmt::Display::fmt(predicate, f),
            Self::All(predicates) => {
                f.write_str("All[")?;
                for (i, predicate) in predicates.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(predicate, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<TagContainsKeywordsPredicate> for AnyPredicate {
    fn from(predicate: TagContainsKeywordsPredicate) -> Self {
        Self::Tag(predicate)
    }
}

impl From<NameContainsKeywordsPredicate> for AnyPredicate {
    fn from(predicate: NameContainsKeywordsPredicate) -> Self {
        Self::Name(predicate)
    }
}
