//! Core category domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::CategoryId,
    nullable::{deserialize_some, non_blank},
};

/// The display name given to categories that an expense refers to but that no
/// longer exist.
pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown";

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name from `name` with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is an
    /// empty string or only contains whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Whether `self` and `other` are the same name ignoring letter case.
    pub fn eq_ignore_case(&self, other: &CategoryName) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named grouping for expenses, e.g., 'Food', 'Transport', 'Housing'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,

    /// The name of the category.
    pub name: CategoryName,

    /// An optional longer explanation of what the category is for.
    pub description: Option<String>,
}

impl Category {
    /// The stand-in for a category that an expense refers to but which does
    /// not exist anymore.
    pub fn unknown(id: CategoryId) -> Self {
        Self {
            id,
            name: CategoryName::new_unchecked(UNKNOWN_CATEGORY_NAME),
            description: None,
        }
    }
}

/// The data needed to create a [Category].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    /// The name of the new category.
    pub name: CategoryName,

    /// An optional description of the new category.
    pub description: Option<String>,
}

/// A partial update of a [Category]. Fields that are `None` are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    /// The new name.
    pub name: Option<CategoryName>,

    /// The new description, where `Some(None)` clears the description.
    pub description: Option<Option<String>>,
}

/// Request body for creating and editing categories.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CategoryFormData {
    /// The requested name. Missing or non-string names are rejected.
    #[serde(default)]
    pub name: Option<serde_json::Value>,

    /// The requested description.
    #[serde(default)]
    pub description: Option<String>,
}

impl CategoryFormData {
    /// Validate the requested name.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyCategoryName] if the name is missing, not a string
    /// or blank.
    pub fn name(&self) -> Result<CategoryName, Error> {
        match &self.name {
            Some(serde_json::Value::String(name)) => CategoryName::new(name),
            _ => Err(Error::EmptyCategoryName),
        }
    }

    /// The requested description, with blank descriptions treated as absent.
    pub fn description(&self) -> Option<String> {
        non_blank(self.description.as_deref())
    }
}

/// Request body for a partial update of a category.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryPatchForm {
    /// The new name, if it should change.
    #[serde(default)]
    pub name: Option<serde_json::Value>,

    /// The new description. An explicit `null` clears the description.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
}

impl CategoryPatchForm {
    /// Validate the fields that are present.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyCategoryName] if a name is given that is not a
    /// string or is blank.
    pub fn into_patch(self) -> Result<CategoryPatch, Error> {
        let name = match self.name {
            None => None,
            Some(serde_json::Value::String(name)) => Some(CategoryName::new(&name)?),
            Some(_) => return Err(Error::EmptyCategoryName),
        };

        Ok(CategoryPatch {
            name,
            description: self
                .description
                .map(|description| non_blank(description.as_deref())),
        })
    }
}

#[cfg(test)]
mod category_name_tests {
    use crate::{Error, category::CategoryName};

    #[test]
    fn new_fails_on_empty_string() {
        let category_name = CategoryName::new("");

        assert_eq!(category_name, Err(Error::EmptyCategoryName));
    }

    #[test]
    fn new_fails_on_just_whitespace() {
        let category_name = CategoryName::new("\n\t \r");

        assert_eq!(category_name, Err(Error::EmptyCategoryName));
    }

    #[test]
    fn new_trims_whitespace() {
        let category_name = CategoryName::new("  Food \n").unwrap();

        assert_eq!(category_name.as_ref(), "Food");
    }

    #[test]
    fn new_succeeds_on_non_empty_string() {
        let category_name = CategoryName::new("🔥");

        assert!(category_name.is_ok())
    }

    #[test]
    fn unknown_category_keeps_the_missing_id() {
        let category = super::Category::unknown(42);

        assert_eq!(category.id, 42);
        assert_eq!(category.name.as_ref(), super::UNKNOWN_CATEGORY_NAME);
        assert_eq!(category.description, None);
    }

    #[test]
    fn eq_ignore_case_matches_case_variants() {
        let lower = CategoryName::new_unchecked("food");
        let upper = CategoryName::new_unchecked("FOOD");
        let other = CategoryName::new_unchecked("Fuel");

        assert!(lower.eq_ignore_case(&upper));
        assert!(!lower.eq_ignore_case(&other));
    }
}
