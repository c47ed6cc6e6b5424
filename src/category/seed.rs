//! Creates the default set of categories.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::{CategoryName, NewCategory},
    stores::CategoryStore,
};

/// The categories created by [seed_categories] as `(name, description)` pairs.
pub const DEFAULT_CATEGORIES: [(&str, &str); 7] = [
    ("Food", "Spending on food and drink"),
    ("Transport", "Spending on getting around"),
    ("Entertainment", "Spending on entertainment"),
    ("Health", "Spending on health and medicine"),
    ("Education", "Spending on education"),
    ("Housing", "Spending on housing and utilities"),
    ("Other", "Other spending"),
];

/// The outcome of seeding the default categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    /// A human readable summary.
    pub message: String,
    /// The names of the categories that were created, in creation order.
    pub created: Vec<String>,
    /// Whether every default category already existed so nothing was created.
    pub all_existed: bool,
}

/// Create each of the [DEFAULT_CATEGORIES] unless a category with the same
/// name, ignoring letter case, already exists.
///
/// Running this more than once creates nothing new.
///
/// # Errors
///
/// Returns an error if the store fails. Categories created before the failure are kept.
pub fn seed_categories<C: CategoryStore>(store: &C) -> Result<SeedReport, Error> {
    let existing_names: HashSet<String> = store
        .list()?
        .into_iter()
        .map(|category| category.name.as_ref().to_lowercase())
        .collect();

    let mut created = Vec::new();

    for (name, description) in DEFAULT_CATEGORIES {
        if existing_names.contains(&name.to_lowercase()) {
            continue;
        }

        store.create(NewCategory {
            name: CategoryName::new_unchecked(name),
            description: Some(description.to_owned()),
        })?;
        created.push(name.to_owned());
    }

    let all_existed = created.is_empty();
    let message = if all_existed {
        "All default categories already exist".to_owned()
    } else {
        format!("Created {} default categories", created.len())
    };

    tracing::info!("{message}");

    Ok(SeedReport {
        message,
        created,
        all_existed,
    })
}
