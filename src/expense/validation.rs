//! Turns request bodies into validated expense data.
//!
//! Fields are checked in the order amount, category, date and the first
//! failure is returned. Whether a category ID can refer to a category at all
//! is only checked once the other fields are valid.

use serde::Deserialize;
use serde_json::Value;
use time::OffsetDateTime;
use time_tz::Tz;

use crate::{
    Error,
    database_id::CategoryId,
    expense::{ExpensePatch, NewExpense},
    nullable::{deserialize_some, non_blank},
    timestamp::parse_expense_date,
};

/// Request body for creating an expense or replacing all of its fields.
///
/// The amount and category ID may be sent either as JSON numbers or as strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseForm {
    /// How much money was spent.
    #[serde(default)]
    pub amount: Option<Value>,
    /// The ID of an existing category.
    #[serde(default)]
    pub category_id: Option<Value>,
    /// A date `YYYY-MM-DD` or an RFC 3339 date-time.
    #[serde(default)]
    pub date: Option<Value>,
    /// What the money was spent on.
    #[serde(default)]
    pub description: Option<String>,
}

impl ExpenseForm {
    /// Validate the form, interpreting plain dates in `timezone`.
    ///
    /// # Errors
    ///
    /// Returns the first of [Error::InvalidAmount], [Error::MissingCategoryId],
    /// [Error::CategoryNotFound], [Error::MissingDate] or [Error::InvalidDate]
    /// that applies.
    pub fn validate(self, timezone: &Tz) -> Result<NewExpense, Error> {
        let amount = parse_amount(self.amount.as_ref())?;
        let category_id = require_category_id(self.category_id.as_ref())?;
        let date = parse_date_field(self.date.as_ref(), timezone)?;
        let category_id = parse_category_id(category_id)?;

        Ok(NewExpense {
            amount,
            category_id,
            date,
            description: non_blank(self.description.as_deref()),
        })
    }
}

/// Request body for changing some of the fields of an expense.
///
/// Only fields that are present are validated and written. An explicit
/// `null` description clears the description.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePatchForm {
    /// The new amount.
    #[serde(default)]
    pub amount: Option<Value>,
    /// The ID of the new category.
    #[serde(default)]
    pub category_id: Option<Value>,
    /// The new date.
    #[serde(default)]
    pub date: Option<Value>,
    /// The new description.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
}

impl ExpensePatchForm {
    /// Validate the fields that are present, interpreting plain dates in `timezone`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [ExpenseForm::validate] for the fields that are present.
    pub fn validate(self, timezone: &Tz) -> Result<ExpensePatch, Error> {
        let amount = self
            .amount
            .map(|amount| parse_amount(Some(&amount)))
            .transpose()?;
        let date = self
            .date
            .map(|date| parse_date_field(Some(&date), timezone))
            .transpose()?;
        let category_id = self
            .category_id
            .map(|category_id| require_category_id(Some(&category_id)).and_then(parse_category_id))
            .transpose()?;

        Ok(ExpensePatch {
            amount,
            category_id,
            date,
            description: self
                .description
                .map(|description| non_blank(description.as_deref())),
        })
    }
}

fn parse_amount(value: Option<&Value>) -> Result<f64, Error> {
    let amount = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    amount
        .filter(|amount| amount.is_finite() && *amount > 0.0)
        .ok_or(Error::InvalidAmount)
}

/// Check that a category ID was given without checking what it is.
fn require_category_id(value: Option<&Value>) -> Result<&Value, Error> {
    match value {
        None | Some(Value::Null) => Err(Error::MissingCategoryId),
        Some(Value::String(text)) if text.trim().is_empty() => Err(Error::MissingCategoryId),
        Some(value) => Ok(value),
    }
}

/// Read a category ID, which cannot refer to a category unless it is an integer.
fn parse_category_id(value: &Value) -> Result<CategoryId, Error> {
    match value {
        Value::String(text) => text
            .trim()
            .parse()
            .map_err(|_| Error::CategoryNotFound(text.trim().to_owned())),
        Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| Error::CategoryNotFound(number.to_string())),
        other => Err(Error::CategoryNotFound(other.to_string())),
    }
}

fn parse_date_field(value: Option<&Value>, timezone: &Tz) -> Result<OffsetDateTime, Error> {
    match value {
        None | Some(Value::Null) => Err(Error::MissingDate),
        Some(Value::String(text)) if text.trim().is_empty() => Err(Error::MissingDate),
        Some(Value::String(text)) => parse_expense_date(text, timezone),
        Some(other) => Err(Error::InvalidDate(other.to_string())),
    }
}
