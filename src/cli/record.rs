//! Generic record of parsed argument values
//!
//! The parser turns clap's matches into an `ArgRecord` keyed by argument id.
//! Values are kept as the strings the user typed (or the defaults clap filled
//! in), and each handler converts the fields it declared into its own types.

use crate::error::ClyError;
use clap::{ArgAction, ArgMatches, Command};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

/// Parsed argument values keyed by argument id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgRecord {
    command: Option<String>,
    values: BTreeMap<String, Vec<String>>,
}

impl ArgRecord {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the values of every argument `command` declares
    ///
    /// Help and version switches are skipped. Arguments that were neither
    /// given nor defaulted are absent from the record.
    pub fn from_matches(command: &Command, matches: &ArgMatches) -> Self {
        let mut record = ArgRecord::new();

        for arg in command.get_arguments() {
            if matches!(
                arg.get_action(),
                ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version
            ) {
                continue;
            }

            let id = arg.get_id().as_str();
            if let Ok(Some(raw)) = matches.try_get_raw(id) {
                let values = raw.map(|v| v.to_string_lossy().into_owned()).collect();
                record.values.insert(id.to_string(), values);
            }
        }

        record
    }

    /// Name of the selected command, if any
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// Records the selected command name
    pub fn set_command(&mut self, name: impl Into<String>) {
        self.command = Some(name.into());
    }

    /// Inserts or replaces the values of an argument
    pub fn insert<I, S>(&mut self, id: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values
            .insert(id.into(), values.into_iter().map(Into::into).collect());
    }

    /// Adds every value of `other`, replacing values with the same id
    pub fn merge(&mut self, other: ArgRecord) {
        if other.command.is_some() {
            self.command = other.command;
        }
        self.values.extend(other.values);
    }

    /// Keeps only the ids listed in `keep`
    pub fn narrow<S: AsRef<str>>(&self, keep: &[S]) -> ArgRecord {
        let values = self
            .values
            .iter()
            .filter(|(id, _)| keep.iter().any(|k| k.as_ref() == id.as_str()))
            .map(|(id, v)| (id.clone(), v.clone()))
            .collect();

        ArgRecord {
            command: self.command.clone(),
            values,
        }
    }

    /// Returns true if the record holds a value for `id`
    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    /// Argument ids in the record, sorted
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of arguments in the record
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the record holds no arguments
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if a boolean switch was set
    pub fn flag(&self, id: &str) -> bool {
        self.value(id) == Some("true")
    }

    /// Number of occurrences of a counting switch
    pub fn count(&self, id: &str) -> u8 {
        self.value(id).and_then(|v| v.parse().ok()).unwrap_or(0)
    }

    /// Last value of an argument
    pub fn value(&self, id: &str) -> Option<&str> {
        self.values
            .get(id)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// All values of an argument, empty when absent
    pub fn values(&self, id: &str) -> &[String] {
        self.values.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Converts the last value of an argument
    ///
    /// # Errors
    ///
    /// Returns `ClyError::InvalidValue` if the value does not parse as `T`.
    pub fn parse<T>(&self, id: &str) -> Result<Option<T>, ClyError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.value(id).map(|value| parse_value(id, value)).transpose()
    }

    /// Converts every value of an argument
    pub fn parse_all<T>(&self, id: &str) -> Result<Vec<T>, ClyError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.values(id)
            .iter()
            .map(|value| parse_value(id, value))
            .collect()
    }
}

fn parse_value<T>(id: &str, value: &str) -> Result<T, ClyError>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse().map_err(|e: T::Err| ClyError::InvalidValue {
        name: id.to_string(),
        value: value.to_string(),
        message: e.to_string(),
    })
}
