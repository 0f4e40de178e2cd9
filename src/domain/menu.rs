use std::fmt::Display;

use crate::domain::errors::{MenuError, ValidationError};

/// Outcome of a numbered menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Selected(T),
    NoneChosen,
}

impl<T> Selection<T> {
    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Selection::Selected(value) => Some(value),
            Selection::NoneChosen => None,
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        self.into_option().unwrap_or(fallback)
    }

    pub fn ok_or_else<E, F>(self, err: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.into_option().ok_or_else(err)
    }
}

/// Validator accepting 1-based choices up to `total`.
pub fn choice_range(total: usize) -> impl Fn(&i64) -> Result<(), ValidationError> {
    move |choice: &i64| match usize::try_from(*choice) {
        Ok(index) if (1..=total).contains(&index) => Ok(()),
        _ => Err(ValidationError::new(format!(
            "Invalid option, pick between 1 and {total}"
        ))),
    }
}

/// Numbered list of options with an optional trailing "none" entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<T> {
    options: Vec<T>,
    names: Vec<String>,
    none_label: Option<String>,
}

impl<T: Display> Menu<T> {
    /// Menu named after each option's `Display` output.
    pub fn new(options: Vec<T>) -> Result<Self, MenuError> {
        let names = options.iter().map(ToString::to_string).collect();

        Self::with_names(options, names)
    }
}

impl<T> Menu<T> {
    pub fn with_names(options: Vec<T>, names: Vec<String>) -> Result<Self, MenuError> {
        if options.is_empty() {
            return Err(MenuError::Empty);
        }

        if names.len() != options.len() {
            return Err(MenuError::NameCount {
                names: names.len(),
                options: options.len(),
            });
        }

        Ok(Menu {
            options,
            names,
            none_label: None,
        })
    }

    /// Appends a synthetic entry after the real options.
    #[must_use]
    pub fn with_none<S: Into<String>>(mut self, label: S) -> Self {
        self.none_label = Some(label.into());
        self
    }

    /// Total numbered entries, including the "none" entry.
    pub fn len(&self) -> usize {
        self.options.len() + usize::from(self.none_label.is_some())
    }

    /// Never true, an empty menu cannot be built.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn has_none(&self) -> bool {
        self.none_label.is_some()
    }

    /// Display names in menu order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(String::as_str)
            .chain(self.none_label.as_deref())
    }

    /// One `"{n}. {name}"` line per entry followed by the prompt.
    pub fn render(&self, message: &str) -> String {
        let mut menu: String = self
            .names()
            .enumerate()
            .map(|(index, name)| format!("{}. {}\n", index + 1, name))
            .collect();

        menu.push_str(message);
        menu
    }

    /// Rejects choices outside `1..=len`.
    pub fn check_choice(&self, choice: &i64) -> Result<(), ValidationError> {
        choice_range(self.len())(choice)
    }

    /// Maps a choice accepted by [`Menu::check_choice`] back to its option.
    pub fn resolve(mut self, choice: i64) -> Result<Selection<T>, ValidationError> {
        self.check_choice(&choice)?;

        let index = usize::try_from(choice - 1)
            .map_err(|_| ValidationError::new("Invalid option"))?;

        if index < self.options.len() {
            Ok(Selection::Selected(self.options.swap_remove(index)))
        } else {
            Ok(Selection::NoneChosen)
        }
    }
}
