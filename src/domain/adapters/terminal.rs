use std::{fmt, io, time::Duration};

use serde::{Deserialize, Serialize};

/// A single keypress.
///
/// Letters are stored upper case so `y` and `Y` are the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "char", into = "char")]
pub struct Key(char);

impl Key {
    pub const ENTER: Key = Key('\n');
    pub const ESCAPE: Key = Key('\u{1b}');
    /// Arrows, function keys and anything else without a character.
    pub const UNKNOWN: Key = Key('\0');

    pub fn new(key: char) -> Self {
        let mut upper = key.to_uppercase();

        // Keys like 'ß' have no single character upper case, keep them as typed.
        match (upper.next(), upper.next()) {
            (Some(single), None) => Key(single),
            _ => Key(key),
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl From<char> for Key {
    fn from(value: char) -> Self {
        Key::new(value)
    }
}

impl From<Key> for char {
    fn from(value: Key) -> Self {
        value.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Key::ENTER => write!(f, "Enter"),
            Key::ESCAPE => write!(f, "Esc"),
            Key::UNKNOWN => write!(f, "?"),
            Key(key) => write!(f, "{key}"),
        }
    }
}

/// Used to abstract the platform console for testing.
pub trait Terminal {
    /// Append text to the display.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Append text followed by a new line.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Block until a line is entered, `None` once the input stream is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Block until a single key is pressed, `None` once the input stream is closed.
    fn read_key(&mut self, echo: bool) -> io::Result<Option<Key>>;

    fn clear_screen(&mut self) -> io::Result<()>;

    fn sleep(&mut self, duration: Duration);
}
