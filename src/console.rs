use colored::Colorize;

use crate::{
    config::ConsoleConfig,
    domain::{
        adapters::Terminal,
        errors::{Errors, InputError},
        menu::{choice_range, Menu, Selection},
        reader::{self, NumberFormat},
        retry::{get_value_or_repeat, Feedback},
        validators::Validators,
    },
    utils::pad_center,
};

/// Typed prompts over a [`Terminal`].
///
/// Every `read_*`, [`Console::confirm`] and `select*` call repeats its prompt
/// until the input parses and passes every validator. Only configuration,
/// menu construction, a closed input stream and terminal failures are
/// returned as errors.
pub struct Console<T: Terminal> {
    terminal: T,
    config: ConsoleConfig,
    format: NumberFormat,
}

impl<T: Terminal> Console<T> {
    /// Fails with [`Errors::Configuration`] when `config` does not validate.
    pub fn new(terminal: T, config: ConsoleConfig) -> Result<Self, Errors> {
        config.validate()?;
        let format = config.number_format();

        Ok(Console {
            terminal,
            config,
            format,
        })
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Banner with a centred title, waits for any key.
    pub fn greeting(&mut self, title: &str, summary: &str) -> Result<(), Errors> {
        let bar = "=".repeat(self.config.width);
        let title = self.pad(title);

        self.clear_if_default()?;
        for line in [
            bar.as_str(),
            title.as_str(),
            bar.as_str(),
            "",
            summary,
            "",
            "Press any key to continue...",
        ] {
            self.terminal.write_line(line)?;
        }

        // A closed stream just moves on.
        self.terminal.read_key(false)?;
        self.clear_if_default()
    }

    pub fn farewell(&mut self, message: &str) -> Result<(), Errors> {
        self.clear_if_default()?;

        let message = self.pad(message);
        self.terminal.write_line(&message)?;
        self.terminal.sleep(self.config.delay());

        Ok(())
    }

    pub fn read_string(
        &mut self,
        message: &str,
        validators: &Validators<String>,
    ) -> Result<String, Errors> {
        get_value_or_repeat(
            self,
            |console| {
                console.input_request(message)?;
                reader::parse_text(console.read_line()?)
            },
            validators,
        )
    }

    pub fn read_int(&mut self, message: &str, validators: &Validators<i64>) -> Result<i64, Errors> {
        get_value_or_repeat(
            self,
            |console| {
                console.input_request(message)?;
                let line = console.read_line()?;
                console.format.parse_integer(line.as_deref())
            },
            validators,
        )
    }

    pub fn read_real(&mut self, message: &str, validators: &Validators<f64>) -> Result<f64, Errors> {
        get_value_or_repeat(
            self,
            |console| {
                console.input_request(message)?;
                let line = console.read_line()?;
                console.format.parse_real(line.as_deref())
            },
            validators,
        )
    }

    /// `true` for the confirm key, `false` for the reject key, any other key asks again.
    pub fn confirm(&mut self, message: &str) -> Result<bool, Errors> {
        let (confirm, reject) = (self.config.confirm_key, self.config.reject_key);
        let request = format!("{message} [{confirm}/{reject}]");

        get_value_or_repeat(
            self,
            |console| {
                console.terminal.write_line(&request)?;
                let key = console.terminal.read_key(true)?;
                console.terminal.write_line("")?;

                reader::parse_key(key, confirm, reject)
            },
            &Validators::new(),
        )
    }

    /// Numbered menu, resolves to the chosen option or [`Selection::NoneChosen`].
    pub fn select_option<V>(&mut self, message: &str, menu: Menu<V>) -> Result<Selection<V>, Errors> {
        let request = menu.render(message);
        let rules = Validators::new().with(choice_range(menu.len()));

        let choice = get_value_or_repeat(
            self,
            |console| {
                console.input_request(&request)?;
                let line = console.read_line()?;
                reader::parse_index(line.as_deref())
            },
            &rules,
        )?;

        log::debug!("selected entry {} of {}", choice, menu.len());

        Ok(menu.resolve(choice)?)
    }

    /// Like [`Console::select_option`] but picking the "none" entry is an error.
    pub fn select<V>(&mut self, message: &str, menu: Menu<V>) -> Result<V, Errors> {
        self.select_option(message, menu)?
            .ok_or_else(|| Errors::NothingSelected)
    }

    /// Like [`Console::select_option`] with `fallback` standing in for the "none" entry.
    pub fn select_or<V>(&mut self, message: &str, menu: Menu<V>, fallback: V) -> Result<V, Errors> {
        Ok(self.select_option(message, menu)?.unwrap_or(fallback))
    }

    pub fn info(&mut self, message: &str) -> Result<(), Errors> {
        let message = self.pad(message);
        self.alert(&message)
    }

    pub fn warning(&mut self, message: &str) -> Result<(), Errors> {
        let symbol = &self.config.warning_symbol;
        let message = self.pad(&format!("{symbol} {message} {symbol}"));

        self.alert(&message.yellow().to_string())
    }

    /// Prints, pauses for the configured delay then clears when auto clear is on.
    pub fn alert(&mut self, message: &str) -> Result<(), Errors> {
        self.print(message)?;
        self.terminal.sleep(self.config.delay());
        self.clear_if_default()
    }

    pub fn clear_if_default(&mut self) -> Result<(), Errors> {
        if self.config.auto_clear {
            self.terminal.clear_screen()?;
        }

        Ok(())
    }

    pub fn print(&mut self, message: &str) -> Result<(), Errors> {
        self.terminal.write(&format!("{message}\n\n"))?;
        Ok(())
    }

    fn pad(&self, message: &str) -> String {
        pad_center(message, self.config.width, self.config.pad_char)
    }

    fn input_request(&mut self, message: &str) -> Result<(), InputError> {
        self.terminal.write_line(&format!("{message}:"))?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, InputError> {
        let line = self.terminal.read_line()?;
        self.terminal.write_line("")?;

        Ok(line)
    }
}

impl<T: Terminal> Feedback for Console<T> {
    fn warning(&mut self, message: &str) -> Result<(), Errors> {
        Console::warning(self, message)
    }
}
