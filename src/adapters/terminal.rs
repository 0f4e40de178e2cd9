use std::{
    io::{self, BufRead, IsTerminal, Write},
    thread,
    time::Duration,
};

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType},
};

use crate::domain::adapters::{Key, Terminal};

/// Terminal over stdin and stderr, leaving stdout free for answers.
#[derive(Debug, Default)]
pub struct StdTerminal;

impl StdTerminal {
    fn read_raw_key(&self) -> io::Result<Key> {
        terminal::enable_raw_mode()?;
        let key = Self::next_key_press();
        terminal::disable_raw_mode()?;

        key
    }

    fn next_key_press() -> io::Result<Key> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(key) = map_key_event(key) {
                    return key;
                }
            }
        }
    }
}

fn map_key_event(key: KeyEvent) -> Option<io::Result<Key>> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let key = match key.code {
        // Raw mode swallows the signal, surface it as an interruption instead.
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Err(io::ErrorKind::Interrupted.into())
        }
        KeyCode::Char(c) => Ok(Key::new(c)),
        KeyCode::Enter => Ok(Key::ENTER),
        KeyCode::Esc => Ok(Key::ESCAPE),
        _ => Ok(Key::UNKNOWN),
    };

    Some(key)
}

/// The whole line is consumed even when it is not UTF-8, so the caller can ask again.
fn decode_line(bytes: Vec<u8>) -> io::Result<String> {
    let line = String::from_utf8(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(trim_line_ending(line))
}

fn trim_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    line
}

impl Terminal for StdTerminal {
    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(text.as_bytes())?;
        stderr.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "{text}")
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();

        if io::stdin().lock().read_until(b'\n', &mut bytes)? == 0 {
            log::info!("stdin closed");
            return Ok(None);
        }

        decode_line(bytes).map(Some)
    }

    fn read_key(&mut self, echo: bool) -> io::Result<Option<Key>> {
        // Piped input has no keypresses, use the first character of each line.
        if !io::stdin().is_terminal() {
            let key = self
                .read_line()?
                .map(|line| line.chars().next().map(Key::new).unwrap_or(Key::ENTER));

            return Ok(key);
        }

        let key = self.read_raw_key()?;
        log::debug!("read key '{}'", key);

        if echo && key.as_char().is_alphanumeric() {
            self.write(&key.as_char().to_string())?;
        }

        Ok(Some(key))
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        let mut stderr = io::stderr();

        if stderr.is_terminal() {
            execute!(stderr, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        Ok(())
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
