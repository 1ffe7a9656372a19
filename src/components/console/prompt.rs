use std::{
    fmt::Display,
    io::{BufRead, Write},
    str::FromStr,
};

use crate::components::catalog::error::{CatalogError, InputError};

/// Checks a numeric answer against optional inclusive bounds.
pub fn parse_bounded<T>(input: &str, min: Option<T>, max: Option<T>) -> Result<T, InputError>
where
    T: FromStr + PartialOrd + Display,
{
    let value: T = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    if let Some(min) = min {
        if value < min {
            return Err(InputError::BelowMin(min.to_string()));
        }
    }
    if let Some(max) = max {
        if value > max {
            return Err(InputError::AboveMax(max.to_string()));
        }
    }
    Ok(value)
}

/// Parses a whitespace separated selection line. Every token must parse and
/// belong to `allowed`, otherwise the whole line is rejected.
pub fn parse_selection<K>(input: &str, allowed: &[K]) -> Result<Vec<K>, InputError>
where
    K: FromStr + PartialEq,
{
    input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<K>()
                .ok()
                .filter(|key| allowed.contains(key))
                .ok_or(InputError::InvalidSelection)
        })
        .collect()
}

/// Line oriented operator console over any reader/writer pair.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a full line of operator text.
    pub fn say(&mut self, text: impl Display) -> Result<(), CatalogError> {
        writeln!(self.output, "{}", text).map_err(CatalogError::Console)
    }

    /// Shows `prompt` and returns the trimmed answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String, CatalogError> {
        write!(self.output, "{}", prompt).map_err(CatalogError::Console)?;
        self.output.flush().map_err(CatalogError::Console)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(CatalogError::Console)?;
        if read == 0 {
            return Err(CatalogError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until the answer is not empty.
    pub fn non_empty(&mut self, prompt: &str) -> Result<String, CatalogError> {
        loop {
            let answer = self.ask(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    /// Prompts until the answer is a number within the given bounds.
    pub fn bounded<T>(
        &mut self,
        prompt: &str,
        min: Option<T>,
        max: Option<T>,
    ) -> Result<T, CatalogError>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        loop {
            let answer = self.ask(prompt)?;
            if answer.is_empty() {
                continue;
            }
            match parse_bounded(&answer, min, max) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Prompts until the line holds one or more keys from `allowed`.
    pub fn select<K>(&mut self, prompt: &str, allowed: &[K]) -> Result<Vec<K>, CatalogError>
    where
        K: FromStr + PartialEq,
    {
        loop {
            let answer = self.ask(prompt)?;
            if answer.is_empty() {
                continue;
            }
            match parse_selection(&answer, allowed) {
                Ok(keys) => return Ok(keys),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Yes/no question. Only the first selected key counts.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, CatalogError> {
        let keys = self.select(prompt, &["y".to_string(), "n".to_string()])?;
        Ok(keys.first().is_some_and(|key| key == "y"))
    }
}
