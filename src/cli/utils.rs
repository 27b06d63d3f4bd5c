use anyhow::{Context, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

/// Terminal prompts and messages over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
    eof: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            eof: false,
        }
    }

    /// Whether the input has been exhausted
    pub fn at_eof(&self) -> bool {
        self.eof
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read a line of input, `None` once the input is exhausted
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut input = String::new();
        let read = self
            .input
            .read_line(&mut input)
            .context("Failed to read from terminal")?;
        if read == 0 {
            self.eof = true;
            writeln!(self.output)?;
            return Ok(None);
        }

        // Trim whitespace and newlines
        Ok(Some(input.trim().to_string()))
    }

    /// Read and parse a value, printing `invalid` and returning `None` when
    /// the text does not parse
    pub fn read_parsed<T: FromStr>(&mut self, prompt: &str, invalid: &str) -> Result<Option<T>> {
        match self.read_line(prompt)? {
            Some(text) => match text.parse::<T>() {
                Ok(value) => Ok(Some(value)),
                Err(_) => {
                    self.print_error(invalid)?;
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Read a finite decimal amount
    pub fn read_amount(&mut self, prompt: &str) -> Result<Option<f64>> {
        match self.read_parsed::<f64>(prompt, "Invalid amount. Please enter a number.")? {
            Some(amount) if amount.is_finite() => Ok(Some(amount)),
            Some(_) => {
                self.print_error("Invalid amount. Please enter a finite number.")?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    pub fn print_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn print_header(&mut self, title: &str) -> Result<()> {
        writeln!(self.output, "\n====== {} ======", title)?;
        Ok(())
    }

    pub fn print_success(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "✅ {}", message)?;
        Ok(())
    }

    pub fn print_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "❌ {}", message)?;
        Ok(())
    }

    pub fn print_info(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}
