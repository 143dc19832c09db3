use std::io::{self, BufRead, Write};

use crate::error::LoaderError;
use crate::repository::FlowFile;

/// Picks one flow file out of a listing.
pub trait FlowSelector {
  /// Return the 0-based index of the chosen file. `files` is never empty.
  ///
  /// Implementations must return an index below `files.len()`;
  /// [`choose_flow`](crate::choose_flow) rejects anything else.
  fn select(&mut self, files: &[FlowFile]) -> Result<usize, LoaderError>;
}

/// A selector with a pre-made choice. Never prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSelector {
  /// 1-based, as the user would have typed it.
  choice: usize,
}

impl FixedSelector {
  pub fn new(choice: usize) -> Self {
    Self { choice }
  }
}

impl FlowSelector for FixedSelector {
  fn select(&mut self, files: &[FlowFile]) -> Result<usize, LoaderError> {
    if self.choice == 0 || self.choice > files.len() {
      return Err(LoaderError::InvalidSelection {
        choice: self.choice,
        available: files.len(),
      });
    }
    Ok(self.choice - 1)
  }
}

/// Interactive selector: prints a numbered menu and asks until it gets a
/// number in range.
pub struct PromptSelector<R, W> {
  input: R,
  output: W,
}

impl PromptSelector<io::StdinLock<'static>, io::Stdout> {
  pub fn stdio() -> Self {
    Self::new(io::stdin().lock(), io::stdout())
  }
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
  pub fn new(input: R, output: W) -> Self {
    Self { input, output }
  }

  pub fn into_output(self) -> W {
    self.output
  }

  fn print_menu(&mut self, files: &[FlowFile]) -> io::Result<()> {
    writeln!(self.output, "\n📂 AVAILABLE FLOW FILES:")?;
    writeln!(self.output, "{}", "=".repeat(30))?;
    for (i, file) in files.iter().enumerate() {
      writeln!(self.output, "[{}] {}", i + 1, file.name)?;
    }
    writeln!(self.output, "{}", "=".repeat(30))
  }
}

enum Answer {
  Index(usize),
  OutOfRange,
  NotANumber,
}

fn parse_answer(line: &str, available: usize) -> Answer {
  match line.trim().parse::<i64>() {
    Ok(n) if n >= 1 && (n as usize) <= available => Answer::Index(n as usize - 1),
    Ok(_) => Answer::OutOfRange,
    Err(_) => Answer::NotANumber,
  }
}

impl<R: BufRead, W: Write> FlowSelector for PromptSelector<R, W> {
  fn select(&mut self, files: &[FlowFile]) -> Result<usize, LoaderError> {
    self.print_menu(files)?;

    loop {
      write!(
        self.output,
        "👉 Select a flow file to run (1-{}): ",
        files.len()
      )?;
      self.output.flush()?;

      let mut line = String::new();
      if self.input.read_line(&mut line)? == 0 {
        return Err(LoaderError::SelectionAborted);
      }

      match parse_answer(&line, files.len()) {
        Answer::Index(index) => return Ok(index),
        Answer::OutOfRange => writeln!(self.output, "❌ Invalid number, try again.")?,
        Answer::NotANumber => writeln!(self.output, "❌ Please enter a number only.")?,
      }
    }
  }
}
