//! Interactive command implementation
//!
//! Line-driven form: every accepted input recomputes the result and
//! re-renders the form, with the result panel only once all four fields
//! are filled in.

use crate::config::Config;
use crate::display::Renderer;
use crate::form::{parse_amount, Field, InputError, InputState, StepDirection};
use crate::model;
use clap::Args;
use std::io::{BufRead, Write};
use thiserror::Error;

const HELP: &str = "\
Commands:
  <field> <value>   set a field (futures, rate, grams, etf)
  <field>           clear a field
  up <field>        step a field up
  down <field>      step a field down
  reset             clear every field
  show              redraw the form
  help              show this help
  quit              leave
";

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Start with the futures price set
    #[arg(long, allow_negative_numbers = true, value_parser = parse_amount)]
    pub futures_price: Option<f64>,

    /// Start with the forward rate set (percent)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_amount)]
    pub forward_rate: Option<f64>,

    /// Start with the grams per unit set
    #[arg(long, allow_negative_numbers = true, value_parser = parse_amount)]
    pub grams_per_unit: Option<f64>,

    /// Start with the ETF price set
    #[arg(long, allow_negative_numbers = true, value_parser = parse_amount)]
    pub etf_price: Option<f64>,
}

impl InteractiveArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let state = InputState {
            futures_price: self.futures_price,
            forward_rate: self.forward_rate,
            grams_per_unit: self.grams_per_unit,
            etf_price: self.etf_price,
        };
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut session = Session::new(stdin.lock(), stdout.lock(), state, config);
        session.run()
    }
}

/// Errors from a session command line
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: {0:?} (type `help`)")]
    Unknown(String),
    #[error("Missing field name after {0:?}")]
    MissingField(&'static str),
    #[error(transparent)]
    Input(#[from] InputError),
}

/// A parsed session command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(Field, String),
    Step(Field, StepDirection),
    Reset,
    Show,
    Help,
    Quit,
    Noop,
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head {
            "" => Ok(Command::Noop),
            "help" | "?" => Ok(Command::Help),
            "show" => Ok(Command::Show),
            "reset" => Ok(Command::Reset),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "up" => Ok(Command::Step(parse_target(rest, "up")?, StepDirection::Up)),
            "down" => Ok(Command::Step(parse_target(rest, "down")?, StepDirection::Down)),
            "clear" => Ok(Command::Set(parse_target(rest, "clear")?, String::new())),
            _ => match head.parse::<Field>() {
                Ok(field) => Ok(Command::Set(field, rest.to_string())),
                Err(_) => Err(CommandError::Unknown(head.to_string())),
            },
        }
    }
}

fn parse_target(text: &str, verb: &'static str) -> Result<Field, CommandError> {
    if text.is_empty() {
        return Err(CommandError::MissingField(verb));
    }
    Ok(text.parse::<Field>()?)
}

/// Interactive form session over any line reader and writer
pub struct Session<R, W> {
    input: R,
    output: W,
    state: InputState,
    renderer: Renderer,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, state: InputState, config: &Config) -> Self {
        Self {
            input,
            output,
            state,
            renderer: Renderer::new(config.display.clone()),
        }
    }

    /// Current form values
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Read commands until `quit` or end of input
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Precious-metal ETF divergence calculator (type `help`)")?;
        self.render()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.apply(command)?,
                Err(e) => {
                    tracing::warn!(error = %e, "Rejected input");
                    writeln!(self.output, "error: {}", e)?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn apply(&mut self, command: Command) -> anyhow::Result<()> {
        let outcome = match command {
            Command::Set(field, text) => self.state.set_text(field, &text).map(|_| true),
            Command::Step(field, direction) => self.state.step(field, direction).map(|_| true),
            Command::Reset => {
                self.state.reset();
                Ok(true)
            }
            Command::Show => Ok(true),
            Command::Help => {
                write!(self.output, "{}", HELP)?;
                Ok(false)
            }
            Command::Noop | Command::Quit => Ok(false),
        };

        match outcome {
            Ok(true) => self.render(),
            Ok(false) => Ok(()),
            Err(e) => {
                tracing::warn!(error = %e, "Rejected input");
                writeln!(self.output, "error: {}", e)?;
                Ok(())
            }
        }
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let result = model::calculate(&self.state);
        let text = self.renderer.render_form(&self.state, result.as_ref());
        write!(self.output, "{}", text)?;
        Ok(())
    }
}
