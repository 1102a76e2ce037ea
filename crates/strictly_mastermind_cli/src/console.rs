//! Line-oriented guess input and result output.
//!
//! Values typed on a line fill the guess boxes left to right. A guess is
//! submitted as soon as every box holds a value; `submit` sends a partial
//! one and `reset` clears the boxes.

use crate::GameReport;
use std::io::{self, BufRead, Write};
use strictly_mastermind::{
    GameConfig, GameSession, Guess, GuessDraft, MastermindError, ScoredGuess, SessionState,
};
use tracing::{debug, instrument};

/// What the player did on one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessInput {
    /// A guess to submit (slots may be unset).
    Guess(Guess),
    /// Values were placed but the guess is not yet submitted.
    Pending(GuessDraft),
    /// Input that could not be read as a guess.
    Invalid(String),
    /// The player wants to stop.
    Quit,
}

/// Supplies one guess per turn.
pub trait GuessSource {
    /// Reads the next guess for `session`.
    fn next_guess(&mut self, session: &GameSession) -> io::Result<GuessInput>;
}

/// Presents scoring results; owns no game state.
pub trait ResultSink {
    /// Asks for the next guess.
    fn prompt(&mut self, session: &GameSession) -> io::Result<()>;

    /// Shows the guess boxes filled so far.
    fn drafted(&mut self, draft: &GuessDraft) -> io::Result<()>;

    /// Shows a scored guess.
    fn scored(&mut self, session: &GameSession, scored: &ScoredGuess) -> io::Result<()>;

    /// Shows a guess the core rejected.
    fn rejected(&mut self, error: &MastermindError) -> io::Result<()>;

    /// Shows input that never reached the core.
    fn invalid_input(&mut self, message: &str) -> io::Result<()>;

    /// Shows the final outcome.
    fn finished(&mut self, report: &GameReport) -> io::Result<()>;
}

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    /// Values to place, in order.
    Values(Vec<i32>),
    /// Submit the boxes as they are.
    Submit,
    /// Clear the boxes.
    Reset,
    /// Stop the game.
    Quit,
    /// Unreadable input.
    Invalid(String),
}

/// Parses one line: integers separated by whitespace or commas, or one of
/// the words `submit`, `reset` and `quit` (`q`, `exit`).
pub fn parse_line(line: &str) -> ConsoleLine {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return ConsoleLine::Quit,
        "submit" | "s" => return ConsoleLine::Submit,
        "reset" | "r" => return ConsoleLine::Reset,
        _ => {}
    }

    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return ConsoleLine::Invalid("Enter a number for each position".to_string());
    }

    tokens
        .iter()
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|_| format!("'{}' is not a number", token))
        })
        .collect::<Result<Vec<_>, _>>()
        .map_or_else(ConsoleLine::Invalid, ConsoleLine::Values)
}

/// Places `values` on a copy of `draft`.
///
/// A value outside the configured range, or more values than free boxes,
/// rejects the whole line and leaves `draft` unchanged.
fn place_values(
    draft: &GuessDraft,
    values: &[i32],
    config: &GameConfig,
) -> Result<GuessDraft, String> {
    if let Some(value) = values.iter().find(|v| !config.in_range(**v)) {
        return Err(format!(
            "{} is outside {} to {}",
            value,
            config.number_min(),
            config.number_max()
        ));
    }

    let mut next = draft.clone();
    for value in values {
        next.place(*value).map_err(|e| e.kind().to_string())?;
    }
    Ok(next)
}

/// Reads guesses line by line into a persistent draft.
#[derive(Debug)]
pub struct ConsoleSource<R> {
    reader: R,
    draft: Option<GuessDraft>,
}

impl<R: BufRead> ConsoleSource<R> {
    /// Creates a source over `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            draft: None,
        }
    }

    /// Draft for `length` boxes, recreated when the length changes.
    fn draft_for(&mut self, length: usize) -> &mut GuessDraft {
        let draft = self.draft.get_or_insert_with(|| GuessDraft::new(length));
        if draft.slots().len() != length {
            *draft = GuessDraft::new(length);
        }
        draft
    }
}

impl<R: BufRead> GuessSource for ConsoleSource<R> {
    #[instrument(skip_all)]
    fn next_guess(&mut self, session: &GameSession) -> io::Result<GuessInput> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(GuessInput::Quit);
        }

        let config = *session.config();
        let draft = self.draft_for(*config.sequence_length());
        let input = match parse_line(&line) {
            ConsoleLine::Quit => GuessInput::Quit,
            ConsoleLine::Invalid(message) => GuessInput::Invalid(message),
            ConsoleLine::Reset => {
                draft.reset();
                GuessInput::Pending(draft.clone())
            }
            ConsoleLine::Submit => {
                let guess = draft.to_guess();
                if draft.is_complete() {
                    draft.reset();
                }
                GuessInput::Guess(guess)
            }
            ConsoleLine::Values(values) => match place_values(draft, &values, &config) {
                Err(message) => GuessInput::Invalid(message),
                Ok(next) if next.is_complete() => {
                    draft.reset();
                    GuessInput::Guess(next.to_guess())
                }
                Ok(next) => {
                    *draft = next;
                    GuessInput::Pending(draft.clone())
                }
            },
        };
        Ok(input)
    }
}

/// Writes results as plain text.
#[derive(Debug)]
pub struct ConsoleSink<W> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    /// Creates a sink over `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl<W: Write> ResultSink for ConsoleSink<W> {
    fn prompt(&mut self, session: &GameSession) -> io::Result<()> {
        let config = session.config();
        write!(
            self.writer,
            "Guess {} numbers from {} to {} ({} left): ",
            config.sequence_length(),
            config.number_min(),
            config.number_max(),
            session.remaining_attempts()
        )?;
        self.writer.flush()
    }

    fn drafted(&mut self, draft: &GuessDraft) -> io::Result<()> {
        let boxes = draft
            .slots()
            .iter()
            .map(|slot| slot.map_or_else(|| "_".to_string(), |v| v.to_string()))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.writer, "Boxes: {}", boxes)
    }

    fn scored(&mut self, session: &GameSession, scored: &ScoredGuess) -> io::Result<()> {
        let marks = scored
            .marks()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            self.writer,
            "{} -> [{}] {}",
            join(scored.guess()),
            marks,
            session.feedback(scored)
        )
    }

    fn rejected(&mut self, error: &MastermindError) -> io::Result<()> {
        writeln!(self.writer, "Invalid guess: {}", error.kind())
    }

    fn invalid_input(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "Invalid guess: {}", message)
    }

    fn finished(&mut self, report: &GameReport) -> io::Result<()> {
        match report.state() {
            SessionState::Won => writeln!(
                self.writer,
                "Solved in {} guesses.",
                report.attempts_used()
            ),
            SessionState::Lost => {
                writeln!(self.writer, "Game over!")?;
                if let Some(secret) = report.secret() {
                    writeln!(self.writer, "The secret was {}.", join(secret))?;
                }
                Ok(())
            }
            SessionState::InProgress => writeln!(self.writer, "Game abandoned."),
        }
    }
}
