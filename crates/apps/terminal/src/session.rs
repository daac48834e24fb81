//! Command interpreter and transcript model behind the terminal window.

use chrono::{DateTime, TimeZone};
use thiserror::Error;

/// Longest command line the interpreter accepts.
pub const MAX_COMMAND_LENGTH: usize = 1000;
/// Characters of an oversized command echoed back before truncation.
const TRUNCATED_ECHO_LENGTH: usize = 50;
/// Transcript lines kept before the oldest are dropped.
pub const MAX_TRANSCRIPT_LINES: usize = 200;

const BANNER: [&str; 2] = [
    "Welcome to Joeyconnects.os",
    "Type \"help\" for available commands.",
];
const HELP_TEXT: &str = "Available commands: help, clear, whoami, date, echo [text]";
const WHOAMI_TEXT: &str = "guest_user@hacker_os";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Styling hint for a transcript line.
pub enum LineTone {
    /// Welcome banner.
    System,
    /// Echo of a submitted command.
    Prompt,
    /// Command output.
    Output,
    /// Rejected command.
    Error,
}

impl LineTone {
    /// Stable token used in the DOM contract.
    pub fn token(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Prompt => "prompt",
            Self::Output => "output",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered line of terminal output.
pub struct TranscriptLine {
    /// Line text, rendered verbatim.
    pub text: String,
    /// Styling hint.
    pub tone: LineTone,
}

impl TranscriptLine {
    fn new(text: impl Into<String>, tone: LineTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Parsed terminal command.
pub enum TerminalCommand {
    /// List the available commands.
    Help,
    /// Wipe the transcript.
    Clear,
    /// Print the session user.
    Whoami,
    /// Print the local date and time.
    Date,
    /// Print the argument text with its original casing.
    Echo(String),
    /// Whitespace only.
    Blank,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a command line is rejected.
pub enum CommandError {
    /// The line exceeds [`MAX_COMMAND_LENGTH`] characters.
    #[error("Error: Command too long")]
    TooLong,
    /// No command matches the first word.
    #[error("Command not found: {0}")]
    NotFound(String),
}

impl TerminalCommand {
    /// Parses a raw command line. Command names are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for oversized lines and unknown commands.
    pub fn parse(raw: &str) -> Result<Self, CommandError> {
        if raw.chars().count() > MAX_COMMAND_LENGTH {
            return Err(CommandError::TooLong);
        }
        let trimmed = raw.trim();
        let lowered = trimmed.to_lowercase();
        match lowered.as_str() {
            "" => Ok(Self::Blank),
            "help" => Ok(Self::Help),
            "clear" => Ok(Self::Clear),
            "whoami" => Ok(Self::Whoami),
            "date" => Ok(Self::Date),
            _ if lowered.starts_with("echo ") => {
                Ok(Self::Echo(trimmed["echo ".len()..].to_string()))
            }
            _ => Err(CommandError::NotFound(trimmed.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Transcript plus recall history for one terminal window.
pub struct TerminalSession {
    lines: Vec<TranscriptLine>,
    history: Vec<String>,
    history_cursor: Option<usize>,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self {
            lines: BANNER
                .iter()
                .map(|text| TranscriptLine::new(*text, LineTone::System))
                .collect(),
            history: Vec::new(),
            history_cursor: None,
        }
    }
}

impl TerminalSession {
    /// Starts a session showing the welcome banner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript lines, oldest first.
    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    /// Previously submitted non-blank commands, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Runs one command line against the transcript. `now` supplies the time for `date`.
    pub fn submit<Tz>(&mut self, raw: &str, now: DateTime<Tz>)
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.history_cursor = None;
        let command = match TerminalCommand::parse(raw) {
            Ok(command) => command,
            Err(err @ CommandError::TooLong) => {
                let head: String = raw.chars().take(TRUNCATED_ECHO_LENGTH).collect();
                self.push(format!("> {head}..."), LineTone::Prompt);
                self.push(err.to_string(), LineTone::Error);
                return;
            }
            Err(err @ CommandError::NotFound(_)) => {
                self.record(raw);
                self.push(format!("> {raw}"), LineTone::Prompt);
                self.push(err.to_string(), LineTone::Error);
                return;
            }
        };

        self.record(raw);
        if command == TerminalCommand::Clear {
            self.lines.clear();
            return;
        }

        self.push(format!("> {raw}"), LineTone::Prompt);
        let output = match command {
            TerminalCommand::Help => HELP_TEXT.to_string(),
            TerminalCommand::Whoami => WHOAMI_TEXT.to_string(),
            TerminalCommand::Date => now.format("%a %b %d %Y %H:%M:%S %z").to_string(),
            TerminalCommand::Echo(text) => text,
            TerminalCommand::Blank | TerminalCommand::Clear => return,
        };
        self.push(output, LineTone::Output);
    }

    /// Steps back through history. Returns the command to place in the input, if any.
    pub fn recall_previous(&mut self) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }
        let index = match self.history_cursor {
            None => self.history.len() - 1,
            Some(index) => index.saturating_sub(1),
        };
        self.history_cursor = Some(index);
        self.history.get(index).cloned()
    }

    /// Steps forward through history. Walking past the newest entry clears the input.
    pub fn recall_next(&mut self) -> Option<String> {
        let index = self.history_cursor?;
        if index + 1 < self.history.len() {
            self.history_cursor = Some(index + 1);
            self.history.get(index + 1).cloned()
        } else {
            self.history_cursor = None;
            Some(String::new())
        }
    }

    fn record(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            self.history.push(trimmed.to_string());
        }
    }

    fn push(&mut self, text: String, tone: LineTone) {
        self.lines.push(TranscriptLine::new(text, tone));
        if self.lines.len() > MAX_TRANSCRIPT_LINES {
            let overflow = self.lines.len() - MAX_TRANSCRIPT_LINES;
            self.lines.drain(0..overflow);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    fn texts(session: &TerminalSession) -> Vec<&str> {
        session.lines().iter().map(|line| line.text.as_str()).collect()
    }

    fn run(session: &mut TerminalSession, raw: &str) {
        session.submit(raw, Utc::now());
    }

    #[test]
    fn new_session_shows_banner() {
        let session = TerminalSession::new();
        assert_eq!(texts(&session), BANNER.to_vec());
    }

    #[test]
    fn whoami_is_case_insensitive() {
        let mut session = TerminalSession::new();
        run(&mut session, "  WhoAmI ");
        assert_eq!(texts(&session)[2..], [">   WhoAmI ", WHOAMI_TEXT]);
        assert_eq!(session.history(), &["WhoAmI".to_string()]);
    }

    #[test]
    fn echo_keeps_argument_casing() {
        let mut session = TerminalSession::new();
        run(&mut session, "ECHO Hello World");
        assert_eq!(texts(&session).last(), Some(&"Hello World"));
    }

    #[test]
    fn unknown_command_reports_name() {
        let mut session = TerminalSession::new();
        run(&mut session, "sudo rm");
        let last = session.lines().last().expect("error line");
        assert_eq!(last.text, "Command not found: sudo rm");
        assert_eq!(last.tone, LineTone::Error);
    }

    #[test]
    fn bare_echo_is_not_a_command() {
        assert_eq!(
            TerminalCommand::parse("echo"),
            Err(CommandError::NotFound("echo".to_string()))
        );
    }

    #[test]
    fn blank_input_only_echoes_prompt() {
        let mut session = TerminalSession::new();
        run(&mut session, "   ");
        assert_eq!(texts(&session).last(), Some(&">    "));
        assert_eq!(session.lines().len(), 3);
        assert!(session.history().is_empty());
    }

    #[test]
    fn oversized_command_is_truncated_and_rejected() {
        let mut session = TerminalSession::new();
        let raw = "x".repeat(MAX_COMMAND_LENGTH + 1);
        run(&mut session, &raw);

        let lines = texts(&session);
        assert_eq!(lines[2], format!("> {}...", "x".repeat(50)));
        assert_eq!(lines[3], "Error: Command too long");
        assert!(session.history().is_empty());
    }

    #[test]
    fn command_at_limit_is_accepted() {
        let raw = format!("echo {}", "y".repeat(MAX_COMMAND_LENGTH - 5));
        assert!(matches!(TerminalCommand::parse(&raw), Ok(TerminalCommand::Echo(_))));
    }

    #[test]
    fn clear_empties_transcript() {
        let mut session = TerminalSession::new();
        run(&mut session, "help");
        run(&mut session, "clear");
        assert!(session.lines().is_empty());
        assert_eq!(session.history(), &["help".to_string(), "clear".to_string()]);
    }

    #[test]
    fn date_uses_supplied_clock() {
        let mut session = TerminalSession::new();
        let offset = FixedOffset::east_opt(2 * 3600).expect("offset");
        let now = offset
            .with_ymd_and_hms(2026, 10, 18, 14, 5, 9)
            .single()
            .expect("valid time");
        session.submit("date", now);
        assert_eq!(texts(&session).last(), Some(&"Sun Oct 18 2026 14:05:09 +0200"));
    }

    #[test]
    fn transcript_is_capped() {
        let mut session = TerminalSession::new();
        for i in 0..150 {
            run(&mut session, &format!("echo {i}"));
        }
        assert_eq!(session.lines().len(), MAX_TRANSCRIPT_LINES);
        assert_eq!(texts(&session).last(), Some(&"149"));
    }

    #[test]
    fn history_recall_walks_back_and_forward() {
        let mut session = TerminalSession::new();
        run(&mut session, "help");
        run(&mut session, "whoami");

        assert_eq!(session.recall_previous().as_deref(), Some("whoami"));
        assert_eq!(session.recall_previous().as_deref(), Some("help"));
        assert_eq!(session.recall_previous().as_deref(), Some("help"));
        assert_eq!(session.recall_next().as_deref(), Some("whoami"));
        assert_eq!(session.recall_next().as_deref(), Some(""));
        assert_eq!(session.recall_next(), None);
    }
}
