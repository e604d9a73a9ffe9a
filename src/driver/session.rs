use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;

use derive_new::new;
use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::driver::parse::{parse_line, Command};
use crate::error::CommandError;
use crate::sequences::sequence::{Pattern, Sequence};
use crate::sequences::trie::{Insertion, Node, SearchReport, SequenceTrie};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {:?}", other)),
        }
    }
}

#[derive(TypedBuilder, Copy, Clone, Debug)]
pub struct SessionConfig {
    #[builder(default)]
    format: OutputFormat,
    #[builder(default = true)]
    normalize_case: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig::builder().build()
    }
}

/// What a single command did, ready to be written out.
#[derive(Debug, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Outcome<'a> {
    Insert {
        sequence: Sequence,
        #[serde(flatten)]
        insertion: Insertion,
    },
    Remove {
        sequence: Sequence,
        removed: bool,
    },
    Print {
        dump: String,
        tree: &'a Node,
    },
    Search {
        pattern: Pattern,
        #[serde(flatten)]
        report: SearchReport,
    },
}

impl Display for Outcome<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Insert { sequence, insertion: Insertion::Inserted { level } } => {
                write!(f, "sequence {} inserted at level {}", sequence, level)
            }
            Outcome::Insert { sequence, insertion: Insertion::Duplicate } => {
                write!(f, "sequence {} already exists", sequence)
            }
            Outcome::Remove { sequence, removed: true } => write!(f, "sequence {} removed", sequence),
            Outcome::Remove { sequence, removed: false } => write!(f, "sequence {} does not exist", sequence),
            Outcome::Print { dump, .. } => write!(f, "{}", dump),
            Outcome::Search { report, .. } => write!(f, "{}", report),
        }
    }
}

/// Applies one command to `trie`.
pub fn execute(trie: &mut SequenceTrie, command: Command) -> Outcome<'_> {
    match command {
        Command::Insert(sequence) => {
            let insertion = trie.insert(sequence.clone());
            Outcome::Insert { sequence, insertion }
        }
        Command::Remove(sequence) => {
            let removed = trie.remove(&sequence);
            Outcome::Remove { sequence, removed }
        }
        Command::Print(options) => Outcome::Print { dump: trie.print(&options), tree: trie.root() },
        Command::Search(pattern) => {
            let report = trie.search(&pattern);
            Outcome::Search { pattern, report }
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub executed: usize,
    pub skipped: usize,
}

/// Runs command files against a single trie, writing one outcome per
/// command to `out`.
#[derive(new)]
pub struct Session<W: Write> {
    out: W,
    config: SessionConfig,
    #[new(default)]
    trie: SequenceTrie,
}

impl<W: Write> Session<W> {
    pub fn trie(&self) -> &SequenceTrie {
        &self.trie
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn run_file(&mut self, path: &Path) -> Result<RunSummary, CommandError> {
        tracing::info!(path = %path.display(), "reading commands");
        let file = File::open(path).map_err(|source| CommandError::Io { path: path.to_path_buf(), source })?;
        self.run_reader(BufReader::new(file))
    }

    /// Executes every well-formed line; malformed ones are logged and skipped.
    pub fn run_reader<R: BufRead>(&mut self, reader: R) -> Result<RunSummary, CommandError> {
        let mut summary = RunSummary::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(CommandError::Read)?;
            match parse_line(&line, self.config.normalize_case) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    self.run_command(command)?;
                    summary.executed += 1;
                }
                Err(e) => {
                    tracing::warn!(line = idx + 1, error = %e, "skipping command");
                    summary.skipped += 1;
                }
            }
        }
        tracing::info!(executed = summary.executed, skipped = summary.skipped, sequences = self.trie.len(), "run finished");
        Ok(summary)
    }

    pub fn run_command(&mut self, command: Command) -> Result<(), CommandError> {
        let outcome = execute(&mut self.trie, command);
        write_outcome(&mut self.out, self.config.format, &outcome)
    }
}

fn write_outcome<W: Write>(out: &mut W, format: OutputFormat, outcome: &Outcome) -> Result<(), CommandError> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", outcome)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, outcome)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
