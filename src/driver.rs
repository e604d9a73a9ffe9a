pub mod parse;
pub mod session;

pub use parse::{parse_line, Command, Keyword};
pub use session::{execute, Outcome, OutputFormat, RunSummary, Session, SessionConfig};
