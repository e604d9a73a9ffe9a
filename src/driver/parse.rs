use std::fmt::{Display, Formatter};

use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_till1};
use nom::character::complete::{multispace0, multispace1};
use nom::combinator::{all_consuming, opt, value};
use nom::sequence::{delimited, pair, preceded};
use nom::IResult;

use crate::alphabet::normalize;
use crate::error::{CommandError, SequenceError};
use crate::sequences::sequence::{Pattern, Sequence};
use crate::sequences::trie::PrintOptions;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Keyword {
    Insert,
    Remove,
    Print,
    Search,
}

impl Display for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Keyword::Insert => "INSERT",
            Keyword::Remove => "REMOVE",
            Keyword::Print => "PRINT",
            Keyword::Search => "SEARCH",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Insert(Sequence),
    Remove(Sequence),
    Print(PrintOptions),
    Search(Pattern),
}

fn keyword(input: &str) -> IResult<&str, Keyword> {
    use Keyword::*;
    alt((value(Insert, tag_no_case("insert")),
         value(Remove, tag_no_case("remove")),
         value(Print, tag_no_case("print")),
         value(Search, tag_no_case("search"))))(input)
}

fn operand(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace())(input)
}

fn line(input: &str) -> IResult<&str, (Keyword, Option<&str>)> {
    all_consuming(delimited(multispace0,
                            pair(keyword, opt(preceded(multispace1, operand))),
                            multispace0))(input)
}

fn print_options(operand: Option<&str>) -> Result<PrintOptions, CommandError> {
    match operand.map(|o| o.to_ascii_uppercase()).as_deref() {
        None => Ok(PrintOptions::default()),
        Some("LENGTHS") => Ok(PrintOptions::builder().lengths(true).build()),
        Some("STATS") => Ok(PrintOptions::builder().stats(true).build()),
        Some(other) => Err(CommandError::UnknownPrintOption(other.to_string())),
    }
}

/// Parses one line of a command file. Blank lines yield `Ok(None)`.
///
/// With `normalize_case` set, operands are upper-cased before validation so
/// `insert acgt` and `INSERT ACGT` are the same command.
pub fn parse_line(input: &str, normalize_case: bool) -> Result<Option<Command>, CommandError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    let (_, (kw, operand)) = line(input)
        .map_err(|_| CommandError::Malformed(input.to_string()))?;
    let operand = operand.map(|o| if normalize_case { normalize(o) } else { o.to_string() });

    let required = || operand.clone().ok_or(CommandError::MissingOperand(kw));
    let invalid = |source: SequenceError| CommandError::InvalidOperand { keyword: kw, source };

    let command = match kw {
        Keyword::Insert => Command::Insert(required()?.parse().map_err(invalid)?),
        Keyword::Remove => Command::Remove(required()?.parse().map_err(invalid)?),
        Keyword::Search => Command::Search(required()?.parse().map_err(invalid)?),
        Keyword::Print => Command::Print(print_options(operand.as_deref())?),
    };
    Ok(Some(command))
}
