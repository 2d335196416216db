// Pulls the verbatim C blocks and the lookup function name out of a gperf
// grammar description:
//
//     %{
//     <prologue>
//     %}
//     <record definition>
//     %%
//     <keywords>
//
// plus a `%define lookup-function-name <name>` line somewhere in the file.

use std::ops::Range;
use std::path::Path;

use gperf_split_util::{between, rest_of_line, MissingMarker};
use log::debug;

use crate::error::{Block, ParseError, SplitError};
use crate::pipeline::read_file;

pub const PROLOGUE_START: &str = "%{";
pub const PROLOGUE_END: &str = "%}";
pub const RULES_SEPARATOR: &str = "%%";
pub const LOOKUP_FUNCTION_DIRECTIVE: &str = "%define lookup-function-name";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrammarBlocks {
    pub prologue: String,
    pub record_definition: String,
    pub lookup_function: String,
}

impl GrammarBlocks {
    pub fn parse(grammar: &str) -> Result<GrammarBlocks, ParseError> {
        let prologue = extract_block(grammar, PROLOGUE_START, PROLOGUE_END, 0, Block::Prologue)?;
        // the record definition opens with the same %} that closed the prologue
        let record_definition = extract_block(
            grammar,
            PROLOGUE_END,
            RULES_SEPARATOR,
            prologue.end,
            Block::RecordDefinition,
        )?;
        let lookup_function = lookup_function_name(grammar)?;

        let blocks = GrammarBlocks {
            prologue: grammar[prologue].to_string(),
            record_definition: grammar[record_definition].to_string(),
            lookup_function,
        };
        debug!(
            "grammar: prologue {} bytes, record definition {} bytes, lookup function `{}`",
            blocks.prologue.len(),
            blocks.record_definition.len(),
            blocks.lookup_function
        );
        Ok(blocks)
    }

    pub fn read(path: &Path) -> Result<GrammarBlocks, SplitError> {
        let grammar = read_file(path)?;
        Ok(Self::parse(&grammar)?)
    }
}

/// Range of the text strictly between `start` and the next `end`, searching
/// from `from`.
pub fn extract_block(
    grammar: &str,
    start: &'static str,
    end: &'static str,
    from: usize,
    block: Block,
) -> Result<Range<usize>, ParseError> {
    between(grammar, start, end, from).map_err(|missing| {
        let marker = match missing {
            MissingMarker::Start => start,
            MissingMarker::End => end,
        };
        ParseError::MissingMarker { block, marker }
    })
}

pub fn lookup_function_name(grammar: &str) -> Result<String, ParseError> {
    let name = rest_of_line(grammar, LOOKUP_FUNCTION_DIRECTIVE)
        .ok_or(ParseError::MissingDirective)?
        .trim();
    if name.is_empty() {
        return Err(ParseError::EmptyFunctionName);
    }
    Ok(name.to_string())
}
