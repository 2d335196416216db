use std::ops::Range;

use gperf_split_util::{occurrence, overlaps, Occurrence};
use log::debug;

use crate::error::{Block, SpliceError};
use crate::grammar::GrammarBlocks;

/// Position of the single verbatim copy of `text` in `source`.
pub fn locate(source: &str, text: &str, block: Block) -> Result<Range<usize>, SpliceError> {
    if text.is_empty() {
        return Err(SpliceError::EmptyBlock { block });
    }
    match occurrence(source, text) {
        Occurrence::Once(pos) => Ok(pos..pos + text.len()),
        Occurrence::Absent => Err(SpliceError::BlockNotFound { block }),
        Occurrence::Many(count) => Err(SpliceError::BlockNotUnique { block, count }),
    }
}

/// Replaces the prologue with `include_line` and drops the record definition.
/// Both blocks are located in the untouched source before anything is cut, so
/// one replacement can never create or hide a match of the other block.
pub fn splice_source(
    source: &str,
    blocks: &GrammarBlocks,
    include_line: &str,
) -> Result<String, SpliceError> {
    let prologue = locate(source, &blocks.prologue, Block::Prologue)?;
    let record = locate(source, &blocks.record_definition, Block::RecordDefinition)?;
    if overlaps(&prologue, &record) {
        return Err(SpliceError::BlocksOverlap);
    }
    debug!("splice: prologue at {:?}, record definition at {:?}", prologue, record);

    let mut cuts = [(prologue, include_line), (record, "")];
    cuts.sort_by_key(|(range, _)| range.start);

    let mut out = String::with_capacity(source.len());
    let mut pos = 0;
    for (range, replacement) in cuts {
        out.push_str(&source[pos..range.start]);
        out.push_str(replacement);
        pos = range.end;
    }
    out.push_str(&source[pos..]);
    Ok(out)
}
