use std::fs;
use std::path::Path;

use log::info;

use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::grammar::GrammarBlocks;
use crate::header::{render_header, HeaderName};
use crate::record::record_type_name;
use crate::splice::splice_source;

/// Rewritten generated source and the header split out of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitOutput {
    pub source: String,
    pub header: String,
}

/// Whole transformation on in-memory text. `header_path` only contributes its
/// file name (include line) and stem (include guard).
pub fn split(
    config: &SplitConfig,
    grammar: &str,
    generated: &str,
    header_path: &Path,
) -> Result<SplitOutput, SplitError> {
    let blocks = GrammarBlocks::parse(grammar)?;
    let record_type = record_type_name(&blocks.record_definition)?;
    let name = HeaderName::from_path(header_path)?;

    let source = splice_source(generated, &blocks, &name.include_line())?;
    let header = render_header(config, &name, &blocks, &record_type);
    Ok(SplitOutput { source, header })
}

/// Reads all three inputs, splits, then overwrites `source_path` and writes
/// `header_path`. Nothing is written unless the split succeeds.
pub fn run(
    config: &SplitConfig,
    grammar_path: &Path,
    source_path: &Path,
    header_path: &Path,
) -> Result<SplitOutput, SplitError> {
    let grammar = read_file(grammar_path)?;
    let generated = read_file(source_path)?;
    let output = split(config, &grammar, &generated, header_path)?;

    write_file(source_path, &output.source)?;
    info!("rewrote {}", source_path.display());
    write_file(header_path, &output.header)?;
    info!("wrote {}", header_path.display());
    Ok(output)
}

pub(crate) fn read_file(path: &Path) -> Result<String, SplitError> {
    fs::read_to_string(path).map_err(|source| SplitError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), SplitError> {
    fs::write(path, contents).map_err(|source| SplitError::Io {
        path: path.to_path_buf(),
        source,
    })
}
