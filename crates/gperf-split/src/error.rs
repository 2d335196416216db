use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The two code blocks lifted out of a grammar description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Prologue,
    RecordDefinition,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Prologue => write!(f, "enumeration prologue"),
            Block::RecordDefinition => write!(f, "record definition"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("could not find `{marker}` marker of the {block}")]
    MissingMarker { block: Block, marker: &'static str },
    #[error("could not find `%define lookup-function-name` directive")]
    MissingDirective,
    #[error("`%define lookup-function-name` does not name a function")]
    EmptyFunctionName,
    #[error("no struct definition")]
    NoStruct,
    #[error("struct definition has no opening brace")]
    NoStructBody,
    #[error("struct definition has no type name")]
    EmptyStructName,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    #[error("{block} is empty")]
    EmptyBlock { block: Block },
    #[error("{block} does not occur in the generated source")]
    BlockNotFound { block: Block },
    #[error("{block} occurs {count} times in the generated source, expected exactly once")]
    BlockNotUnique { block: Block, count: usize },
    #[error("enumeration prologue and record definition overlap in the generated source")]
    BlocksOverlap,
}

#[derive(Debug, Error)]
pub enum SplitError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Splice(#[from] SpliceError),
    #[error("header path {0:?} has no usable file name")]
    HeaderPath(PathBuf),
    #[error("failed to access {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
