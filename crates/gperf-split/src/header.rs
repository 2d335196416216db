use std::path::Path;

use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::grammar::GrammarBlocks;

/// File name and stem of the header being generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderName {
    pub file_name: String,
    pub stem: String,
}

impl HeaderName {
    pub fn from_path(path: &Path) -> Result<HeaderName, SplitError> {
        let invalid = || SplitError::HeaderPath(path.to_path_buf());
        let file_name = path.file_name().and_then(|x| x.to_str()).ok_or_else(invalid)?;
        let stem = path.file_stem().and_then(|x| x.to_str()).ok_or_else(invalid)?;
        Ok(HeaderName {
            file_name: file_name.to_string(),
            stem: stem.to_string(),
        })
    }

    /// Directive that takes the place of the prologue in the rewritten source.
    pub fn include_line(&self) -> String {
        format!("#include \"{}\"\n", self.file_name)
    }

    // no sanitization: a stem like `rtos-gperf` ends up in the guard as is
    pub fn guard(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.stem.to_uppercase())
    }
}

pub fn prototype(record_type: &str, lookup_function: &str) -> String {
    format!(
        "struct {} * {} (register const char *str, register unsigned int len);",
        record_type, lookup_function
    )
}

pub fn render_header(
    config: &SplitConfig,
    name: &HeaderName,
    blocks: &GrammarBlocks,
    record_type: &str,
) -> String {
    let guard = name.guard(&config.guard_prefix);
    let includes: String = config
        .includes
        .iter()
        .map(|x| format!("#include <{}>\n", x))
        .collect();

    let mut header = String::new();
    header.push('\n');
    header.push_str(&format!("#ifndef {}\n#define {}\n\n", guard, guard));
    header.push_str(&includes);
    header.push_str(&format!(
        "\n/* Generated by {}. Do not edit directly. */\n\n",
        config.generator
    ));
    header.push_str(&blocks.prologue);
    header.push_str("\n\n");
    header.push_str(&blocks.record_definition);
    header.push_str("\n\n");
    header.push_str(&prototype(record_type, &blocks.lookup_function));
    header.push_str(&format!("\n\n#endif // {}\n", guard));
    header
}
