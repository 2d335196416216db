use crate::error::ParseError;

const STRUCT_KEYWORD: &str = "struct";

/// Name of the record type declared in a gperf record definition, i.e. the
/// text between the first `struct` and the following `{`.
///
/// This is a plain substring search: a `struct` inside a comment ahead of the
/// real declaration is picked up as well.
pub fn record_type_name(record_definition: &str) -> Result<String, ParseError> {
    let keyword = record_definition
        .find(STRUCT_KEYWORD)
        .ok_or(ParseError::NoStruct)?;
    let after = &record_definition[keyword + STRUCT_KEYWORD.len()..];
    let brace = after.find('{').ok_or(ParseError::NoStructBody)?;

    let name = after[..brace].trim();
    if name.is_empty() {
        return Err(ParseError::EmptyStructName);
    }
    Ok(name.to_string())
}
