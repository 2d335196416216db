use std::ops::Range;

// plain substring helpers; everything here works on byte offsets into &str
// and never looks at the text it is matching

/// Which side of a marker pair could not be found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingMarker {
    Start,
    End,
}

/// How often a needle occurs in a haystack, counting overlapping matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occurrence {
    Absent,
    Once(usize),
    Many(usize),
}

/// Offset of the first `needle` at or after `from`.
pub fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack.get(from..)?.find(needle).map(|pos| from + pos)
}

/// Range strictly between the first `start` marker at or after `from` and the
/// first `end` marker after it. The markers themselves are not included.
pub fn between(
    haystack: &str,
    start: &str,
    end: &str,
    from: usize,
) -> Result<Range<usize>, MissingMarker> {
    let start_pos = find_from(haystack, start, from).ok_or(MissingMarker::Start)?;
    let body_start = start_pos + start.len();
    let end_pos = find_from(haystack, end, body_start).ok_or(MissingMarker::End)?;
    Ok(body_start..end_pos)
}

/// Text from the end of `token` up to the next line break (or end of input).
pub fn rest_of_line<'a>(haystack: &'a str, token: &str) -> Option<&'a str> {
    let pos = haystack.find(token)? + token.len();
    let rest = &haystack[pos..];
    // \r is left for the caller's trim
    let end = rest.find('\n').unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Counts every match of `needle`, including overlapping ones, and reports
/// the position when there is exactly one.
pub fn occurrence(haystack: &str, needle: &str) -> Occurrence {
    if needle.is_empty() {
        return Occurrence::Many(haystack.len() + 1);
    }
    let step = needle.chars().next().map_or(1, char::len_utf8);
    let mut first = None;
    let mut count = 0;
    let mut from = 0;
    while let Some(pos) = find_from(haystack, needle, from) {
        first.get_or_insert(pos);
        count += 1;
        from = pos + step;
    }
    match (count, first) {
        (0, _) | (_, None) => Occurrence::Absent,
        (1, Some(pos)) => Occurrence::Once(pos),
        (n, _) => Occurrence::Many(n),
    }
}

/// `true` when the two ranges share at least one byte.
pub fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}
