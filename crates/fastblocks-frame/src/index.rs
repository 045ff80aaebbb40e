use crate::error::{FrameError, Result};

/// Line prefix of a message-start marker.
pub const MESSAGE_PREFIX: &str = "***MESSAGE @";

/// Line prefix of the terminal end-of-data marker.
pub const END_OF_DATA_PREFIX: &str = "*** End of data @";

const MARKER_SUFFIX: &str = "***";

/// A boundary marker parsed from one index line.
///
/// Offsets are byte positions into the raw stream, written as bare
/// hexadecimal (no `0x` prefix) by the decoder that produced the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// A message begins at this offset.
    MessageStart(u64),
    /// The raw stream ends at this offset. Terminal.
    EndOfData(u64),
}

impl Marker {
    /// The byte offset this marker carries.
    pub fn offset(self) -> u64 {
        match self {
            Marker::MessageStart(offset) | Marker::EndOfData(offset) => offset,
        }
    }
}

/// Parse one index line.
///
/// Returns `Ok(None)` for lines that are not boundary markers — index
/// files interleave hex dumps, field traces, and blank lines between
/// markers, and all of those pass through unrecognized. A marker is
/// recognized only when its prefix is followed by hex digits and the
/// closing `***` delimiter; a line that merely starts like a marker is
/// commentary. Only a well-delimited marker whose digits are empty or
/// exceed the offset range is a [`FrameError::MalformedIndex`].
pub fn parse_marker(line: &str) -> Result<Option<Marker>> {
    if let Some(rest) = line.strip_prefix(MESSAGE_PREFIX) {
        return Ok(parse_offset(rest, line)?.map(Marker::MessageStart));
    }
    if let Some(rest) = line.strip_prefix(END_OF_DATA_PREFIX) {
        return Ok(parse_offset(rest, line)?.map(Marker::EndOfData));
    }
    Ok(None)
}

fn parse_offset(rest: &str, line: &str) -> Result<Option<u64>> {
    let digits_end = rest
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(rest.len());
    let (digits, tail) = rest.split_at(digits_end);
    if !tail.starts_with(MARKER_SUFFIX) {
        // No closing delimiter after the digits: not a marker.
        return Ok(None);
    }
    u64::from_str_radix(digits, 16)
        .map(Some)
        .map_err(|_| FrameError::MalformedIndex {
            line: line.to_string(),
        })
}
