use std::iter;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use itertools::Itertools;

use crate::board::GridError;
use crate::layout::Layout;
use crate::location::Location;
use crate::word::{Direction, Entry};

// both separators are reserved: word validation keeps them out of words, so
// a record always splits back into exactly the fields it was joined from
const SEPARATOR: char = '|';
const FIELD_SEPARATOR: char = ',';

/// Ways a token can fail to decode.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The token does not parse as `<size>|<entry>|<entry>|...` with
    /// well-formed entries. Decoding fails closed: nothing is guessed or
    /// repaired, the reason is reported instead.
    #[error("invalid token: {0}")]
    InvalidFormat(String),
    /// The token parsed, but its entries do not rasterize onto one consistent
    /// grid: out-of-range coordinates or overlapping words that disagree on
    /// a letter.
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Render a layout as its base64 token.
///
/// The underlying record is the decimal grid size followed by one
/// `id,word,x,y,code` field per entry (code 0 = horizontal, 1 = vertical),
/// joined with `|`. A layout with no entries encodes as just its size; the
/// record never ends in a dangling separator.
pub(crate) fn encode(layout: &Layout) -> String {
    let record = iter::once(layout.size().to_string())
        .chain(layout.entries().iter().map(entry_field))
        .join(&SEPARATOR.to_string());
    STANDARD.encode(record)
}

fn entry_field(entry: &Entry) -> String {
    let Location(x, y) = entry.position();
    format!(
        "{id}{s}{word}{s}{x}{s}{y}{s}{code}",
        id = entry.id(),
        word = entry.word(),
        code = entry.direction().code(),
        s = FIELD_SEPARATOR,
    )
}

/// Parse a token back into a [`Layout`], validating everything on the way.
///
/// The decoded entries are rasterized before the layout is returned, so a
/// token that smuggles in conflicting or out-of-range placements is rejected
/// here rather than blowing up at render time.
pub(crate) fn decode(token: &str) -> Result<Layout, DecodeError> {
    let record = STANDARD
        .decode(token)
        .map_err(|err| DecodeError::InvalidFormat(format!("not base64: {err}")))?;
    let record = String::from_utf8(record)
        .map_err(|_| DecodeError::InvalidFormat("record is not UTF-8".into()))?;

    // split never yields zero fields; an empty record shows up as an empty
    // size field and fails the numeric parse
    let mut fields = record.split(SEPARATOR);
    let size_field = fields.next().unwrap_or_default();
    let size = size_field
        .parse::<usize>()
        .map_err(|_| DecodeError::InvalidFormat(format!("size field {size_field:?} is not a number")))?;

    let entries = fields.map(parse_entry).collect::<Result<Vec<_>, _>>()?;
    Ok(Layout::new(size, entries)?)
}

fn parse_entry(field: &str) -> Result<Entry, DecodeError> {
    let parts = field.split(FIELD_SEPARATOR).collect_vec();
    let &[id, word, x, y, code] = parts.as_slice() else {
        return Err(DecodeError::InvalidFormat(format!(
            "entry {field:?} does not have exactly five fields"
        )));
    };

    let id = parse_number(id)?;
    let x = parse_number(x)?;
    let y = parse_number(y)?;
    let direction = parse_number(code)
        .ok()
        .and_then(Direction::from_code)
        .ok_or_else(|| {
            DecodeError::InvalidFormat(format!("{code:?} is not an orientation code"))
        })?;

    Entry::new(id, word, Location(x, y), direction)
        .map_err(|err| DecodeError::InvalidFormat(err.to_string()))
}

fn parse_number<T: std::str::FromStr>(field: &str) -> Result<T, DecodeError> {
    field
        .parse()
        .map_err(|_| DecodeError::InvalidFormat(format!("{field:?} is not a number")))
}
