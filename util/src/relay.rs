//! Relay helpers: opaque global IDs, offset cursors and connection windows.
//!
//! Implements the parts of the Relay Cursor Connections Specification
//! (<https://relay.dev/graphql/connections.htm>) that the GraphQL layer needs.
//! Cursors are offsets into the filtered, sorted result set, so a window maps
//! directly onto `OFFSET`/`LIMIT`.

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Page size used when neither `first` nor `last` is given.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Largest `first`/`last` a client may request.
pub const MAX_PAGE_SIZE: u64 = 50;

const CURSOR_PREFIX: &str = "cursor:";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("Invalid global id")]
    InvalidId,
    #[error("Expected an id of type {expected}, got {actual}")]
    WrongType { expected: String, actual: String },
    #[error("Invalid cursor")]
    InvalidCursor,
    #[error("`{0}` must not be negative")]
    NegativeCount(&'static str),
    #[error("`{arg}` must not exceed {max}")]
    PageTooLarge { arg: &'static str, max: u64 },
}

/// Encodes `type_name` and a database id into an opaque Relay global id.
pub fn encode_global_id(type_name: &str, id: i64) -> String {
    STANDARD.encode(format!("{type_name}:{id}"))
}

/// Splits a global id into its type name and database id.
pub fn decode_global_id(global_id: &str) -> Result<(String, i64), RelayError> {
    let bytes = STANDARD
        .decode(global_id.trim())
        .map_err(|_| RelayError::InvalidId)?;
    let raw = String::from_utf8(bytes).map_err(|_| RelayError::InvalidId)?;
    let (type_name, id) = raw.split_once(':').ok_or(RelayError::InvalidId)?;
    if type_name.is_empty() {
        return Err(RelayError::InvalidId);
    }
    let id = id.parse::<i64>().map_err(|_| RelayError::InvalidId)?;
    Ok((type_name.to_string(), id))
}

/// Decodes a global id and checks that it names `expected_type`.
pub fn expect_type(global_id: &str, expected_type: &str) -> Result<i64, RelayError> {
    let (type_name, id) = decode_global_id(global_id)?;
    if type_name != expected_type {
        return Err(RelayError::WrongType {
            expected: expected_type.to_string(),
            actual: type_name,
        });
    }
    Ok(id)
}

pub fn encode_cursor(offset: u64) -> String {
    STANDARD.encode(format!("{CURSOR_PREFIX}{offset}"))
}

pub fn decode_cursor(cursor: &str) -> Result<u64, RelayError> {
    let bytes = STANDARD
        .decode(cursor.trim())
        .map_err(|_| RelayError::InvalidCursor)?;
    let raw = String::from_utf8(bytes).map_err(|_| RelayError::InvalidCursor)?;
    raw.strip_prefix(CURSOR_PREFIX)
        .and_then(|offset| offset.parse::<u64>().ok())
        .ok_or(RelayError::InvalidCursor)
}

/// Pagination arguments as received from a Relay connection field.
#[derive(Debug, Clone, Default)]
pub struct ConnectionArgs {
    pub first: Option<i32>,
    pub after: Option<String>,
    pub last: Option<i32>,
    pub before: Option<String>,
}

/// The slice of a result set a connection should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: u64,
    pub limit: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl Window {
    /// Cursor of the item at position `index` inside this window.
    pub fn cursor_at(&self, index: usize) -> String {
        encode_cursor(self.offset + index as u64)
    }
}

fn checked_count(value: Option<i32>, arg: &'static str) -> Result<Option<u64>, RelayError> {
    match value {
        None => Ok(None),
        Some(v) if v < 0 => Err(RelayError::NegativeCount(arg)),
        Some(v) if v as u64 > MAX_PAGE_SIZE => Err(RelayError::PageTooLarge {
            arg,
            max: MAX_PAGE_SIZE,
        }),
        Some(v) => Ok(Some(v as u64)),
    }
}

/// Resolves connection arguments against a result set of `total` items.
///
/// `after` and `before` narrow the range first, then `first` keeps the head
/// and `last` keeps the tail of what remains.
pub fn resolve_window(total: u64, args: &ConnectionArgs) -> Result<Window, RelayError> {
    let first = checked_count(args.first, "first")?;
    let last = checked_count(args.last, "last")?;

    let mut start = match &args.after {
        Some(cursor) => decode_cursor(cursor)?.saturating_add(1),
        None => 0,
    };
    let mut end = match &args.before {
        Some(cursor) => decode_cursor(cursor)?.min(total),
        None => total,
    };
    start = start.min(end);

    let first = match (first, last) {
        (None, None) => Some(DEFAULT_PAGE_SIZE),
        (first, _) => first,
    };

    if let Some(first) = first {
        end = end.min(start + first);
    }
    if let Some(last) = last {
        start = start.max(end.saturating_sub(last));
    }

    Ok(Window {
        offset: start,
        limit: end - start,
        has_previous_page: start > 0,
        has_next_page: end < total,
    })
}
