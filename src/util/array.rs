//! Parsing user-supplied arrays such as `5,3,8,1`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArrayParseError {
    #[error("Invalid value {value:?} at position {position}")]
    InvalidValue { position: usize, value: String },
    #[error("Array has {len} values, at most {max} are supported")]
    TooLong { len: usize, max: usize },
}

/// Parse a comma or whitespace separated list of integers.
///
/// An empty string is an empty array.
pub fn parse_array(input: &str, max_len: usize) -> Result<Vec<i32>, ArrayParseError> {
    let values = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(position, part)| {
            part.parse::<i32>()
                .map_err(|_| ArrayParseError::InvalidValue {
                    position,
                    value: part.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() > max_len {
        return Err(ArrayParseError::TooLong {
            len: values.len(),
            max: max_len,
        });
    }
    Ok(values)
}
