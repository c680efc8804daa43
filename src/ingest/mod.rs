//! Vector ingestion: numeric tokens in, ordered [`Vector2`] values out.
//!
//! Tokens are consumed two at a time (`x` then `y`) in source order. A
//! trailing unpaired coordinate is an error, never silently dropped.

mod tokens;

use std::io::Read;

use tracing::debug;

use crate::error::{MalformedInputError, Result};
use crate::math::Vector2;

pub use tokens::Tokens;

/// Groups a token stream pairwise into vectors.
///
/// Stops at the first token error. No partial result is returned on failure.
///
/// # Errors
///
/// Returns [`MalformedInputError::MismatchedElements`] if the stream holds an
/// odd number of tokens, or the first [`MalformedInputError::InvalidToken`]
/// produced by the stream.
pub fn ingest<I>(tokens: I) -> std::result::Result<Vec<Vector2>, MalformedInputError>
where
    I: IntoIterator<Item = std::result::Result<f64, MalformedInputError>>,
{
    let mut tokens = tokens.into_iter();
    let mut output = Vec::new();

    while let Some(x) = tokens.next() {
        let x = x?;
        let Some(y) = tokens.next() else {
            return Err(MalformedInputError::MismatchedElements {
                tokens: output.len() * 2 + 1,
            });
        };
        output.push(Vector2::new(x, y?));
    }

    debug!(vectors = output.len(), "ingested vectors");
    Ok(output)
}

/// Groups already-parsed coordinates pairwise into vectors.
///
/// # Errors
///
/// Returns [`MalformedInputError::MismatchedElements`] on an odd value count.
pub fn ingest_values<I>(values: I) -> std::result::Result<Vec<Vector2>, MalformedInputError>
where
    I: IntoIterator<Item = f64>,
{
    ingest(values.into_iter().map(Ok))
}

/// Lexes whitespace-separated numbers from `text` and ingests them.
///
/// # Errors
///
/// Returns a [`MalformedInputError`] on a non-numeric token or an odd count.
pub fn ingest_str(text: &str) -> std::result::Result<Vec<Vector2>, MalformedInputError> {
    ingest(Tokens::new(text))
}

/// Reads `reader` to the end and ingests its contents.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if reading fails or the data is not UTF-8, and
/// [`crate::Error::Input`] for malformed content.
pub fn ingest_reader<R: Read>(mut reader: R) -> Result<Vec<Vector2>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(ingest_str(&text)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    #[test]
    fn five_vectors_in_order() {
        let result = ingest_str("1 1\n1 2\n1 3\n1 4\n1 5").unwrap();
        assert_eq!(result, vec![v(1.0, 1.0), v(1.0, 2.0), v(1.0, 3.0), v(1.0, 4.0), v(1.0, 5.0)]);
    }

    #[test]
    fn pairing_ignores_line_layout() {
        let result = ingest_str("1\n2 3\n4").unwrap();
        assert_eq!(result, vec![v(1.0, 2.0), v(3.0, 4.0)]);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(ingest_str("").unwrap().is_empty());
        assert!(ingest_values(Vec::<f64>::new()).unwrap().is_empty());
    }

    #[test]
    fn odd_count_is_rejected() {
        let err = ingest_str("1 1\n1 2\n1").unwrap_err();
        assert_eq!(err, MalformedInputError::MismatchedElements { tokens: 5 });
        assert_eq!(err.to_string(), "mismatched vector elements");

        let err = ingest_values([7.0]).unwrap_err();
        assert_eq!(err, MalformedInputError::MismatchedElements { tokens: 1 });
    }

    #[test]
    fn even_counts_give_half_as_many_vectors() {
        for n in 0..12_u32 {
            let values: Vec<f64> = (0..2 * n).map(f64::from).collect();
            let result = ingest_values(values).unwrap();
            assert_eq!(result.len(), n as usize);
            for (i, vec) in result.iter().enumerate() {
                let i = u32::try_from(i).unwrap();
                assert_eq!(*vec, v(f64::from(2 * i), f64::from(2 * i + 1)));
            }
        }
    }

    #[test]
    fn invalid_token_surfaces() {
        let err = ingest_str("1 2 3 x 5 6").unwrap_err();
        assert_eq!(
            err,
            MalformedInputError::InvalidToken {
                token: "x".to_owned(),
                index: 3,
            }
        );
    }

    #[test]
    fn reader_input() {
        let result = ingest_reader("0.5 -2\n3 4\n".as_bytes()).unwrap();
        assert_eq!(result, vec![v(0.5, -2.0), v(3.0, 4.0)]);

        let err = ingest_reader("1 2 3".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::Input(MalformedInputError::MismatchedElements { tokens: 3 })
        ));
    }

    #[test]
    fn reader_rejects_non_utf8() {
        let err = ingest_reader(&[0xff_u8, 0xfe, b' ', b'1'][..]).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
