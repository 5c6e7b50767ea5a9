//! Reading the node count from a byte stream.
//!
//! Only the first whitespace-delimited token is read; the rest of the stream
//! is left unconsumed. Like a formatted integer read, the token's leading
//! integer is taken and anything after it is ignored, so `"3abc"` reads as 3.

use std::io::{BufRead, ErrorKind};

use crate::error::InputError;

/// Reads the first whitespace-delimited token from `reader`.
///
/// Returns `Ok(None)` if the stream ends before any token starts.
///
/// # Errors
/// Propagates I/O errors from the reader.
pub fn read_token<R: BufRead>(reader: &mut R) -> Result<Option<String>, InputError> {
    let mut token = Vec::new();
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        if buf.is_empty() {
            break;
        }

        let mut consumed = 0;
        let mut done = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            consumed += 1;
        }
        reader.consume(consumed);
        if done {
            break;
        }
    }

    if token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }
}

/// Parses the leading integer of `token` as a node count.
///
/// # Errors
/// Returns [`InputError::NotAnInteger`] if the token does not start with an
/// integer that fits in an `i32`, and [`InputError::Negative`] for values
/// below zero.
pub fn parse_node_count(token: &str) -> Result<usize, InputError> {
    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits_len = token[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(InputError::NotAnInteger(token.to_owned()));
    }

    let value: i32 = token[..sign_len + digits_len]
        .parse()
        .map_err(|_| InputError::NotAnInteger(token.to_owned()))?;
    if value < 0 {
        return Err(InputError::Negative(i64::from(value)));
    }
    usize::try_from(value).map_err(|_| InputError::NotAnInteger(token.to_owned()))
}

/// Reads and parses the node count from `reader`.
///
/// # Errors
/// Returns [`InputError::Empty`] if the stream holds no token, plus every
/// error of [`read_token`] and [`parse_node_count`].
pub fn read_node_count<R: BufRead>(reader: &mut R) -> Result<usize, InputError> {
    let token = read_token(reader)?.ok_or(InputError::Empty)?;
    let count = parse_node_count(&token)?;
    tracing::debug!(count, "read node count");
    Ok(count)
}
