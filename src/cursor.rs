//! An advancing cursor over a payload string.

use thiserror::Error;

/// An error taking characters from the payload.
#[derive(Debug, Error)]
#[error("Unexpectedly reached the end of the payload.")]
pub struct EndOfPayload;

/// A cursor carving fixed-width character fields off a payload.
///
/// The cursor advances an index over the immutable payload rather than
/// cutting down a working copy; consumed characters are never re-scanned,
/// and taken fields borrow from the payload directly. Widths are counted in
/// characters, not bytes, as fields are positioned in the format.
#[derive(Debug)]
pub struct Cursor<'a> {
    payload: &'a str,
    index: usize, // Byte offset, always on a character boundary.
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of a payload.
    pub fn new(payload: &'a str) -> Self {
        Self { payload, index: 0 }
    }

    /// Take an exact number of characters, advancing past them.
    ///
    /// Fails, without advancing, if fewer than `width` characters remain.
    pub fn take(&mut self, width: usize) -> Result<&'a str, EndOfPayload> {
        let rest = &self.payload[self.index..];

        let mut chars = rest.chars();
        for _ in 0..width {
            chars.next().ok_or(EndOfPayload)?;
        }

        let taken = &rest[..rest.len() - chars.as_str().len()];
        self.index += taken.len();

        Ok(taken)
    }

    /// Take a single character, advancing past it.
    pub fn take_char(&mut self) -> Result<char, EndOfPayload> {
        let rest = &self.payload[self.index..];

        let c = rest.chars().next().ok_or(EndOfPayload)?;
        self.index += c.len_utf8();

        Ok(c)
    }

    /// The characters not yet consumed.
    pub fn remaining(&self) -> &'a str {
        &self.payload[self.index..]
    }
}
