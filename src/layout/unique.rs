//! States processing the unique mandatory section.

use thiserror::Error;

use super::repeated::RecordLocator;

/// The width of the unique section, in characters.
pub const LENGTH: usize = 1 + 1 + PassengerName::WIDTH + 1;

/// An error advancing over the format code.
#[derive(Debug, Error)]
pub enum FormatCodeError {
    /// Unrecognized format code.
    #[error("Unrecognized format code ({0:?}).")]
    Unrecognized(char),
}

/// The format code of a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Format {
    /// `'S'`, a payload holding a single flight leg.
    Single,
    /// `'M'`, a payload holding multiple flight legs.
    Multiple,
}

/// State token to decode the format code.
#[derive(Debug)]
pub struct FormatCode;

impl FormatCode {
    /// Transition to another state by decoding the format code.
    ///
    /// Returns the format, and a successor state token.
    pub fn advance(r: char) -> Result<(Format, LegCount), FormatCodeError> {
        let format = match r {
            'S' => Format::Single,
            'M' => Format::Multiple,
            _ => Err(FormatCodeError::Unrecognized(r))?,
        };

        Ok((format, LegCount(())))
    }
}

/// An error advancing over the leg count.
#[derive(Debug, Error)]
pub enum LegCountError {
    /// Leg count is not a decimal digit.
    #[error("Leg count is not a decimal digit ({0:?}).")]
    NotADigit(char),
}

/// State token to decode the number of flight legs.
#[derive(Debug)]
pub struct LegCount(pub(super) ());

impl LegCount {
    /// Transition to another state by decoding the leg count.
    ///
    /// Returns the number of legs the payload declares, and a successor
    /// state token. The count is informational: later states decode the
    /// first leg only, whatever its value.
    pub fn advance(self, r: char) -> Result<(u8, PassengerName), LegCountError> {
        let legs = r.to_digit(10).ok_or(LegCountError::NotADigit(r))? as u8;

        Ok((legs, PassengerName(())))
    }
}

/// A passenger name, split out of the name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Name<'a> {
    /// The surname, with trailing whitespace trimmed.
    pub last: &'a str,
    /// The given name, with trailing whitespace trimmed. Empty when the
    /// field held no delimiter.
    pub first: &'a str,
}

/// State token to decode the passenger name.
#[derive(Debug)]
pub struct PassengerName(pub(super) ());

impl PassengerName {
    /// The width of the name field, in characters.
    pub const WIDTH: usize = 20;

    /// Transition to another state by decoding the passenger name.
    ///
    /// The field holds the surname and given name joined by a `/`. Empty
    /// parts around stray delimiters are skipped, so a doubled or leading
    /// delimiter does not blank a name. No minimum length is imposed on
    /// either part; a name recovered from a noisy scan may be arbitrarily
    /// short.
    ///
    /// Returns the split name, and a successor state token.
    pub fn advance(self, r: &str) -> (Name<'_>, ElectronicTicket) {
        let mut parts = r.split('/').filter(|p| !p.is_empty());

        let last = parts.next().unwrap_or("").trim_end();
        let first = parts.next().unwrap_or("").trim_end();

        (Name { last, first }, ElectronicTicket(()))
    }
}

/// State token to advance over the electronic ticket indicator.
#[derive(Debug)]
pub struct ElectronicTicket(pub(super) ());

impl ElectronicTicket {
    /// Transition to another state by discarding the electronic ticket
    /// indicator.
    ///
    /// Returns the successor state token.
    pub fn advance(self, _r: char) -> RecordLocator {
        RecordLocator(())
    }
}
