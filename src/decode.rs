//! Whole-payload decoding into a boarding pass record.

use core::fmt;

use thiserror::Error;

use crate::{
    cursor::{Cursor, EndOfPayload},
    layout::{
        self, Decoder,
        repeated::{
            Carrier, CheckInSequence, Destination, FlightDate, FlightNumber, Origin,
            PassengerStatus, RecordLocator, Seat,
        },
        unique::{Format, FormatCodeError, LegCountError, Name, PassengerName},
    },
};

#[cfg(feature = "std")]
extern crate std;

/// Errors occurring while decoding a payload.
///
/// Truncated, corrupted, and unrelated scans are routine inputs; every
/// variant reports a normal "no decode" outcome for the attempt. No partial
/// record accompanies an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Payload is shorter than the mandatory items.
    #[error(
        "Payload is shorter than the mandatory items ({length} of {minimum} characters).",
        minimum = layout::MINIMUM_LENGTH
    )]
    TooShort { length: usize },
    /// Unexpectedly reached the end of the payload.
    #[error(transparent)]
    EndOfPayload(#[from] EndOfPayload),
    /// Unrecognized format code.
    #[error(transparent)]
    FormatCode(#[from] FormatCodeError),
    /// Leg count is not a decimal digit.
    #[error(transparent)]
    LegCount(#[from] LegCountError),
}

/// A decoded boarding pass, borrowing from the scanned payload.
///
/// Fields are the mandatory items of the first flight leg; see the
/// [`crate::layout`] module for widths, trimming, and coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BoardingPass<'a> {
    /// The format code.
    pub format: Format,
    /// The number of flight legs the payload declares. Only the first is
    /// decoded.
    pub legs: u8,
    /// The passenger name.
    pub passenger: Name<'a>,
    /// The origin airport code.
    pub origin: &'a str,
    /// The destination airport code.
    pub destination: &'a str,
    /// The operating carrier designator, trailing-trimmed.
    pub carrier: &'a str,
    /// The flight number, trailing-trimmed.
    pub flight_number: &'a str,
    /// The fare class code.
    pub fare_class: char,
    /// The seat assignment.
    pub seat: &'a str,
    /// The check-in sequence number.
    pub check_in_sequence: &'a str,
    /// The passenger's check-in state.
    pub status: PassengerStatus,
}

/// The one-line summary of a pass: carrier and flight number run together,
/// then the passenger name, seat, status, and fare class.
impl fmt::Display for BoardingPass<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}{} {} {} {}",
            self.carrier,
            self.flight_number,
            self.passenger.first,
            self.passenger.last,
            self.seat,
            self.status,
            self.fare_class,
        )
    }
}

#[cfg(feature = "std")]
impl BoardingPass<'_> {
    /// Render the summary line to an owned string.
    ///
    /// _Requires Cargo feature `std`._
    pub fn summary(&self) -> std::string::String {
        use std::string::ToString;

        self.to_string()
    }
}

/// Decode the mandatory items of a payload into a boarding pass.
///
/// The payload is the text recovered from a scanned barcode symbol by an
/// external detector. Characters beyond the mandatory items (conditional
/// items, further legs) are left unread.
pub fn decode(payload: &str) -> Result<BoardingPass<'_>, Error> {
    let length = payload.chars().count();
    if length < layout::MINIMUM_LENGTH {
        Err(Error::TooShort { length })?;
    }

    let c = &mut Cursor::new(payload);

    let (format, state) = Decoder::advance(c.take_char()?)?;
    let (legs, state) = state.advance(c.take_char()?)?;
    let (passenger, state) = state.advance(c.take(PassengerName::WIDTH)?);
    let state = state.advance(c.take_char()?);
    let state = state.advance(c.take(RecordLocator::WIDTH)?);
    let (origin, state) = state.advance(c.take(Origin::WIDTH)?);
    let (destination, state) = state.advance(c.take(Destination::WIDTH)?);
    let (carrier, state) = state.advance(c.take(Carrier::WIDTH)?);
    let (flight_number, state) = state.advance(c.take(FlightNumber::WIDTH)?);
    let state = state.advance(c.take(FlightDate::WIDTH)?);
    let (fare_class, state) = state.advance(c.take_char()?);
    let (seat, state) = state.advance(c.take(Seat::WIDTH)?);
    let (check_in_sequence, state) = state.advance(c.take(CheckInSequence::WIDTH)?);
    let status = state.advance(c.take_char()?);

    Ok(BoardingPass {
        format,
        legs,
        passenger,
        origin,
        destination,
        carrier,
        flight_number,
        fare_class,
        seat,
        check_in_sequence,
        status,
    })
}
