//! States processing the repeated per-leg section.
//!
//! The section recurs once per flight leg declared in the leg count. This
//! machine makes a single pass over it, covering the first leg, and ends at
//! the passenger status code.

use core::fmt;

/// The width of one pass over the repeated section, in characters.
pub const LENGTH: usize = RecordLocator::WIDTH
    + Origin::WIDTH
    + Destination::WIDTH
    + Carrier::WIDTH
    + FlightNumber::WIDTH
    + FlightDate::WIDTH
    + 1 // Fare class.
    + Seat::WIDTH
    + CheckInSequence::WIDTH
    + 1; // Passenger status.

/// State token to advance over the record locator.
#[derive(Debug)]
pub struct RecordLocator(pub(super) ());

impl RecordLocator {
    /// The width of the record locator field, in characters.
    pub const WIDTH: usize = 7;

    /// Transition to another state by discarding the record locator.
    ///
    /// Returns the successor state token.
    pub fn advance(self, _r: &str) -> Origin {
        Origin(())
    }
}

/// State token to decode the origin airport code.
#[derive(Debug)]
pub struct Origin(pub(super) ());

impl Origin {
    /// The width of an airport code, in characters.
    pub const WIDTH: usize = 3;

    /// Transition to another state by decoding the origin airport code.
    ///
    /// The code is taken as found; no alphabetic or registry validation is
    /// applied.
    ///
    /// Returns the code, and a successor state token.
    pub fn advance(self, r: &str) -> (&str, Destination) {
        (r, Destination(()))
    }
}

/// State token to decode the destination airport code.
#[derive(Debug)]
pub struct Destination(pub(super) ());

impl Destination {
    /// The width of an airport code, in characters.
    pub const WIDTH: usize = 3;

    /// Transition to another state by decoding the destination airport code.
    ///
    /// Returns the code, as found, and a successor state token.
    pub fn advance(self, r: &str) -> (&str, Carrier) {
        (r, Carrier(()))
    }
}

/// State token to decode the operating carrier.
#[derive(Debug)]
pub struct Carrier(pub(super) ());

impl Carrier {
    /// The width of the carrier field, in characters.
    pub const WIDTH: usize = 3;

    /// Transition to another state by decoding the operating carrier.
    ///
    /// Two-character carrier designators are padded in the field; returns
    /// the designator with trailing whitespace trimmed, and a successor
    /// state token.
    pub fn advance(self, r: &str) -> (&str, FlightNumber) {
        (r.trim_end(), FlightNumber(()))
    }
}

/// State token to decode the flight number.
#[derive(Debug)]
pub struct FlightNumber(pub(super) ());

impl FlightNumber {
    /// The width of the flight number field, in characters.
    pub const WIDTH: usize = 5;

    /// Transition to another state by decoding the flight number.
    ///
    /// Returns the number with trailing whitespace trimmed, and a successor
    /// state token.
    pub fn advance(self, r: &str) -> (&str, FlightDate) {
        (r.trim_end(), FlightDate(()))
    }
}

/// State token to advance over the flight date.
#[derive(Debug)]
pub struct FlightDate(pub(super) ());

impl FlightDate {
    /// The width of the flight date field, in characters.
    pub const WIDTH: usize = 3;

    /// Transition to another state by discarding the flight date.
    ///
    /// The field holds the departure date as a day-of-year ordinal. It is
    /// left unparsed: resolving it to a calendar date needs a year the
    /// payload does not carry.
    ///
    /// Returns the successor state token.
    pub fn advance(self, _r: &str) -> FareClass {
        FareClass(())
    }
}

/// State token to decode the fare class.
#[derive(Debug)]
pub struct FareClass(pub(super) ());

impl FareClass {
    /// Transition to another state by decoding the fare class.
    ///
    /// This is the fare basis code, not the compartment; it is taken as
    /// found. Returns the code, and a successor state token.
    pub fn advance(self, r: char) -> (char, Seat) {
        (r, Seat(()))
    }
}

/// State token to decode the seat assignment.
#[derive(Debug)]
pub struct Seat(pub(super) ());

impl Seat {
    /// The width of the seat field, in characters.
    pub const WIDTH: usize = 4;

    /// Transition to another state by decoding the seat assignment.
    ///
    /// Returns the seat, as found, and a successor state token.
    pub fn advance(self, r: &str) -> (&str, CheckInSequence) {
        (r, CheckInSequence(()))
    }
}

/// State token to decode the check-in sequence number.
#[derive(Debug)]
pub struct CheckInSequence(pub(super) ());

impl CheckInSequence {
    /// The width of the check-in sequence field, in characters.
    pub const WIDTH: usize = 5;

    /// Transition to another state by decoding the check-in sequence number.
    ///
    /// The sequence records the order of check-in (`00001` checked in
    /// first). Returns it, as found, and a successor state token.
    pub fn advance(self, r: &str) -> (&str, Status) {
        (r, Status(()))
    }
}

/// The check-in state of a passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PassengerStatus {
    /// Codes `0` and `2`.
    NotCheckedIn,
    /// Codes `1` and `3`.
    CheckedIn,
    /// Code `7`.
    Standby,
    /// Codes `4`, `5`, `6`, `8`, `9`, and `A`.
    Other,
    /// Any code outside the assigned table.
    Unknown,
}

impl fmt::Display for PassengerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotCheckedIn => "notCheckedIn",
            Self::CheckedIn => "checkedIn",
            Self::Standby => "standby",
            Self::Other => "other",
            Self::Unknown => "unknown",
        })
    }
}

/// State token to decode the passenger status.
#[derive(Debug)]
pub struct Status(pub(super) ());

impl Status {
    /// End the machine by decoding the passenger status code.
    ///
    /// Every character maps to a status; codes outside the assigned table
    /// yield [`PassengerStatus::Unknown`] rather than an error.
    pub fn advance(self, r: char) -> PassengerStatus {
        match r {
            '0' | '2' => PassengerStatus::NotCheckedIn,
            '1' | '3' => PassengerStatus::CheckedIn,
            '7' => PassengerStatus::Standby,
            '4' | '5' | '6' | '8' | '9' | 'A' => PassengerStatus::Other,
            _ => PassengerStatus::Unknown,
        }
    }
}
