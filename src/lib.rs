#![no_std]

//! A defensive decoder for IATA's Bar Coded Boarding Pass (BCBP) format.
//!
//! Jetway consumes the payload string recovered from a scanned boarding pass
//! barcode and extracts the mandatory items into a structured record. Scans
//! are noisy: truncated, corrupted, and entirely unrelated strings are
//! routine inputs, and each is reported as a structured error rather than a
//! panic. On success, the record borrows its fields from the payload; the
//! decoder allocates nothing.
//!
//! Most users should begin with [`decode::decode`], which runs a complete
//! decode over a payload. The underlying fixed-width field machine is
//! exposed in the [`layout`] module for applications needing field-by-field
//! control.
//!
//! Only the first flight leg of a payload is decoded, and the conditional
//! items of format version 2 and later are left unread. See the [`layout`]
//! module documentation for the exact coverage.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable allocating conveniences (default).
//! - `serde`: implement `Serialize` for the output record.

pub mod cursor;
pub mod decode;
pub mod layout;
