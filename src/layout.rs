//! The fixed-width field layout of the mandatory items.
//!
//! This module expresses the BCBP mandatory section as a finite-state
//! machine, for applications that need field-by-field control over a decode.
//! See [`crate::decode`] for an implementation covering the common case.
//!
//! # Architecture
//!
//! All states are represented by a zero-size, non-copy token, one per field
//! of the layout. Once a field's width of characters is ready, transition to
//! the next field by calling the token's `advance` method. This returns the
//! extracted value, where the field carries one, along with the successor
//! state token.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can
//! be constructed. The layout is strictly linear, so the type system
//! enforces that fields are consumed in order and exactly once.
//!
//! Field widths are not represented in the type system: single-character
//! fields advance on a `char`, and each wider state declares its width as an
//! associated constant that callers must honor. [`crate::cursor::Cursor`]
//! produces correctly sized fields from a payload.
//!
//! # Coverage
//!
//! The machine covers the unique mandatory section and one pass over the
//! repeated per-leg section, ending at the passenger status code. Payloads
//! declaring several legs have only their first decoded, and the conditional
//! items of format version 2 and later are not represented; both extensions
//! would change the successor of [`repeated::Status`].

pub mod repeated;
pub mod unique;

/// Entrypoint to the finite-state machine.
pub type Decoder = unique::FormatCode;

/// The combined width of the mandatory items, in characters.
///
/// Payloads shorter than this cannot hold a complete single-leg boarding
/// pass, and are rejected before decoding begins.
pub const MINIMUM_LENGTH: usize = unique::LENGTH + repeated::LENGTH;
