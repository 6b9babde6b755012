//! Allocation-free building blocks for decoding information elements.
//!
//! This module is intended for applications that need structured values
//! rather than rendered text. See [`crate::avec`] for the rendering layer
//! built on top of it.
//!
//! # Architecture
//!
//! Everything here borrows from the caller's buffer and is discarded at the
//! end of a decode call. There is no shared state beyond `static` tables.
//!
//! - [`element::Elements`] walks a flat buffer of `(id, length, body)`
//! records and stops at the first element whose body is not fully present.
//!
//! - [`tlv::Records`] does the same for the sub-records nested inside vendor
//! elements, generic over the header shape ([`tlv::Dialect`]).
//!
//! - [`bits`] extracts right-justified values from masked bytes, including
//! fields that straddle a byte boundary.
//!
//! - [`he`] holds the finite-state machine for the HE Capabilities element.
//! As in the rest of the crate, every state is a token that can only be
//! advanced with the exact number of bytes it needs; callers are
//! responsible for checking that those bytes are present.

pub mod bits;
pub mod element;
pub mod he;
pub mod suite;
pub mod tlv;
