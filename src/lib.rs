#![no_std]

//! A defensive decoder and pretty-printer for IEEE 802.11 information
//! elements.
//!
//! Elemental walks the information element (IE) blobs found in beacons, probe
//! responses and scan results, dispatches each element to a decoder for its
//! tag (or vendor and extension sub-type), and renders the result as
//! indented, line-oriented text. Malformed input never panics or reads out of
//! bounds; it degrades to a diagnostic line.
//!
//! Most users should begin with [`avec::render`] or, for whole scan results,
//! [`avec::bss::render`]. Applications wanting structured values rather than
//! text should look at the iterators and parsers in the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based rendering (default).

pub mod avec;
pub mod sans;
