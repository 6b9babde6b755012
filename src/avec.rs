//! Convenience interfaces rendering elements as text.
//!
//! The functions in this module walk element buffers with the iterators of
//! [`sans`](crate::sans), dispatch each element to a decoder for its tag, and
//! write indented, line-oriented text into any [`core::fmt::Write`]. Every
//! rendered element begins with a tab and its registered display name.
//!
//! Rendering is configured per call with [`Options`]: whether unknown elements
//! are dumped as hex rather than skipped, and the [`Context`] selecting which
//! decoders apply.

use bitflags::bitflags;

pub mod basic;
pub mod bss;
pub mod display;
pub mod he;
pub mod ht;
#[cfg(feature = "std")]
pub mod reader;
pub mod registry;
pub mod security;
pub mod slice;
pub mod vendor;

#[cfg(feature = "std")]
pub use reader::render as render_reader;
pub use slice::render;

bitflags! {
    /// A set of rendering contexts, describing where a decoder applies.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Contexts: u8 {
        /// Scan results.
        const SCAN = 1 << 0;
        /// Link status of an associated station.
        const LINK = 1 << 1;
        /// Link status of a multi-link device.
        const LINK_MLO_MLD = 1 << 2;
    }
}

/// The context an element buffer is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Context {
    #[default]
    Scan,
    Link,
    LinkMloMld,
}

impl Context {
    /// The flag standing for this context in a [`Contexts`] set.
    pub const fn flag(self) -> Contexts {
        match self {
            Self::Scan => Contexts::SCAN,
            Self::Link => Contexts::LINK,
            Self::LinkMloMld => Contexts::LINK_MLO_MLD,
        }
    }
}

/// Options for a single rendering call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Dump elements without an applicable decoder as hex, instead of skipping
    /// them.
    pub unknown: bool,
    pub context: Context,
}
