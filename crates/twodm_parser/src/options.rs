//! Decoder configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dialect switches shared by all entity decoders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeOptions {
    /// Accept `0` as a node or element ID.
    pub allow_zero_index: bool,

    /// Accept floating point material values in element cards.
    pub allow_float_matid: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            allow_zero_index: false,
            allow_float_matid: true,
        }
    }
}

impl DecodeOptions {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for meshes numbered from zero.
    #[must_use]
    pub fn zero_indexed() -> Self {
        Self {
            allow_zero_index: true,
            ..Self::default()
        }
    }

    /// Configuration accepting only positive IDs and integer materials.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            allow_zero_index: false,
            allow_float_matid: false,
        }
    }

    /// Builder method to allow or reject zero IDs.
    #[must_use]
    pub fn with_zero_index(mut self, allow: bool) -> Self {
        self.allow_zero_index = allow;
        self
    }

    /// Builder method to allow or reject float materials.
    #[must_use]
    pub fn with_float_matid(mut self, allow: bool) -> Self {
        self.allow_float_matid = allow;
        self
    }
}
