//! The 2DM card table.
//!
//! Every 2DM line starts with a keyword ("card") selecting the record type.
//! The card set this crate decodes is closed, so it is modelled as an enum
//! and resolved once per line.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A card keyword recognized by the entity decoders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Card {
    /// `ND`: a node definition.
    Node,
    /// `NS`: a node string (possibly spanning several lines).
    NodeString,
    /// One of the element cards.
    Element(ElementCard),
}

impl Card {
    /// Keyword of the node card.
    pub const NODE_KEYWORD: &'static str = "ND";
    /// Keyword of the node string card.
    pub const NODE_STRING_KEYWORD: &'static str = "NS";

    /// Looks up a keyword. Returns `None` for anything outside the card set,
    /// including valid 2DM cards this crate does not decode (`MESH2D`, `GM`, ...).
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            Self::NODE_KEYWORD => Some(Self::Node),
            Self::NODE_STRING_KEYWORD => Some(Self::NodeString),
            _ => ElementCard::from_keyword(keyword).map(Self::Element),
        }
    }

    /// Returns the keyword as written in a 2DM file.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Node => Self::NODE_KEYWORD,
            Self::NodeString => Self::NODE_STRING_KEYWORD,
            Self::Element(card) => card.keyword(),
        }
    }

    /// Returns true if this is one of the seven element cards.
    #[must_use]
    pub const fn is_element(self) -> bool {
        matches!(self, Self::Element(_))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Error returned when parsing an unknown card keyword.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown card \"{0}\"")]
pub struct UnknownCard(pub String);

impl FromStr for Card {
    type Err = UnknownCard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| UnknownCard(s.to_string()))
    }
}

/// An element card. The variant fixes how many nodes the element references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementCard {
    /// Two-node linear element.
    E2L,
    /// Three-node (quadratic) linear element.
    E3L,
    /// Three-node triangle.
    E3T,
    /// Four-node quadrilateral.
    E4Q,
    /// Six-node (quadratic) triangle.
    E6T,
    /// Eight-node (quadratic) quadrilateral.
    E8Q,
    /// Nine-node (quadratic) quadrilateral.
    E9Q,
}

impl ElementCard {
    /// All element cards, in ascending node arity.
    pub const ALL: [Self; 7] = [
        Self::E2L,
        Self::E3L,
        Self::E3T,
        Self::E4Q,
        Self::E6T,
        Self::E8Q,
        Self::E9Q,
    ];

    /// Looks up an element keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|card| card.keyword() == keyword)
    }

    /// Returns the keyword as written in a 2DM file.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::E2L => "E2L",
            Self::E3L => "E3L",
            Self::E3T => "E3T",
            Self::E4Q => "E4Q",
            Self::E6T => "E6T",
            Self::E8Q => "E8Q",
            Self::E9Q => "E9Q",
        }
    }

    /// Number of node IDs an element of this card carries.
    #[must_use]
    pub const fn node_arity(self) -> usize {
        match self {
            Self::E2L => 2,
            Self::E3L | Self::E3T => 3,
            Self::E4Q => 4,
            Self::E6T => 6,
            Self::E8Q => 8,
            Self::E9Q => 9,
        }
    }
}

impl fmt::Display for ElementCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for ElementCard {
    type Err = UnknownCard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| UnknownCard(s.to_string()))
    }
}

/// Returns true if `card` is one of the seven element keywords.
#[must_use]
pub fn is_element_card(card: &str) -> bool {
    ElementCard::from_keyword(card).is_some()
}

/// Number of node IDs carried by the given element card.
#[must_use]
pub const fn node_arity(card: ElementCard) -> usize {
    card.node_arity()
}
