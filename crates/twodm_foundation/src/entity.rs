//! Geometry records decoded from 2DM lines.
//!
//! All records are plain owned values. Identifiers are stored unsigned: the
//! decoders reject negative IDs before a record is built.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::ElementCard;
use crate::value::Material;

/// A numbered point in space (`ND` card).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// Unique node ID. Positive, or zero in zero-indexed meshes.
    pub id: u64,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Node {
    /// Creates a new node.
    #[must_use]
    pub const fn new(id: u64, x: f64, y: f64, z: f64) -> Self {
        Self { id, x, y, z }
    }

    /// The position of the node as `[x, y, z]`.
    #[must_use]
    pub const fn pos(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// A mesh element referencing a fixed number of nodes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    /// The card the element was declared with.
    pub card: ElementCard,
    /// Unique element ID.
    pub id: u64,
    /// Node IDs in connectivity order. Length equals `card.node_arity()`.
    pub nodes: Vec<u64>,
    /// Material values following the node IDs. May be empty.
    pub materials: Vec<Material>,
}

impl Element {
    /// Number of nodes the element references.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of material values attached to the element.
    #[must_use]
    pub fn num_materials(&self) -> usize {
        self.materials.len()
    }
}

/// A completed node string (`NS` card).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeString {
    /// Node IDs along the polyline, in file order.
    pub nodes: Vec<u64>,
    /// Optional name following the terminating node ID.
    pub name: Option<String>,
}

impl NodeString {
    /// Creates a node string from its nodes and a possibly empty name.
    #[must_use]
    pub fn new(nodes: Vec<u64>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            nodes,
            name: (!name.is_empty()).then_some(name),
        }
    }

    /// Number of nodes in the polyline.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
}

/// The outcome of decoding one `NS` line.
///
/// `node_ids` is the accumulator passed in, extended with this line's IDs.
/// While `done` is false, `name` is always empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeStringDecode {
    /// All node IDs collected so far.
    pub node_ids: Vec<u64>,
    /// Whether the terminating (negative) node ID was found.
    pub done: bool,
    /// The token following the terminator, if any.
    pub name: String,
}

impl NodeStringDecode {
    /// Converts a finished decode into a [`NodeString`].
    ///
    /// # Errors
    /// Returns the accumulated node IDs if `done` is false.
    pub fn finish(self) -> Result<NodeString, Vec<u64>> {
        if self.done {
            Ok(NodeString::new(self.node_ids, self.name))
        } else {
            Err(self.node_ids)
        }
    }
}
