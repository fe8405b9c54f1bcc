//! Line decoding for the 2DM mesh format.
//!
//! This crate turns single 2DM lines into the records defined in
//! `twodm_foundation`.
//!
//! # Architecture
//!
//! ```text
//! raw line ──▶ TOKENIZER ──▶ CARD TABLE ──▶ ENTITY DECODER ──▶ Node / Element / NodeString
//!                                               │
//!                                        NUMERIC PARSER
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Comment stripping and field splitting
//! - [`numeric`] - Integer and float literal grammar
//! - [`decode`] - `ND`, element, and `NS` decoders
//! - [`options`] - Dialect switches
//! - [`line`] - Card dispatch and multi-line node string assembly
//!
//! # Example
//!
//! ```
//! use twodm_parser::{decode_element, decode_node_string};
//!
//! let element = decode_element("E3T 1 1 2 3 5 2.5", false, true).unwrap();
//! assert_eq!(element.nodes, vec![1, 2, 3]);
//!
//! let first = decode_node_string("NS 1 2 3", false, Vec::new()).unwrap();
//! assert!(!first.done);
//! let second = decode_node_string("NS 4 -5 bank", false, first.node_ids).unwrap();
//! assert_eq!(second.node_ids, vec![1, 2, 3, 4, 5]);
//! assert_eq!(second.name, "bank");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod decode;
pub mod line;
pub mod numeric;
pub mod options;
pub mod tokenizer;

// Re-export main types for convenience
pub use decode::{decode_element, decode_node, decode_node_string};
pub use line::{LineDecoder, Record, decode_line};
pub use numeric::{parse_float, parse_integer, parse_material};
pub use options::DecodeOptions;
pub use tokenizer::{strip_comment, tokenize};
pub use twodm_foundation::{is_element_card, node_arity};
