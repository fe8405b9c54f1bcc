//! twodm - Decoder for the 2DM mesh format
//!
//! This crate re-exports both layers of the decoder for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: twodm_parser     - Tokenizer, numeric grammar, entity decoders, line dispatch
//! Layer 0: twodm_foundation - Card table, records (Node, Element, NodeString), Error
//! ```

pub use twodm_foundation as foundation;
pub use twodm_parser as parser;

pub use twodm_foundation::{
    Card, Element, ElementCard, Error, ErrorCategory, ErrorKind, Material, Node, NodeString,
    NodeStringDecode, Result,
};
pub use twodm_parser::{
    DecodeOptions, LineDecoder, Record, decode_element, decode_line, decode_node,
    decode_node_string, is_element_card, node_arity, parse_float, parse_integer, tokenize,
};
