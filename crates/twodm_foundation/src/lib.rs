//! Core types and errors for 2DM mesh decoding.
//!
//! This crate provides:
//! - [`Card`] / [`ElementCard`] - The closed card table and element node arities
//! - [`Node`], [`Element`], [`NodeString`] - Decoded geometry records
//! - [`Material`] - Integer-or-float element material values
//! - [`Error`] - Error kinds grouped into card, format, and parse errors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod card;
pub mod entity;
pub mod error;
pub mod value;

pub use card::{Card, ElementCard, UnknownCard, is_element_card, node_arity};
pub use entity::{Element, Node, NodeString, NodeStringDecode};
pub use error::{Error, ErrorCategory, ErrorContext, ErrorKind, IdField, NumberKind, Result};
pub use value::Material;
