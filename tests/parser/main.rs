//! Integration tests for Layer 1: Parser
//!
//! Tests for tokenizing, numeric literals, and the entity decoders.

mod element_tests;
mod line_decoder_tests;
mod tokenizer_tests;
