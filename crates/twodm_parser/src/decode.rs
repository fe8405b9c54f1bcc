//! Entity decoders for the `ND`, element, and `NS` cards.
//!
//! Each decoder tokenizes one line, checks the card and field count, then
//! converts the remaining fields. The first bad field aborts the call; no
//! partial record is ever returned.

use tracing::{trace, warn};
use twodm_foundation::{
    Card, Element, ElementCard, Error, IdField, Node, NodeStringDecode, Result,
};

use crate::numeric::{parse_float, parse_integer, parse_material};
use crate::tokenizer::tokenize;

/// Tokens in a complete node line: card, id, x, y, z.
const NODE_TOKENS: usize = 5;

/// Minimum tokens in any element line: card, id and two nodes.
const MIN_ELEMENT_TOKENS: usize = 4;

/// Minimum tokens in a node string line: card and one node.
const MIN_NODE_STRING_TOKENS: usize = 2;

/// Checks the positivity rule shared by all identifiers.
fn check_id(value: i64, field: IdField, allow_zero_index: bool) -> Result<u64> {
    if value > 0 || (value == 0 && allow_zero_index) {
        Ok(value.unsigned_abs())
    } else {
        Err(Error::invalid_id(field, value))
    }
}

/// Parses and validates the identifier at `index`.
fn parse_id(tokens: &[&str], index: usize, field: IdField, allow_zero_index: bool) -> Result<u64> {
    parse_integer(tokens[index])
        .and_then(|value| check_id(value, field, allow_zero_index))
        .map_err(|err| err.at_field(index))
}

fn parse_coordinate(tokens: &[&str], index: usize) -> Result<f64> {
    parse_float(tokens[index]).map_err(|err| err.at_field(index))
}

/// Number of data fields after the card, for error reporting.
fn data_fields(tokens: &[&str]) -> usize {
    tokens.len().saturating_sub(1)
}

/// Decodes an `ND` line into a [`Node`].
///
/// Fields after `z` are ignored; a warning is logged when any are present.
///
/// # Errors
/// - Card error if the line has fewer than four data fields or the card is not `ND`
/// - Parse error if the ID or a coordinate is not a valid number
/// - Format error if the ID is negative, or zero without `allow_zero_index`
pub fn decode_node(line: &str, allow_zero_index: bool) -> Result<Node> {
    let tokens = tokenize(line);
    if tokens.len() < NODE_TOKENS {
        return Err(Error::missing_fields(
            Card::NODE_KEYWORD,
            NODE_TOKENS - 1,
            data_fields(&tokens),
        ));
    }
    if tokens[0] != Card::NODE_KEYWORD {
        return Err(Error::unexpected_card("node", tokens[0]).at_field(0));
    }

    let id = parse_id(&tokens, 1, IdField::Node, allow_zero_index)?;
    let x = parse_coordinate(&tokens, 2)?;
    let y = parse_coordinate(&tokens, 3)?;
    let z = parse_coordinate(&tokens, 4)?;

    if tokens.len() > NODE_TOKENS {
        warn!(
            node = id,
            ignored = tokens.len() - NODE_TOKENS,
            "ignoring unexpected node fields"
        );
    }

    Ok(Node::new(id, x, y, z))
}

/// Decodes an element line (`E2L`, `E3L`, `E3T`, `E4Q`, `E6T`, `E8Q`, `E9Q`).
///
/// Node IDs keep their file order, which encodes the element winding.
/// Every field after the nodes is a material value: integers are tried
/// first, then floats if `allow_float_matid` is set.
///
/// # Errors
/// - Card error if the card is not an element card or the line is too short for it
/// - Parse error for malformed IDs or materials
/// - Format error for IDs violating the positivity rule
pub fn decode_element(
    line: &str,
    allow_zero_index: bool,
    allow_float_matid: bool,
) -> Result<Element> {
    let tokens = tokenize(line);
    if tokens.len() < MIN_ELEMENT_TOKENS {
        return Err(Error::missing_fields(
            tokens.first().copied().unwrap_or_default(),
            MIN_ELEMENT_TOKENS - 1,
            data_fields(&tokens),
        ));
    }
    let card = ElementCard::from_keyword(tokens[0])
        .ok_or_else(|| Error::unexpected_card("element", tokens[0]).at_field(0))?;

    let arity = card.node_arity();
    let first_material = arity + 2;
    if tokens.len() < first_material {
        return Err(Error::missing_fields(
            card.keyword(),
            arity + 1,
            data_fields(&tokens),
        ));
    }

    let id = parse_id(&tokens, 1, IdField::Element, allow_zero_index)?;
    let nodes = (2..first_material)
        .map(|index| parse_id(&tokens, index, IdField::Node, allow_zero_index))
        .collect::<Result<Vec<_>>>()?;
    let materials = tokens[first_material..]
        .iter()
        .enumerate()
        .map(|(offset, token)| {
            parse_material(token, allow_float_matid)
                .map_err(|err| err.at_field(first_material + offset))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Element {
        card,
        id,
        nodes,
        materials,
    })
}

/// Decodes one `NS` line, appending its node IDs to `accumulator`.
///
/// A negative ID terminates the node string: its absolute value is the last
/// node and the token after it, if any, is the name. Without a terminator the
/// result has `done == false` and the caller passes `node_ids` back in with
/// the next `NS` line.
///
/// The accumulator is consumed; callers that want to recover from an error
/// must keep their own copy.
///
/// # Errors
/// - Card error if the line has no data fields or the card is not `NS`
/// - Parse error for a malformed node ID
/// - Format error for a zero ID without `allow_zero_index`
pub fn decode_node_string(
    line: &str,
    allow_zero_index: bool,
    accumulator: Vec<u64>,
) -> Result<NodeStringDecode> {
    let tokens = tokenize(line);
    if tokens.len() < MIN_NODE_STRING_TOKENS {
        return Err(Error::missing_fields(
            Card::NODE_STRING_KEYWORD,
            MIN_NODE_STRING_TOKENS - 1,
            data_fields(&tokens),
        ));
    }
    if tokens[0] != Card::NODE_STRING_KEYWORD {
        return Err(Error::unexpected_card("node string", tokens[0]).at_field(0));
    }

    let mut node_ids = accumulator;
    for (index, token) in tokens.iter().enumerate().skip(1) {
        let value = parse_integer(token).map_err(|err| err.at_field(index))?;
        if value == 0 && !allow_zero_index {
            return Err(Error::invalid_id(IdField::Node, value).at_field(index));
        }
        node_ids.push(value.unsigned_abs());
        if value < 0 {
            let name = tokens
                .get(index + 1)
                .map(|name| (*name).to_string())
                .unwrap_or_default();
            trace!(nodes = node_ids.len(), name = %name, "node string terminated");
            return Ok(NodeStringDecode {
                node_ids,
                done: true,
                name,
            });
        }
    }

    Ok(NodeStringDecode {
        node_ids,
        done: false,
        name: String::new(),
    })
}
