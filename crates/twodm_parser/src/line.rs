//! Card dispatch for raw lines.
//!
//! ```text
//! "E3T 1 1 2 3 5"
//!        │
//!        ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["E3T", "1", "1", "2", "3", "5"]
//! └─────────────────┘
//!        │
//!        ▼
//! ┌─────────────────┐
//! │   CARD TABLE    │  → Card::Element(E3T), arity 3
//! └─────────────────┘
//!        │
//!        ▼
//! ┌─────────────────┐
//! │   DECODER       │  → Element { id: 1, nodes: [1, 2, 3], materials: [5] }
//! └─────────────────┘
//! ```

use tracing::debug;
use twodm_foundation::{Card, Element, Error, Node, NodeString, Result};

use crate::decode::{decode_element, decode_node, decode_node_string};
use crate::options::DecodeOptions;
use crate::tokenizer::tokenize;

/// One decoded entity.
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    /// An `ND` line.
    Node(Node),
    /// An element line.
    Element(Element),
    /// A terminated node string, possibly assembled from several lines.
    NodeString(NodeString),
}

/// Decodes a single line without node-string state.
///
/// Returns `Ok(None)` for blank lines, cards outside the decoded set, and
/// `NS` lines that do not terminate their node string.
///
/// # Errors
/// Propagates any error from the selected entity decoder.
pub fn decode_line(line: &str, options: &DecodeOptions) -> Result<Option<Record>> {
    let mut decoder = LineDecoder::new(*options);
    decoder.decode(line)
}

/// Streaming decoder that dispatches lines by card and assembles node
/// strings spanning several `NS` lines.
#[derive(Clone, Debug, Default)]
pub struct LineDecoder {
    options: DecodeOptions,
    pending: Option<Vec<u64>>,
}

impl LineDecoder {
    /// Creates a decoder with the given options.
    #[must_use]
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            options,
            pending: None,
        }
    }

    /// Returns the options this decoder was created with.
    #[must_use]
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Returns true while an unterminated node string is open.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Decodes the next line.
    ///
    /// Only `NS` lines feed the open node string. `ND` and element lines
    /// between them decode as usual and leave it untouched.
    ///
    /// # Errors
    /// Propagates decoder errors. A failed `NS` line discards the open node
    /// string; a failed `ND` or element line does not.
    pub fn decode(&mut self, line: &str) -> Result<Option<Record>> {
        let tokens = tokenize(line);
        let Some(&keyword) = tokens.first() else {
            return Ok(None);
        };
        let Some(card) = Card::from_keyword(keyword) else {
            debug!(card = keyword, "skipping unsupported card");
            return Ok(None);
        };

        let DecodeOptions {
            allow_zero_index,
            allow_float_matid,
        } = self.options;

        match card {
            Card::Node => decode_node(line, allow_zero_index).map(|node| Some(Record::Node(node))),
            Card::Element(_) => decode_element(line, allow_zero_index, allow_float_matid)
                .map(|element| Some(Record::Element(element))),
            Card::NodeString => {
                let accumulator = self.pending.take().unwrap_or_default();
                let result = decode_node_string(line, allow_zero_index, accumulator)?;
                match result.finish() {
                    Ok(node_string) => Ok(Some(Record::NodeString(node_string))),
                    Err(node_ids) => {
                        self.pending = Some(node_ids);
                        Ok(None)
                    }
                }
            }
        }
    }

    /// Checks that no node string is left open at end of input.
    ///
    /// # Errors
    /// Returns an unterminated node string error if one is pending.
    pub fn finish(self) -> Result<()> {
        match self.pending {
            Some(pending) => Err(Error::unterminated_node_string(pending.len())),
            None => Ok(()),
        }
    }
}
