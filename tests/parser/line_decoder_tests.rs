//! Integration tests for streaming line decoding

use std::thread;

use twodm_foundation::{ElementCard, ErrorKind, Node, NodeString};
use twodm_parser::{DecodeOptions, LineDecoder, Record};

const MESH: &str = "MESH2D
MESHNAME \"channel\"
ND 1 0.0 0.0 1.0
ND 2 1.0 0.0 1.5
ND 3 1.0 1.0 2.0
ND 4 0.0 1.0 0.5
E4Q 1 1 2 3 4 1
E3T 2 1 2 3 2

NS 1 2
NS 3 -4 perimeter
";

fn decode_mesh(text: &str, options: DecodeOptions) -> twodm_foundation::Result<Vec<Record>> {
    let mut decoder = LineDecoder::new(options);
    let mut records = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(record) = decoder.decode(line).map_err(|e| e.at_line(index + 1))? {
            records.push(record);
        }
    }
    decoder.finish()?;
    Ok(records)
}

#[test]
fn decodes_small_mesh() {
    let records = decode_mesh(MESH, DecodeOptions::default()).unwrap();
    assert_eq!(records.len(), 7);
    assert_eq!(records[0], Record::Node(Node::new(1, 0.0, 0.0, 1.0)));
    assert!(matches!(&records[4], Record::Element(e) if e.card == ElementCard::E4Q));
    assert_eq!(
        records[6],
        Record::NodeString(NodeString::new(vec![1, 2, 3, 4], "perimeter"))
    );
}

#[test]
fn errors_carry_line_numbers() {
    let text = "MESH2D\nND 1 0 0 0\nND 2 0 zero 0\n";
    let err = decode_mesh(text, DecodeOptions::default()).unwrap_err();
    assert_eq!(err.context.and_then(|ctx| ctx.line), Some(3));
}

#[test]
fn unterminated_at_end_of_input() {
    let err = decode_mesh("NS 1 2 3\n", DecodeOptions::default()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnterminatedNodeString { pending: 3 });
}

#[test]
fn node_string_spans_other_records() {
    let text = "NS 1 2\nND 5 0.0 0.0 0.0\nE2L 1 1 5 1\nNS 3 -4 bank\n";
    let records = decode_mesh(text, DecodeOptions::default()).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0], Record::Node(Node::new(5, 0.0, 0.0, 0.0)));
    assert_eq!(
        records[2],
        Record::NodeString(NodeString::new(vec![1, 2, 3, 4], "bank"))
    );
}

#[test]
fn decoders_are_independent_across_threads() {
    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| decode_mesh(MESH, DecodeOptions::zero_indexed())))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for result in results {
        assert_eq!(result.unwrap().len(), 7);
    }
}
