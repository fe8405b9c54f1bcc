//! Integration tests for element decoding

use twodm_foundation::{ElementCard, ErrorCategory, ErrorKind, Material};
use twodm_parser::decode_element;

#[test]
fn decodes_triangle() {
    let element = decode_element("E3T 1 1 2 3 4", false, true).unwrap();
    assert_eq!(element.card, ElementCard::E3T);
    assert_eq!(element.id, 1);
    assert_eq!(element.nodes, vec![1, 2, 3]);
    assert_eq!(element.materials, vec![Material::Int(4)]);
}

#[test]
fn decodes_every_element_card() {
    for card in ElementCard::ALL {
        let arity = card.node_arity();
        let nodes: Vec<String> = (1..=arity).map(|n| n.to_string()).collect();
        let line = format!("{} 10 {}", card.keyword(), nodes.join(" "));
        let element = decode_element(&line, false, true).unwrap();
        assert_eq!(element.card, card);
        assert_eq!(element.nodes.len(), arity);
        assert!(element.materials.is_empty());
    }
}

#[test]
fn mixed_materials() {
    let element = decode_element("E2L 3 1 2 1 2.5 -3", false, true).unwrap();
    assert_eq!(
        element.materials,
        vec![Material::Int(1), Material::Float(2.5), Material::Int(-3)]
    );
}

#[test]
fn float_materials_can_be_rejected() {
    let err = decode_element("E2L 3 1 2 2.5", false, false).unwrap_err();
    assert!(err.is_parse_error());
    assert!(decode_element("E2L 3 1 2 2", false, false).is_ok());
}

#[test]
fn not_an_element() {
    let err = decode_element("ND 1 0 0 0", false, true).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Card);
}

#[test]
fn too_few_nodes() {
    let err = decode_element("E4Q 1 1 2 3", false, true).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::MissingFields {
            required: 5,
            actual: 4,
            ..
        }
    ));
}

#[test]
fn zero_node_id() {
    assert!(decode_element("E2L 1 0 2", false, true).unwrap_err().is_format_error());
    assert_eq!(decode_element("E2L 1 0 2", true, true).unwrap().nodes, vec![0, 2]);
}

#[test]
fn trailing_comment() {
    let element = decode_element("E3T 1 1 2 3 # no material", false, true).unwrap();
    assert!(element.materials.is_empty());
}

#[test]
fn wide_integer_material_falls_back_to_float() {
    let element = decode_element("E2L 1 1 2 99999999999999999999", false, true).unwrap();
    assert_eq!(element.materials, vec![Material::Float(1e20)]);
    assert!(decode_element("E2L 1 1 2 99999999999999999999", false, false).is_err());
}
