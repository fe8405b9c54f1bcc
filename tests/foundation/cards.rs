//! Integration tests for the card table
//!
//! Tests keyword lookup, element detection, and node arities.

use twodm_foundation::{Card, ElementCard, is_element_card, node_arity};

#[test]
fn element_keywords() {
    let keywords: Vec<_> = ElementCard::ALL.iter().map(|c| c.keyword()).collect();
    assert_eq!(keywords, vec!["E2L", "E3L", "E3T", "E4Q", "E6T", "E8Q", "E9Q"]);
    assert!(keywords.iter().all(|k| is_element_card(k)));
}

#[test]
fn node_and_node_string_are_not_elements() {
    assert!(!is_element_card("ND"));
    assert!(!is_element_card("NS"));
    assert!(!Card::Node.is_element());
    assert!(!Card::NodeString.is_element());
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(Card::from_keyword("nd"), None);
    assert!(!is_element_card("e4q"));
}

#[test]
fn arities() {
    assert_eq!(node_arity(ElementCard::E2L), 2);
    assert_eq!(node_arity(ElementCard::E3L), 3);
    assert_eq!(node_arity(ElementCard::E3T), 3);
    assert_eq!(node_arity(ElementCard::E4Q), 4);
    assert_eq!(node_arity(ElementCard::E6T), 6);
    assert_eq!(node_arity(ElementCard::E8Q), 8);
    assert_eq!(node_arity(ElementCard::E9Q), 9);
}

#[test]
fn other_2dm_cards_are_unrecognized() {
    for keyword in ["MESH2D", "MESHNAME", "GM", "NUM_MATERIALS_PER_ELEM", "BEGPARAMDEF"] {
        assert_eq!(Card::from_keyword(keyword), None, "{keyword}");
    }
}
