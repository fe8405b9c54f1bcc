//! Integration tests for Material values
//!
//! Tests construction, accessors, equality, hashing, and display.

use std::collections::HashSet;

use twodm_foundation::Material;

#[test]
fn material_int() {
    let m = Material::Int(3);
    assert!(m.is_int());
    assert_eq!(m.as_int(), Some(3));
    assert_eq!(m.to_f64(), 3.0);
}

#[test]
fn material_float() {
    let m = Material::Float(-1.25);
    assert_eq!(m.as_float(), Some(-1.25));
    assert_eq!(m.to_f64(), -1.25);
}

#[test]
fn material_from() {
    assert_eq!(Material::from(7i64), Material::Int(7));
    assert_eq!(Material::from(7i32), Material::Int(7));
    assert_eq!(Material::from(0.5), Material::Float(0.5));
}

#[test]
fn material_hash_distinguishes_variants() {
    let set: HashSet<Material> = [
        Material::Int(1),
        Material::Float(1.0),
        Material::Int(1),
        Material::Float(f64::NAN),
        Material::Float(f64::NAN),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn material_display() {
    assert_eq!(Material::Int(42).to_string(), "42");
    assert_eq!(Material::Float(1.5).to_string(), "1.5");
}
