use std::collections::HashMap;

use ordo::PropertyComparison;

// Nothing here can be ordered; the derive warns and dispatches nothing.
#[derive(PropertyComparison)]
struct Blob {
    bytes: HashMap<u8, u8>,
}

#[derive(PropertyComparison)]
union Bits {
    int: u32,
    float: f32,
}

fn main() {
    assert!(Blob::get_comparison("bytes").is_none());
    let _ = Blob { bytes: HashMap::new() }.bytes;
    assert!(Bits::get_comparison("int").is_none());
    let _ = Bits { int: 1 };
}
