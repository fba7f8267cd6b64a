//! A field that is not `Clone` only disables its own lens.

use lenticular::Lenses;
use lenticular::optics::{get, set};
use std::sync::Mutex;

#[derive(Debug, Lenses)]
struct Handle {
    id: u32,
    file: Mutex<u8>,
}

fn main() {
    let handle = Handle { id: 1, file: Mutex::new(0) };
    let handle = set(&Handle::id_lens(), 2, handle);
    assert_eq!(get(&Handle::id_lens(), handle), 2);
}
