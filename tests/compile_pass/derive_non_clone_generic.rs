//! A generic struct needs no `Clone` bound on its parameters to derive lenses.

use lenticular::Lenses;
use lenticular::optics::{over, set};

struct Token;

#[derive(Lenses)]
struct Slot<T> {
    count: usize,
    payload: T,
}

fn main() {
    let slot = Slot { count: 0, payload: Token };
    let slot = over(&Slot::<Token>::count_lens(), |count: usize| count + 1, slot);
    let slot = set(&Slot::<Token>::count_lens(), slot.count * 10, slot);
    assert_eq!(slot.count, 10);
    let _payload: Token = slot.payload;
}
