// crates/shared-kernel/tests/counts_eq.rs
use tally_shared_kernel::{FlipCount, LineCount};

#[test]
fn eq_with_usize_both_sides() {
    let count = LineCount::from(7);
    assert!(count == 7usize);
    assert!(7usize == count);
}

#[test]
fn ordering_follows_inner_value() {
    assert!(FlipCount::from(3) < FlipCount::from(4));
    assert_eq!(FlipCount::from(9).max(FlipCount::from(2)), 9usize);
}
