use super::*;

#[test]
fn anchor_id_strips_hash() {
    assert_eq!(anchor_id("#creative-lab"), "creative-lab");
    assert_eq!(anchor_id("pricing"), "pricing");
}
