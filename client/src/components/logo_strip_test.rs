use super::*;

#[test]
fn monogram_is_first_letter() {
    assert_eq!(monogram("TikTok"), "T");
    assert_eq!(monogram(""), "");
}
