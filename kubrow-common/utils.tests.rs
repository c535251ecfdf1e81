use rstest::rstest;

use super::*;

#[test]
fn or_not_available_test() {
    assert_eq!("n/a", or_not_available(""));
    assert_eq!("web", or_not_available("web"));
}

#[rstest]
#[case("", "Hello", 0)]
#[case("Hel", "Hello", 3)]
#[case("Hello", "Hello", 5)]
#[case("Hello", "Hello", 20)]
#[case("zaż", "zażółć", 3)]
fn truncate_test(#[case] expected: &str, #[case] text: &str, #[case] max_chars: usize) {
    assert_eq!(expected, truncate(text, max_chars));
}

#[rstest]
#[case("     ", "", 5)]
#[case("web  ", "web", 5)]
#[case("web", "web", 3)]
#[case("we", "web", 2)]
#[case("żółw ", "żółw", 5)]
fn add_padding_test(#[case] expected: &str, #[case] text: &str, #[case] width: usize) {
    assert_eq!(expected, add_padding(text, width));
}

#[rstest]
#[case("  web", "web", 5)]
#[case("web", "web", 3)]
#[case("we", "web", 2)]
#[case("   3d", "3d", 5)]
fn add_padding_left_test(#[case] expected: &str, #[case] text: &str, #[case] width: usize) {
    assert_eq!(expected, add_padding_left(text, width));
}
