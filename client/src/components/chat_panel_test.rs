use super::*;

#[test]
fn status_line_reflects_typing_indicator() {
    assert_eq!(status_line(true), "typing...");
    assert_eq!(status_line(false), "Online • Ready to help");
}
