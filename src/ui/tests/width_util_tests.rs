use crate::ui::ansi::paint_bg;
use crate::ui::width_util::WidthUtil;

#[test]
fn strip_ansi_removes_csi_sequences() {
    let painted = paint_bg((1, 2, 3), "12 3");
    assert_eq!(WidthUtil::strip_ansi(&painted), "12 3");
    assert_eq!(WidthUtil::strip_ansi("plain"), "plain");
}

#[test]
fn visible_width_ignores_escapes_and_counts_chars() {
    let util = WidthUtil;
    assert_eq!(util.visible_width(&paint_bg((0, 0, 0), "abc")), 3);
    assert_eq!(util.visible_width("été"), 3);
}

#[test]
fn pad_visible_pads_to_visible_width() {
    let util = WidthUtil;
    let painted = paint_bg((9, 9, 9), "ab");
    let padded = util.pad_visible(&painted, 4);
    assert_eq!(WidthUtil::strip_ansi(&padded), "ab  ");
    assert_eq!(util.pad_visible("abcdef", 3), "abcdef");
}

#[test]
fn terminal_width_is_positive() {
    assert!(WidthUtil.terminal_width() > 0);
}
