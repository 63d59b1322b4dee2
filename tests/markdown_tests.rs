//! # Markdown Conversion Tests
//!
//! Markdown documents converted to directive markup, and the markup then
//! printed end to end.

use escpwp::markdown::{PREAMBLE, convert};
use escpwp::{PrinterConfig, render};
use pretty_assertions::assert_eq;

const STATION_ELEVEN: &str = "I remember damage. Then escape. Then adrift in a stranger's galaxy for a long time. But I\u{2019}m safe now. I found it again. My home. My memories are the same as yours, they mean nothing. I feel this again for the first time. I have a job to do. I have found you nine times before, maybe ten. And I\u{2019}ll find you again until the last time. I always do. I find you because I know you, and I know you because we are the same. You will know your endpoint when you reach it. In the early days before their home was broken, they hardly notice me. It was better to not be noticed. It is better to not be noticed. I do know you from somewhere, if you notice, then you know, then so then you\u{2019}ll be loved. To be loved is a calamity for someone with your job. You have work to do. Work, love makes work impossible. Love will try to see the words before it\u{2019}s finished. What is your job, love will ask it, and you will ask, what is my job? And there\u{2019}s a you not to survive because survival is insufficient. No, the voices are confusing, and soon all I hear is, \"I don\u{2019}t wanna live the wrong life and then die.\" I remember damage, then escape. I\u{2019}m at my best when I\u{2019}m escaping. I have a job to do. I still have a job to do. I have found you nine times before, maybe ten, and I\u{2019}ll find you again. I always do. There is no rescue mission. We are the same. We are safe.";

#[test]
fn test_sample1() {
    let md = format!(
        "# Station Eleven\n\n\
         **HBO** \u{2014} _based on the novel by Emily St. John Mandel_\n\n\
         {STATION_ELEVEN}"
    );
    let expected = format!(
        "[pragma:escp-wp][soft-wrap:on]\n\
         [box:on:thickness:2]Station Eleven[box:off]\n\n\
         [bold:on]HBO[bold:off] \u{2014} [italic:on]based on the novel by Emily St. John Mandel[italic:off]\n\n\
         {STATION_ELEVEN}"
    );
    assert_eq!(convert(&md), expected);
}

#[test]
fn test_sample2() {
    let md = "# Hello there\n\nVery short with _italic text_ and **even bold**.";
    let expected = "[pragma:escp-wp][soft-wrap:on]\n\
                    [box:on:thickness:2]Hello there[box:off]\n\n\
                    Very short with [italic:on]italic text[italic:off] and [bold:on]even bold[bold:off].";
    assert_eq!(convert(md), expected);
}

#[test]
fn test_output_starts_with_preamble_and_has_no_trailing_newline() {
    let markup = convert("para one\n\npara two\n");
    assert!(markup.starts_with(PREAMBLE));
    assert!(!markup.ends_with('\n'));
}

#[test]
fn test_converted_sample_prints() {
    let markup = convert("# Hello there\n\nVery short with _italic text_ and **even bold**.");
    let bytes = render(&markup, &PrinterConfig::default()).unwrap();

    let mut expected = vec![0xC9];
    expected.extend([0xCD; 78]);
    expected.extend([0xBB, b'\r', b'\n', 0xBA]);
    expected.extend([b' '; 33]);
    expected.extend(b"Hello there");
    expected.extend([b' '; 34]);
    expected.extend([0xBA, b'\r', b'\n', 0xC8]);
    expected.extend([0xCD; 78]);
    // the blank line after the heading
    expected.extend([0xBC, b'\r', b'\n', b'\r', b'\n']);
    expected.extend(
        b"Very short with \x1b4italic text\x1b5 and \x1bEeven bold\x1bF.\r\n".as_slice(),
    );
    assert_eq!(bytes, expected);
}

#[test]
fn test_converted_sample_with_typographic_punctuation_prints() {
    let markup = convert(&format!("**HBO** \u{2014} quote\n\n{STATION_ELEVEN}"));
    let bytes = render(&markup, &PrinterConfig::default()).unwrap();
    assert!(bytes.starts_with(b"\x1bEHBO\x1bF - quote\r\n"));
    assert!(bytes.ends_with(b"safe.\r\n"));
}

#[test]
fn test_styled_title_and_bracketed_code_print() {
    let markup = convert("# Hello **World**\n\nUse `arr[0]` here.");
    let bytes = render(&markup, &PrinterConfig::default()).unwrap();

    let mut expected = vec![0xC9];
    expected.extend([0xCD; 78]);
    expected.extend([0xBB, b'\r', b'\n', 0xBA]);
    expected.extend([b' '; 33]);
    expected.extend(b"Hello World");
    expected.extend([b' '; 34]);
    expected.extend([0xBA, b'\r', b'\n', 0xC8]);
    expected.extend([0xCD; 78]);
    expected.extend([0xBC, b'\r', b'\n', b'\r', b'\n']);
    expected.extend(b"Use arr(0) here.\r\n");
    assert_eq!(bytes, expected);
}
