//! Tests for text decoding by encoding name.

use crate::error::ProviderError;
use crate::provider::decode_text;

#[test]
fn utf8_aliases_decode_valid_input() {
    for enc in ["utf8", "UTF-8", "utf_8"] {
        let text = decode_text("s.csv", "héllo".as_bytes().to_vec(), enc).unwrap();
        assert_eq!(text, "héllo");
    }
}

#[test]
fn utf8_rejects_invalid_bytes_instead_of_replacing() {
    let err = decode_text("s.csv", vec![0xc3, 0x28], "utf8").unwrap_err();
    match err {
        ProviderError::Decode { reference, .. } => assert_eq!(reference, "s.csv"),
        other => panic!("expected Decode, got: {other:?}"),
    }
}

#[test]
fn ascii_reports_offset_of_first_non_ascii_byte() {
    let err = decode_text("s.txt", vec![b'a', b'b', 0x80], "ascii").unwrap_err();
    assert!(err.to_string().contains("offset 2"));
}

#[test]
fn unknown_encoding_is_an_encoding_error() {
    let err = decode_text("s.txt", b"a".to_vec(), "utf-16").unwrap_err();
    assert!(matches!(err, ProviderError::Encoding { ref encoding, .. } if encoding == "utf-16"));
}
