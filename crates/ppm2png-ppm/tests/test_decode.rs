/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppm2png_ppm::{DecoderOptions, PpmDecodeErrors, PpmDecoder};

fn decode(data: &str) -> Result<ppm2png_ppm::PixelBuffer, PpmDecodeErrors> {
    PpmDecoder::new(data.as_bytes()).decode()
}

fn decode_strict(data: &str) -> Result<ppm2png_ppm::PixelBuffer, PpmDecodeErrors> {
    PpmDecoder::new_with_options(DecoderOptions::new_strict(), data.as_bytes()).decode()
}

#[test]
fn test_two_pixel_image() {
    let buffer = decode("P3\n2 1\n255\n255 0 0\n0 255 0\n").unwrap();

    assert_eq!(buffer.dimensions().width, 2);
    assert_eq!(buffer.dimensions().height, 1);
    assert_eq!(buffer.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(buffer.pixel(1, 0), Some([0, 255, 0, 255]));
    assert!(buffer.is_complete());
}

#[test]
fn test_row_major_order() {
    let buffer = decode("P3\n2 2\n255\n1 1 1\n2 2 2\n3 3 3\n4 4 4").unwrap();

    assert_eq!(buffer.pixel(0, 0), Some([1, 1, 1, 255]));
    assert_eq!(buffer.pixel(1, 0), Some([2, 2, 2, 255]));
    assert_eq!(buffer.pixel(0, 1), Some([3, 3, 3, 255]));
    assert_eq!(buffer.pixel(1, 1), Some([4, 4, 4, 255]));
}

#[test]
fn test_max_value_is_not_used_for_scaling() {
    let buffer = decode("P3\n1 1\n15\n10 12 200\n").unwrap();

    assert_eq!(buffer.as_bytes(), &[10, 12, 200, 255]);
}

#[test]
fn test_bad_header() {
    for data in ["P2\n1 1\n255\n0 0 0\n", "", "P6\n", " P3\n1 1\n"] {
        match decode(data) {
            Err(PpmDecodeErrors::BadHeader(_)) => {}
            other => panic!("expected BadHeader for {data:?}, got {other:?}")
        }
    }
}

#[test]
fn test_bad_dimensions() {
    for data in [
        "P3\n10\n255\n",
        "P3\n10 10 10\n255\n",
        "P3\n10  10\n255\n",
        "P3\nten 10\n255\n",
        "P3\n10 x\n255\n",
        "P3\n"
    ] {
        match decode(data) {
            Err(PpmDecodeErrors::BadDimensions(_)) => {}
            other => panic!("expected BadDimensions for {data:?}, got {other:?}")
        }
    }
}

#[test]
fn test_bad_color_depth() {
    match decode("P3\n1 1\nfull\n0 0 0\n") {
        Err(PpmDecodeErrors::BadColorDepth(_)) => {}
        other => panic!("expected BadColorDepth, got {other:?}")
    }
}

#[test]
fn test_bad_pixel_line_reports_offset() {
    match decode("P3\n2 2\n255\n1 2 3\n4 5 6\n255 0\n") {
        Err(PpmDecodeErrors::BadPixelLine { offset, tokens }) => {
            assert_eq!(offset, 8);
            assert_eq!(tokens, 2);
        }
        other => panic!("expected BadPixelLine, got {other:?}")
    }
}

#[test]
fn test_trailing_space_is_an_extra_token() {
    match decode("P3\n1 1\n255\n1 2 3 \n") {
        Err(PpmDecodeErrors::BadPixelLine { offset, tokens }) => {
            assert_eq!(offset, 0);
            assert_eq!(tokens, 4);
        }
        other => panic!("expected BadPixelLine, got {other:?}")
    }
}

#[test]
fn test_bad_byte_value() {
    for (sample, expected) in [("256", "256"), ("abc", "abc"), ("-3", "-3"), ("+5", "+5")] {
        let data = format!("P3\n1 1\n255\n0 {sample} 0\n");

        match decode(&data) {
            Err(PpmDecodeErrors::BadByteValue { token, .. }) => assert_eq!(token, expected),
            other => panic!("expected BadByteValue for {sample:?}, got {other:?}")
        }
    }
}

#[test]
fn test_signed_samples_are_rejected() {
    match decode("P3\n1 1\n255\n+1 +2 +3\n") {
        Err(PpmDecodeErrors::BadByteValue { token, .. }) => assert_eq!(token, "+1"),
        other => panic!("expected BadByteValue, got {other:?}")
    }
}

#[test]
fn test_too_many_pixels_overflow() {
    match decode("P3\n1 1\n255\n1 2 3\n4 5 6\n") {
        Err(PpmDecodeErrors::Overflow { offset, capacity }) => {
            assert_eq!(offset, 4);
            assert_eq!(capacity, 4);
        }
        other => panic!("expected Overflow, got {other:?}")
    }
}

#[test]
fn test_short_input_leaves_transparent_pixels() {
    let buffer = decode("P3\n2 2\n255\n9 8 7\n").unwrap();

    assert_eq!(buffer.pixels_written(), 1);
    assert!(!buffer.is_complete());
    assert_eq!(buffer.pixel(0, 0), Some([9, 8, 7, 255]));
    assert_eq!(buffer.pixel(1, 0), Some([0, 0, 0, 0]));
    assert_eq!(buffer.pixel(0, 1), Some([0, 0, 0, 0]));
    assert_eq!(buffer.pixel(1, 1), Some([0, 0, 0, 0]));
}

#[test]
fn test_degenerate_dimensions_are_lenient() {
    let buffer = decode("P3\n0 5\n255\n").unwrap();
    assert!(buffer.as_bytes().is_empty());

    match decode("P3\n-1 5\n255\n1 2 3\n") {
        Err(PpmDecodeErrors::Overflow { offset, capacity }) => {
            assert_eq!(offset, 0);
            assert_eq!(capacity, 0);
        }
        other => panic!("expected Overflow, got {other:?}")
    }
}

#[test]
fn test_strict_rejects_what_lenient_accepts() {
    match decode_strict("P3\n0 5\n255\n") {
        Err(PpmDecodeErrors::BadDimensions(_)) => {}
        other => panic!("expected BadDimensions, got {other:?}")
    }
    match decode_strict("P3\n1 1\n0\n1 1 1\n") {
        Err(PpmDecodeErrors::BadColorDepth(_)) => {}
        other => panic!("expected BadColorDepth, got {other:?}")
    }
    match decode_strict("P3\n1 1\n65535\n1 1 1\n") {
        Err(PpmDecodeErrors::BadColorDepth(_)) => {}
        other => panic!("expected BadColorDepth, got {other:?}")
    }
    match decode_strict("P3\n1 1") {
        Err(PpmDecodeErrors::BadColorDepth(_)) => {}
        other => panic!("expected BadColorDepth, got {other:?}")
    }
    match decode_strict("P3\n2 1\n255\n1 1 1\n") {
        Err(PpmDecodeErrors::Truncated { expected, found }) => {
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("expected Truncated, got {other:?}")
    }

    assert!(decode_strict("P3\n2 1\n255\n1 1 1\n2 2 2\n").is_ok());
}

#[test]
fn test_limits_reject_large() {
    let options = DecoderOptions::default().set_max_width(8).set_max_height(4);

    let mut decoder = PpmDecoder::new_with_options(options, &b"P3\n9 1\n255\n"[..]);
    match decoder.decode() {
        Err(PpmDecodeErrors::LargeDimensions(limit, found)) => {
            assert_eq!(limit, 8);
            assert_eq!(found, 9);
        }
        other => panic!("expected LargeDimensions, got {other:?}")
    }

    let mut decoder = PpmDecoder::new_with_options(options, &b"P3\n1 5\n255\n"[..]);
    match decoder.decode() {
        Err(PpmDecodeErrors::LargeDimensions(limit, found)) => {
            assert_eq!(limit, 4);
            assert_eq!(found, 5);
        }
        other => panic!("expected LargeDimensions, got {other:?}")
    }
}

#[test]
fn test_limits_are_inclusive() {
    let options = DecoderOptions::default().set_max_width(8).set_max_height(4);

    let mut decoder = PpmDecoder::new_with_options(options, &b"P3\n8 4\n255\n"[..]);
    let header = decoder.read_headers().unwrap();
    assert_eq!(header.dimensions.width, 8);
    assert_eq!(header.dimensions.height, 4);

    let mut decoder = PpmDecoder::new_with_options(options, &b"P3\n9 4\n255\n"[..]);
    let msg = decoder.decode().unwrap_err().to_string();
    assert!(msg.contains("at most 8"), "{msg}");
    assert!(msg.contains("found 9"), "{msg}");
}

#[test]
fn test_invalid_utf8_is_io_error() {
    let mut decoder = PpmDecoder::new(&b"P3\n1 1\n255\n\xff\xfe 0 0\n"[..]);

    match decoder.decode() {
        Err(PpmDecodeErrors::Io(_)) => {}
        other => panic!("expected Io, got {other:?}")
    }
}

#[test]
fn test_error_messages_are_readable() {
    let err = decode("P3\n1 1\n255\n0 256 0\n").unwrap_err();
    let msg = err.to_string();

    assert!(msg.contains("256"), "{msg}");
    assert!(!msg.ends_with('\n'));
}
