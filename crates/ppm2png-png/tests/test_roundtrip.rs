/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppm2png_png::{Compression, EncoderOptions, FilterMethod, PngEncoder};
use ppm2png_ppm::PpmDecoder;

/// Decode a PNG with the png crate, returning (width, height, rgba bytes)
fn decode_ref(data: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(data);
    let mut reader = decoder.read_info().unwrap();

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();

    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);

    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}

fn ppm_to_png(ppm: &str, options: EncoderOptions) -> (Vec<u8>, Vec<u8>) {
    let pixels = PpmDecoder::new(ppm.as_bytes()).decode().unwrap();
    let dims = pixels.dimensions();
    let options = options
        .set_width(dims.width as usize)
        .set_height(dims.height as usize);

    let encoded = PngEncoder::new(pixels.as_bytes(), options)
        .encode_to_vec()
        .unwrap();

    (pixels.into_bytes(), encoded)
}

#[test]
fn test_two_pixel_scenario() {
    let (_, encoded) = ppm_to_png(
        "P3\n2 1\n255\n255 0 0\n0 255 0\n",
        EncoderOptions::new(0, 0)
    );
    let (width, height, rgba) = decode_ref(&encoded);

    assert_eq!((width, height), (2, 1));
    assert_eq!(&rgba[0..4], &[255, 0, 0, 255]);
    assert_eq!(&rgba[4..8], &[0, 255, 0, 255]);
}

#[test]
fn test_roundtrip_gradient() {
    let (w, h) = (7, 5);
    let mut ppm = format!("P3\n{w} {h}\n255\n");

    for y in 0..h {
        for x in 0..w {
            ppm.push_str(&format!("{} {} {}\n", x * 36, y * 60, (x * y) % 256));
        }
    }

    let (buffer, encoded) = ppm_to_png(&ppm, EncoderOptions::new(0, 0));
    let (width, height, rgba) = decode_ref(&encoded);

    assert_eq!((width, height), (w, h));
    assert_eq!(rgba, buffer);
}

#[test]
fn test_every_filter_and_compression_is_lossless() {
    let ppm = "P3\n3 2\n255\n10 20 30\n40 50 60\n70 80 90\n1 2 3\n4 5 6\n7 8 9\n";

    for compression in [Compression::Fast, Compression::Default, Compression::Best] {
        for filter in [
            FilterMethod::None,
            FilterMethod::Sub,
            FilterMethod::Up,
            FilterMethod::Avg,
            FilterMethod::Paeth,
            FilterMethod::Adaptive
        ] {
            let options = EncoderOptions::new(0, 0)
                .set_compression(compression)
                .set_filter(filter);
            let (buffer, encoded) = ppm_to_png(ppm, options);

            assert_eq!(decode_ref(&encoded).2, buffer, "{compression:?} {filter:?}");
        }
    }
}

#[test]
fn test_short_input_keeps_transparent_trailing_pixels() {
    let (_, encoded) = ppm_to_png("P3\n2 1\n255\n1 2 3\n", EncoderOptions::new(0, 0));
    let (_, _, rgba) = decode_ref(&encoded);

    assert_eq!(rgba, vec![1, 2, 3, 255, 0, 0, 0, 0]);
}
