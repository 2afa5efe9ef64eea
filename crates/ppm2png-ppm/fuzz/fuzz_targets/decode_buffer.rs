#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let options = ppm2png_ppm::DecoderOptions::default()
        .set_max_width(1 << 10)
        .set_max_height(1 << 10);

    let mut decoder = ppm2png_ppm::PpmDecoder::new_with_options(options, data);
    let _ = decoder.decode();
});
