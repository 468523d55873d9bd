#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use pixmorph_ppm::pixmorph_core::options::DecoderOptions;

    // keep allocations small, the header is attacker controlled
    let options = DecoderOptions::default()
        .set_max_width(1 << 10)
        .set_max_height(1 << 10);

    let mut decoder = pixmorph_ppm::PPMDecoder::new_with_options(data, options);
    let _ = decoder.decode();
});
