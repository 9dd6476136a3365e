#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let mut reader = data;
	let _ = flacmeta::flac::read_audio_quality_from(&mut reader);
});
