#![no_main]

use flacmeta::config::ParsingMode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let _ = flacmeta::picture::Picture::from_flac_bytes(data, ParsingMode::BestAttempt);
	let _ = flacmeta::picture::Picture::from_flac_bytes(data, ParsingMode::Strict);
});
