#![no_main]

use flacmeta::config::{ParseOptions, ParsingMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let _ = flacmeta::vorbis_comments::VorbisComments::decode(data, ParseOptions::new());
	let _ = flacmeta::vorbis_comments::VorbisComments::decode(
		data,
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	);
});
