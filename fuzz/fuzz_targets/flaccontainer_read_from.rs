#![no_main]

use std::io::Cursor;

use flacmeta::config::ParseOptions;
use flacmeta::flac::FlacContainer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
	let Ok(container) = FlacContainer::read_from(&mut Cursor::new(data), ParseOptions::new()) else {
		return;
	};

	let _ = container.stream_info();
	let _ = container.vorbis_comments();
	let _ = container.pictures();
	let _ = container.dump_to(&mut Vec::new());
});
