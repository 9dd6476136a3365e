use crate::util::{
	BLOCK_STREAMINFO, BLOCK_VORBIS_COMMENT, STREAMINFO, flac, minimal_flac, temp_file, temp_path,
	vorbis_comments,
};

use std::io::Seek;

use flacmeta::config::ParseOptions;
use flacmeta::error::ErrorKind;
use flacmeta::flac::FlacContainer;
use flacmeta::lyrics::{embed_lyrics, embed_lyrics_to, extract_lyrics, extract_lyrics_from};

#[test_log::test]
fn embed_then_extract() {
	let file = temp_path(&minimal_flac());

	embed_lyrics(file.path(), "Foo lyrics").unwrap();
	assert_eq!(extract_lyrics(file.path()).unwrap(), "Foo lyrics");

	let container = FlacContainer::read_from_path(file.path(), ParseOptions::new()).unwrap();
	let tag = container.vorbis_comments().unwrap().unwrap();
	assert_eq!(tag.get("LYRICS"), Some("Foo lyrics"));
	assert_eq!(tag.get("UNSYNCEDLYRICS"), Some("Foo lyrics"));
}

#[test_log::test]
fn embed_replaces_existing() {
	let mut file = temp_file(&flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(
			BLOCK_VORBIS_COMMENT,
			vorbis_comments("vendor", &["lyrics=Old", "TITLE=Foo", "UnsyncedLyrics=Old"]),
		),
	]));

	embed_lyrics_to(&mut file, "New", ParseOptions::new()).unwrap();

	file.rewind().unwrap();
	let container = FlacContainer::read_from(&mut file, ParseOptions::new()).unwrap();
	let tag = container.vorbis_comments().unwrap().unwrap();
	assert_eq!(tag.items().collect::<Vec<_>>(), vec![
		("TITLE", "Foo"),
		("LYRICS", "New"),
		("UNSYNCEDLYRICS", "New"),
	]);
}

#[test_log::test]
fn empty_lyrics_change_nothing() {
	let mut file = temp_file(&flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(BLOCK_VORBIS_COMMENT, vorbis_comments("vendor", &["LYRICS=Old"])),
	]));

	embed_lyrics_to(&mut file, "", ParseOptions::new()).unwrap();

	file.rewind().unwrap();
	assert_eq!(
		extract_lyrics_from(&mut file, ParseOptions::new()).unwrap(),
		"Old"
	);
}

#[test_log::test]
fn fallback_to_unsynced() {
	let data = flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(
			BLOCK_VORBIS_COMMENT,
			vorbis_comments("vendor", &["LYRICS=", "UNSYNCEDLYRICS=Unsynced"]),
		),
	]);

	assert_eq!(
		extract_lyrics_from(&mut &data[..], ParseOptions::new()).unwrap(),
		"Unsynced"
	);
}

#[test_log::test]
fn no_lyrics() {
	let without_block = minimal_flac();
	let with_empty_block = flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(BLOCK_VORBIS_COMMENT, vorbis_comments("vendor", &["TITLE=Foo"])),
	]);

	for data in [without_block, with_empty_block] {
		let err = extract_lyrics_from(&mut &data[..], ParseOptions::new()).unwrap_err();
		let ErrorKind::NotFound(message) = err.kind() else {
			panic!("Expected NotFound, got: {err:?}");
		};
		assert_eq!(*message, "No lyrics found in file");
	}
}

#[test_log::test]
fn not_a_flac_file() {
	let original = b"OggS not a FLAC file at all".to_vec();
	let file = temp_path(&original);

	let err = embed_lyrics(file.path(), "Foo").unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Format(_)));

	let err = extract_lyrics(file.path()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Format(_)));

	assert_eq!(std::fs::read(file.path()).unwrap(), original);
}
