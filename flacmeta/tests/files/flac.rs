use crate::util::{
	AUDIO, BLOCK_APPLICATION, BLOCK_PADDING, BLOCK_PICTURE, BLOCK_STREAMINFO, BLOCK_VORBIS_COMMENT,
	STREAMINFO, flac, minimal_flac, temp_file, temp_path, vorbis_comments,
};

use std::io::{Read, Seek};

use flacmeta::config::{ParseOptions, ParsingMode, WriteOptions};
use flacmeta::error::ErrorKind;
use flacmeta::flac::{BlockType, FlacContainer, MetadataBlock};
use flacmeta::vorbis_comments::VorbisComments;

#[test_log::test]
fn untouched_stream_is_identical() {
	let original = flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(BLOCK_APPLICATION, b"TEST\x01\x02\x03".to_vec()),
		(
			BLOCK_VORBIS_COMMENT,
			vorbis_comments("reference libFLAC 1.4.3 20230623", &["TITLE=Foo", "NOSEPARATOR"]),
		),
		(BLOCK_PICTURE, vec![0xAB; 40]),
		(BLOCK_PADDING, vec![0; 64]),
	]);

	let container = FlacContainer::read_from(&mut &original[..], ParseOptions::new()).unwrap();

	let mut out = Vec::new();
	container.dump_to(&mut out).unwrap();
	assert_eq!(out, original);
}

#[test_log::test]
fn rewrite_preserves_other_blocks_and_audio() {
	let application = b"TEST\x01\x02\x03".to_vec();
	let padding = vec![0; 64];

	let mut file = temp_file(&flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(BLOCK_APPLICATION, application.clone()),
		(BLOCK_PADDING, padding.clone()),
	]));

	let mut container = FlacContainer::read_from(&mut file, ParseOptions::new()).unwrap();

	let mut tag = VorbisComments::new();
	tag.set("TITLE", "Foo title");
	container.set_vorbis_comments(&tag).unwrap();
	container.save_to(&mut file).unwrap();

	file.rewind().unwrap();
	let container = FlacContainer::read_from(&mut file, ParseOptions::new()).unwrap();

	assert_eq!(container.blocks(), &[
		MetadataBlock::StreamInfo(STREAMINFO.to_vec()),
		MetadataBlock::new(BlockType::Other(BLOCK_APPLICATION), application),
		MetadataBlock::new(BlockType::Other(BLOCK_PADDING), padding),
		tag.to_block().unwrap(),
	]);
	assert_eq!(container.audio_data(), AUDIO);
}

#[test_log::test]
fn retain_vendor_string() {
	let mut file = temp_file(&flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(BLOCK_VORBIS_COMMENT, vorbis_comments("Lavf58.76.100", &["ARTIST=Foo"])),
	]));

	let mut container = FlacContainer::read_from(&mut file, ParseOptions::new()).unwrap();

	let mut tag = container.vorbis_comments().unwrap().unwrap();
	tag.set("ARTIST", "Bar");
	container.set_vorbis_comments(&tag).unwrap();
	container.save_to(&mut file).unwrap();

	file.rewind().unwrap();
	let container = FlacContainer::read_from(&mut file, ParseOptions::new()).unwrap();
	let tag = container.vorbis_comments().unwrap().unwrap();

	assert_eq!(tag.vendor(), "Lavf58.76.100");
	assert_eq!(tag.get("ARTIST"), Some("Bar"));
}

#[test_log::test]
fn multiple_vorbis_comments() {
	let data = flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(BLOCK_VORBIS_COMMENT, vorbis_comments("", &["ARTIST=Artist 1"])),
		(BLOCK_VORBIS_COMMENT, vorbis_comments("", &["ARTIST=Artist 2"])),
	]);

	// Reading a file with multiple VORBIS_COMMENT blocks should error when using `Strict`
	assert!(
		FlacContainer::read_from(
			&mut &data[..],
			ParseOptions::new().parsing_mode(ParsingMode::Strict)
		)
		.is_err()
	);

	// But by default, we should just take the first tag in the stream
	let container = FlacContainer::read_from(&mut &data[..], ParseOptions::new()).unwrap();
	assert_eq!(
		container.vorbis_comments().unwrap().unwrap().get("ARTIST"),
		Some("Artist 1")
	);
}

#[test_log::test]
fn malformed_vorbis_comments() {
	let mut comments = vorbis_comments("vendor", &["TITLE=Foo"]);
	comments.truncate(comments.len() - 1);

	let data = flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(BLOCK_VORBIS_COMMENT, comments),
	]);

	let container = FlacContainer::read_from(&mut &data[..], ParseOptions::new()).unwrap();
	let err = container.vorbis_comments().unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Decode(_)));
}

#[test_log::test]
fn block_past_end_of_file() {
	let mut data = minimal_flac();
	// Claim one more byte than the file holds
	data[7] = 34 + AUDIO.len() as u8 + 1;

	let err = FlacContainer::read_from(&mut &data[..], ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Format(_)));
}

#[test_log::test]
fn no_vorbis_comments() {
	let container = FlacContainer::read_from(&mut &minimal_flac()[..], ParseOptions::new()).unwrap();

	assert!(container.vorbis_comments().unwrap().is_none());
	assert!(container.pictures().unwrap().is_empty());
}

#[test_log::test]
fn save_to_path_read_only() {
	let original = minimal_flac();
	let file = temp_path(&original);

	let mut permissions = file.path().metadata().unwrap().permissions();
	permissions.set_readonly(true);
	std::fs::set_permissions(file.path(), permissions).unwrap();

	let mut container = FlacContainer::read_from_path(file.path(), ParseOptions::new()).unwrap();
	let mut tag = VorbisComments::new();
	tag.set("TITLE", "Foo title");
	container.set_vorbis_comments(&tag).unwrap();

	let err = container
		.save_to_path(file.path(), WriteOptions::default())
		.unwrap_err();
	let ErrorKind::Io(io_err) = err.kind() else {
		panic!("Expected an IO error, got: {err:?}");
	};
	assert_eq!(io_err.kind(), std::io::ErrorKind::PermissionDenied);

	let mut content = Vec::new();
	std::fs::File::open(file.path())
		.unwrap()
		.read_to_end(&mut content)
		.unwrap();
	assert_eq!(content, original);
}
