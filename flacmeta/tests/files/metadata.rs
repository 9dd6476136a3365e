use crate::util::{
	AUDIO, BLOCK_PADDING, BLOCK_PICTURE, BLOCK_STREAMINFO, BLOCK_VORBIS_COMMENT, STREAMINFO, flac,
	jpeg, minimal_flac, temp_file, temp_path, vorbis_comments,
};

use std::io::{Read, Seek};
use std::path::Path;

use flacmeta::config::{ParseOptions, WriteOptions};
use flacmeta::error::ErrorKind;
use flacmeta::flac::{BlockType, FlacContainer};
use flacmeta::metadata::{
	CoverArt, Metadata, embed_metadata, embed_metadata_to, embed_metadata_with_cover_data,
	read_metadata, read_metadata_from,
};
use flacmeta::picture::{MimeType, PictureType};

fn full_metadata() -> Metadata {
	Metadata {
		title: String::from("Foo title"),
		artist: String::from("Bar artist"),
		album: String::from("Baz album"),
		album_artist: String::from("Qux album artist"),
		date: String::from("2024-05-17"),
		track_number: 3,
		total_tracks: 12,
		disc_number: 2,
		isrc: String::from("USRC17607839"),
		description: String::from("A description"),
		lyrics: String::from("First line\nSecond line"),
	}
}

fn read_back(file: &mut std::fs::File) -> FlacContainer {
	file.rewind().unwrap();
	FlacContainer::read_from(file, ParseOptions::new()).unwrap()
}

#[test_log::test]
fn round_trip_all_fields() {
	let file = temp_path(&minimal_flac());
	let metadata = full_metadata();

	embed_metadata(file.path(), &metadata, None).unwrap();

	assert_eq!(read_metadata(file.path()).unwrap(), metadata);
}

#[test_log::test]
fn round_trip_single_fields() {
	let cases = [
		Metadata {
			title: String::from("Only a title"),
			..Metadata::default()
		},
		Metadata {
			album_artist: String::from("Only an album artist"),
			..Metadata::default()
		},
		Metadata {
			track_number: 7,
			..Metadata::default()
		},
		Metadata {
			disc_number: 1,
			..Metadata::default()
		},
		Metadata {
			lyrics: String::from("Only lyrics"),
			..Metadata::default()
		},
	];

	for metadata in cases {
		let mut file = temp_file(&minimal_flac());
		embed_metadata_to(
			&mut file,
			&metadata,
			CoverArt::None,
			ParseOptions::new(),
			WriteOptions::default(),
		)
		.unwrap();

		file.rewind().unwrap();
		assert_eq!(
			read_metadata_from(&mut file, ParseOptions::new()).unwrap(),
			metadata
		);
	}
}

#[test_log::test]
fn writes_are_idempotent() {
	let file = temp_path(&minimal_flac());
	let metadata = full_metadata();
	let cover = jpeg(500, 500);

	embed_metadata_with_cover_data(file.path(), &metadata, &cover).unwrap();
	let first = std::fs::read(file.path()).unwrap();

	embed_metadata_with_cover_data(file.path(), &metadata, &cover).unwrap();
	let second = std::fs::read(file.path()).unwrap();

	assert_eq!(first, second);
}

#[test_log::test]
fn existing_comments_are_kept() {
	let mut file = temp_file(&flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(
			BLOCK_VORBIS_COMMENT,
			vorbis_comments("Lavf58.76.100", &["title=Old title", "GENRE=Rock", "ENCODER=Foo"]),
		),
	]));

	let metadata = Metadata {
		title: String::from("New title"),
		..Metadata::default()
	};
	embed_metadata_to(
		&mut file,
		&metadata,
		CoverArt::None,
		ParseOptions::new(),
		WriteOptions::default(),
	)
	.unwrap();

	let container = read_back(&mut file);
	let tag = container.vorbis_comments().unwrap().unwrap();

	assert_eq!(tag.vendor(), "Lavf58.76.100");
	assert_eq!(tag.items().collect::<Vec<_>>(), vec![
		("GENRE", "Rock"),
		("ENCODER", "Foo"),
		("TITLE", "New title"),
	]);
}

#[test_log::test]
fn cover_replaces_all_pictures() {
	let mut file = temp_file(&flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(BLOCK_PICTURE, vec![0xAA; 40]),
		(BLOCK_PADDING, vec![0; 16]),
		(BLOCK_PICTURE, vec![0xBB; 40]),
	]));

	let first_cover = jpeg(100, 100);
	let second_cover = jpeg(640, 480);

	for cover in [&first_cover, &second_cover] {
		embed_metadata_to(
			&mut file,
			&Metadata::default(),
			CoverArt::Data(cover),
			ParseOptions::new(),
			WriteOptions::default(),
		)
		.unwrap();
	}

	let container = read_back(&mut file);
	let pictures = container.pictures().unwrap();

	assert_eq!(pictures.len(), 1);
	assert_eq!(pictures[0].data(), &second_cover[..]);
	assert_eq!(pictures[0].pic_type(), PictureType::CoverFront);
	assert_eq!(pictures[0].mime_type(), Some(&MimeType::Jpeg));
	assert_eq!(pictures[0].description(), Some("Front Cover"));
	assert_eq!(pictures[0].information().width, 640);
	assert_eq!(pictures[0].information().height, 480);
	assert_eq!(pictures[0].information().color_depth, 24);

	// Padding is untouched
	assert!(container.find_first(BlockType::Other(BLOCK_PADDING)).is_some());
}

#[test_log::test]
fn custom_cover_description() {
	let mut file = temp_file(&minimal_flac());

	embed_metadata_to(
		&mut file,
		&Metadata::default(),
		CoverArt::Data(&jpeg(1, 1)),
		ParseOptions::new(),
		WriteOptions::new().cover_description("Cover"),
	)
	.unwrap();

	let pictures = read_back(&mut file).pictures().unwrap();
	assert_eq!(pictures[0].description(), Some("Cover"));
}

#[test_log::test]
fn cover_from_path() {
	let file = temp_path(&minimal_flac());
	let cover = temp_path(&jpeg(32, 16));

	embed_metadata(file.path(), &full_metadata(), Some(cover.path())).unwrap();

	let container = FlacContainer::read_from_path(file.path(), ParseOptions::new()).unwrap();
	let pictures = container.pictures().unwrap();
	assert_eq!(pictures.len(), 1);
	assert_eq!(pictures[0].information().width, 32);
}

#[test_log::test]
fn missing_cover_path_keeps_pictures() {
	let original_picture = vec![0xAA; 40];
	let file = temp_path(&flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(BLOCK_PICTURE, original_picture.clone()),
	]));

	embed_metadata(
		file.path(),
		&full_metadata(),
		Some(Path::new("this/cover/does/not/exist.jpg")),
	)
	.unwrap();

	let container = FlacContainer::read_from_path(file.path(), ParseOptions::new()).unwrap();
	let (_, picture) = container.find_first(BlockType::Picture).unwrap();
	assert_eq!(picture.content(), &original_picture[..]);

	// The tags are still written
	assert_eq!(read_metadata(file.path()).unwrap(), full_metadata());
}

#[test_log::test]
fn empty_cover_data_keeps_pictures() {
	let mut file = temp_file(&flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(BLOCK_PICTURE, vec![0xAA; 40]),
	]));

	embed_metadata_to(
		&mut file,
		&full_metadata(),
		CoverArt::Data(&[]),
		ParseOptions::new(),
		WriteOptions::default(),
	)
	.unwrap();

	let container = read_back(&mut file);
	assert!(container.find_first(BlockType::Picture).is_some());
}

#[test_log::test]
fn invalid_cover_still_writes_tags() {
	let mut file = temp_file(&flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(BLOCK_PICTURE, vec![0xAA; 40]),
	]));

	// A PNG signature, not a JPEG
	let not_a_jpeg = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

	embed_metadata_to(
		&mut file,
		&full_metadata(),
		CoverArt::Data(&not_a_jpeg),
		ParseOptions::new(),
		WriteOptions::default(),
	)
	.unwrap();

	let container = read_back(&mut file);

	// The existing picture is removed before the new one is built
	assert!(container.find_first(BlockType::Picture).is_none());
	assert_eq!(container.audio_data(), AUDIO);

	file.rewind().unwrap();
	assert_eq!(
		read_metadata_from(&mut file, ParseOptions::new()).unwrap(),
		full_metadata()
	);
}

#[test_log::test]
fn oversized_cover_still_writes_tags() {
	let mut file = temp_file(&flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(BLOCK_PICTURE, vec![0xAA; 40]),
	]));

	// A valid JPEG header, padded past what a 24-bit block length can hold
	let mut cover = jpeg(1, 1);
	cover.resize(0x0100_0000, 0);

	embed_metadata_to(
		&mut file,
		&full_metadata(),
		CoverArt::Data(&cover),
		ParseOptions::new(),
		WriteOptions::default(),
	)
	.unwrap();

	let container = read_back(&mut file);
	assert!(container.find_first(BlockType::Picture).is_none());
	assert_eq!(container.audio_data(), AUDIO);

	file.rewind().unwrap();
	assert_eq!(
		read_metadata_from(&mut file, ParseOptions::new()).unwrap(),
		full_metadata()
	);
}

#[test_log::test]
fn not_a_flac_file() {
	let original = b"ID3\x04\x00\x00\x00\x00\x00\x00 definitely not FLAC".to_vec();
	let file = temp_path(&original);

	let err = embed_metadata(file.path(), &full_metadata(), None).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Format(_)));

	let err = embed_metadata_with_cover_data(file.path(), &full_metadata(), &jpeg(1, 1)).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Format(_)));

	let err = read_metadata(file.path()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Format(_)));

	let mut content = Vec::new();
	std::fs::File::open(file.path())
		.unwrap()
		.read_to_end(&mut content)
		.unwrap();
	assert_eq!(content, original);
}

#[test_log::test]
fn read_metadata_skips_malformed_block() {
	let mut comments = vorbis_comments("vendor", &["TITLE=Foo"]);
	comments.truncate(comments.len() - 1);

	let file = temp_path(&flac(&[
		(BLOCK_STREAMINFO, STREAMINFO.to_vec()),
		(BLOCK_VORBIS_COMMENT, comments),
	]));

	assert_eq!(read_metadata(file.path()).unwrap(), Metadata::default());

	// Writing needs the existing block to be intact
	let err = embed_metadata(file.path(), &full_metadata(), None).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Decode(_)));
}

#[test_log::test]
fn missing_file() {
	let err = read_metadata("this/file/does/not/exist.flac").unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Io(_)));
}
