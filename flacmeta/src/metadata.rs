//! Reading and writing a flat set of track metadata
//!
//! This is the high level interface over [`FlacContainer`] and [`VorbisComments`]. Every call is a
//! full read, modify, and write of the file.
//!
//! # Examples
//!
//! ```rust,no_run
//! use flacmeta::metadata::{Metadata, embed_metadata, read_metadata};
//! use std::path::Path;
//!
//! # fn main() -> flacmeta::error::Result<()> {
//! let metadata = Metadata {
//! 	title: String::from("Foo title"),
//! 	artist: String::from("Bar artist"),
//! 	track_number: 3,
//! 	total_tracks: 12,
//! 	..Metadata::default()
//! };
//!
//! embed_metadata("foo.flac", &metadata, Some(Path::new("cover.jpg")))?;
//!
//! let read = read_metadata("foo.flac")?;
//! assert_eq!(read.title, "Foo title");
//! # Ok(()) }
//! ```

use crate::config::{ParseOptions, WriteOptions};
use crate::error::{FlacMetaError, Result};
use crate::flac::{BlockType, FlacContainer, MetadataBlock};
use crate::picture::Picture;
use crate::util::io::{FileLike, Truncate};
use crate::vorbis_comments::VorbisComments;

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

pub(crate) const TITLE: &str = "TITLE";
pub(crate) const ARTIST: &str = "ARTIST";
pub(crate) const ALBUM: &str = "ALBUM";
pub(crate) const ALBUM_ARTIST: &str = "ALBUMARTIST";
pub(crate) const DATE: &str = "DATE";
pub(crate) const TRACK_NUMBER: &str = "TRACKNUMBER";
pub(crate) const DISC_NUMBER: &str = "DISCNUMBER";
pub(crate) const ISRC: &str = "ISRC";
pub(crate) const DESCRIPTION: &str = "DESCRIPTION";
pub(crate) const LYRICS: &str = "LYRICS";
pub(crate) const UNSYNCED_LYRICS: &str = "UNSYNCEDLYRICS";

/// A flat set of track metadata
///
/// Empty strings and zero numbers are "not set", and are never written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
	/// `TITLE`
	pub title: String,
	/// `ARTIST`
	pub artist: String,
	/// `ALBUM`
	pub album: String,
	/// `ALBUMARTIST`
	pub album_artist: String,
	/// `DATE`
	pub date: String,
	/// The current track, the first half of `TRACKNUMBER`
	pub track_number: u32,
	/// The total number of tracks, written as `TRACKNUMBER=N/M`
	pub total_tracks: u32,
	/// `DISCNUMBER`
	pub disc_number: u32,
	/// `ISRC`
	pub isrc: String,
	/// `DESCRIPTION`
	pub description: String,
	/// Unsynchronized lyrics, written to both `LYRICS` and `UNSYNCEDLYRICS`
	pub lyrics: String,
}

/// The source of the cover art to embed alongside [`Metadata`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CoverArt<'a> {
	/// Leave any existing pictures alone
	#[default]
	None,
	/// Read a JPEG from a path
	///
	/// If the path doesn't exist or can't be read, a warning is logged and pictures are left alone.
	Path(&'a Path),
	/// JPEG data already in memory
	///
	/// Empty data is the same as [`CoverArt::None`].
	Data(&'a [u8]),
}

/// Write `metadata`, and optionally a front cover from `cover_path`, to the file at `path`
///
/// Existing comments not covered by `metadata` are kept. Existing pictures are only removed when
/// a cover is successfully loaded.
///
/// # Errors
///
/// * See [`embed_metadata_with_options`]
pub fn embed_metadata<P>(path: P, metadata: &Metadata, cover_path: Option<&Path>) -> Result<()>
where
	P: AsRef<Path>,
{
	let cover = match cover_path {
		Some(cover_path) if !cover_path.as_os_str().is_empty() => CoverArt::Path(cover_path),
		_ => CoverArt::None,
	};

	embed_metadata_with_options(
		path,
		metadata,
		cover,
		ParseOptions::new(),
		WriteOptions::default(),
	)
}

/// Write `metadata`, and optionally a front cover from `cover_data`, to the file at `path`
///
/// An empty `cover_data` leaves the existing pictures alone.
///
/// # Errors
///
/// * See [`embed_metadata_with_options`]
pub fn embed_metadata_with_cover_data<P>(path: P, metadata: &Metadata, cover_data: &[u8]) -> Result<()>
where
	P: AsRef<Path>,
{
	embed_metadata_with_options(
		path,
		metadata,
		CoverArt::Data(cover_data),
		ParseOptions::new(),
		WriteOptions::default(),
	)
}

/// Write `metadata` and `cover` to the file at `path`
///
/// A cover that can't be loaded or isn't a JPEG is not an error, a warning is logged and the
/// metadata is still written.
///
/// # Errors
///
/// * The file can't be parsed, see [`FlacContainer::read_from`]
/// * The existing `VORBIS_COMMENT` block is malformed
/// * The file can't be written, see [`FlacContainer::save_to_path`]
pub fn embed_metadata_with_options<P>(
	path: P,
	metadata: &Metadata,
	cover: CoverArt<'_>,
	parse_options: ParseOptions,
	write_options: WriteOptions,
) -> Result<()>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();

	let mut container = FlacContainer::read_from_path(path, parse_options)?;
	apply_to_container(&mut container, metadata, cover, write_options)?;
	container.save_to_path(path, write_options)
}

/// Write `metadata` and `cover` to a [`FileLike`]
///
/// # Errors
///
/// * See [`embed_metadata_with_options`]
pub fn embed_metadata_to<F>(
	file: &mut F,
	metadata: &Metadata,
	cover: CoverArt<'_>,
	parse_options: ParseOptions,
	write_options: WriteOptions,
) -> Result<()>
where
	F: FileLike,
	FlacMetaError: From<<F as Truncate>::Error>,
{
	file.rewind()?;

	let mut container = FlacContainer::read_from(file, parse_options)?;
	apply_to_container(&mut container, metadata, cover, write_options)?;
	container.save_to(file)
}

fn apply_to_container(
	container: &mut FlacContainer,
	metadata: &Metadata,
	cover: CoverArt<'_>,
	write_options: WriteOptions,
) -> Result<()> {
	let mut tag = container.vorbis_comments()?.unwrap_or_default();
	apply_metadata(&mut tag, metadata);
	container.set_vorbis_comments(&tag)?;

	if let Some(cover_data) = load_cover(cover) {
		embed_cover(container, cover_data, write_options);
	}

	Ok(())
}

pub(crate) fn apply_metadata(tag: &mut VorbisComments, metadata: &Metadata) {
	tag.set(TITLE, &metadata.title);
	tag.set(ARTIST, &metadata.artist);
	tag.set(ALBUM, &metadata.album);
	tag.set(ALBUM_ARTIST, &metadata.album_artist);
	tag.set(DATE, &metadata.date);

	if metadata.track_number > 0 {
		if metadata.total_tracks > 0 {
			tag.set(
				TRACK_NUMBER,
				&format!("{}/{}", metadata.track_number, metadata.total_tracks),
			);
		} else {
			tag.set(TRACK_NUMBER, &metadata.track_number.to_string());
		}
	}

	if metadata.disc_number > 0 {
		tag.set(DISC_NUMBER, &metadata.disc_number.to_string());
	}

	tag.set(ISRC, &metadata.isrc);
	tag.set(DESCRIPTION, &metadata.description);

	if !metadata.lyrics.is_empty() {
		tag.set(LYRICS, &metadata.lyrics);
		tag.set(UNSYNCED_LYRICS, &metadata.lyrics);
	}
}

fn load_cover(cover: CoverArt<'_>) -> Option<Cow<'_, [u8]>> {
	match cover {
		CoverArt::None | CoverArt::Data([]) => None,
		CoverArt::Data(data) => Some(Cow::Borrowed(data)),
		CoverArt::Path(path) => match std::fs::read(path) {
			Ok(data) => Some(Cow::Owned(data)),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				log::warn!("Cover file does not exist: {}", path.display());
				None
			},
			Err(e) => {
				log::warn!("Failed to read cover file {}: {e}", path.display());
				None
			},
		},
	}
}

// Existing pictures are removed even if the new one turns out to be unusable
fn embed_cover(container: &mut FlacContainer, cover_data: Cow<'_, [u8]>, write_options: WriteOptions) {
	let len = cover_data.len();

	let removed = container.remove_all(BlockType::Picture);
	if removed > 0 {
		log::debug!("Removed {removed} existing picture blocks");
	}

	let block = Picture::front_cover_jpeg(cover_data.into_owned(), write_options.cover_description)
		.and_then(|picture| picture.to_block());

	match block {
		Ok(block) => {
			container.replace_or_append(block);
			log::debug!("Cover art embedded ({len} bytes)");
		},
		Err(e) => log::warn!("Failed to create picture block: {e}"),
	}
}

/// Read the [`Metadata`] stored in the file at `path`
///
/// Fields that aren't present are left empty. Keys are matched case-sensitively, so only the
/// canonical uppercase names are found.
///
/// # Errors
///
/// * The file can't be opened or parsed, see [`FlacContainer::read_from`]
pub fn read_metadata<P>(path: P) -> Result<Metadata>
where
	P: AsRef<Path>,
{
	let container = FlacContainer::read_from_path(path, ParseOptions::new())?;
	Ok(metadata_from_container(&container))
}

/// Read the [`Metadata`] stored in a reader
///
/// # Errors
///
/// * See [`read_metadata`]
pub fn read_metadata_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Metadata>
where
	R: Read,
{
	let container = FlacContainer::read_from(reader, parse_options)?;
	Ok(metadata_from_container(&container))
}

fn metadata_from_container(container: &FlacContainer) -> Metadata {
	match decodable_comments(container).next() {
		Some(tag) => metadata_from_tag(&tag),
		None => Metadata::default(),
	}
}

/// Every `VORBIS_COMMENT` block that decodes, in stream order
pub(crate) fn decodable_comments(container: &FlacContainer) -> impl Iterator<Item = VorbisComments> + '_ {
	container.blocks().iter().filter_map(|block| {
		let MetadataBlock::VorbisComment(_) = block else {
			return None;
		};

		match VorbisComments::from_block(block, container.parse_options) {
			Ok(tag) => Some(tag),
			Err(e) => {
				log::warn!("Skipping malformed Vorbis Comments block: {e}");
				None
			},
		}
	})
}

fn metadata_from_tag(tag: &VorbisComments) -> Metadata {
	let get = |key: &str| tag.get(key).unwrap_or_default().to_owned();

	let mut lyrics = get(LYRICS);
	if lyrics.is_empty() {
		lyrics = get(UNSYNCED_LYRICS);
	}

	let (track_number, total_tracks) = match tag.get(TRACK_NUMBER) {
		Some(track) => match track.split_once('/') {
			Some((current, total)) => (leading_number(current), leading_number(total)),
			None => (leading_number(track), 0),
		},
		None => (0, 0),
	};

	Metadata {
		title: get(TITLE),
		artist: get(ARTIST),
		album: get(ALBUM),
		album_artist: get(ALBUM_ARTIST),
		date: get(DATE),
		track_number,
		total_tracks,
		disc_number: tag.get(DISC_NUMBER).map_or(0, leading_number),
		isrc: get(ISRC),
		description: get(DESCRIPTION),
		lyrics,
	}
}

// The decimal digits at the start of `value`, ignoring leading whitespace. 0 if there are none.
fn leading_number(value: &str) -> u32 {
	let value = value.trim_start();
	let value = value.strip_prefix('+').unwrap_or(value);

	let end = value
		.find(|c: char| !c.is_ascii_digit())
		.unwrap_or(value.len());

	value[..end].parse().unwrap_or(0)
}
