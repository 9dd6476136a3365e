//! Reading and writing unsynchronized lyrics
//!
//! Lyrics are written to both `LYRICS` and `UNSYNCEDLYRICS`, since players disagree on which one to
//! read. When reading, `LYRICS` takes precedence.

use crate::config::{ParseOptions, WriteOptions};
use crate::error::{ErrorKind, FlacMetaError, Result};
use crate::flac::FlacContainer;
use crate::metadata::{LYRICS, UNSYNCED_LYRICS, decodable_comments};
use crate::util::io::{FileLike, Truncate};
use crate::vorbis_comments::VorbisComments;

use std::io::Read;
use std::path::Path;

const NO_LYRICS: &str = "No lyrics found in file";

/// Write `lyrics` to the file at `path`
///
/// Empty `lyrics` leave the existing lyrics untouched, the file is still rewritten.
///
/// # Errors
///
/// * The file can't be parsed, see [`FlacContainer::read_from`]
/// * The existing `VORBIS_COMMENT` block is malformed
/// * The file can't be written, see [`FlacContainer::save_to_path`]
///
/// # Examples
///
/// ```rust,no_run
/// use flacmeta::lyrics::{embed_lyrics, extract_lyrics};
///
/// # fn main() -> flacmeta::error::Result<()> {
/// embed_lyrics("foo.flac", "Foo lyrics")?;
/// assert_eq!(extract_lyrics("foo.flac")?, "Foo lyrics");
/// # Ok(()) }
/// ```
pub fn embed_lyrics<P>(path: P, lyrics: &str) -> Result<()>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	let write_options = WriteOptions::default();

	let mut container = FlacContainer::read_from_path(path, ParseOptions::new())?;
	set_lyrics(&mut container, lyrics)?;
	container.save_to_path(path, write_options)
}

/// Write `lyrics` to a [`FileLike`]
///
/// # Errors
///
/// * See [`embed_lyrics`]
pub fn embed_lyrics_to<F>(file: &mut F, lyrics: &str, parse_options: ParseOptions) -> Result<()>
where
	F: FileLike,
	FlacMetaError: From<<F as Truncate>::Error>,
{
	file.rewind()?;

	let mut container = FlacContainer::read_from(file, parse_options)?;
	set_lyrics(&mut container, lyrics)?;
	container.save_to(file)
}

fn set_lyrics(container: &mut FlacContainer, lyrics: &str) -> Result<()> {
	let mut tag = container.vorbis_comments()?.unwrap_or_default();

	tag.set(LYRICS, lyrics);
	tag.set(UNSYNCED_LYRICS, lyrics);

	container.set_vorbis_comments(&tag)
}

/// Read the lyrics stored in the file at `path`
///
/// # Errors
///
/// * The file can't be opened or parsed, see [`FlacContainer::read_from`]
/// * Neither `LYRICS` nor `UNSYNCEDLYRICS` have a non-empty value, see [`ErrorKind::NotFound`]
pub fn extract_lyrics<P>(path: P) -> Result<String>
where
	P: AsRef<Path>,
{
	let container = FlacContainer::read_from_path(path, ParseOptions::new())?;
	lyrics_from_container(&container)
}

/// Read the lyrics stored in a reader
///
/// # Errors
///
/// * See [`extract_lyrics`]
pub fn extract_lyrics_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<String>
where
	R: Read,
{
	let container = FlacContainer::read_from(reader, parse_options)?;
	lyrics_from_container(&container)
}

fn lyrics_from_container(container: &FlacContainer) -> Result<String> {
	decodable_comments(container)
		.find_map(|tag| lyrics_from_tag(&tag))
		.ok_or(FlacMetaError::new(ErrorKind::NotFound(NO_LYRICS)))
}

fn lyrics_from_tag(tag: &VorbisComments) -> Option<String> {
	tag.get_all(LYRICS)
		.next()
		.or_else(|| tag.get_all(UNSYNCED_LYRICS).next())
		.map(str::to_owned)
}
