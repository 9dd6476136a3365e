//! Items for FLAC
//!
//! ## File notes
//!
//! * See [`FlacContainer`]
//! * Only `STREAMINFO`, `VORBIS_COMMENT`, and `PICTURE` blocks are interpreted, every other block is
//!   carried through a rewrite untouched.

mod block;
mod properties;
mod read;
mod write;

use crate::config::{ParseOptions, ParsingMode, WriteOptions};
use crate::error::{FlacMetaError, Result};
use crate::macros::format_err;
use crate::picture::Picture;
use crate::util::io::{FileLike, Truncate};
use crate::vorbis_comments::VorbisComments;

use std::fs::{File, OpenOptions};
use std::io::BufReader;
use std::path::Path;

// Exports
pub use block::{BlockType, MetadataBlock};
pub(crate) use block::verify_size;
pub use properties::{
	AudioQuality, STREAMINFO_SIZE, StreamInfo, read_audio_quality, read_audio_quality_from,
};

/// A parsed FLAC stream
///
/// This is the ordered list of metadata blocks, followed by the audio frames. The audio frames are
/// never inspected, they are written back exactly as they were read.
///
/// # Examples
///
/// ```rust,no_run
/// use flacmeta::config::{ParseOptions, WriteOptions};
/// use flacmeta::flac::{BlockType, FlacContainer};
///
/// # fn main() -> flacmeta::error::Result<()> {
/// let mut container = FlacContainer::read_from_path("foo.flac", ParseOptions::new())?;
///
/// // Strip all embedded pictures
/// container.remove_all(BlockType::Picture);
/// container.save_to_path("foo.flac", WriteOptions::default())?;
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlacContainer {
	pub(crate) blocks: Vec<MetadataBlock>,
	pub(crate) audio_data: Vec<u8>,
	pub(crate) parse_options: ParseOptions,
}

impl FlacContainer {
	/// Read a `FlacContainer` from a reader
	///
	/// The entire stream is read into memory.
	///
	/// # Errors
	///
	/// * The stream doesn't start with the `fLaC` marker
	/// * The first block is not `STREAMINFO`
	/// * A block's length runs past the end of the stream
	/// * [`ParsingMode::Strict`] and the stream has multiple `VORBIS_COMMENT` blocks
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: std::io::Read,
	{
		read::read_from(reader, parse_options)
	}

	/// Read a `FlacContainer` from a path
	///
	/// # Errors
	///
	/// * `path` can't be opened
	/// * See [`FlacContainer::read_from`]
	pub fn read_from_path<P>(path: P, parse_options: ParseOptions) -> Result<Self>
	where
		P: AsRef<Path>,
	{
		let mut reader = BufReader::new(File::open(path)?);
		Self::read_from(&mut reader, parse_options)
	}

	/// All metadata blocks, in stream order
	pub fn blocks(&self) -> &[MetadataBlock] {
		&self.blocks
	}

	/// Everything following the last metadata block
	pub fn audio_data(&self) -> &[u8] {
		&self.audio_data
	}

	/// Find the first block of type `ty`, returning it along with its index
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use flacmeta::config::ParseOptions;
	/// use flacmeta::flac::{BlockType, FlacContainer};
	///
	/// # fn main() -> flacmeta::error::Result<()> {
	/// let container = FlacContainer::read_from_path("foo.flac", ParseOptions::new())?;
	///
	/// // STREAMINFO is always first
	/// let (index, _) = container.find_first(BlockType::StreamInfo).unwrap();
	/// assert_eq!(index, 0);
	/// # Ok(()) }
	/// ```
	pub fn find_first(&self, ty: BlockType) -> Option<(usize, &MetadataBlock)> {
		self.blocks
			.iter()
			.enumerate()
			.find(|(_, block)| block.block_type().as_u8() == ty.as_u8())
	}

	/// Replace the first block with the same type as `block`, or append it if there is none
	pub fn replace_or_append(&mut self, block: MetadataBlock) {
		match self.find_first(block.block_type()) {
			Some((index, _)) => self.blocks[index] = block,
			None => self.blocks.push(block),
		}
	}

	/// Remove every block of type `ty`, returning how many were removed
	pub fn remove_all(&mut self, ty: BlockType) -> usize {
		let mut removed = 0;
		for index in (0..self.blocks.len()).rev() {
			if self.blocks[index].block_type().as_u8() == ty.as_u8() {
				self.blocks.remove(index);
				removed += 1;
			}
		}

		removed
	}

	/// Decode the `STREAMINFO` block
	///
	/// # Errors
	///
	/// * The `STREAMINFO` block was removed
	/// * See [`StreamInfo::parse`]
	pub fn stream_info(&self) -> Result<StreamInfo> {
		match self.find_first(BlockType::StreamInfo) {
			Some((_, block)) => StreamInfo::parse(block.content()),
			None => Err(format_err!("File missing mandatory STREAMINFO block")),
		}
	}

	/// Decode the first `VORBIS_COMMENT` block, if one exists
	///
	/// # Errors
	///
	/// * The block is malformed, see [`VorbisComments::decode`]
	pub fn vorbis_comments(&self) -> Result<Option<VorbisComments>> {
		match self.find_first(BlockType::VorbisComment) {
			Some((_, block)) => VorbisComments::from_block(block, self.parse_options).map(Some),
			None => Ok(None),
		}
	}

	/// Replace the `VORBIS_COMMENT` block with an encoded `tag`
	///
	/// # Errors
	///
	/// * See [`VorbisComments::encode`]
	pub fn set_vorbis_comments(&mut self, tag: &VorbisComments) -> Result<()> {
		self.replace_or_append(tag.to_block()?);
		Ok(())
	}

	/// Decode every `PICTURE` block
	///
	/// Undecodable pictures are skipped, unless using [`ParsingMode::Strict`].
	///
	/// # Errors
	///
	/// * [`ParsingMode::Strict`] and a `PICTURE` block is malformed
	pub fn pictures(&self) -> Result<Vec<Picture>> {
		let parse_mode = self.parse_options.parsing_mode;

		let mut pictures = Vec::new();
		for block in &self.blocks {
			let MetadataBlock::Picture(content) = block else {
				continue;
			};

			match Picture::from_flac_bytes(content, parse_mode) {
				Ok(picture) => pictures.push(picture),
				Err(e) => {
					if parse_mode == ParsingMode::Strict {
						return Err(e);
					}

					log::warn!("Unable to read FLAC picture block, discarding");
				},
			}
		}

		Ok(pictures)
	}

	/// Write the full stream to `writer`
	///
	/// # Errors
	///
	/// * The first block is not `STREAMINFO`
	/// * A block is too large for its header, see [`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData)
	/// * `writer` fails
	pub fn dump_to<W>(&self, writer: &mut W) -> Result<()>
	where
		W: std::io::Write,
	{
		write::write_to(self, writer)
	}

	/// Replace the contents of `file` with this stream
	///
	/// # Errors
	///
	/// * See [`FlacContainer::dump_to`]
	/// * `file` can't be rewound, truncated, or written to
	pub fn save_to<F>(&self, file: &mut F) -> Result<()>
	where
		F: FileLike,
		FlacMetaError: From<<F as Truncate>::Error>,
	{
		write::save_to(self, file)
	}

	/// Replace the contents of the file at `path` with this stream
	///
	/// # Errors
	///
	/// * [`WriteOptions::respect_read_only`] and `path` is read-only
	/// * See [`FlacContainer::save_to`]
	pub fn save_to_path<P>(&self, path: P, write_options: WriteOptions) -> Result<()>
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref();

		if write_options.respect_read_only && std::fs::metadata(path)?.permissions().readonly() {
			log::warn!("Refusing to write to read-only file: {}", path.display());
			return Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied).into());
		}

		let mut file = OpenOptions::new().read(true).write(true).open(path)?;
		self.save_to(&mut file)
	}
}
