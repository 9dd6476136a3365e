use crate::error::Result;
use crate::macros::{err, format_err, try_vec};

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

pub(crate) const BLOCK_ID_STREAMINFO: u8 = 0;
pub(crate) const BLOCK_ID_VORBIS_COMMENTS: u8 = 4;
pub(crate) const BLOCK_ID_PICTURE: u8 = 6;

// The 24-bit length field of a block header
const MAX_BLOCK_SIZE: usize = 0x00FF_FFFF;

/// The type of a FLAC metadata block
///
/// Only the block types flacmeta interprets have their own variant, every other type is kept as
/// [`BlockType::Other`] and passed through untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BlockType {
	/// `STREAMINFO`, always the first block in a stream
	StreamInfo,
	/// `VORBIS_COMMENT`
	VorbisComment,
	/// `PICTURE`
	Picture,
	/// Any other block type (`PADDING`, `APPLICATION`, `SEEKTABLE`, `CUESHEET`, ...)
	///
	/// Codes with a variant of their own are never stored here by flacmeta. Comparisons between
	/// types should go through [`BlockType::as_u8`], which treats `Other(4)` and `VorbisComment` alike.
	Other(u8),
}

impl BlockType {
	/// Get a `BlockType` from the low 7 bits of a block header
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::flac::BlockType;
	///
	/// assert_eq!(BlockType::from_u8(4), BlockType::VorbisComment);
	/// assert_eq!(BlockType::from_u8(1), BlockType::Other(1));
	/// ```
	pub fn from_u8(byte: u8) -> Self {
		match byte & 0x7F {
			BLOCK_ID_STREAMINFO => Self::StreamInfo,
			BLOCK_ID_VORBIS_COMMENTS => Self::VorbisComment,
			BLOCK_ID_PICTURE => Self::Picture,
			other => Self::Other(other),
		}
	}

	/// Get the block type code written in a block header
	pub fn as_u8(self) -> u8 {
		match self {
			Self::StreamInfo => BLOCK_ID_STREAMINFO,
			Self::VorbisComment => BLOCK_ID_VORBIS_COMMENTS,
			Self::Picture => BLOCK_ID_PICTURE,
			Self::Other(other) => other & 0x7F,
		}
	}
}

/// A single FLAC metadata block
///
/// Every variant holds the block's serialized payload, without the 4 byte block header. The header
/// is recreated on write, so the `last-metadata-block` flag and length are always consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataBlock {
	/// A `STREAMINFO` block, see [`StreamInfo`](crate::flac::StreamInfo)
	StreamInfo(Vec<u8>),
	/// A `VORBIS_COMMENT` block, see [`VorbisComments`](crate::vorbis_comments::VorbisComments)
	VorbisComment(Vec<u8>),
	/// A `PICTURE` block, see [`Picture`](crate::picture::Picture)
	Picture(Vec<u8>),
	/// Any other block, kept as raw bytes
	Other {
		/// The block type code
		ty: u8,
		/// The raw block payload
		content: Vec<u8>,
	},
}

impl MetadataBlock {
	/// Create a block of type `ty` from its payload
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::flac::{BlockType, MetadataBlock};
	///
	/// let padding = MetadataBlock::new(BlockType::Other(1), vec![0; 16]);
	/// assert_eq!(padding.block_type(), BlockType::Other(1));
	/// assert_eq!(padding.content().len(), 16);
	/// ```
	pub fn new(ty: BlockType, content: Vec<u8>) -> Self {
		match ty {
			BlockType::StreamInfo => Self::StreamInfo(content),
			BlockType::VorbisComment => Self::VorbisComment(content),
			BlockType::Picture => Self::Picture(content),
			BlockType::Other(ty) => match BlockType::from_u8(ty) {
				BlockType::Other(ty) => Self::Other { ty, content },
				known => Self::new(known, content),
			},
		}
	}

	/// The type of this block
	pub fn block_type(&self) -> BlockType {
		match self {
			Self::StreamInfo(_) => BlockType::StreamInfo,
			Self::VorbisComment(_) => BlockType::VorbisComment,
			Self::Picture(_) => BlockType::Picture,
			Self::Other { ty, .. } => BlockType::from_u8(*ty),
		}
	}

	/// The serialized payload of this block
	pub fn content(&self) -> &[u8] {
		match self {
			Self::StreamInfo(content)
			| Self::VorbisComment(content)
			| Self::Picture(content)
			| Self::Other { content, .. } => content,
		}
	}

	/// Reads a block, returning it along with its `last-metadata-block` flag
	///
	/// `data` is expected to be the remainder of an in-memory file, so a block claiming to be
	/// larger than what is left can be rejected before allocating.
	pub(crate) fn read(data: &mut &[u8]) -> Result<(Self, bool)> {
		if data.len() < 4 {
			return Err(format_err!("File ended before the last metadata block"));
		}

		let byte = data.read_u8()?;
		let last = (byte & 0x80) != 0;
		let ty = BlockType::from_u8(byte);

		let size = data.read_u24::<BigEndian>()?;
		log::trace!("Reading FLAC block, type: {ty:?}, size: {size}");

		if size as usize > data.len() {
			return Err(format_err!("Block length exceeds the end of the file"));
		}

		let mut content = try_vec![0; size as usize];
		data.read_exact(&mut content)?;

		Ok((Self::new(ty, content), last))
	}

	pub(crate) fn write_to<W>(&self, writer: &mut W, last: bool) -> Result<()>
	where
		W: Write,
	{
		let content = self.content();
		verify_size(content)?;

		let mut byte = self.block_type().as_u8();
		if last {
			byte |= 0x80;
		}

		writer.write_u8(byte)?;
		writer.write_u24::<BigEndian>(content.len() as u32)?;
		writer.write_all(content)?;

		log::trace!(
			"Wrote a block (ty: {:?}, size: {}, last: {last})",
			self.block_type(),
			content.len()
		);

		Ok(())
	}
}

/// Ensure `content` fits in the 24-bit length of a block header
pub(crate) fn verify_size(content: &[u8]) -> Result<()> {
	if content.len() > MAX_BLOCK_SIZE {
		err!(TooMuchData);
	}

	Ok(())
}
