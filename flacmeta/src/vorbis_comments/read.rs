use super::VorbisComments;
use crate::config::{ParseOptions, ParsingMode};
use crate::error::Result;
use crate::macros::{decode_err, try_vec};
use crate::util::text::utf8_decode;

use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};

impl VorbisComments {
	/// Decode a `VORBIS_COMMENT` block payload
	///
	/// All lengths are little-endian `u32`s, unlike the rest of a FLAC file.
	///
	/// # Errors
	///
	/// * Any length exceeds the remaining payload
	/// * The vendor string or a comment is not valid UTF-8
	/// * [`ParsingMode::Strict`] and a comment has no `=` separator
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::config::ParseOptions;
	/// use flacmeta::vorbis_comments::VorbisComments;
	///
	/// # fn main() -> flacmeta::error::Result<()> {
	/// let mut tag = VorbisComments::new();
	/// tag.set("TITLE", "Foo title");
	///
	/// let decoded = VorbisComments::decode(&tag.encode()?, ParseOptions::new())?;
	/// assert_eq!(decoded.get("TITLE"), Some("Foo title"));
	/// # Ok(()) }
	/// ```
	pub fn decode(mut content: &[u8], parse_options: ParseOptions) -> Result<Self> {
		let data = &mut content;

		let vendor_bytes = read_string_bytes(data)?;
		let Ok(vendor) = utf8_decode(vendor_bytes) else {
			decode_err!(@BAIL "Vendor string is not valid UTF-8");
		};

		if data.len() < 4 {
			decode_err!(@BAIL "Block ended before the comment count");
		}

		let number_of_items = data.read_u32::<LittleEndian>()?;

		// Every comment needs at least its 4 byte length
		if u64::from(number_of_items) > (data.len() >> 2) as u64 {
			decode_err!(@BAIL "Comment count exceeds the block length");
		}

		let mut tag = VorbisComments {
			vendor,
			comments: Vec::with_capacity(number_of_items as usize),
		};

		for _ in 0..number_of_items {
			let comment_bytes = read_string_bytes(data)?;
			let Ok(comment) = utf8_decode(comment_bytes) else {
				decode_err!(@BAIL "Comment is not valid UTF-8");
			};

			if !comment.contains('=') {
				if parse_options.parsing_mode == ParsingMode::Strict {
					decode_err!(@BAIL "Comment is missing a `=` separator");
				}

				log::warn!("No separator found in comment, keeping it untouched");
			}

			tag.comments.push(comment);
		}

		if !data.is_empty() {
			log::debug!("Ignoring {} trailing bytes in Vorbis comments block", data.len());
		}

		Ok(tag)
	}
}

// A little-endian u32 length followed by that many bytes
fn read_string_bytes(data: &mut &[u8]) -> Result<Vec<u8>> {
	if data.len() < 4 {
		decode_err!(@BAIL "Block ended before a string length");
	}

	let len = data.read_u32::<LittleEndian>()?;
	if len as usize > data.len() {
		decode_err!(@BAIL "String length exceeds the block length");
	}

	let mut bytes = try_vec![0; len as usize];
	data.read_exact(&mut bytes)?;

	Ok(bytes)
}
