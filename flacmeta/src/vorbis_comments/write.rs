use super::VorbisComments;
use crate::error::Result;
use crate::macros::err;

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

impl VorbisComments {
	/// Encode into a `VORBIS_COMMENT` block payload
	///
	/// # Errors
	///
	/// * The vendor string, a comment, or the comment count doesn't fit in a `u32`
	pub fn encode(&self) -> Result<Vec<u8>> {
		let mut out = Vec::new();

		write_string(&mut out, &self.vendor)?;

		let Ok(count) = u32::try_from(self.comments.len()) else {
			err!(TooMuchData);
		};
		out.write_u32::<LittleEndian>(count)?;

		for comment in &self.comments {
			write_string(&mut out, comment)?;
		}

		Ok(out)
	}
}

fn write_string<W>(writer: &mut W, value: &str) -> Result<()>
where
	W: Write,
{
	let Ok(len) = u32::try_from(value.len()) else {
		err!(TooMuchData);
	};

	writer.write_u32::<LittleEndian>(len)?;
	writer.write_all(value.as_bytes())?;

	Ok(())
}
