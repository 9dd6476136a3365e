use super::FlacContainer;
use super::block::BlockType;
use crate::error::{FlacMetaError, Result};
use crate::macros::format_err;
use crate::util::io::{FileLike, Truncate};

use std::io::Write;

pub(super) fn write_to<W>(container: &FlacContainer, writer: &mut W) -> Result<()>
where
	W: Write,
{
	let Some(first) = container.blocks.first() else {
		format_err!(@BAIL "File missing mandatory STREAMINFO block");
	};

	if first.block_type() != BlockType::StreamInfo {
		format_err!(@BAIL "STREAMINFO must be the first metadata block");
	}

	writer.write_all(b"fLaC")?;

	let last_index = container.blocks.len() - 1;
	for (index, block) in container.blocks.iter().enumerate() {
		block.write_to(writer, index == last_index)?;
	}

	writer.write_all(&container.audio_data)?;
	Ok(())
}

pub(super) fn save_to<F>(container: &FlacContainer, file: &mut F) -> Result<()>
where
	F: FileLike,
	FlacMetaError: From<<F as Truncate>::Error>,
{
	// Serialize first, so nothing is written if encoding fails
	let mut file_bytes = Vec::new();
	write_to(container, &mut file_bytes)?;

	file.rewind()?;
	file.truncate(0)?;
	file.write_all(&file_bytes)?;
	file.flush()?;

	log::debug!("Wrote {} bytes", file_bytes.len());
	Ok(())
}
