use super::FlacContainer;
use super::block::{BlockType, MetadataBlock};
use crate::config::{ParseOptions, ParsingMode};
use crate::error::Result;
use crate::macros::format_err;

use std::io::Read;

pub(super) fn verify_flac(data: &mut &[u8]) -> Result<()> {
	if data.len() < 4 || &data[..4] != b"fLaC" {
		format_err!(@BAIL "File missing \"fLaC\" stream marker");
	}

	*data = &data[4..];
	Ok(())
}

pub(super) fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<FlacContainer>
where
	R: Read,
{
	let mut file_bytes = Vec::new();
	reader.read_to_end(&mut file_bytes)?;

	let data = &mut &file_bytes[..];
	verify_flac(data)?;

	let (stream_info, mut last_block) = MetadataBlock::read(data)?;
	if stream_info.block_type() != BlockType::StreamInfo {
		format_err!(@BAIL "File missing mandatory STREAMINFO block");
	}

	log::debug!("File verified to be FLAC");

	let mut blocks = vec![stream_info];
	let mut has_vorbis_comments = false;

	while !last_block {
		let (block, last) = MetadataBlock::read(data)?;
		last_block = last;

		if block.block_type() == BlockType::VorbisComment {
			// "There may be only one VORBIS_COMMENT block in a stream."
			if has_vorbis_comments {
				if parse_options.parsing_mode == ParsingMode::Strict {
					format_err!(@BAIL "Streams are only allowed one Vorbis Comments block per stream");
				}

				log::warn!("Found multiple Vorbis Comments blocks, only the first will be used");
			}

			has_vorbis_comments = true;
		}

		blocks.push(block);
	}

	log::debug!(
		"Read {} metadata blocks, {} bytes of audio data",
		blocks.len(),
		data.len()
	);

	Ok(FlacContainer {
		blocks,
		audio_data: data.to_vec(),
		parse_options,
	})
}
