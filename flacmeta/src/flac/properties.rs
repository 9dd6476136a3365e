use super::block::BLOCK_ID_STREAMINFO;
use crate::error::Result;
use crate::macros::format_err;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Duration;

use byteorder::{BigEndian, ReadBytesExt};

/// The fixed size of a `STREAMINFO` payload
pub const STREAMINFO_SIZE: usize = 34;

/// The audio quality of a FLAC stream
///
/// This is the part of `STREAMINFO` needed to describe a file's quality. See [`StreamInfo`] for
/// the complete block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct AudioQuality {
	/// Bits per sample (usually 16 or 24 bit)
	pub bit_depth: u8,
	/// Sample rate (Hz)
	pub sample_rate: u32,
}

impl AudioQuality {
	/// Decode the quality fields from a raw `STREAMINFO` payload
	///
	/// Bytes 10 to 13 of the payload are laid out as:
	///
	/// ```text
	/// [SSSS SSSS] [SSSS SSSS] [SSSS CCCB] [BBBB TTTT]
	/// ```
	///
	/// Where `S` is the sample rate (20 bits), `C` is the channel count minus one (3 bits), `B` is the
	/// bit depth minus one (5 bits), and `T` is the start of the total sample count.
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::flac::AudioQuality;
	///
	/// let mut stream_info = [0; 34];
	/// stream_info[10..14].copy_from_slice(&[0x0A, 0xC4, 0x42, 0xF0]);
	///
	/// let quality = AudioQuality::from_stream_info(&stream_info);
	/// assert_eq!(quality.sample_rate, 44100);
	/// assert_eq!(quality.bit_depth, 16);
	/// ```
	pub fn from_stream_info(stream_info: &[u8; STREAMINFO_SIZE]) -> Self {
		let sample_rate = (u32::from(stream_info[10]) << 12)
			| (u32::from(stream_info[11]) << 4)
			| (u32::from(stream_info[12]) >> 4);

		// The stored value is the bit depth minus one, the whole 5-bit field is incremented
		let bit_depth = (((stream_info[12] & 0x01) << 4) | (stream_info[13] >> 4)) + 1;

		Self {
			bit_depth,
			sample_rate,
		}
	}
}

/// Read the [`AudioQuality`] of the FLAC file at `path`
///
/// Only the stream marker and the first metadata block are read, the rest of the file is never
/// touched.
///
/// # Errors
///
/// * The file could not be opened or read
/// * The file doesn't start with a `fLaC` marker
/// * The first block isn't `STREAMINFO`
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> flacmeta::error::Result<()> {
/// let quality = flacmeta::flac::read_audio_quality("foo.flac")?;
/// println!("{} bit / {} Hz", quality.bit_depth, quality.sample_rate);
/// # Ok(()) }
/// ```
pub fn read_audio_quality<P>(path: P) -> Result<AudioQuality>
where
	P: AsRef<Path>,
{
	let file = File::open(path)?;
	read_audio_quality_from(&mut BufReader::new(file))
}

/// Read the [`AudioQuality`] from a reader positioned at the start of a FLAC stream
///
/// # Errors
///
/// See [`read_audio_quality`]
pub fn read_audio_quality_from<R>(reader: &mut R) -> Result<AudioQuality>
where
	R: Read,
{
	let mut marker = [0; 4];
	reader.read_exact(&mut marker)?;

	if &marker != b"fLaC" {
		return Err(format_err!("File missing \"fLaC\" stream marker"));
	}

	// Bit 7 is the `last-metadata-block` flag, bits 0-6 are the block type
	let mut header = [0; 4];
	reader.read_exact(&mut header)?;

	if header[0] & 0x7F != BLOCK_ID_STREAMINFO {
		return Err(format_err!("File missing mandatory STREAMINFO block"));
	}

	let mut stream_info = [0; STREAMINFO_SIZE];
	reader.read_exact(&mut stream_info)?;

	let quality = AudioQuality::from_stream_info(&stream_info);
	log::debug!(
		"Read audio quality: {} bit, {} Hz",
		quality.bit_depth,
		quality.sample_rate
	);

	Ok(quality)
}

/// A FLAC file's `STREAMINFO` block
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct StreamInfo {
	pub(crate) min_block_size: u16,
	pub(crate) max_block_size: u16,
	pub(crate) min_frame_size: u32,
	pub(crate) max_frame_size: u32,
	pub(crate) sample_rate: u32,
	pub(crate) channels: u8,
	pub(crate) bit_depth: u8,
	pub(crate) total_samples: u64,
	pub(crate) signature: u128,
}

impl StreamInfo {
	/// Parse a `STREAMINFO` payload
	///
	/// # Errors
	///
	/// * `content` is shorter than 34 bytes
	pub fn parse(content: &[u8]) -> Result<Self> {
		if content.len() < STREAMINFO_SIZE {
			return Err(format_err!("STREAMINFO block is too short"));
		}

		let stream_info = &mut &content[..STREAMINFO_SIZE];

		let min_block_size = stream_info.read_u16::<BigEndian>()?;
		let max_block_size = stream_info.read_u16::<BigEndian>()?;
		let min_frame_size = stream_info.read_u24::<BigEndian>()?;
		let max_frame_size = stream_info.read_u24::<BigEndian>()?;

		// Read 8 bytes
		// Sample rate (20 bits)
		// Number of channels (3 bits)
		// Bits per sample (5 bits)
		// Total samples (36 bits)
		let info = stream_info.read_u64::<BigEndian>()?;

		let sample_rate = (info >> 44) as u32;
		let channels = ((info >> 41) & 0b111) as u8 + 1;
		let bit_depth = ((info >> 36) & 0b1_1111) as u8 + 1;
		let total_samples = info & 0x0F_FFFF_FFFF;

		let signature = stream_info.read_u128::<BigEndian>()?;

		Ok(Self {
			min_block_size,
			max_block_size,
			min_frame_size,
			max_frame_size,
			sample_rate,
			channels,
			bit_depth,
			total_samples,
			signature,
		})
	}

	/// Minimum block size (in samples) used in the stream
	pub fn min_block_size(&self) -> u16 {
		self.min_block_size
	}

	/// Maximum block size (in samples) used in the stream
	pub fn max_block_size(&self) -> u16 {
		self.max_block_size
	}

	/// Minimum frame size (in bytes), 0 if unknown
	pub fn min_frame_size(&self) -> u32 {
		self.min_frame_size
	}

	/// Maximum frame size (in bytes), 0 if unknown
	pub fn max_frame_size(&self) -> u32 {
		self.max_frame_size
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// Channel count
	pub fn channels(&self) -> u8 {
		self.channels
	}

	/// Bits per sample (usually 16 or 24 bit)
	pub fn bit_depth(&self) -> u8 {
		self.bit_depth
	}

	/// Total samples per channel, 0 if unknown
	pub fn total_samples(&self) -> u64 {
		self.total_samples
	}

	/// MD5 signature of the unencoded audio data
	pub fn signature(&self) -> u128 {
		self.signature
	}

	/// Duration of the audio
	///
	/// This will be zero if either the sample rate or total sample count is unknown.
	pub fn duration(&self) -> Duration {
		if self.sample_rate == 0 || self.total_samples == 0 {
			return Duration::ZERO;
		}

		let millis = (u128::from(self.total_samples) * 1000) / u128::from(self.sample_rate);
		Duration::from_millis(millis as u64)
	}

	/// The [`AudioQuality`] subset of this block
	pub fn audio_quality(&self) -> AudioQuality {
		AudioQuality {
			bit_depth: self.bit_depth,
			sample_rate: self.sample_rate,
		}
	}
}
