//! Format-agnostic picture handling, and the FLAC `PICTURE` block layout

use crate::config::ParsingMode;
use crate::error::Result;
use crate::flac::{MetadataBlock, verify_size};
use crate::macros::{err, try_vec};
use crate::util::text::utf8_decode_str;

use std::fmt::{Debug, Display, Formatter};

// JPEG markers: baseline, extended sequential and progressive frame headers, then start of scan
const SOF0: u8 = 0xC0;
const SOF1: u8 = 0xC1;
const SOF2: u8 = 0xC2;
const SOS: u8 = 0xDA;

/// MIME types for pictures.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum MimeType {
	/// JPEG image, the only type flacmeta embeds
	Jpeg,
	/// PNG image
	Png,
	/// Any other MIME type found in a `PICTURE` block
	Unknown(String),
}

impl MimeType {
	/// Get a `MimeType` from a string, ignoring ASCII case
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::picture::MimeType;
	///
	/// assert_eq!(MimeType::from_str("image/JPEG"), MimeType::Jpeg);
	/// assert_eq!(
	/// 	MimeType::from_str("image/webp"),
	/// 	MimeType::Unknown(String::from("image/webp"))
	/// );
	/// ```
	#[must_use]
	#[allow(clippy::should_implement_trait)] // Infallible in contrast to FromStr
	pub fn from_str(mime_type: &str) -> Self {
		let is = |name: &str| mime_type.eq_ignore_ascii_case(name);

		if is("image/jpeg") || is("image/jpg") {
			Self::Jpeg
		} else if is("image/png") {
			Self::Png
		} else {
			Self::Unknown(mime_type.to_owned())
		}
	}

	/// The string written to a `PICTURE` block
	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			MimeType::Jpeg => "image/jpeg",
			MimeType::Png => "image/png",
			MimeType::Unknown(unknown) => unknown,
		}
	}
}

impl Display for MimeType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The picture type, according to ID3v2 APIC
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum PictureType {
	Other,
	Icon,
	OtherIcon,
	CoverFront,
	CoverBack,
	Leaflet,
	Media,
	LeadArtist,
	Artist,
	Conductor,
	Band,
	Composer,
	Lyricist,
	RecordingLocation,
	DuringRecording,
	DuringPerformance,
	ScreenCapture,
	BrightFish,
	Illustration,
	BandLogo,
	PublisherLogo,
	Undefined(u8),
}

// Indexed by APIC picture type code
const APIC_PICTURE_TYPES: [PictureType; 21] = [
	PictureType::Other,
	PictureType::Icon,
	PictureType::OtherIcon,
	PictureType::CoverFront,
	PictureType::CoverBack,
	PictureType::Leaflet,
	PictureType::Media,
	PictureType::LeadArtist,
	PictureType::Artist,
	PictureType::Conductor,
	PictureType::Band,
	PictureType::Composer,
	PictureType::Lyricist,
	PictureType::RecordingLocation,
	PictureType::DuringRecording,
	PictureType::DuringPerformance,
	PictureType::ScreenCapture,
	PictureType::BrightFish,
	PictureType::Illustration,
	PictureType::BandLogo,
	PictureType::PublisherLogo,
];

impl PictureType {
	/// The APIC code of this picture type
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::picture::PictureType;
	///
	/// assert_eq!(PictureType::CoverFront.as_u8(), 3);
	/// assert_eq!(PictureType::Undefined(42).as_u8(), 42);
	/// ```
	pub fn as_u8(&self) -> u8 {
		match self {
			Self::Undefined(code) => *code,
			known => APIC_PICTURE_TYPES
				.iter()
				.position(|ty| ty == known)
				.map_or(0, |code| code as u8),
		}
	}

	/// Get a `PictureType` from its APIC code
	pub fn from_u8(code: u8) -> Self {
		APIC_PICTURE_TYPES
			.get(usize::from(code))
			.copied()
			.unwrap_or(Self::Undefined(code))
	}
}

/// Information about a [`Picture`]
///
/// These are the image parameters stored alongside the data in a `PICTURE` block.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct PictureInformation {
	/// The picture's width in pixels
	pub width: u32,
	/// The picture's height in pixels
	pub height: u32,
	/// The picture's color depth in bits per pixel
	pub color_depth: u32,
	/// The number of colors used, 0 for non-indexed pictures
	pub num_colors: u32,
}

impl PictureInformation {
	/// Attempt to extract [`PictureInformation`] from a JPEG
	///
	/// The segments are walked until the first baseline, extended sequential, or progressive frame
	/// header.
	///
	/// # Errors
	///
	/// * `data` is not a JPEG image
	/// * `data` does not contain a frame header before the start of scan
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::picture::PictureInformation;
	///
	/// assert!(PictureInformation::from_jpeg(b"not a jpeg at all").is_err());
	/// ```
	pub fn from_jpeg(data: &[u8]) -> Result<Self> {
		let Some(mut segments) = data.strip_prefix(&[0xFF, 0xD8]) else {
			err!(NotAPicture);
		};

		loop {
			let [0xFF, marker, len_hi, len_lo, rest @ ..] = segments else {
				err!(NotAPicture);
			};

			if *marker == SOS {
				log::debug!("Reached the start of scan without a frame header");
				err!(NotAPicture);
			}

			// The length includes its own two bytes
			let Some(body_len) = u16::from_be_bytes([*len_hi, *len_lo]).checked_sub(2) else {
				err!(NotAPicture);
			};

			let Some((body, next)) = rest.split_at_checked(usize::from(body_len)) else {
				err!(NotAPicture);
			};

			if let (SOF0 | SOF1 | SOF2, [precision, h_hi, h_lo, w_hi, w_lo, components, ..]) =
				(*marker, body)
			{
				return Ok(Self {
					width: u32::from(u16::from_be_bytes([*w_hi, *w_lo])),
					height: u32::from(u16::from_be_bytes([*h_hi, *h_lo])),
					color_depth: u32::from(*precision) * u32::from(*components),
					num_colors: 0,
				});
			}

			segments = next;
		}
	}
}

/// Represents a picture.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Picture {
	/// The picture type according to ID3v2 APIC
	pub(crate) pic_type: PictureType,
	/// The picture's mimetype
	pub(crate) mime_type: Option<MimeType>,
	/// The picture's description
	pub(crate) description: Option<String>,
	/// The picture's dimensions and color information
	pub(crate) information: PictureInformation,
	/// The binary data of the picture
	pub(crate) data: Vec<u8>,
}

impl Debug for Picture {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Picture")
			.field("pic_type", &self.pic_type)
			.field("mime_type", &self.mime_type)
			.field("description", &self.description)
			.field("information", &self.information)
			.field("data", &format!("<{} bytes>", self.data.len()))
			.finish()
	}
}

impl Picture {
	/// Create a front cover [`Picture`] from JPEG data
	///
	/// The dimensions and color depth are read from the JPEG header.
	///
	/// # Errors
	///
	/// * `data` is not a JPEG with a readable frame header, see [`PictureInformation::from_jpeg`]
	pub fn front_cover_jpeg(data: Vec<u8>, description: &str) -> Result<Self> {
		let information = PictureInformation::from_jpeg(&data)?;

		Ok(Self {
			pic_type: PictureType::CoverFront,
			mime_type: Some(MimeType::Jpeg),
			description: (!description.is_empty()).then(|| description.to_owned()),
			information,
			data,
		})
	}

	/// Returns the [`PictureType`]
	pub fn pic_type(&self) -> PictureType {
		self.pic_type
	}

	/// Returns the [`MimeType`]
	pub fn mime_type(&self) -> Option<&MimeType> {
		self.mime_type.as_ref()
	}

	/// Returns the description
	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	/// Returns the [`PictureInformation`]
	pub fn information(&self) -> PictureInformation {
		self.information
	}

	/// Returns the [`Picture`] data as borrowed bytes.
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// Consumes a [`Picture`], returning the data as [`Vec`] without clones or allocation.
	pub fn into_data(self) -> Vec<u8> {
		self.data
	}

	/// Convert a [`Picture`] to a `PICTURE` block payload
	///
	/// NOTE: This does not include the block header.
	///
	/// # Errors
	///
	/// * The MIME type, description, or data length doesn't fit in a `u32`
	pub fn as_flac_bytes(&self) -> Result<Vec<u8>> {
		let mime_type = self.mime_type.as_ref().map_or("", MimeType::as_str);
		let description = self.description.as_deref().unwrap_or_default();

		let mut out = Vec::with_capacity(32 + mime_type.len() + description.len() + self.data.len());
		out.extend(u32::from(self.pic_type.as_u8()).to_be_bytes());
		write_sized(&mut out, mime_type.as_bytes())?;
		write_sized(&mut out, description.as_bytes())?;

		let PictureInformation {
			width,
			height,
			color_depth,
			num_colors,
		} = self.information;
		for field in [width, height, color_depth, num_colors] {
			out.extend(field.to_be_bytes());
		}

		write_sized(&mut out, &self.data)?;
		Ok(out)
	}

	/// Get a [`Picture`] from a `PICTURE` block payload
	///
	/// # Errors
	///
	/// This function will return [`NotAPicture`](crate::error::ErrorKind::NotAPicture) if
	/// at any point it's unable to parse the data
	pub fn from_flac_bytes(mut content: &[u8], parse_mode: ParsingMode) -> Result<Self> {
		let reader = &mut content;

		let pic_type = read_u32(reader)?;

		// APIC codes are a single byte
		if pic_type > 255 && parse_mode == ParsingMode::Strict {
			err!(NotAPicture);
		}

		let mime_type = match utf8_decode_str(read_sized(reader)?)? {
			"" => None,
			mime_type => Some(MimeType::from_str(mime_type)),
		};

		let description = match utf8_decode_str(read_sized(reader)?) {
			Ok("") => None,
			Ok(description) => Some(description.to_owned()),
			Err(e) if parse_mode == ParsingMode::Strict => return Err(e),
			Err(_) => {
				log::warn!("Picture description is not valid UTF-8, discarding");
				None
			},
		};

		let information = PictureInformation {
			width: read_u32(reader)?,
			height: read_u32(reader)?,
			color_depth: read_u32(reader)?,
			num_colors: read_u32(reader)?,
		};

		let data_len = read_u32(reader)? as usize;
		let Some(picture_data) = reader.get(..data_len) else {
			err!(NotAPicture);
		};

		let mut data = try_vec![0; data_len];
		data.copy_from_slice(picture_data);

		Ok(Self {
			pic_type: PictureType::from_u8(pic_type as u8),
			mime_type,
			description,
			information,
			data,
		})
	}

	/// Encode into a new `PICTURE` block
	///
	/// # Errors
	///
	/// * The payload is too large for a block header, see [`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData)
	/// * See [`Picture::as_flac_bytes`]
	pub fn to_block(&self) -> Result<MetadataBlock> {
		let content = self.as_flac_bytes()?;
		verify_size(&content)?;

		Ok(MetadataBlock::Picture(content))
	}
}

fn write_sized(out: &mut Vec<u8>, value: &[u8]) -> Result<()> {
	let Ok(len) = u32::try_from(value.len()) else {
		err!(TooMuchData);
	};

	out.extend(len.to_be_bytes());
	out.extend(value);
	Ok(())
}

fn read_u32(reader: &mut &[u8]) -> Result<u32> {
	let Some((bytes, rest)) = reader.split_first_chunk::<4>() else {
		err!(NotAPicture);
	};

	*reader = rest;
	Ok(u32::from_be_bytes(*bytes))
}

// A u32 length followed by that many bytes
fn read_sized<'a>(reader: &mut &'a [u8]) -> Result<&'a [u8]> {
	let len = read_u32(reader)? as usize;
	let Some((value, rest)) = reader.split_at_checked(len) else {
		err!(SizeMismatch);
	};

	*reader = rest;
	Ok(value)
}
