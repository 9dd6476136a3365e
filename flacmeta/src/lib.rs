//! Read and write FLAC metadata.
//!
//! flacmeta edits the Vorbis comments and cover art of FLAC files in place, and reads the stream
//! parameters stored in `STREAMINFO`. Audio frames and unrelated metadata blocks are never touched.
//!
//! # Examples
//!
//! ## Writing track metadata
//!
//! ```rust,no_run
//! # fn main() -> flacmeta::error::Result<()> {
//! use flacmeta::metadata::{Metadata, embed_metadata_with_cover_data};
//!
//! let cover = std::fs::read("cover.jpg")?;
//! let metadata = Metadata {
//! 	title: String::from("Foo title"),
//! 	album: String::from("Bar album"),
//! 	track_number: 1,
//! 	..Metadata::default()
//! };
//!
//! embed_metadata_with_cover_data("test.flac", &metadata, &cover)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Reading the audio quality
//!
//! ```rust,no_run
//! # fn main() -> flacmeta::error::Result<()> {
//! use flacmeta::flac::read_audio_quality;
//!
//! let quality = read_audio_quality("test.flac")?;
//! println!("{} bit / {} Hz", quality.bit_depth, quality.sample_rate);
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with blocks directly
//!
//! ```rust,no_run
//! # fn main() -> flacmeta::error::Result<()> {
//! use flacmeta::config::{ParseOptions, WriteOptions};
//! use flacmeta::flac::FlacContainer;
//!
//! let mut container = FlacContainer::read_from_path("test.flac", ParseOptions::new())?;
//!
//! let mut tag = container.vorbis_comments()?.unwrap_or_default();
//! tag.set("GENRE", "Jazz");
//! container.set_vorbis_comments(&tag)?;
//!
//! container.save_to_path("test.flac", WriteOptions::default())?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod flac;
pub mod lyrics;
pub(crate) mod macros;
pub mod metadata;
pub mod picture;
mod util;
pub mod vorbis_comments;

pub use util::io;

pub use flac::{AudioQuality, read_audio_quality};
pub use lyrics::{embed_lyrics, extract_lyrics};
pub use metadata::{
	Metadata, embed_metadata, embed_metadata_with_cover_data, read_metadata,
};
