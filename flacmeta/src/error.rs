//! Contains the errors that can arise within flacmeta
//!
//! The primary error is [`FlacMetaError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, FlacMetaError>`
pub type Result<T> = std::result::Result<T, FlacMetaError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Container related errors
	/// The container structure is invalid
	///
	/// This covers a missing `fLaC` marker, a first block that isn't `STREAMINFO`, and
	/// blocks whose framing doesn't fit within the file.
	Format(FormatError),
	/// A Vorbis comments block is present, but malformed
	Decode(DecodeError),
	/// A requested item is not present in the file
	NotFound(&'static str),

	// Data related errors
	/// Attempting to read/write an abnormally large amount of data
	TooMuchData,
	/// Expected the data to be a different size than provided
	///
	/// This occurs when the size of an item is written as one value, but that size is either too
	/// big or small to be valid within the bounds of that item.
	SizeMismatch,
	/// Provided an invalid picture
	NotAPicture,

	// Conversions for external errors
	/// Unable to convert bytes to a String
	StringFromUtf8(std::string::FromUtf8Error),
	/// Unable to convert bytes to a str
	StrFromUtf8(std::str::Utf8Error),
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
	/// This should **never** be encountered
	Infallible(std::convert::Infallible),
}

/// An error that arises from an invalid FLAC container structure
pub struct FormatError {
	description: &'static str,
}

impl FormatError {
	/// Create a `FormatError` from a description
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::error::FormatError;
	///
	/// let error = FormatError::new("File missing \"fLaC\" stream marker");
	/// assert_eq!(error.description(), "File missing \"fLaC\" stream marker");
	/// ```
	#[must_use]
	pub const fn new(description: &'static str) -> Self {
		Self { description }
	}

	/// Returns the error description
	pub fn description(&self) -> &str {
		self.description
	}
}

impl Debug for FormatError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "FLAC: {:?}", self.description)
	}
}

impl Display for FormatError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "FLAC: {}", self.description)
	}
}

/// An error that arises while decoding a Vorbis comments block
pub struct DecodeError {
	description: &'static str,
}

impl DecodeError {
	/// Create a `DecodeError` from a description
	#[must_use]
	pub const fn new(description: &'static str) -> Self {
		Self { description }
	}

	/// Returns the error description
	pub fn description(&self) -> &str {
		self.description
	}
}

impl Debug for DecodeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Vorbis comments: {:?}", self.description)
	}
}

impl Display for DecodeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Vorbis comments: {}", self.description)
	}
}

/// Errors that could occur within flacmeta
pub struct FlacMetaError {
	pub(crate) kind: ErrorKind,
}

impl FlacMetaError {
	/// Create a `FlacMetaError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::error::{ErrorKind, FlacMetaError};
	///
	/// let not_a_picture = FlacMetaError::new(ErrorKind::NotAPicture);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::error::{ErrorKind, FlacMetaError};
	///
	/// let no_lyrics = FlacMetaError::new(ErrorKind::NotFound("No lyrics found in file"));
	/// if let ErrorKind::NotFound(what) = no_lyrics.kind() {
	/// 	println!("{what}");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for FlacMetaError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::StringFromUtf8(ref err) => Some(err),
			ErrorKind::StrFromUtf8(ref err) => Some(err),
			ErrorKind::Io(ref err) => Some(err),
			ErrorKind::Alloc(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for FlacMetaError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<FormatError> for FlacMetaError {
	fn from(input: FormatError) -> Self {
		Self {
			kind: ErrorKind::Format(input),
		}
	}
}

impl From<DecodeError> for FlacMetaError {
	fn from(input: DecodeError) -> Self {
		Self {
			kind: ErrorKind::Decode(input),
		}
	}
}

impl From<std::io::Error> for FlacMetaError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<std::string::FromUtf8Error> for FlacMetaError {
	fn from(input: std::string::FromUtf8Error) -> Self {
		Self {
			kind: ErrorKind::StringFromUtf8(input),
		}
	}
}

impl From<std::str::Utf8Error> for FlacMetaError {
	fn from(input: std::str::Utf8Error) -> Self {
		Self {
			kind: ErrorKind::StrFromUtf8(input),
		}
	}
}

impl From<TryReserveError> for FlacMetaError {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}

impl From<std::convert::Infallible> for FlacMetaError {
	fn from(input: std::convert::Infallible) -> Self {
		Self {
			kind: ErrorKind::Infallible(input),
		}
	}
}

impl Display for FlacMetaError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::StringFromUtf8(ref err) => write!(f, "{err}"),
			ErrorKind::StrFromUtf8(ref err) => write!(f, "{err}"),
			ErrorKind::Io(ref err) => write!(f, "{err}"),
			ErrorKind::Alloc(ref err) => write!(f, "{err}"),

			ErrorKind::Format(ref format_err) => write!(f, "{format_err}"),
			ErrorKind::Decode(ref decode_err) => write!(f, "{decode_err}"),
			ErrorKind::NotFound(message) => write!(f, "{message}"),
			ErrorKind::NotAPicture => write!(f, "Picture: Encountered invalid data"),
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read/write an abnormally large amount of data"
			),
			ErrorKind::SizeMismatch => write!(
				f,
				"Encountered an invalid item size, either too big or too small to be valid"
			),

			ErrorKind::Infallible(_) => write!(f, "A expected condition was not upheld"),
		}
	}
}
