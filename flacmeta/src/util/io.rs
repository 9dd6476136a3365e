//! Traits for saving into file-like objects

use crate::error::FlacMetaError;

use std::fs::File;
use std::io::{Cursor, Read, Seek, Write};

/// Shrink a storage object to a new length
///
/// Saving rewrites a stream from the start and then cuts it to the new size, so a shorter
/// result never leaves stale bytes behind. Implementations must leave the object exactly
/// `new_len` bytes long, or saved files end up corrupted.
///
/// # Examples
///
/// ```rust
/// use flacmeta::io::Truncate;
///
/// let mut data = vec![1, 2, 3, 4, 5];
/// Truncate::truncate(&mut data, 3).unwrap();
///
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
pub trait Truncate {
	/// The error returned when truncation fails
	type Error: Into<FlacMetaError>;

	/// Cut the object down to `new_len` bytes
	///
	/// # Errors
	///
	/// Depends on the object, in-memory buffers never fail.
	fn truncate(&mut self, new_len: u64) -> std::result::Result<(), Self::Error>;
}

impl Truncate for File {
	type Error = std::io::Error;

	fn truncate(&mut self, new_len: u64) -> std::result::Result<(), Self::Error> {
		self.set_len(new_len)
	}
}

impl Truncate for Vec<u8> {
	type Error = std::convert::Infallible;

	fn truncate(&mut self, new_len: u64) -> std::result::Result<(), Self::Error> {
		Vec::truncate(self, new_len as usize);
		Ok(())
	}
}

impl<T> Truncate for Cursor<T>
where
	T: Truncate,
{
	type Error = T::Error;

	fn truncate(&mut self, new_len: u64) -> std::result::Result<(), Self::Error> {
		self.get_mut().truncate(new_len)
	}
}

/// Anything a [`FlacContainer`](crate::flac::FlacContainer) can be read from and saved back into
///
/// Implemented for every [`Read`] + [`Write`] + [`Seek`] + [`Truncate`] type, such as a [`File`]
/// or a `Cursor<Vec<u8>>`.
pub trait FileLike: Read + Write + Seek + Truncate {}

impl<T> FileLike for T where T: Read + Write + Seek + Truncate {}
