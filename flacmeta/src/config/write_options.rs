/// Options to control how flacmeta writes to a file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct WriteOptions {
	pub(crate) cover_description: &'static str,
	pub(crate) respect_read_only: bool,
}

impl WriteOptions {
	/// Default description for newly embedded cover art
	pub const DEFAULT_COVER_DESCRIPTION: &'static str = "Front Cover";

	/// Creates a new `WriteOptions`, alias for `Default` implementation
	///
	/// See also: [`WriteOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::config::WriteOptions;
	///
	/// let write_options = WriteOptions::new();
	/// ```
	pub const fn new() -> Self {
		Self {
			cover_description: Self::DEFAULT_COVER_DESCRIPTION,
			respect_read_only: true,
		}
	}

	/// Set the description stored in newly embedded `PICTURE` blocks
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::config::WriteOptions;
	///
	/// let options = WriteOptions::new().cover_description("Cover");
	/// ```
	pub fn cover_description(mut self, cover_description: &'static str) -> Self {
		self.cover_description = cover_description;
		self
	}

	/// Whether to refuse writing to files marked as read-only
	///
	/// When `true`, saving to a read-only path will fail with [`std::io::ErrorKind::PermissionDenied`]
	/// before the file is touched.
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::config::WriteOptions;
	///
	/// let options = WriteOptions::new().respect_read_only(false);
	/// ```
	pub fn respect_read_only(mut self, respect_read_only: bool) -> Self {
		self.respect_read_only = respect_read_only;
		self
	}
}

impl Default for WriteOptions {
	/// The default implementation for `WriteOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// WriteOptions {
	///     cover_description: "Front Cover",
	///     respect_read_only: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}
