use std::cell::Cell;

thread_local! {
	static GLOBAL_OPTIONS: Cell<GlobalOptions> = const { Cell::new(GlobalOptions::new()) };
}

/// The allocation limit in effect on the current thread
pub(crate) fn allocation_limit() -> usize {
	GLOBAL_OPTIONS.get().allocation_limit
}

/// Options shared by every operation on the current thread
///
/// Unlike [`ParseOptions`](crate::config::ParseOptions) these are not passed around, they are
/// installed once with [`apply_global_options`].
///
/// # Examples
///
/// ```rust
/// use flacmeta::config::{GlobalOptions, apply_global_options};
///
/// // Cover art in this library can be up to 32 MiB
/// apply_global_options(GlobalOptions::new().allocation_limit(32 * 1024 * 1024));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct GlobalOptions {
	pub(crate) allocation_limit: usize,
}

impl GlobalOptions {
	/// Default allocation limit, 16 MiB
	pub const DEFAULT_ALLOCATION_LIMIT: usize = 16 * 1024 * 1024;

	/// Creates a new `GlobalOptions` with every option at its default
	#[must_use]
	pub const fn new() -> Self {
		Self {
			allocation_limit: Self::DEFAULT_ALLOCATION_LIMIT,
		}
	}

	/// The largest buffer, in bytes, that may be allocated for a single block, comment or picture
	///
	/// Sizes come straight from file data, so this caps what a corrupt or hostile file can make
	/// flacmeta allocate. Anything larger fails with
	/// [`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData).
	pub fn allocation_limit(mut self, allocation_limit: usize) -> Self {
		self.allocation_limit = allocation_limit;
		self
	}
}

impl Default for GlobalOptions {
	fn default() -> Self {
		Self::new()
	}
}

/// Install `options` for the current thread
///
/// Other threads keep their own options.
pub fn apply_global_options(options: GlobalOptions) {
	GLOBAL_OPTIONS.set(options);
}
