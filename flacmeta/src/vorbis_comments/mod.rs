//! Vorbis comments, the textual tag block of a FLAC file
//!
//! A Vorbis comments block is a vendor string followed by an ordered list of `KEY=value`
//! strings. See [`VorbisComments`].

mod read;
mod write;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::flac::{MetadataBlock, verify_size};

/// The vendor string used when a file has no Vorbis comments block of its own
pub const DEFAULT_VENDOR: &str = concat!("flacmeta ", env!("CARGO_PKG_VERSION"));

/// The decoded form of a single `VORBIS_COMMENT` block
///
/// Comments are kept as raw `KEY=value` strings in their original order, so a decoded block that
/// is encoded again is identical to the original.
///
/// ## Key matching
///
/// * [`VorbisComments::set`], [`VorbisComments::get_all`], and [`VorbisComments::remove`] compare
///   keys case-insensitively, as the format requires.
/// * [`VorbisComments::get`] is a case-sensitive lookup of the exact `KEY=` prefix. Always use the
///   canonical uppercase key names with it.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct VorbisComments {
	/// An identifier for the encoding software
	pub(crate) vendor: String,
	/// A collection of raw `KEY=value` strings
	pub(crate) comments: Vec<String>,
}

impl Default for VorbisComments {
	fn default() -> Self {
		Self::new()
	}
}

impl VorbisComments {
	/// Create a new empty `VorbisComments`, with [`DEFAULT_VENDOR`] as the vendor string
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::vorbis_comments::{DEFAULT_VENDOR, VorbisComments};
	///
	/// let vorbis_comments = VorbisComments::new();
	/// assert!(vorbis_comments.is_empty());
	/// assert_eq!(vorbis_comments.vendor(), DEFAULT_VENDOR);
	/// ```
	pub fn new() -> Self {
		Self {
			vendor: String::from(DEFAULT_VENDOR),
			comments: Vec::new(),
		}
	}

	/// Returns the vendor string
	pub fn vendor(&self) -> &str {
		&self.vendor
	}

	/// Sets the vendor string
	pub fn set_vendor(&mut self, vendor: String) {
		self.vendor = vendor
	}

	/// The number of comments, including any without a `=` separator
	pub fn len(&self) -> usize {
		self.comments.len()
	}

	/// Whether there are no comments
	pub fn is_empty(&self) -> bool {
		self.comments.is_empty()
	}

	/// Get all items
	///
	/// Returns an [`Iterator`] over the stored key/value pairs. Comments without a `=` separator are
	/// skipped.
	///
	/// ```rust
	/// use flacmeta::vorbis_comments::VorbisComments;
	///
	/// let mut vorbis_comments = VorbisComments::new();
	///
	/// vorbis_comments.push("ARTIST", "Foo artist");
	/// vorbis_comments.push("TITLE", "Bar title");
	///
	/// let mut items = vorbis_comments.items();
	///
	/// assert_eq!(items.next(), Some(("ARTIST", "Foo artist")));
	/// assert_eq!(items.next(), Some(("TITLE", "Bar title")));
	/// ```
	pub fn items(&self) -> impl Iterator<Item = (&str, &str)> + Clone {
		self.comments
			.iter()
			.filter_map(|comment| comment.split_once('='))
	}

	/// Gets the value of the first `KEY=` comment with a non-empty value
	///
	/// NOTE: This is a case-sensitive match on `key`, unlike every other lookup.
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::vorbis_comments::VorbisComments;
	///
	/// let mut vorbis_comments = VorbisComments::new();
	/// vorbis_comments.push("ARTIST", "Foo artist");
	/// vorbis_comments.push("ARTIST", "Bar artist");
	///
	/// assert_eq!(vorbis_comments.get("ARTIST"), Some("Foo artist"));
	/// assert_eq!(vorbis_comments.get("artist"), None);
	/// ```
	pub fn get(&self, key: &str) -> Option<&str> {
		self.comments.iter().find_map(|comment| {
			let value = comment.strip_prefix(key)?.strip_prefix('=')?;
			(!value.is_empty()).then_some(value)
		})
	}

	/// Gets all non-empty values with the key, in their original order
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::vorbis_comments::VorbisComments;
	///
	/// let mut vorbis_comments = VorbisComments::new();
	///
	/// // Vorbis comments allows multiple fields with the same key, such as artist
	/// vorbis_comments.push("ARTIST", "Foo artist");
	/// vorbis_comments.push("artist", "Bar artist");
	///
	/// let all_artists = vorbis_comments.get_all("ARTIST").collect::<Vec<&str>>();
	/// assert_eq!(all_artists, vec!["Foo artist", "Bar artist"]);
	/// ```
	pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + Clone + 'a {
		self.items()
			.filter_map(move |(k, v)| (k.eq_ignore_ascii_case(key) && !v.is_empty()).then_some(v))
	}

	/// Sets `key` to `value`, replacing every existing comment with the same key
	///
	/// The new comment is always appended to the end, comments with other keys keep their order.
	///
	/// NOTE: This will do nothing if `value` is empty or the key is invalid. The key specification is
	/// available [here](https://xiph.org/vorbis/doc/v-comment.html#vectorformat).
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::vorbis_comments::VorbisComments;
	///
	/// let mut tag = VorbisComments::new();
	/// tag.set("TITLE", "Title 1");
	/// tag.set("ARTIST", "Artist");
	/// tag.set("title", "Title 2");
	///
	/// // We only retain the last title set, after the artist
	/// let items = tag.items().collect::<Vec<_>>();
	/// assert_eq!(items, vec![("ARTIST", "Artist"), ("title", "Title 2")]);
	/// ```
	pub fn set(&mut self, key: &str, value: &str) {
		if value.is_empty() || !verify_key(key) {
			return;
		}

		for idx in (0..self.comments.len()).rev() {
			if comment_key(&self.comments[idx]).is_some_and(|k| k.eq_ignore_ascii_case(key)) {
				self.comments.remove(idx);
			}
		}

		self.comments.push(format!("{key}={value}"));
	}

	/// Appends an item, keeping any existing items with the same key
	///
	/// NOTE: This will do nothing if the key is invalid.
	pub fn push(&mut self, key: &str, value: &str) {
		if !verify_key(key) {
			return;
		}

		self.comments.push(format!("{key}={value}"));
	}

	/// Removes all items with a key, returning their values
	///
	/// # Examples
	///
	/// ```rust
	/// use flacmeta::vorbis_comments::VorbisComments;
	///
	/// let mut tag = VorbisComments::new();
	/// tag.push("TITLE", "Title 1");
	/// tag.push("Title", "Title 2");
	///
	/// let removed = tag.remove("TITLE");
	/// assert_eq!(removed, vec![String::from("Title 1"), String::from("Title 2")]);
	/// assert!(tag.is_empty());
	/// ```
	pub fn remove(&mut self, key: &str) -> Vec<String> {
		let mut removed = Vec::new();

		self.comments.retain(|comment| match comment.split_once('=') {
			Some((k, v)) if k.eq_ignore_ascii_case(key) => {
				removed.push(v.to_owned());
				false
			},
			_ => true,
		});

		removed
	}

	/// Decode a `VORBIS_COMMENT` block payload
	///
	/// # Errors
	///
	/// See [`VorbisComments::decode`]
	pub fn from_block(block: &MetadataBlock, parse_options: ParseOptions) -> Result<Self> {
		Self::decode(block.content(), parse_options)
	}

	/// Encode into a new `VORBIS_COMMENT` block
	///
	/// # Errors
	///
	/// * The payload is too large for a block header
	/// * See [`VorbisComments::encode`]
	pub fn to_block(&self) -> Result<MetadataBlock> {
		let content = self.encode()?;
		verify_size(&content)?;

		Ok(MetadataBlock::VorbisComment(content))
	}
}

// The key of a comment, if it has a separator and a non-empty key
fn comment_key(comment: &str) -> Option<&str> {
	match comment.find('=') {
		Some(idx) if idx > 0 => Some(&comment[..idx]),
		_ => None,
	}
}

// A case-insensitive field name that may consist of ASCII 0x20 through 0x7D, 0x3D ('=') excluded.
// ASCII 0x41 through 0x5A inclusive (A-Z) is to be considered equivalent to ASCII 0x61 through 0x7A inclusive (a-z).
fn verify_key(key: &str) -> bool {
	if key.is_empty() {
		return false;
	}

	key.bytes()
		.all(|byte| (0x20..=0x7D).contains(&byte) && byte != 0x3D)
}
