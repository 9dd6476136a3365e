macro_rules! try_vec {
	($elem:expr; $size:expr) => {{ $crate::util::alloc::fallible_vec_from_element($elem, $size)? }};
}

// Shorthand for return Err(FlacMetaError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(FlacMetaError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(FlacMetaError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::FlacMetaError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:literal)) => {
		return Err(crate::error::FlacMetaError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

// Shorthand for FormatError::new("Message")
//
// Usage:
//
// - format_err!(Message)
//
// or bail:
//
// - format_err!(@BAIL Message)
macro_rules! format_err {
	($reason:literal) => {
		Into::<crate::error::FlacMetaError>::into(crate::error::FormatError::new($reason))
	};
	(@BAIL $reason:literal) => {
		return Err(format_err!($reason))
	};
}

// Same as `format_err!`, producing a `DecodeError`
macro_rules! decode_err {
	($reason:literal) => {
		Into::<crate::error::FlacMetaError>::into(crate::error::DecodeError::new($reason))
	};
	(@BAIL $reason:literal) => {
		return Err(decode_err!($reason))
	};
}

pub(crate) use {decode_err, err, format_err, try_vec};
