use crate::config::allocation_limit;
use crate::error::Result;
use crate::macros::err;

/// Allocate `len` copies of `element`, failing instead of aborting
///
/// Used through [`try_vec!`](crate::macros::try_vec), `len` is checked against the thread's
/// [`GlobalOptions::allocation_limit`](crate::config::GlobalOptions::allocation_limit).
pub(crate) fn fallible_vec_from_element<T>(element: T, len: usize) -> Result<Vec<T>>
where
	T: Clone,
{
	if len > allocation_limit() {
		log::debug!("Refusing to allocate {len} elements");
		err!(TooMuchData);
	}

	let mut vec = Vec::new();
	vec.try_reserve_exact(len)?;
	vec.resize(len, element);

	Ok(vec)
}
