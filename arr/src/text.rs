use std::fmt::{Display, Write};

use crate::error::{Error, Result};

/// Concatenates the `Display` renderings of the elements, with `sep` between
/// consecutive elements.
///
/// Fails with [`Error::Join`] if an element's `Display` implementation
/// reports an error.
///
/// # Examples
///
/// ```rust
/// # use seqkit_arr::join;
/// assert_eq!(join(&[1, 2, 3], "-"), Ok("1-2-3".to_owned()));
/// assert_eq!(join::<u8>(&[], ", "), Ok(String::new()));
/// ```
pub fn join<T: Display>(seq: &[T], sep: &str) -> Result<String> {
    let mut out = String::new();
    for (index, elt) in seq.iter().enumerate() {
        if index > 0 {
            out.push_str(sep);
        }
        write!(out, "{elt}").map_err(|_| Error::Join { index })?;
    }
    Ok(out)
}
