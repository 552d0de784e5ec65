//! JSON encoding and decoding of sequences and the other serializable types
//! of this crate.
//!
//! ```rust
//! # use seqkit_arr::{json, NonEmpty};
//! let xs = NonEmpty::new(1, vec![2, 3]);
//! let text = json::to_json(&xs).unwrap();
//! assert_eq!(text, "[1,2,3]");
//! assert_eq!(json::from_json::<NonEmpty<i32>>(&text).unwrap(), xs);
//! assert!(json::from_json::<NonEmpty<i32>>("[]").is_err());
//! ```

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

fn serialization_error(err: serde_json::Error) -> Error {
    log::debug!("JSON encoding failed: {err}");
    Error::Serialization {
        msg: err.to_string(),
    }
}

/// Encodes `value` as compact JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(serialization_error)
}

/// Encodes `value` as indented JSON.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(serialization_error)
}

/// Decodes a value from JSON text.
pub fn from_json<T: DeserializeOwned>(input: &str) -> Result<T> {
    serde_json::from_str(input).map_err(|err| {
        log::debug!("JSON decoding failed: {err}");
        Error::Deserialization {
            msg: err.to_string(),
        }
    })
}
