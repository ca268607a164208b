#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/6ee8e381/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/6ee8e381/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::arithmetic_side_effects,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! let lines = drunken_bishop::drunken_bishop(
//!     "58:d5:23:1e:2c:83:a0:5c:64:28:2d:b4:e4:58:ad:fa",
//!     "md5",
//! )?;
//!
//! assert_eq!(lines.len(), 11);
//! assert_eq!(lines[0], "+---[   n/a  ]----+");
//! assert_eq!(lines[10], "+------[MD5]------+");
//! # Ok::<(), drunken_bishop::Error>(())
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod decode;
mod error;
mod field;
mod fingerprint;
mod mode;
mod randomart;
mod step;

pub use crate::{
    decode::decode,
    error::{Error, Result},
    field::{Field, HEIGHT, Position, WIDTH, simulate},
    fingerprint::Fingerprint,
    mode::HashMode,
    randomart::{DEFAULT_HEADER, Randomart, render},
    step::{Step, extract},
};

#[cfg(feature = "digest")]
pub use {md5, sha2};

use alloc::{string::String, vec::Vec};

/// Render "randomart" for a fingerprint string.
///
/// `hash_mode` must be `md5` (colon-separated hex fingerprint) or `sha256`
/// (unpadded Base64 fingerprint). The result is always 11 lines: the top
/// border, the nine rows of the field and the bottom border.
pub fn drunken_bishop(fingerprint: &str, hash_mode: &str) -> Result<Vec<String>> {
    let mode = hash_mode.parse::<HashMode>()?;
    let bytes = decode(fingerprint, mode)?;
    let field = simulate(&extract(&bytes));
    Ok(render(&field, mode))
}
