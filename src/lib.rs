//! RGB colors for [ASPRS LAS](https://www.asprs.org/committee-general/laser-las-file-format-exchange-activities.html)
//! point records.
//!
//! A `Color` holds three 16-bit channels. Use the fields or the named accessors:
//!
//! ```
//! use las_color::Color;
//! let mut color = Color::new(255, 128, 0);
//! assert_eq!(128, color.green());
//! color.set_green(64);
//! assert_eq!(Color::new(255, 64, 0), color);
//! ```
//!
//! # Indexed access
//!
//! Channels can also be addressed by index, where 0 is red, 1 is green, and 2 is blue. Any other
//! index is an error:
//!
//! ```
//! use las_color::{Color, Error};
//! let mut color = Color::new(1, 2, 3);
//! assert_eq!(2, color.get(1).unwrap());
//! *color.get_mut(2).unwrap() = 42;
//! assert_eq!(42, color.blue);
//! assert_eq!(Err(Error::IndexOutOfRange { index: 3 }), color.get(3));
//! ```
//!
//! If you already know which channel you want, a `Channel` can't be out of range:
//!
//! ```
//! use las_color::{Channel, Color};
//! let mut color = Color::default();
//! color[Channel::Red] = 65535;
//! assert_eq!(65535, color.red);
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

mod color;
mod error;

pub use color::{Channel, Color};
pub use error::Error;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
