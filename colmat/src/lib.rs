//! A dense column-major matrix container.
//!
//! Element `(row, col)` of a matrix with `rows` rows lives at linear offset
//! `row + col * rows`. That is the layout conventional dense linear-algebra
//! APIs expect, so the buffer returned by `data()` can be handed to them
//! directly.

#![no_std]

extern crate alloc;

pub mod dense;

pub use dense::ColMajorMatrix;
