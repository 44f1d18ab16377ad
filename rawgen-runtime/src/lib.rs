//! # rawgen Runtime
//!
//! Runtime support for code generated by rawgen.
//!
//! This crate provides:
//! - [`RawValue`], the primitive an enum variant serializes to
//! - The [`RawEnum`] trait implemented by every generated enum
//! - Falsy-coalescing helpers used by generated constructors
//! - [`DynamicEnum`], a thread-safe interning table for enums known only at runtime

pub mod enums;
pub mod error;
pub mod falsy;
pub mod value;

pub use enums::{DynamicEnum, EnumInstance, RawEnum};
pub use error::{Error, Result};
pub use falsy::{Falsy, coalesce, coalesce_or};
pub use value::RawValue;
