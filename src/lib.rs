//! Gears is a collection of small, independent utilities that I kept rewriting from project to
//! project, so I've pulled them into one crate.
//!
//! # Purpose
//! The two larger pieces are [`math::UIntX`], an arbitrary precision unsigned integer, and
//! [`optparse`], a POSIX style command line parser with subcommands and typed values. Around them
//! sit a handful of smaller modules:
//! - [`container`], for a fixed capacity vector stored inline;
//! - [`string`], for case-aware comparison, trimming, searching, replacing and `{N}` formatting;
//! - [`utility`], for a cloneable type-erased value, a three-state boolean and base64.
//!
//! Each module sits behind a cargo feature of the same name, all of which are enabled by default.
//!
//! # Error Handling
//! Operations that can only fail through misuse panic, the same way indexing a slice out of
//! bounds does. Where failing is a normal outcome (parsing a number, decoding base64, reading a
//! command line) the function returns a [`Result`] instead, and where both are useful the
//! fallible version is named with a `try_` or `checked_` prefix.
//!
//! Errors are strongly typed: each failure is its own struct implementing
//! [`Error`](std::error::Error), grouped into enums where a function can fail in more than one
//! way, so callers can match on exactly what went wrong.
//!
//! # Dependencies
//! This crate uses `derive_more` for the repetitive parts of its error types, `num-traits` so the
//! numeric algorithms work for primitives and [`UIntX`](math::UIntX) alike, and `log` for
//! tracing what the option parser is doing. The `gears` binary additionally uses `env_logger`.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "container")]
pub mod container;
#[cfg(feature = "math")]
pub mod math;
#[cfg(feature = "optparse")]
pub mod optparse;
#[cfg(feature = "string")]
pub mod string;
#[cfg(feature = "utility")]
pub mod utility;

pub(crate) mod util;
