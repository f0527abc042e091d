//! Internal utilities for the dnonce library
//!
//! Constant-time helpers and big-endian byte-integer arithmetic shared by the
//! other crates. Nothing in here is part of the stable public API.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bigendian;
pub mod constant_time;
