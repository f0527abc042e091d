//! Constants for traditional elliptic-curve signature groups

pub mod ecdsa;
