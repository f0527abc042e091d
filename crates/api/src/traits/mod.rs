//! Collaborator traits a nonce derivation is assembled from

pub mod group;
pub mod mac;

pub use group::GroupParameters;
pub use mac::HmacPrimitive;
