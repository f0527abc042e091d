//! Message authentication codes backing the HMAC-DRBG

pub mod hmac;

pub use self::hmac::{Hmac, HmacHash, HmacSha224, HmacSha256, HmacSha384, HmacSha512};
