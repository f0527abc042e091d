//! Deterministic nonce derivation (RFC 6979)
//!
//! Derives the per-signature secret `k` for (EC)DSA from the private key and
//! the message digest with an HMAC-DRBG, optionally mixing in extra entropy
//! (Section 3.6). The same inputs always yield the same nonce, and every
//! returned nonce satisfies `0 < k < N`.
//!
//! ```
//! use dnonce_algorithms::mac::HmacSha256;
//! use dnonce_algorithms::rfc6979::NonceDeriver;
//! use dnonce_params::NIST_P256;
//!
//! let hmac = HmacSha256::new();
//! let key = [0x11u8; 32];
//! let digest = [0x22u8; 32];
//!
//! let k = NonceDeriver::new(&NIST_P256)
//!     .with_hmac(&hmac)
//!     .derive(&digest, &key)
//!     .unwrap();
//! assert_eq!(k.len(), 32);
//! ```

mod drbg;
mod scalar;

pub use scalar::{Nonce, PrivateKey};

use dnonce_api::error::validate;
use dnonce_api::{Error, ExtraEntropy, GroupParameters, HmacPrimitive, Result, SecretVec};
use dnonce_internal::bigendian::{bits2int, reduce_mod};
use dnonce_internal::constant_time::{ct_is_zero, ct_lt_be};
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use self::drbg::HmacDrbg;

/// Number of candidates tried before giving up, unless configured otherwise
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Run-time options of a derivation
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeriveOptions {
    /// Additional input appended to the seed
    pub extra_entropy: ExtraEntropy,
    /// Hard upper bound on generated candidates; must be at least 1
    pub max_iterations: usize,
}

impl Default for DeriveOptions {
    fn default() -> Self {
        Self {
            extra_entropy: ExtraEntropy::None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl DeriveOptions {
    /// Set the extra entropy
    pub fn with_extra_entropy(mut self, extra_entropy: impl Into<ExtraEntropy>) -> Self {
        self.extra_entropy = extra_entropy.into();
        self
    }

    /// Set the candidate budget
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Nonce derivation bound to one group, HMAC primitive and option set
///
/// A deriver holds no DRBG state of its own; every call starts from fresh
/// `V`/`K` buffers, so one deriver can serve concurrent callers.
#[derive(Clone)]
pub struct NonceDeriver<'a> {
    group: &'a dyn GroupParameters,
    hmac: Option<&'a dyn HmacPrimitive>,
    options: DeriveOptions,
}

impl<'a> NonceDeriver<'a> {
    /// Deriver for `group` with default options and no HMAC primitive yet
    pub fn new(group: &'a dyn GroupParameters) -> Self {
        Self {
            group,
            hmac: None,
            options: DeriveOptions::default(),
        }
    }

    /// Use `hmac`, which must be built on the scheme's hash function
    pub fn with_hmac(mut self, hmac: &'a dyn HmacPrimitive) -> Self {
        self.hmac = Some(hmac);
        self
    }

    /// Replace the options
    pub fn with_options(mut self, options: DeriveOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options
    pub fn options(&self) -> &DeriveOptions {
        &self.options
    }

    /// Derive the nonce for `digest` under `private_key`
    ///
    /// `ExtraEntropy::Generate` draws from the operating system RNG. Without
    /// the `std` feature there is no system RNG and it fails with
    /// `RandomGenerationError`; use [`derive_with_rng`](Self::derive_with_rng).
    pub fn derive<'k>(&self, digest: &[u8], private_key: impl Into<PrivateKey<'k>>) -> Result<Nonce> {
        #[cfg(feature = "std")]
        {
            self.derive_with_rng(digest, private_key, &mut rand::rngs::OsRng)
        }

        #[cfg(not(feature = "std"))]
        {
            derive_inner(
                digest,
                private_key.into(),
                self.group,
                self.hmac,
                &self.options,
                &mut |_: &mut [u8]| {
                    Err(Error::RandomGenerationError {
                        context: "ExtraEntropy::Generate",
                    })
                },
            )
        }
    }

    /// Derive the nonce, drawing generated entropy from `rng`
    ///
    /// `rng` is only used for `ExtraEntropy::Generate`, exactly once for `L`
    /// bytes.
    pub fn derive_with_rng<'k, R>(
        &self,
        digest: &[u8],
        private_key: impl Into<PrivateKey<'k>>,
        rng: &mut R,
    ) -> Result<Nonce>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        derive_inner(
            digest,
            private_key.into(),
            self.group,
            self.hmac,
            &self.options,
            &mut |buf: &mut [u8]| rng.try_fill_bytes(buf).map_err(rng_error),
        )
    }
}

impl core::fmt::Debug for NonceDeriver<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NonceDeriver")
            .field("group", &self.group.name())
            .field("hmac", &self.hmac.map(|h| h.name()))
            .field("options", &self.options)
            .finish()
    }
}

/// Derive an RFC 6979 nonce in one call
///
/// Generated entropy comes from the operating system RNG.
#[cfg(feature = "std")]
pub fn derive_nonce<'k>(
    digest: &[u8],
    private_key: impl Into<PrivateKey<'k>>,
    group: &dyn GroupParameters,
    hmac: &dyn HmacPrimitive,
    options: &DeriveOptions,
) -> Result<Nonce> {
    derive_nonce_with_rng(digest, private_key, group, hmac, options, &mut rand::rngs::OsRng)
}

/// Derive an RFC 6979 nonce in one call, drawing generated entropy from `rng`
pub fn derive_nonce_with_rng<'k, R>(
    digest: &[u8],
    private_key: impl Into<PrivateKey<'k>>,
    group: &dyn GroupParameters,
    hmac: &dyn HmacPrimitive,
    options: &DeriveOptions,
    rng: &mut R,
) -> Result<Nonce>
where
    R: RngCore + CryptoRng + ?Sized,
{
    derive_inner(
        digest,
        private_key.into(),
        group,
        Some(hmac),
        options,
        &mut |buf: &mut [u8]| rng.try_fill_bytes(buf).map_err(rng_error),
    )
}

/// RFC 6979 `bits2octets`: leftmost `qlen` bits of `digest`, reduced mod `N`
pub fn bits2octets(digest: &[u8], group: &dyn GroupParameters) -> SecretVec {
    let z1 = SecretVec::new(bits2int(digest, group.order_bits()));
    SecretVec::new(reduce_mod(z1.as_slice(), group.order()))
}

fn rng_error(_err: rand::Error) -> Error {
    Error::RandomGenerationError {
        context: "ExtraEntropy::Generate",
        #[cfg(feature = "std")]
        message: _err.to_string(),
    }
}

fn derive_inner(
    digest: &[u8],
    private_key: PrivateKey<'_>,
    group: &dyn GroupParameters,
    hmac: Option<&dyn HmacPrimitive>,
    options: &DeriveOptions,
    fill_entropy: &mut dyn FnMut(&mut [u8]) -> Result<()>,
) -> Result<Nonce> {
    group.validate()?;
    validate::parameter(
        options.max_iterations > 0,
        "DeriveOptions",
        "max_iterations must be at least 1",
    )?;

    // Reject bad keys before any HMAC work
    let x = private_key.to_scalar_bytes(group)?;

    let hmac = match hmac {
        Some(hmac) if hmac.is_available() => hmac,
        other => {
            let primitive = other.map_or("HMAC", |h| h.name());
            warn!(group = group.name(), primitive, "HMAC primitive unavailable");
            return Err(Error::MissingPrimitive { primitive });
        }
    };

    let len = group.scalar_len();
    let h1 = bits2octets(digest, group);

    // seed = int2octets(x) || bits2octets(h1) [|| entropy]
    let entropy_len = match &options.extra_entropy {
        ExtraEntropy::None => 0,
        ExtraEntropy::Generate => len,
        ExtraEntropy::Explicit(bytes) => bytes.len(),
    };
    let mut seed = SecretVec::with_capacity(2 * len + entropy_len);
    seed.extend_from_slice(x.as_slice());
    seed.extend_from_slice(h1.as_slice());
    match &options.extra_entropy {
        ExtraEntropy::None => {}
        ExtraEntropy::Generate => {
            let mut fresh = SecretVec::filled(0, len);
            fill_entropy(fresh.as_mut_slice())?;
            seed.extend_from_slice(fresh.as_slice());
        }
        ExtraEntropy::Explicit(bytes) => seed.extend_from_slice(bytes),
    }

    let mut drbg = HmacDrbg::new(hmac, seed.as_slice())?;
    let order = group.order();
    let qbits = group.order_bits();
    let mut t = SecretVec::filled(0, len);

    for attempt in 1..=options.max_iterations {
        drbg.fill_bytes(t.as_mut_slice())?;
        let candidate = SecretVec::new(bits2int(t.as_slice(), qbits));

        let in_range = !ct_is_zero(candidate.as_slice()) & ct_lt_be(candidate.as_slice(), order);
        if bool::from(in_range) {
            debug!(group = group.name(), hmac = hmac.name(), attempts = attempt, "derived nonce");
            return Ok(Nonce::new(candidate));
        }

        trace!(group = group.name(), attempt, "candidate out of range");
        if attempt < options.max_iterations {
            drbg.reseed_after_reject()?;
        }
    }

    warn!(
        group = group.name(),
        attempts = options.max_iterations,
        "no candidate in range within the iteration budget"
    );
    Err(Error::ExhaustedRetries {
        context: "RFC6979 generate",
        attempts: options.max_iterations,
    })
}
