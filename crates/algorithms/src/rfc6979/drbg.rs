//! HMAC-DRBG state machine of RFC 6979, Section 3.2
//!
//! `V` and `K` are as long as the HMAC output. Both are replaced wholesale on
//! every step, so the previous values are zeroized when they drop.

use dnonce_api::error::validate;
use dnonce_api::{HmacPrimitive, Result, SecretVec};

pub(crate) struct HmacDrbg<'a> {
    hmac: &'a dyn HmacPrimitive,
    k: SecretVec,
    v: SecretVec,
}

impl<'a> HmacDrbg<'a> {
    /// Steps B to E: start from `V = 0x01..`, `K = 0x00..` and absorb `seed`
    pub(crate) fn new(hmac: &'a dyn HmacPrimitive, seed: &[u8]) -> Result<Self> {
        let hlen = hmac.output_size();
        validate::parameter(hlen > 0, "HMAC-DRBG", "HMAC output size must be non-zero")?;

        let mut drbg = Self {
            hmac,
            k: SecretVec::filled(0x00, hlen),
            v: SecretVec::filled(0x01, hlen),
        };

        drbg.update(0x00, seed)?;
        if !seed.is_empty() {
            drbg.update(0x01, seed)?;
        }
        Ok(drbg)
    }

    /// Fill `out` with successive `V = HMAC_K(V)` blocks (step H.2)
    pub(crate) fn fill_bytes(&mut self, out: &mut [u8]) -> Result<()> {
        let hlen = self.v.len();
        for chunk in out.chunks_mut(hlen) {
            let v = self.mac(&[self.v.as_slice()])?;
            self.v = v;
            chunk.copy_from_slice(&self.v.as_slice()[..chunk.len()]);
        }
        Ok(())
    }

    /// Step H.3: move past a rejected candidate
    pub(crate) fn reseed_after_reject(&mut self) -> Result<()> {
        self.update(0x00, &[])
    }

    /// `K = HMAC_K(V || sep || seed)`, then `V = HMAC_K(V)`
    fn update(&mut self, sep: u8, seed: &[u8]) -> Result<()> {
        let k = self.mac(&[self.v.as_slice(), &[sep], seed])?;
        self.k = k;
        let v = self.mac(&[self.v.as_slice()])?;
        self.v = v;
        Ok(())
    }

    fn mac(&self, parts: &[&[u8]]) -> Result<SecretVec> {
        let out = SecretVec::new(self.hmac.mac(self.k.as_slice(), parts)?);
        validate::length("HMAC output", out.len(), self.v.len())?;
        Ok(out)
    }
}
