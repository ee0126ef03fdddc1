//! Plain-text key interchange
//!
//! Keys travel as (modulus, exponent) component pairs rendered as
//! lowercase hex, optionally base64-wrapped for transports that dislike
//! raw text. A [`KeyBundle`] carries a cipher pair and a signature pair
//! together in a five-line document: two cipher lines, a blank
//! separator, two signature lines.
//!
//! The formats are direction-agnostic: the same pair of numbers becomes
//! a public or a private key depending on which `into_*` the caller
//! picks, since both key halves are just (modulus, exponent).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use num_bigint::BigUint;

use crate::error::{Error, Result};

use super::keys::{RsaPrivateKey, RsaPublicKey};

/// One key half as a (modulus, exponent) pair of integers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyComponents {
    /// The modulus `N`
    pub modulus: BigUint,
    /// Either exponent, public or private
    pub exponent: BigUint,
}

impl KeyComponents {
    /// Parse components from two hex strings
    pub fn from_hex(modulus: &str, exponent: &str) -> Result<Self> {
        Ok(KeyComponents {
            modulus: parse_hex(modulus)?,
            exponent: parse_hex(exponent)?,
        })
    }

    /// Parse components from two base64 strings wrapping hex text
    pub fn from_base64(modulus: &str, exponent: &str) -> Result<Self> {
        Self::from_hex(&unwrap_base64(modulus)?, &unwrap_base64(exponent)?)
    }

    /// Render as lowercase hex strings, (modulus, exponent)
    pub fn to_hex(&self) -> (String, String) {
        (self.modulus.to_str_radix(16), self.exponent.to_str_radix(16))
    }

    /// Render as base64-wrapped hex strings, (modulus, exponent)
    pub fn to_base64(&self) -> (String, String) {
        let (modulus, exponent) = self.to_hex();
        (BASE64.encode(modulus), BASE64.encode(exponent))
    }

    /// Interpret the pair as a public key
    pub fn into_public(self) -> Result<RsaPublicKey> {
        RsaPublicKey::from_components(self.modulus, self.exponent)
    }

    /// Interpret the pair as a private key
    pub fn into_private(self) -> Result<RsaPrivateKey> {
        RsaPrivateKey::from_components(self.modulus, self.exponent)
    }
}

impl From<&RsaPublicKey> for KeyComponents {
    fn from(key: &RsaPublicKey) -> Self {
        KeyComponents {
            modulus: key.modulus().clone(),
            exponent: key.exponent().clone(),
        }
    }
}

impl From<&RsaPrivateKey> for KeyComponents {
    fn from(key: &RsaPrivateKey) -> Self {
        KeyComponents {
            modulus: key.modulus().clone(),
            exponent: key.exponent().clone(),
        }
    }
}

/// A cipher key and a signature key shipped as one document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBundle {
    /// Components used for encryption or decryption
    pub cipher: KeyComponents,
    /// Components used for signing or verification
    pub signature: KeyComponents,
}

impl KeyBundle {
    /// Parse the five-line bundle format.
    ///
    /// Lines one and two are the cipher modulus and exponent, line
    /// three is blank, lines four and five are the signature modulus
    /// and exponent. Surrounding whitespace on each line is ignored,
    /// trailing material after line five is not tolerated.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let lines: Vec<&str> = match lines.split_last() {
            // Allow one trailing newline
            Some((&"", rest)) if rest.len() >= 5 => rest.to_vec(),
            _ => lines,
        };
        if lines.len() != 5 {
            return Err(Error::KeyFormat("expected exactly five lines"));
        }
        if !lines[2].is_empty() {
            return Err(Error::KeyFormat("line three must be blank"));
        }
        Ok(KeyBundle {
            cipher: KeyComponents::from_hex(lines[0], lines[1])?,
            signature: KeyComponents::from_hex(lines[3], lines[4])?,
        })
    }

    /// Render the five-line bundle format, newline-terminated
    pub fn render(&self) -> String {
        let (cipher_n, cipher_exp) = self.cipher.to_hex();
        let (sig_n, sig_exp) = self.signature.to_hex();
        format!("{}\n{}\n\n{}\n{}\n", cipher_n, cipher_exp, sig_n, sig_exp)
    }
}

fn parse_hex(text: &str) -> Result<BigUint> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::KeyFormat("empty component"));
    }
    BigUint::parse_bytes(text.as_bytes(), 16)
        .ok_or(Error::KeyFormat("component is not valid hexadecimal"))
}

fn unwrap_base64(text: &str) -> Result<String> {
    let bytes = BASE64
        .decode(text.trim())
        .map_err(|_| Error::KeyFormat("component is not valid base64"))?;
    String::from_utf8(bytes).map_err(|_| Error::KeyFormat("base64 payload is not text"))
}
