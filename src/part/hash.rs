//! Part digest value.

use std::fmt;

/// The 128-bit digest of a single part.
///
/// This is a thin wrapper around a 16-byte array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartHash([u8; 16]);

impl PartHash {
    /// The size of the digest in bytes.
    pub const SIZE: usize = 16;

    /// Creates a new part hash from a byte array.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the digest as a byte array.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let mut result = String::with_capacity(Self::SIZE * 2);
        for byte in &self.0 {
            result.push(HEX[(byte >> 4) as usize] as char);
            result.push(HEX[(byte & 0xf) as usize] as char);
        }
        result
    }

    /// Parses a digest from a 32-character hex string.
    ///
    /// Upper and lower case are both accepted.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        if hex_str.len() != Self::SIZE * 2 || !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let mut bytes = [0u8; 16];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex_str[i * 2..i * 2 + 2], 16).ok()?;
        }
        Some(Self(bytes))
    }
}

impl AsRef<[u8]> for PartHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 16]> for PartHash {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for PartHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        let hash = PartHash::new([0xABu8; 16]);
        let hex = hash.to_hex();
        assert_eq!(hex.len(), 32);
        assert!(hex.chars().all(|c| c == 'a' || c == 'b'));
        assert_eq!(hex, hash.to_string());
    }

    #[test]
    fn test_hex_parse() {
        let hash = PartHash::from_hex("d41d8cd98f00b204e9800998ecf8427e").unwrap();
        assert_eq!(hash.as_bytes()[0], 0xd4);
        assert_eq!(hash.as_bytes()[15], 0x7e);
        assert_eq!(hash.to_hex(), "d41d8cd98f00b204e9800998ecf8427e");

        assert_eq!(
            PartHash::from_hex("D41D8CD98F00B204E9800998ECF8427E"),
            Some(hash)
        );
        assert!(PartHash::from_hex("d41d8cd9").is_none());
        assert!(PartHash::from_hex("zz1d8cd98f00b204e9800998ecf8427e").is_none());
        assert!(PartHash::from_hex("+41d8cd98f00b204e9800998ecf8427e").is_none());
    }
}
