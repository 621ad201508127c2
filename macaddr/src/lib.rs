use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;
use thiserror::Error as ThisError;

/// Six hex pairs separated by `:` or `-`. Separators may be mixed.
pub const MAC_PATTERN: &str = "([0-9A-F]{2}[:-]){5}([0-9A-F]{2})";

/// Hex digit values a generated group is drawn from.
pub const NIBBLES: [u8; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

lazy_static! {
    static ref MAC_EXACT_RE: Regex = Regex::new(&format!("(?i)^{MAC_PATTERN}$")).unwrap();
    static ref MAC_SCAN_RE: Regex = Regex::new(&format!("(?i){MAC_PATTERN}")).unwrap();
}

#[repr(transparent)]
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct MacAddr6(pub [u8; 6]);

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("mac address is invalid")]
    InvalidMac,
}

impl MacAddr6 {
    /// Generates an address whose first group is always `00`.
    ///
    /// Every other group is two distinct digits picked from [`NIBBLES`],
    /// which is what shuffling the alphabet and reading its head would give.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let mut octets = [0u8; 6];

        for octet in octets.iter_mut().skip(1) {
            let mut pair = NIBBLES.choose_multiple(&mut rng, 2);
            if let (Some(hi), Some(lo)) = (pair.next(), pair.next()) {
                *octet = (hi << 4) | lo;
            }
        }

        Self(octets)
    }

    /// Returns `true` if the whole of `candidate` is a six-group MAC address.
    pub fn is_valid(candidate: &str) -> bool {
        MAC_EXACT_RE.is_match(candidate)
    }

    /// Finds the first MAC address embedded in free-form text, such as the
    /// output of `ifconfig`.
    pub fn find_in(text: &str) -> Option<Self> {
        let found = MAC_SCAN_RE.find(text)?;
        found.as_str().trim().to_uppercase().parse().ok()
    }

    fn write_delimited(&self, sep: &str) -> String {
        self.0
            .iter()
            .map(|octet| format!("{octet:02X}"))
            .collect::<Vec<_>>()
            .join(sep)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl Display for MacAddr6 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.write_delimited(":"))
    }
}

impl Debug for MacAddr6 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.write_delimited(":"))
    }
}

impl From<[u8; 6]> for MacAddr6 {
    fn from(arr: [u8; 6]) -> Self {
        Self(arr)
    }
}

impl FromStr for MacAddr6 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mac_hex = if Self::is_valid(s) {
            s.replace([':', '-'], "")
        } else {
            s.to_string()
        };

        if mac_hex.len() != 12 {
            return Err(Error::InvalidMac);
        }

        Ok(Self(
            hex::decode(mac_hex)
                .map_err(|_| Error::InvalidMac)?
                .try_into()
                .map_err(|_| Error::InvalidMac)?,
        ))
    }
}

impl Serialize for MacAddr6 {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(s)
    }
}

impl<'de> Deserialize<'de> for MacAddr6 {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        MacAddr6::from_str(&String::deserialize(d)?).map_err(serde::de::Error::custom)
    }
}
