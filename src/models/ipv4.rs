//! IPv4 address and mask conversions.
//!
//! Addresses and masks are carried as `u32` values, most significant byte
//! first. The functions here parse and format dotted-decimal text, validate
//! masks and derive network, broadcast and wildcard values.

use crate::error::{NetcalcError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Every bit of an IPv4 value set.
pub const ALL_ONES: u32 = u32::MAX;

lazy_static! {
    // ASCII digits only: `\d` would also accept other Unicode digits.
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("Invalid Regex?");
}

/// Split dotted-decimal text into its four octets.
///
/// Exactly four base-10 segments in `0..=255` are accepted. Signs,
/// whitespace, empty segments and any other segment count are rejected.
pub fn split_octets(text: &str) -> Result<[u8; 4]> {
    let caps = DOTTED_QUAD.captures(text).ok_or_else(|| {
        log::debug!("split_octets({text:?}) not a dotted quad");
        NetcalcError::InvalidAddress(text.to_string())
    })?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let segment = &caps[i + 1];
        *octet = segment.parse::<u8>().map_err(|_| {
            log::debug!("split_octets({text:?}) segment {segment} out of range");
            NetcalcError::InvalidAddress(text.to_string())
        })?;
    }
    Ok(octets)
}

/// Parse dotted-decimal text into a `u32`, segment 0 in the top byte.
///
/// # Examples
/// ```
/// use netcalc::models::parse_address;
/// assert_eq!(parse_address("10.0.0.1").unwrap(), 0x0A000001);
/// assert!(parse_address("300.16.174.1").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<u32> {
    split_octets(text).map(u32::from_be_bytes)
}

/// Format a `u32` as canonical dotted-decimal text.
pub fn format_address(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

/// True if the text is a well formed dotted-decimal address.
pub fn is_valid_address(text: &str) -> bool {
    split_octets(text).is_ok()
}

/// Mask with the top `len` bits set. `len` must be at most [`MAX_LENGTH`].
fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = ALL_ONES as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// True if the mask is a run of 1-bits followed only by 0-bits.
///
/// Both `0.0.0.0` and `255.255.255.255` are valid masks.
pub fn is_valid_mask(mask: u32) -> bool {
    mask == mask_bits(mask.leading_ones() as u8)
}

fn ensure_mask(mask: u32) -> Result<()> {
    if is_valid_mask(mask) {
        Ok(())
    } else {
        log::debug!("mask {} is not contiguous", format_address(mask));
        Err(NetcalcError::InvalidMask(format_address(mask)))
    }
}

/// Parse dotted-decimal mask text and check that it is contiguous.
///
/// Malformed text is reported as [`NetcalcError::InvalidMask`] as well.
pub fn parse_mask(text: &str) -> Result<u32> {
    let mask =
        parse_address(text).map_err(|_| NetcalcError::InvalidMask(text.to_string()))?;
    if !is_valid_mask(mask) {
        log::debug!("parse_mask({text:?}) is not contiguous");
        return Err(NetcalcError::InvalidMask(text.to_string()));
    }
    Ok(mask)
}

/// Count of leading 1-bits of a valid mask.
pub fn cidr_from_mask(mask: u32) -> Result<u8> {
    ensure_mask(mask)?;
    Ok(mask.leading_ones() as u8)
}

/// Convert a CIDR prefix length to a subnet mask.
///
/// # Examples
/// ```
/// use netcalc::models::mask_from_cidr;
/// assert_eq!(mask_from_cidr(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(mask_from_cidr(0).unwrap(), 0);
/// assert!(mask_from_cidr(33).is_err());
/// ```
pub fn mask_from_cidr(len: i64) -> Result<u32> {
    if !(0..=MAX_LENGTH as i64).contains(&len) {
        log::debug!("mask_from_cidr({len}) out of range");
        return Err(NetcalcError::InvalidPrefixLength(len));
    }
    Ok(mask_bits(len as u8))
}

/// Dotted-decimal form of [`mask_from_cidr`].
pub fn mask_text_from_cidr(len: i64) -> Result<String> {
    mask_from_cidr(len).map(format_address)
}

/// Bitwise complement of a valid mask.
pub fn wildcard_from_mask(mask: u32) -> Result<u32> {
    ensure_mask(mask)?;
    Ok(mask ^ ALL_ONES)
}

/// Address with every host bit cleared.
pub fn network_address_of(address: u32, mask: u32) -> Result<u32> {
    ensure_mask(mask)?;
    Ok(address & mask)
}

/// Address with every host bit set.
///
/// Works from any address in the subnet, not only the network address.
pub fn broadcast_address_of(address: u32, mask: u32) -> Result<u32> {
    Ok(address | wildcard_from_mask(mask)?)
}
