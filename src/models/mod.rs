//! Domain models for IPv4 subnet calculations.
//!
//! This module contains the calculator itself:
//! - [`ipv4`] - Parsing, formatting and mask arithmetic over `u32` values
//! - [`AddressClass`] - Classful category of an address
//! - [`HostRange`] and [`Hosts`] - Usable host addresses, produced lazily
//! - [`Subnet`] - Every parameter of a subnet, computed once

mod class;
mod hosts;
pub mod ipv4;
mod subnet;

// Re-export public types
pub use class::{class_of, AddressClass};
pub use hosts::{host_address_range, HostRange, Hosts};
pub use ipv4::{
    broadcast_address_of, cidr_from_mask, format_address, is_valid_address, is_valid_mask,
    mask_from_cidr, mask_text_from_cidr, network_address_of, parse_address, parse_mask,
    split_octets, wildcard_from_mask, ALL_ONES, MAX_LENGTH,
};
pub use subnet::{build_subnet, Subnet};
