//! Immutable subnet value built from an address and a mask.

use super::class::{class_of, AddressClass};
use super::hosts::{host_address_range, HostRange, Hosts};
use super::ipv4::{
    broadcast_address_of, cidr_from_mask, format_address, mask_from_cidr, network_address_of,
    parse_address, parse_mask, wildcard_from_mask,
};
use crate::error::{NetcalcError, Result};
use crate::output::render_plain_report;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Every parameter of an IPv4 subnet, computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subnet {
    address: u32,
    network_address: u32,
    mask: u32,
    broadcast_address: u32,
    host_range: Option<HostRange>,
    host_count: u64,
    address_class: AddressClass,
    cidr_prefix_length: u8,
    wildcard_mask: u32,
}

/// Validate the mask, then the address, then derive every field.
///
/// # Examples
/// ```
/// use netcalc::build_subnet;
/// let subnet = build_subnet("10.213.37.2", "255.255.224.0").unwrap();
/// assert_eq!(subnet.cidr_prefix_length(), 19);
/// ```
pub fn build_subnet(address: &str, mask: &str) -> Result<Subnet> {
    let mask = parse_mask(mask)?;
    let address = parse_address(address)?;
    Subnet::from_parts(address, mask)
}

impl Subnet {
    /// Same as [`build_subnet`].
    pub fn new(address: &str, mask: &str) -> Result<Subnet> {
        build_subnet(address, mask)
    }

    /// Build from `a.b.c.d/n` text.
    pub fn from_cidr(addr_cidr: &str) -> Result<Subnet> {
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            log::debug!("from_cidr({addr_cidr:?}) missing prefix length");
            return Err(NetcalcError::InvalidAddress(addr_cidr.to_string()));
        }
        let len: i64 = parts[1]
            .parse()
            .map_err(|_| NetcalcError::InvalidMask(parts[1].to_string()))?;
        let mask = mask_from_cidr(len)?;
        let address = parse_address(parts[0])?;
        Subnet::from_parts(address, mask)
    }

    /// Build from numeric address and mask.
    pub fn from_parts(address: u32, mask: u32) -> Result<Subnet> {
        let network_address = network_address_of(address, mask)?;
        let broadcast_address = broadcast_address_of(address, mask)?;
        let host_range = host_address_range(network_address, mask)?;
        let host_count = host_range.map_or(0, |r| r.len());
        let subnet = Subnet {
            address,
            network_address,
            mask,
            broadcast_address,
            host_range,
            host_count,
            address_class: class_of(address),
            cidr_prefix_length: cidr_from_mask(mask)?,
            wildcard_mask: wildcard_from_mask(mask)?,
        };
        log::trace!("built subnet {subnet:?}");
        Ok(subnet)
    }

    /// The address the subnet was built from.
    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn network_address(&self) -> u32 {
        self.network_address
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn broadcast_address(&self) -> u32 {
        self.broadcast_address
    }

    /// `None` for /31 and /32.
    pub fn host_range(&self) -> Option<HostRange> {
        self.host_range
    }

    pub fn host_count(&self) -> u64 {
        self.host_count
    }

    pub fn address_class(&self) -> AddressClass {
        self.address_class
    }

    pub fn cidr_prefix_length(&self) -> u8 {
        self.cidr_prefix_length
    }

    pub fn wildcard_mask(&self) -> u32 {
        self.wildcard_mask
    }

    /// True if the address lies between network and broadcast, inclusive.
    pub fn contains(&self, address: u32) -> bool {
        (self.network_address..=self.broadcast_address).contains(&address)
    }

    /// Lazily walk the usable host addresses.
    pub fn hosts(&self) -> Hosts {
        match self.host_range {
            Some(range) => range.iter(),
            None => Hosts::empty(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromStr for Subnet {
    type Err = NetcalcError;

    fn from_str(s: &str) -> Result<Subnet> {
        Subnet::from_cidr(s)
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render_plain_report(self))
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Subnet", 10)?;
        state.serialize_field("address", &format_address(self.address))?;
        state.serialize_field("network_address", &format_address(self.network_address))?;
        state.serialize_field("mask", &format_address(self.mask))?;
        state.serialize_field("broadcast_address", &format_address(self.broadcast_address))?;
        state.serialize_field(
            "first_host",
            &self.host_range.map(|r| format_address(r.first())),
        )?;
        state.serialize_field(
            "last_host",
            &self.host_range.map(|r| format_address(r.last())),
        )?;
        state.serialize_field("host_count", &self.host_count)?;
        state.serialize_field("address_class", &self.address_class)?;
        state.serialize_field("cidr_prefix_length", &self.cidr_prefix_length)?;
        state.serialize_field("wildcard_mask", &format_address(self.wildcard_mask))?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ALL_ONES;

    #[test]
    fn test_build_subnet_slash_30() {
        let s = build_subnet("177.16.174.1", "255.255.255.252").unwrap();
        assert_eq!(format_address(s.network_address()), "177.16.174.0");
        assert_eq!(format_address(s.broadcast_address()), "177.16.174.3");
        let hosts = s.host_range().unwrap();
        assert_eq!(format_address(hosts.first()), "177.16.174.1");
        assert_eq!(format_address(hosts.last()), "177.16.174.2");
        assert_eq!(s.host_count(), 2);
        assert_eq!(format_address(s.wildcard_mask()), "0.0.0.3");
        assert_eq!(s.cidr_prefix_length(), 30);
        assert_eq!(s.address_class(), AddressClass::B);
        assert_eq!(format_address(s.address()), "177.16.174.1");
    }

    #[test]
    fn test_build_subnet_slash_19() {
        let s = build_subnet("10.213.37.2", "255.255.224.0").unwrap();
        assert_eq!(format_address(s.network_address()), "10.213.32.0");
        assert_eq!(format_address(s.broadcast_address()), "10.213.63.255");
        assert_eq!(s.host_count(), 8190);
        assert_eq!(s.cidr_prefix_length(), 19);
        assert_eq!(s.address_class(), AddressClass::A);
    }

    #[test]
    fn test_class_ignores_mask() {
        for mask in ["0.0.0.0", "255.0.0.0", "255.255.255.255"] {
            let s = build_subnet("225.245.1.9", mask).unwrap();
            assert_eq!(s.address_class().to_string(), "D (multicast)");
        }
    }

    #[test]
    fn test_invariants() {
        for (addr, mask) in [
            ("177.16.174.1", "255.255.255.252"),
            ("10.213.37.2", "255.255.224.0"),
            ("192.168.78.138", "255.255.255.192"),
            ("1.2.3.4", "0.0.0.0"),
            ("1.2.3.4", "255.255.255.255"),
        ] {
            let s = build_subnet(addr, mask).unwrap();
            assert_eq!(s.network_address() & s.mask(), s.network_address());
            assert_eq!(
                s.broadcast_address(),
                s.network_address() | s.wildcard_mask()
            );
            assert_eq!(s.wildcard_mask(), s.mask() ^ ALL_ONES);
            assert!(s.network_address() <= s.broadcast_address());
        }
    }

    #[test]
    fn test_edge_prefixes() {
        let all = build_subnet("1.2.3.4", "0.0.0.0").unwrap();
        assert_eq!(all.network_address(), 0);
        assert_eq!(all.broadcast_address(), ALL_ONES);
        assert_eq!(all.host_count(), 4_294_967_294);
        assert_eq!(all.cidr_prefix_length(), 0);

        let point = build_subnet("1.2.3.4", "255.255.255.255").unwrap();
        assert_eq!(format_address(point.network_address()), "1.2.3.4");
        assert_eq!(format_address(point.broadcast_address()), "1.2.3.4");
        assert!(point.host_range().is_none());
        assert_eq!(point.host_count(), 0);
        assert_eq!(point.hosts().count(), 0);

        let pair = build_subnet("1.2.3.5", "255.255.255.254").unwrap();
        assert_eq!(format_address(pair.network_address()), "1.2.3.4");
        assert_eq!(format_address(pair.broadcast_address()), "1.2.3.5");
        assert_eq!(pair.host_count(), 0);
    }

    #[test]
    fn test_validation_order() {
        // both bad: the mask is reported
        assert!(matches!(
            build_subnet("300.16.174.1", "251.255.255.252"),
            Err(NetcalcError::InvalidMask(_))
        ));
        assert!(matches!(
            build_subnet("300.16.174.1", "255.255.255.0"),
            Err(NetcalcError::InvalidAddress(_))
        ));
        assert!(matches!(
            build_subnet("10.0.0.1", "255.255"),
            Err(NetcalcError::InvalidMask(_))
        ));
    }

    #[test]
    fn test_from_cidr() {
        let s: Subnet = "10.213.37.2/19".parse().unwrap();
        assert_eq!(s, build_subnet("10.213.37.2", "255.255.224.0").unwrap());
        assert!(matches!(
            Subnet::from_cidr("10.0.0.1/33"),
            Err(NetcalcError::InvalidPrefixLength(33))
        ));
        assert!(matches!(
            Subnet::from_cidr("10.0.0.1"),
            Err(NetcalcError::InvalidAddress(_))
        ));
        assert!(matches!(
            Subnet::from_cidr("10.0.0.1/x"),
            Err(NetcalcError::InvalidMask(_))
        ));
        assert!(matches!(
            Subnet::from_cidr("10.0.0.256/8"),
            Err(NetcalcError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_from_parts_bad_mask() {
        assert!(matches!(
            Subnet::from_parts(0x0A000001, 0xFF00FF00),
            Err(NetcalcError::InvalidMask(_))
        ));
    }

    #[test]
    fn test_contains() {
        let s = Subnet::new("172.17.221.102", "255.255.255.248").unwrap();
        assert!(s.contains(parse_address("172.17.221.96").unwrap()));
        assert!(s.contains(parse_address("172.17.221.103").unwrap()));
        assert!(!s.contains(parse_address("172.17.221.104").unwrap()));
    }

    #[test]
    fn test_hosts() {
        let s = Subnet::new("172.17.221.102", "255.255.255.248").unwrap();
        let hosts: Vec<String> = s.hosts().map(|a| a.to_string()).collect();
        assert_eq!(hosts.len() as u64, s.host_count());
        assert_eq!(hosts.first().unwrap(), "172.17.221.97");
        assert_eq!(hosts.last().unwrap(), "172.17.221.102");
    }

    #[test]
    fn test_to_json() {
        let s = Subnet::new("177.16.174.1", "255.255.255.252").unwrap();
        let json: serde_json::Value = serde_json::from_str(&s.to_json().unwrap()).unwrap();
        assert_eq!(json["network_address"], "177.16.174.0");
        assert_eq!(json["first_host"], "177.16.174.1");
        assert_eq!(json["last_host"], "177.16.174.2");
        assert_eq!(json["host_count"], 2);
        assert_eq!(json["address_class"], "B");
        assert_eq!(json["cidr_prefix_length"], 30);
        assert_eq!(json["wildcard_mask"], "0.0.0.3");

        let point = Subnet::new("1.2.3.4", "255.255.255.255").unwrap();
        let json: serde_json::Value = serde_json::from_str(&point.to_json().unwrap()).unwrap();
        assert!(json["first_host"].is_null());
    }
}
