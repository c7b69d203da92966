//! Usable host addresses of a subnet.
//!
//! [`HostRange`] only stores its two ends. Addresses are produced on demand by
//! [`Hosts`], so a /8 costs no more memory than a /30.

use super::ipv4::{broadcast_address_of, format_address, network_address_of};
use crate::error::{NetcalcError, Result};
use std::iter::FusedIterator;
use std::net::Ipv4Addr;

/// First and last usable host address, inclusive. `first <= last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostRange {
    first: u32,
    last: u32,
}

impl HostRange {
    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    /// Number of addresses in the range. Never zero.
    pub fn len(&self) -> u64 {
        u64::from(self.last - self.first) + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, address: u32) -> bool {
        (self.first..=self.last).contains(&address)
    }

    /// Walk the range from the start. Each call starts over.
    pub fn iter(&self) -> Hosts {
        Hosts {
            next: self.first,
            back: self.last,
            done: false,
        }
    }
}

impl IntoIterator for HostRange {
    type Item = Ipv4Addr;
    type IntoIter = Hosts;

    fn into_iter(self) -> Hosts {
        self.iter()
    }
}

impl IntoIterator for &HostRange {
    type Item = Ipv4Addr;
    type IntoIter = Hosts;

    fn into_iter(self) -> Hosts {
        self.iter()
    }
}

/// Lazy iterator over host addresses.
#[derive(Debug, Clone)]
pub struct Hosts {
    next: u32,
    back: u32,
    done: bool,
}

impl Hosts {
    /// Iterator that yields nothing, for subnets without usable hosts.
    pub fn empty() -> Self {
        Hosts {
            next: 0,
            back: 0,
            done: true,
        }
    }

    fn remaining(&self) -> u64 {
        if self.done {
            0
        } else {
            u64::from(self.back - self.next) + 1
        }
    }
}

impl Iterator for Hosts {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        if self.done {
            return None;
        }
        let current = self.next;
        if current == self.back {
            self.done = true;
        } else {
            self.next += 1;
        }
        Some(Ipv4Addr::from(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Ipv4Addr> {
        if (n as u64) >= self.remaining() {
            self.done = true;
            return None;
        }
        self.next += n as u32;
        self.next()
    }
}

impl DoubleEndedIterator for Hosts {
    fn next_back(&mut self) -> Option<Ipv4Addr> {
        if self.done {
            return None;
        }
        let current = self.back;
        if current == self.next {
            self.done = true;
        } else {
            self.back -= 1;
        }
        Some(Ipv4Addr::from(current))
    }
}

impl ExactSizeIterator for Hosts {}

impl FusedIterator for Hosts {}

/// Usable host range of a network.
///
/// `network` must already be the network address for `mask`. Returns
/// `Ok(None)` for /31 and /32, which have no usable hosts.
pub fn host_address_range(network: u32, mask: u32) -> Result<Option<HostRange>> {
    if network_address_of(network, mask)? != network {
        log::debug!(
            "host_address_range({}, {}) has host bits set",
            format_address(network),
            format_address(mask)
        );
        return Err(NetcalcError::NotANetworkAddress {
            address: format_address(network),
            mask: format_address(mask),
        });
    }

    let broadcast = broadcast_address_of(network, mask)?;
    // /31 and /32 leave nothing between network and broadcast
    if broadcast - network < 2 {
        return Ok(None);
    }
    Ok(Some(HostRange {
        first: network + 1,
        last: broadcast - 1,
    }))
}
