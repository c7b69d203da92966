//! Legacy classful address categories.

use serde::{Serialize, Serializer};
use std::fmt;

/// Address class derived from the leading bits of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressClass {
    /// Leading bit `0`.
    A,
    /// Leading bits `10`.
    B,
    /// Leading bits `110`.
    C,
    /// Leading bits `1110`, multicast.
    D,
    /// Leading bits `1111`, reserved.
    E,
}

impl AddressClass {
    pub fn label(&self) -> &'static str {
        match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D (multicast)",
            AddressClass::E => "E (reserved)",
        }
    }

    pub fn is_multicast(&self) -> bool {
        *self == AddressClass::D
    }

    pub fn is_reserved(&self) -> bool {
        *self == AddressClass::E
    }
}

/// Class of an address. The mask plays no part.
pub fn class_of(address: u32) -> AddressClass {
    match address.leading_ones() {
        0 => AddressClass::A,
        1 => AddressClass::B,
        2 => AddressClass::C,
        3 => AddressClass::D,
        _ => AddressClass::E,
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for AddressClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}
