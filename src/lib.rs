//! IPv4 subnet calculator.
//!
//! Give it an address and a mask in dotted-decimal form and it derives the
//! network and broadcast addresses, the usable host range and count, the
//! wildcard mask, the CIDR prefix length and the legacy address class.
//!
//! ```
//! use netcalc::Subnet;
//!
//! let subnet = Subnet::new("177.16.174.1", "255.255.255.252").unwrap();
//! assert_eq!(subnet.host_count(), 2);
//! println!("{subnet}");
//! ```
//!
//! The library logs through the `log` facade and never installs a logger.

pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use config::ReportConfig;
pub use error::{NetcalcError, Result};
pub use models::{build_subnet, AddressClass, HostRange, Hosts, Subnet};
pub use output::render_report;
