//! Human readable subnet report.

use super::terminal::format_line;
use crate::config::ReportConfig;
use crate::models::{format_address, Subnet};

/// Render the fixed-order report, one field per line.
///
/// ```text
/// Network address: 177.16.174.0
/// Subnet mask: 255.255.255.252
/// Broadcast address: 177.16.174.3
/// Host addresses: 177.16.174.1 to 177.16.174.2
/// Number of hosts: 2
/// Wildcard mask: 0.0.0.3
/// CIDR mask: 30
/// Network class: B
/// ```
pub fn render_report(subnet: &Subnet, config: &ReportConfig) -> String {
    let hosts = match subnet.host_range() {
        Some(range) => format!(
            "{} to {}",
            format_address(range.first()),
            format_address(range.last())
        ),
        None => "none".to_string(),
    };

    let lines = [
        ("Network address", format_address(subnet.network_address())),
        ("Subnet mask", format_address(subnet.mask())),
        ("Broadcast address", format_address(subnet.broadcast_address())),
        ("Host addresses", hosts),
        ("Number of hosts", subnet.host_count().to_string()),
        ("Wildcard mask", format_address(subnet.wildcard_mask())),
        ("CIDR mask", subnet.cidr_prefix_length().to_string()),
        ("Network class", subnet.address_class().to_string()),
    ];

    lines
        .iter()
        .map(|(label, value)| format_line(label, value, config.label_width, config.color))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Report with the default (plain, unpadded) configuration.
pub fn render_plain_report(subnet: &Subnet) -> String {
    render_report(subnet, &ReportConfig::default())
}
