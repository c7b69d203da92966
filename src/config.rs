//! Report rendering options.
//!
//! Read from the environment (and a `.env` file when present):
//! - `NETCALC_COLOR` - `1`, `true`, `yes` or `on` enables colour
//! - `NETCALC_LABEL_WIDTH` - pad labels to this many characters

use std::env;

pub const ENV_COLOR: &str = "NETCALC_COLOR";
pub const ENV_LABEL_WIDTH: &str = "NETCALC_LABEL_WIDTH";

/// Options for [`crate::output::render_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportConfig {
    /// Bold labels and highlighted values.
    pub color: bool,
    /// Minimum label width, 0 for no padding.
    pub label_width: usize,
}

impl ReportConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_values(
            env::var(ENV_COLOR).ok().as_deref(),
            env::var(ENV_LABEL_WIDTH).ok().as_deref(),
        )
    }

    fn from_values(color: Option<&str>, label_width: Option<&str>) -> Self {
        let color = color.map(parse_flag).unwrap_or(false);
        let label_width = match label_width {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring {ENV_LABEL_WIDTH}={raw:?}, not a number");
                0
            }),
            None => 0,
        };
        ReportConfig { color, label_width }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
