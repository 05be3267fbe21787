use shared::AggregatorId;

use crate::core::{Result, ServerError};
use crate::hours::{BusinessHours, DayWindow};

/// Server configuration - everything the composition root needs
///
/// # Environment variables
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/ajdel | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | Runtime environment |
/// | ADMIN_PASSCODE | Ajdel2026 | Admin portal passcode |
/// | OPEN_HOUR | 11 | Regular opening hour (0-23) |
/// | CLOSE_HOUR | 24 | Regular closing hour (1-24, 24 = midnight) |
/// | FRIDAY_OPEN_HOUR | 16 | Friday opening hour |
/// | FRIDAY_CLOSE_HOUR | 24 | Friday closing hour |
/// | SHOW_JAHEZ | true | Show the Jahez link |
/// | SHOW_HUNGERSTATION | true | Show the HungerStation link |
/// | SHOW_KEETA | true | Show the Keeta link |
/// | SHOW_NINJA | true | Show the Ninja link |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/ajdel HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Admin portal passcode (thin gate, see the auth module)
    pub admin_passcode: String,
    /// Weekly opening schedule, validated at load
    pub hours: BusinessHours,
    /// Which aggregator links the landing page shows
    pub aggregators: AggregatorVisibility,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing or unparsable values fall back to defaults with a warning;
    /// an inconsistent hours window (open >= close) is a hard error.
    pub fn from_env() -> Result<Self> {
        let regular = DayWindow {
            open: env_u32("OPEN_HOUR", 11),
            close: env_u32("CLOSE_HOUR", 24),
        };
        let friday = DayWindow {
            open: env_u32("FRIDAY_OPEN_HOUR", 16),
            close: env_u32("FRIDAY_CLOSE_HOUR", 24),
        };
        let hours = BusinessHours::new(regular, friday)
            .map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/ajdel".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin_passcode: std::env::var("ADMIN_PASSCODE").unwrap_or_else(|_| "Ajdel2026".into()),
            hours,
            aggregators: AggregatorVisibility {
                jahez: env_bool("SHOW_JAHEZ", true),
                hungerstation: env_bool("SHOW_HUNGERSTATION", true),
                keeta: env_bool("SHOW_KEETA", true),
                ninja: env_bool("SHOW_NINJA", true),
            },
        })
    }

    /// Override the filesystem/network knobs, for test setups
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Result<Self> {
        let mut config = Self::from_env()?;
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        Ok(config)
    }
}

/// Aggregator link visibility toggles
///
/// An explicit configuration object threaded from the composition root -
/// never read from ambient storage at call sites.
#[derive(Debug, Clone, Copy)]
pub struct AggregatorVisibility {
    pub jahez: bool,
    pub hungerstation: bool,
    pub keeta: bool,
    pub ninja: bool,
}

impl AggregatorVisibility {
    pub fn is_visible(&self, id: AggregatorId) -> bool {
        match id {
            AggregatorId::Jahez => self.jahez,
            AggregatorId::Hungerstation => self.hungerstation,
            AggregatorId::Keeta => self.keeta,
            AggregatorId::Ninja => self.ninja,
        }
    }
}

impl Default for AggregatorVisibility {
    fn default() -> Self {
        Self {
            jahez: true,
            hungerstation: true,
            keeta: true,
            ninja: true,
        }
    }
}

fn env_u32(key: &str, default: u32) -> u32 {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Failed to parse {key}='{raw}', falling back to {default}");
            default
        }),
        Err(_) => default,
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Failed to parse {key}='{raw}', falling back to {default}");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_toggles_map_to_ids() {
        let vis = AggregatorVisibility {
            jahez: false,
            ..Default::default()
        };
        assert!(!vis.is_visible(AggregatorId::Jahez));
        assert!(vis.is_visible(AggregatorId::Keeta));
        assert!(vis.is_visible(AggregatorId::Hungerstation));
        assert!(vis.is_visible(AggregatorId::Ninja));
    }
}
