use log::LevelFilter;
use std::time::Duration;

/// The host interface the server listens on.
pub const DEFAULT_INTERFACE: &str = "0.0.0.0";

/// The host TCP port the server listens on.
pub const DEFAULT_PORT: u16 = 4444;

/// How often a connected client receives a new coordinate.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(10);

/// Process settings. Everything is fixed at build time; there are no flags,
/// environment variables or config files.
#[derive(Clone, Debug)]
pub struct Config {
    /// The host interface to listen for incoming connections
    pub interface: String,

    /// The host TCP port to listen for incoming connections
    pub port: u16,

    /// Log level verbosity threshold for console output
    pub log_level_filter: LevelFilter,

    tick_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Config {
            interface: DEFAULT_INTERFACE.to_string(),
            port: DEFAULT_PORT,
            log_level_filter: LevelFilter::Info,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }

    /// `interface:port`, ready to hand to a TCP listener.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.interface, self.port)
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Zero is ignored since a timer cannot fire every zero seconds.
    pub fn set_tick_interval(mut self, tick_interval: Duration) -> Self {
        if !tick_interval.is_zero() {
            self.tick_interval = tick_interval;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listens_on_all_interfaces_port_4444() {
        let config = Config::default();

        assert_eq!(config.listen_address(), "0.0.0.0:4444");
    }

    #[test]
    fn default_ticks_every_ten_seconds() {
        assert_eq!(Config::new().tick_interval(), Duration::from_secs(10));
    }

    #[test]
    fn set_tick_interval_overrides_default() {
        let config = Config::new().set_tick_interval(Duration::from_millis(50));

        assert_eq!(config.tick_interval(), Duration::from_millis(50));
    }

    #[test]
    fn set_tick_interval_ignores_zero() {
        let config = Config::new().set_tick_interval(Duration::ZERO);

        assert_eq!(config.tick_interval(), DEFAULT_TICK_INTERVAL);
    }
}
