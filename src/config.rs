//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "timers")]
#[command(about = "Named countdown timers with expiry notifications")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Default timer length in minutes, used when a new timer gives none
    #[arg(short = 't', long, default_value = "10")]
    pub timer_length: u64,

    /// Ask the host to show expiry notifications as modal prompts
    #[arg(long)]
    pub modal_popup: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Settings the timer core reads once at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerSettings {
    pub default_duration_minutes: u64,
    pub modal_notification: bool,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            default_duration_minutes: 10,
            modal_notification: false,
        }
    }
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Extract the settings handed to the timer core
    pub fn settings(&self) -> anyhow::Result<TimerSettings> {
        if self.timer_length == 0 {
            anyhow::bail!("--timer-length must be at least one minute");
        }
        Ok(TimerSettings {
            default_duration_minutes: self.timer_length,
            modal_notification: self.modal_popup,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["timers"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.settings().unwrap(), TimerSettings::default());
    }

    #[test]
    fn flags_map_onto_settings() {
        let config =
            Config::try_parse_from(["timers", "-t", "25", "--modal-popup", "-v"]).unwrap();
        let settings = config.settings().unwrap();
        assert_eq!(settings.default_duration_minutes, 25);
        assert!(settings.modal_notification);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn zero_length_is_rejected() {
        let config = Config::try_parse_from(["timers", "--timer-length", "0"]).unwrap();
        assert!(config.settings().is_err());
    }
}
