//! Server configuration
//!
//! Every flag can also be supplied through the environment (or a `.env`
//! file). `JWT_SECRET` has no default: the server refuses to start without it.

use crate::auth::{jwt::DEFAULT_EXPIRATION_HOURS, password::DEFAULT_COST};
use anyhow::{bail, Result};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Shortest signing secret accepted at startup
pub const MIN_SECRET_LEN: usize = 32;

/// Longest session token lifetime accepted (one year)
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

#[derive(Parser, Clone)]
#[command(name = "taskboard")]
#[command(about = "Taskboard API server - lists and tasks behind bearer-token auth")]
pub struct Config {
    /// Secret used to sign session tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// SQLite database file
    #[arg(long, env = "DATABASE_PATH", default_value = "taskboard.db")]
    pub database_path: String,

    /// Address to bind
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind_addr: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// bcrypt work factor
    #[arg(long, env = "BCRYPT_COST", default_value_t = DEFAULT_COST,
          value_parser = clap::value_parser!(u32).range(4..=31))]
    pub bcrypt_cost: u32,

    /// Session token lifetime in hours
    #[arg(long, env = "TOKEN_TTL_HOURS", default_value_t = DEFAULT_EXPIRATION_HOURS,
          value_parser = clap::value_parser!(i64).range(1..=MAX_TOKEN_TTL_HOURS))]
    pub token_ttl_hours: i64,

    /// Directory with the static frontend (optional)
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Reject settings that parse but cannot be used safely
    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.trim().len() < MIN_SECRET_LEN {
            bail!(
                "JWT_SECRET must be at least {} characters long",
                MIN_SECRET_LEN
            );
        }
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&self.token_ttl_hours) {
            bail!(
                "TOKEN_TTL_HOURS must be between 1 and {}",
                MAX_TOKEN_TTL_HOURS
            );
        }
        if let Some(dir) = &self.static_dir {
            if !dir.is_dir() {
                bail!("STATIC_DIR {} is not a directory", dir.display());
            }
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["taskboard", "--jwt-secret", SECRET]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.token_ttl_hours, 24);
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_short_secret_rejected() {
        let config = Config::try_parse_from(["taskboard", "--jwt-secret", "short"]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bcrypt_cost_range() {
        let result =
            Config::try_parse_from(["taskboard", "--jwt-secret", SECRET, "--bcrypt-cost", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ttl_out_of_range_rejected() {
        for ttl in ["0", "-5", "8761", "4611686018427387903"] {
            let result = Config::try_parse_from([
                "taskboard",
                "--jwt-secret",
                SECRET,
                "--token-ttl-hours",
                ttl,
            ]);
            assert!(result.is_err(), "ttl {} should be rejected", ttl);
        }
    }

    #[test]
    fn test_oversized_ttl_fails_validation() {
        let mut config = Config::try_parse_from(["taskboard", "--jwt-secret", SECRET]).unwrap();
        config.token_ttl_hours = i64::MAX / 2;
        assert!(config.validate().is_err());

        config.token_ttl_hours = MAX_TOKEN_TTL_HOURS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_static_dir_rejected() {
        let config = Config::try_parse_from([
            "taskboard",
            "--jwt-secret",
            SECRET,
            "--static-dir",
            "/definitely/not/here",
        ])
        .unwrap();
        assert!(config.validate().is_err());
    }
}
