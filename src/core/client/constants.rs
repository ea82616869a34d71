//! Centralized constants for the default host, UA and session lifetime.

use std::time::Duration;

/// The hosted Ghostfolio service.
pub(crate) const DEFAULT_HOST: &str = "https://ghostfol.io/";

/// Identifies this crate to the server.
pub(crate) const USER_AGENT: &str = concat!("ghostfolio-rs/", env!("CARGO_PKG_VERSION"));

/// Endpoint that trades an access token for a session token (relative to `/api/v1/`).
pub(crate) const AUTH_ENDPOINT: &str = "auth/anonymous";

/// How long a session token is reused before it is exchanged again.
pub(crate) const SESSION_LIFETIME: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Environment variable holding the access token for [`from_env`](super::GhostfolioClient::from_env).
pub(crate) const ENV_TOKEN: &str = "GHOSTFOLIO_TOKEN";

/// Environment variable overriding the host for [`from_env`](super::GhostfolioClient::from_env).
pub(crate) const ENV_HOST: &str = "GHOSTFOLIO_HOST";
