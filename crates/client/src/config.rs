// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client configuration.

use chrono_tz::Tz;
use std::time::Duration;

/// Backend used when no URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Per-request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Connectivity probe timeout used when none is configured.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Settings for talking to the registration backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL that relative API paths are joined to.
    pub base_url: String,
    /// Timeout applied to every request.
    pub request_timeout: Duration,
    /// Timeout for the connectivity probe run before submitting.
    pub probe_timeout: Duration,
    /// Bearer token sent with every request when present.
    pub admin_token: Option<String>,
    /// Timezone used to read naive timestamps and to display times.
    pub display_timezone: Tz,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            admin_token: None,
            display_timezone: chrono_tz::Asia::Taipei,
        }
    }
}

impl ClientConfig {
    /// Returns a default configuration pointed at `base_url`.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Resolves a request target.
    ///
    /// Absolute `http`/`https` URLs are used as-is; anything else is joined
    /// to the base URL.
    #[must_use]
    pub fn resolve_url(&self, target: &str) -> String {
        if target.starts_with("http://") || target.starts_with("https://") {
            return target.to_string();
        }

        let base: &str = self.base_url.trim_end_matches('/');
        if target.starts_with('/') {
            format!("{base}{target}")
        } else {
            format!("{base}/{target}")
        }
    }
}
