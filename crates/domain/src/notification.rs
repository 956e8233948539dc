// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User notifications.
//!
//! A notification is either a plain message or a titled message. The two
//! shapes have separate constructors; nothing is inferred from arguments.

use std::time::Duration;

const PLAIN_DURATION: Duration = Duration::from_secs(5);
const TITLED_DURATION: Duration = Duration::from_secs(4);

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The operation succeeded.
    Success,
    /// The operation failed.
    Error,
    /// The operation needs attention.
    Warning,
}

impl NotificationKind {
    /// Returns the icon shown with the notification.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Error => "❌",
            Self::Warning => "⚠️",
        }
    }
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    title: Option<String>,
    message: String,
    kind: NotificationKind,
    duration: Duration,
}

impl Notification {
    /// Creates a plain notification.
    #[must_use]
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            title: None,
            message: message.into(),
            kind,
            duration: PLAIN_DURATION,
        }
    }

    /// Creates a notification with a title line.
    #[must_use]
    pub fn with_title(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            title: Some(title.into()),
            message: message.into(),
            kind,
            duration: TITLED_DURATION,
        }
    }

    /// The title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The severity.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// How long the notification stays visible.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{} {title}: {}", self.kind.icon(), self.message),
            None => write!(f, "{} {}", self.kind.icon(), self.message),
        }
    }
}
