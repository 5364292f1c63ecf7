// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// A message shown to the user after an operation finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The operation succeeded.
    Success(String),
    /// The operation failed.
    Failure(String),
}

impl Notice {
    /// The message text.
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Failure(msg) => msg,
        }
    }

    /// Whether this notice reports a success.
    pub const fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Something that can show notices to the user.
pub trait Notifier: Send + Sync {
    /// Shows a notice.
    fn notify(&self, notice: &Notice);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice);
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice);
    }
}
