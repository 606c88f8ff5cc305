//! Notification variants and the auto-dismiss countdown model.
//!
//! DESIGN
//! ======
//! `NotificationTimer` is a pure state machine fed with elapsed milliseconds.
//! The `Toast` component owns the browser timer loop and only asks the model
//! what to render and whether to fire its close callback. Expiry and manual
//! dismissal both go through `dismiss`, so the callback runs exactly once no
//! matter which path closes the notification first.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// Default lifetime of a toast before it dismisses itself.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;

/// Interval between progress-bar refreshes.
pub const PROGRESS_TICK_MS: u32 = 50;

/// Visual intent shared by toasts, alerts and banners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationVariant {
    pub const ALL: [Self; 4] = [Self::Info, Self::Success, Self::Warning, Self::Error];

    /// Capitalized display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    /// Lowercase name used as the BEM modifier (`toast--success`).
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✔",
            Self::Warning => "⚠",
            Self::Error => "✖",
        }
    }
}

/// A transient message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub variant: NotificationVariant,
    pub title: Option<String>,
    pub message: String,
    /// Zero disables auto-dismiss.
    pub duration_ms: u32,
}

/// Result of feeding elapsed time into a timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerTick {
    /// Still counting down (or already closed).
    Running,
    /// The duration elapsed on this tick; the caller must close the notification.
    Expired,
}

/// Countdown for one notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotificationTimer {
    duration_ms: f64,
    elapsed_ms: f64,
    visible: bool,
    expired: bool,
}

impl NotificationTimer {
    #[must_use]
    pub fn new(duration_ms: u32) -> Self {
        Self { duration_ms: f64::from(duration_ms), elapsed_ms: 0.0, visible: true, expired: false }
    }

    /// Record the total time elapsed since the notification appeared.
    ///
    /// Reports `Expired` once, on the first tick that reaches the duration
    /// while the notification is still visible. Time never runs backwards.
    pub fn advance(&mut self, elapsed_ms: f64) -> TimerTick {
        if !self.visible || self.expired || self.duration_ms <= 0.0 {
            return TimerTick::Running;
        }
        self.elapsed_ms = self.elapsed_ms.max(elapsed_ms.max(0.0));
        if self.elapsed_ms >= self.duration_ms {
            self.expired = true;
            TimerTick::Expired
        } else {
            TimerTick::Running
        }
    }

    /// Fraction of the lifetime left, decreasing linearly from 1.0 to 0.0.
    #[must_use]
    pub fn remaining_fraction(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (1.0 - self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Hide the notification. Returns `true` only for the first close.
    pub fn dismiss(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        self.duration_ms > 0.0
    }
}
