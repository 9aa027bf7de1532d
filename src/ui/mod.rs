//! Progress reporting for a load run
//!
//! The loader reports which phase it is in and how many rows have been
//! written. `LogUi` forwards everything to `tracing`; `SilentUi` drops it.

use tracing::info;

/// Load phases, in the order they occur
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Connecting,
    PreparingSchema,
    Reading,
    Inserting,
    Flushing,
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Connecting => write!(f, "Connecting to database"),
            Phase::PreparingSchema => write!(f, "Recreating table"),
            Phase::Reading => write!(f, "Reading source file"),
            Phase::Inserting => write!(f, "Inserting records"),
            Phase::Flushing => write!(f, "Flushing tables"),
            Phase::Complete => write!(f, "Complete"),
        }
    }
}

/// Progress information for the current operation
#[derive(Debug, Clone, Default)]
pub struct Progress {
    pub current: u64,
    pub total: u64,
    pub label: String,
}

impl Progress {
    pub fn new(current: u64, total: u64, label: impl Into<String>) -> Self {
        Self {
            current,
            total,
            label: label.into(),
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.current as f64 / self.total as f64
        }
    }
}

/// Sink for loader progress - lets tests run without log output
pub trait Ui {
    fn set_phase(&mut self, phase: Phase);
    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>);
    fn log(&mut self, message: impl Into<String>);
}

/// Reports through `tracing` events
#[derive(Debug, Default)]
pub struct LogUi;

impl LogUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for LogUi {
    fn set_phase(&mut self, phase: Phase) {
        info!("{}", phase);
    }

    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>) {
        let progress = Progress::new(current, total, label);
        info!(
            "{}: {}/{} ({:.0}%)",
            progress.label,
            progress.current,
            progress.total,
            progress.ratio() * 100.0
        );
    }

    fn log(&mut self, message: impl Into<String>) {
        info!("{}", message.into());
    }
}

/// Silent UI implementation for testing and non-interactive use
#[derive(Default)]
pub struct SilentUi;

impl SilentUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for SilentUi {
    fn set_phase(&mut self, _phase: Phase) {}
    fn set_progress(&mut self, _current: u64, _total: u64, _label: impl Into<String>) {}
    fn log(&mut self, _message: impl Into<String>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_ratio() {
        assert_eq!(Progress::new(0, 0, "rows").ratio(), 0.0);
        assert_eq!(Progress::new(25, 100, "rows").ratio(), 0.25);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Flushing.to_string(), "Flushing tables");
    }
}
