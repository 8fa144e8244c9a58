//! Status reporting.
//!
//! Core operations announce each remote call through a [`Reporter`] so the
//! CLI can render progress while tests stay quiet.

/// Receiver for progress of a sync run.
pub trait Reporter {
    /// A remote call is about to start.
    fn step(&self, label: &str);

    /// The call announced by the last [`Reporter::step`] finished.
    fn done(&self, ok: bool, message: &str);

    /// A remote call was skipped because of dry-run.
    fn dry_run(&self, action: &str);

    /// Something was skipped but the run continues.
    fn warn(&self, message: &str);
}

/// Reporter that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Reporter for Silent {
    fn step(&self, _label: &str) {}
    fn done(&self, _ok: bool, _message: &str) {}
    fn dry_run(&self, _action: &str) {}
    fn warn(&self, _message: &str) {}
}
