//! Logging capability
//!
//! The store never talks to a logging backend directly. It calls a
//! [`Logger`] handed to it through [`crate::Config`], so callers can route
//! messages wherever they like.

use std::fmt;

/// Leveled logging capability used by the store
///
/// Each method receives pre-bound format arguments, so call sites read like
/// `logger.info(format_args!("Wrote {}", key))`.
pub trait Logger: Send + Sync + fmt::Debug {
    fn fatal(&self, args: fmt::Arguments<'_>);
    fn error(&self, args: fmt::Arguments<'_>);
    fn info(&self, args: fmt::Arguments<'_>);
    fn debug(&self, args: fmt::Arguments<'_>);
}

/// Default logger: forwards to `tracing`
///
/// `tracing` has no fatal level, so fatal messages go out at ERROR
/// with `fatal = true` attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn fatal(&self, args: fmt::Arguments<'_>) {
        tracing::error!(target: "filekv", fatal = true, "{}", args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        tracing::error!(target: "filekv", "{}", args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(target: "filekv", "{}", args);
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(target: "filekv", "{}", args);
    }
}

/// Logger that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn fatal(&self, _args: fmt::Arguments<'_>) {}
    fn error(&self, _args: fmt::Arguments<'_>) {}
    fn info(&self, _args: fmt::Arguments<'_>) {}
    fn debug(&self, _args: fmt::Arguments<'_>) {}
}
