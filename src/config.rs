//! Evaluation limits.
//!
//! Every combinator application is counted on a per-thread depth counter.
//! Self-application such as `M(M)` never returns, so instead of letting it
//! overflow the host stack the counter turns it into a
//! [`ErrorKind::RecursionLimit`](crate::ErrorKind::RecursionLimit) error.
//!
//! The limit comes from, in order of precedence:
//! - a scoped override installed by [`with_max_depth`]
//! - a per-thread value set by [`set_max_depth`]
//! - the `AVIARY_MAX_DEPTH` environment variable, read once per process
//! - [`FALLBACK_MAX_DEPTH`]

use std::cell::Cell;
use std::env;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Environment variable consulted for the process-wide default.
pub const MAX_DEPTH_ENV: &str = "AVIARY_MAX_DEPTH";

/// Default used when the environment does not say otherwise.
pub const FALLBACK_MAX_DEPTH: usize = 512;

static DEFAULT_MAX_DEPTH: Lazy<usize> = Lazy::new(|| match env::var(MAX_DEPTH_ENV) {
    Ok(raw) => match raw.trim().parse::<usize>() {
        Ok(depth) if depth > 0 => {
            debug!(depth, "using {MAX_DEPTH_ENV} override");
            depth
        }
        _ => {
            warn!(value = %raw, "ignoring invalid {MAX_DEPTH_ENV}");
            FALLBACK_MAX_DEPTH
        }
    },
    Err(_) => FALLBACK_MAX_DEPTH,
});

thread_local! {
    static MAX_DEPTH: Cell<Option<usize>> = const { Cell::new(None) };
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// The maximum application depth in effect on this thread.
pub fn max_depth() -> usize {
    MAX_DEPTH.with(|max| max.get()).unwrap_or(*DEFAULT_MAX_DEPTH)
}

/// Set the maximum application depth for this thread.
pub fn set_max_depth(depth: usize) {
    MAX_DEPTH.with(|max| max.set(Some(depth)));
}

/// Run `f` with a temporary maximum depth, restoring the previous one afterwards.
pub fn with_max_depth<R>(depth: usize, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<usize>);

    impl Drop for Restore {
        fn drop(&mut self) {
            MAX_DEPTH.with(|max| max.set(self.0));
        }
    }

    let _restore = Restore(MAX_DEPTH.with(|max| max.replace(Some(depth))));
    f()
}

/// Current nesting of applications on this thread.
pub fn depth() -> usize {
    DEPTH.with(|d| d.get())
}

/// Held for the duration of one application; releases its level on drop.
pub(crate) struct DepthGuard(());

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

pub(crate) fn enter(name: Option<&str>) -> Result<DepthGuard> {
    let limit = max_depth();
    let current = depth();
    if current >= limit {
        warn!(limit, combinator = name.unwrap_or("<fn>"), "application depth exhausted");
        return Err(Error::recursion_limit(limit, name));
    }
    DEPTH.with(|d| d.set(current + 1));
    Ok(DepthGuard(()))
}
