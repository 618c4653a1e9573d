//! Logging support.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros the
//! engine uses and installs a `tracing-subscriber` formatter on request.  With
//! the feature disabled the same names resolve to no-op shims, so call sites
//! never need their own `cfg` attributes.
//!
//! `tracing::warn!` is exported as `warning!`: a crate-local `warn` macro
//! would be ambiguous with the built-in `#[warn]` attribute.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing_subscriber::{Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    /// Installs a formatting subscriber once per process.  Later calls, or
    /// calls made after the host installed its own subscriber, do nothing.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default()
                .with(fmt::layer().with_test_writer().with_target(false))
                .try_init();
        });
    }

    pub use tracing::{debug, info_span, warn as warning};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    macro_rules! info_span {
        ($($args:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    macro_rules! warning {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use {debug, info_span, warning};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::{NoOpSpan, NoOpSpanGuard, init_tracing};

#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, info_span, warning};
