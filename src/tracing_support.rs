//! Tracing support.
//!
//! With the `tracing` feature enabled, graph operations emit `tracing` spans
//! and debug events, and [`init_tracing`] installs a subscriber that prints
//! them to stderr and accumulates per-span timings.  With the feature
//! disabled the same names are no-ops.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, filter::LevelFilter, layer::Context, layer::SubscriberExt,
        registry::LookupSpan, util::SubscriberInitExt,
    };

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    SPAN_TIMINGS.with(|totals| {
                        let mut totals = totals.borrow_mut();
                        let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    });
                }
            }
        }
    }

    /// Installs the global subscriber.  Safe to call more than once; only the
    /// first call has an effect.  The log level is read from `RUST_LOG`
    /// (`error`, `warn`, `info`, `debug`, `trace` or `off`) and defaults to
    /// `info`.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let level = std::env::var("RUST_LOG")
                .ok()
                .and_then(|value| value.parse::<LevelFilter>().ok())
                .unwrap_or(LevelFilter::INFO);
            let fmt = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(level);
            let _ = Registry::default().with(TimingLayer).with(fmt).try_init();
        });
    }

    /// Returns the total time spent in, and the number of, closed spans on the
    /// current thread, keyed by span name.
    pub fn span_timings() -> BTreeMap<&'static str, (Duration, usize)> {
        SPAN_TIMINGS.with(|totals| totals.borrow().clone())
    }

    pub fn reset_span_timings() {
        init_tracing();
        SPAN_TIMINGS.with(|totals| totals.borrow_mut().clear());
    }

    pub(crate) use tracing::{debug, info_span};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::{collections::BTreeMap, time::Duration};

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn span_timings() -> BTreeMap<&'static str, (Duration, usize)> {
        BTreeMap::new()
    }

    pub fn reset_span_timings() {
        // No-op when tracing is disabled
    }

    macro_rules! info_span {
        ($($args:tt)*) => {
            $crate::tracing_support::NoOpSpan
        };
    }

    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use {debug, info_span};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub(crate) use enabled::{debug, info_span};
#[cfg(feature = "tracing")]
pub use enabled::{init_tracing, reset_span_timings, span_timings};

#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, info_span};
#[cfg(not(feature = "tracing"))]
pub use disabled::{NoOpSpan, NoOpSpanGuard, init_tracing, reset_span_timings, span_timings};
