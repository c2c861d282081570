//! Fire-and-forget deferred work.
//!
//! Callbacks cannot be cancelled; whatever they touch must tolerate running late.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

/// Run `f` once after `delay_ms` milliseconds
pub fn schedule<F>(delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        f();
    });
}

/// Run `f` on the next tick.
///
/// For handlers that unmount their own element: the reactive owner of the
/// handler must outlive the event dispatch that invoked it.
pub fn defer<F>(f: F)
where
    F: FnOnce() + 'static,
{
    schedule(0, f);
}
