use std::sync::Arc;

use sentry_core::protocol::{Breadcrumb, Event};
use sentry_core::Hub;

/// The error-reporting client a sink dispatches to.
///
/// Both calls are fire and forget. Transport, batching and retries are the
/// implementor's business, and nothing is reported back to the sink.
pub trait Reporter: Send + Sync {
    /// Submits a fully formed event.
    fn capture_event(&self, event: Event<'static>);

    /// Appends a breadcrumb to the client's trail.
    fn add_breadcrumb(&self, breadcrumb: Breadcrumb);
}

impl Reporter for Hub {
    fn capture_event(&self, event: Event<'static>) {
        Hub::capture_event(self, event);
    }

    fn add_breadcrumb(&self, breadcrumb: Breadcrumb) {
        Hub::add_breadcrumb(self, breadcrumb);
    }
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn capture_event(&self, event: Event<'static>) {
        (**self).capture_event(event)
    }

    fn add_breadcrumb(&self, breadcrumb: Breadcrumb) {
        (**self).add_breadcrumb(breadcrumb)
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn capture_event(&self, event: Event<'static>) {
        (**self).capture_event(event)
    }

    fn add_breadcrumb(&self, breadcrumb: Breadcrumb) {
        (**self).add_breadcrumb(breadcrumb)
    }
}

/// Dispatches to whichever [`Hub`] is active on the calling thread.
///
/// This resolves the hub per call, with the semantics described in
/// [`Hub::with_active`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentHub;

impl Reporter for CurrentHub {
    fn capture_event(&self, event: Event<'static>) {
        sentry_core::capture_event(event);
    }

    fn add_breadcrumb(&self, breadcrumb: Breadcrumb) {
        sentry_core::add_breadcrumb(breadcrumb);
    }
}
