//! Toast notifications: one at a time, auto-expiring.

pub mod slot;

pub use slot::{ActiveNotification, NotificationSlot};

use crate::shared::timers;
use contracts::shared::error::{BookingError, ErrorClass};
use contracts::shared::notification::{NotificationKind, NotificationRecord};
use leptos::prelude::*;
use thaw::*;

/// Service for emitting toasts from anywhere in the page
#[derive(Clone, Copy)]
pub struct NotificationService {
    slot: RwSignal<NotificationSlot>,
    ttl_ms: u32,
}

impl NotificationService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            slot: RwSignal::new(NotificationSlot::new()),
            ttl_ms,
        }
    }

    /// Replace any toast on screen and schedule its expiry
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let record = NotificationRecord::new(message, kind);
        log::debug!("notification [{}]: {}", record.kind.css_class(), record.message);
        let Some(id) = self.slot.try_update(|s| s.show(record)) else {
            return;
        };

        let slot = self.slot;
        timers::schedule(self.ttl_ms, move || {
            // the page may have been torn down in the meantime
            let _ = slot.try_update(|s| s.expire(id));
        });
    }

    pub fn show(&self, record: NotificationRecord) {
        self.notify(record.message, record.kind);
    }

    pub fn error(&self, err: &BookingError) {
        match err.class() {
            ErrorClass::Parse => log::warn!("booking rejected, bad page data: {:?}", err),
            ErrorClass::Validation => log::info!("booking rejected: {:?}", err),
        }
        self.show(err.notification());
    }

    pub fn dismiss(&self) {
        self.slot.update(|s| s.dismiss());
    }

    pub fn current(&self) -> Option<ActiveNotification> {
        self.slot.with(|s| s.current().cloned())
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)")
}

/// Renders the current toast. Must be mounted exactly once.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    move || {
        svc.current().map(|active| {
            let kind = active.record.kind;
            let intent = match kind {
                NotificationKind::Info => MessageBarIntent::Info,
                NotificationKind::Error => MessageBarIntent::Error,
                NotificationKind::Success => MessageBarIntent::Success,
            };
            view! {
                <div class=format!("notification {}", kind.css_class()) role="status">
                    <MessageBar intent=intent>
                        <span class="notification__message">{active.record.message}</span>
                        <Button
                            appearance=ButtonAppearance::Transparent
                            size=ButtonSize::Small
                            on_click=move |_| svc.dismiss()
                            attr:aria-label="Close notification"
                        >
                            "×"
                        </Button>
                    </MessageBar>
                </div>
            }
        })
    }
}
