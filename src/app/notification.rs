use leptos::prelude::*;

use crate::notify::{NotificationSlot, DISMISS_AFTER};

/// Handle to the page-wide advisory slot.
///
/// Created once by [`provide_notifications`] and fetched by views with
/// [`use_notifications`]. Cheap to copy into event handlers.
#[derive(Debug, Clone, Copy)]
pub struct Notifications {
    slot: RwSignal<NotificationSlot>,
    timer: StoredValue<Option<TimeoutHandle>>,
}

impl Notifications {
    fn new() -> Self {
        Self {
            slot: RwSignal::new(NotificationSlot::new()),
            timer: StoredValue::new(None),
        }
    }

    /// Replaces the current message and restarts the dismiss timer.
    pub fn show(&self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("notification: {message}");
        let Some(id) = self.slot.try_update(|s| s.show(message)) else {
            return;
        };
        self.cancel_timer();

        let slot = self.slot;
        match set_timeout_with_handle(
            move || {
                // the slot may be gone if the page was torn down
                slot.try_update(|s| s.expire(id));
            },
            DISMISS_AFTER,
        ) {
            Ok(handle) => self.timer.set_value(Some(handle)),
            Err(e) => log::warn!("couldn't arm notification timer: {e:?}"),
        }
    }

    pub fn dismiss(&self) {
        self.slot.update(|s| {
            s.dismiss();
        });
        self.cancel_timer();
    }

    /// The message on display, if any. Tracks the slot when read in a
    /// reactive context.
    pub fn message(&self) -> Option<String> {
        self.slot.with(|s| s.message().map(str::to_string))
    }

    fn cancel_timer(&self) {
        if let Some(Some(handle)) = self.timer.try_get_value() {
            handle.clear();
            self.timer.try_set_value(None);
        }
    }
}

/// Creates the notification slot for the current scope. Pending timers are
/// cancelled when the scope is cleaned up.
pub fn provide_notifications() -> Notifications {
    let notifications = Notifications::new();
    provide_context(notifications);
    on_cleanup(move || notifications.cancel_timer());
    notifications
}

/// Panics when called outside a scope set up by [`provide_notifications`],
/// so a missing provider shows up on first render instead of as a dead
/// button.
pub fn use_notifications() -> Notifications {
    use_context::<Notifications>()
        .expect("use_notifications called outside of provide_notifications scope")
}

#[component]
pub fn NotificationToast() -> impl IntoView {
    let notifications = use_notifications();
    let drain = format!("animation-duration: {}ms", DISMISS_AFTER.as_millis());

    move || {
        let drain = drain.clone();
        // rebuilt on every change so the drain bar restarts for a new message
        notifications.message().map(move |message| {
            view! {
                <div
                    class="fixed bottom-8 right-4 md:right-8 z-[10000] max-w-sm w-full md:w-auto animate-slide-in"
                    role="alert"
                >
                    <div class="bg-[#050505] border border-yellow-500/50 shadow-[0_0_30px_rgba(234,179,8,0.15)] relative overflow-hidden rounded-sm min-w-[300px]">
                        <div class="absolute top-0 left-0 w-1 h-full bg-yellow-500" />
                        <div class="absolute top-0 right-0 w-2 h-2 border-t border-r border-yellow-500" />
                        <div class="absolute bottom-0 right-0 w-2 h-2 border-b border-r border-yellow-500" />
                        <div class="absolute inset-0 bg-[linear-gradient(rgba(234,179,8,0.03)_1px,transparent_1px)] bg-[size:100%_3px] pointer-events-none" />

                        <div class="p-4 pl-6 flex items-start gap-4 relative z-10">
                            <div class="bg-yellow-500/10 p-2 rounded-sm border border-yellow-500/30 animate-pulse text-yellow-500 font-mono text-sm">
                                ">_"
                            </div>
                            <div class="flex-1 pr-6">
                                <div class="flex items-center gap-2 mb-1">
                                    <span class="text-yellow-500 text-xs">"⚠"</span>
                                    <h4 class="text-yellow-500 font-orbitron text-xs font-bold tracking-[0.2em] uppercase">
                                        "SYSTEM_ALERT"
                                    </h4>
                                </div>
                                <p class="text-gray-300 font-mono text-xs leading-relaxed border-l border-gray-800 pl-2">
                                    {message}
                                </p>
                            </div>
                            <button
                                class="absolute top-2 right-2 text-gray-600 hover:text-white transition-colors"
                                aria-label="Dismiss"
                                on:click=move |_| notifications.dismiss()
                            >
                                "✕"
                            </button>
                        </div>

                        <div class="h-0.5 bg-yellow-500 w-full animate-drain" style=drain />
                    </div>
                </div>
            }
        })
    }
}
