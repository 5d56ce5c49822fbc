use dioxus::prelude::*;
use dioxus_i18n::t;
use supabase_auth::{Notification, NotificationVariant};

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Toasts currently on screen, oldest first
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, notification });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Show a toast and take it down again after `duration_secs`.
/// The timer outlives the screen that raised the toast.
pub fn show_toast(mut queue: Signal<ToastQueue>, notification: Notification, duration_secs: u64) {
    log::debug!("Toast: {}", notification.title);
    let id = queue.write().push(notification);
    spawn_forever(async move {
        tokio::time::sleep(std::time::Duration::from_secs(duration_secs)).await;
        if let Ok(mut queue) = queue.try_write() {
            queue.dismiss(id);
        }
    });
}

#[component]
pub fn ToastStack(mut queue: Signal<ToastQueue>) -> Element {
    let toasts = queue.read().items().to_vec();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: if toast.notification.variant == NotificationVariant::Destructive { "toast toast-destructive" } else { "toast" },
                    div { style: "display: flex; justify-content: space-between; align-items: start; gap: 12px;",
                        div {
                            p { style: "margin: 0; font-weight: 600; font-size: 14px;",
                                "{toast.notification.title}"
                            }
                            p { style: "margin: 4px 0 0 0; font-size: 13px;",
                                "{toast.notification.description}"
                            }
                        }
                        button {
                            style: "background: none; border: none; cursor: pointer; font-size: 16px;",
                            title: t!("toast-dismiss"),
                            onclick: move |_| {
                                queue.write().dismiss(toast.id);
                            },
                            "✕"
                        }
                    }
                }
            }
        }
    }
}
