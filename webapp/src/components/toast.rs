use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::debug;

use portfolio::effects::{Notification, Notifier};

const TOAST_DURATION_MS: u32 = 5000;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(0);

// global toast signal
//
// handlers anywhere on the page can raise a toast without threading a signal
// through props; the ToastHost below is the only reader
pub static TOAST_STACK: GlobalSignal<Vec<Toast>> = Signal::global(Vec::new);

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    id: u64,
    notification: Notification,
}

fn dismiss(id: u64) {
    TOAST_STACK.with_mut(|v| v.retain(|toast| toast.id != id));
}

// pushes onto the stack and schedules its own removal
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn notify(&mut self, notification: Notification) {
        let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
        debug!({id, title = %notification.title}, "showing toast");

        TOAST_STACK.with_mut(|v| v.push(Toast { id, notification }));

        let task = Timeout::new(TOAST_DURATION_MS, move || dismiss(id));
        task.forget();
    }
}

#[derive(Clone, PartialEq, Props)]
struct ToastCardProps {
    toast: Toast,
}

#[component]
fn ToastCard(props: ToastCardProps) -> Element {
    let id = props.toast.id;
    let Notification { title, description } = props.toast.notification;

    rsx! {
        div { class: "toast", role: "status",
            div { class: "toast-body",
                p { class: "toast-title", "{title}" }
                p { class: "toast-description", "{description}" }
            }
            button {
                class: "btn btn-icon",
                aria_label: "Dismiss",
                onclick: move |_| dismiss(id),
                "✕"
            }
        }
    }
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = TOAST_STACK.read().clone();

    rsx! {
        div { class: "toast-host",
            for toast in toasts {
                ToastCard { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}
