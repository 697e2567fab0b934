use std::time::Duration;

use admin::{Notice, NoticeBoard, NoticeLevel, Notifier};
use dioxus::prelude::*;

use crate::icons::{FaCircleExclamation, FaXmark};
use crate::Icon;

const TOASTER_CSS: Asset = asset!("/assets/styling/toaster.css");

/// How long a toast stays up unless dismissed.
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Handle to the shared notice board, usable wherever a [`Notifier`] is expected.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts(Signal<NoticeBoard>);

impl Toasts {
    pub fn board(&self) -> Signal<NoticeBoard> {
        self.0
    }

    pub fn dismiss(&mut self, id: u64) {
        self.0.write().dismiss(id);
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, level: NoticeLevel, message: &str) {
        self.0.write().push(level, message);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let board = use_signal(NoticeBoard::new);
    use_context_provider(|| Toasts(board));

    rsx! {
        {children}
        Toaster {}
    }
}

/// Renders the current notices at the top of the page.
#[component]
pub fn Toaster() -> Element {
    let toasts = use_toasts();
    let notices: Vec<Notice> = toasts.board().read().notices().cloned().collect();

    rsx! {
        document::Stylesheet { href: TOASTER_CSS }

        div {
            class: "toaster",
            role: "status",
            for notice in notices {
                ToastItem { key: "{notice.id}", notice }
            }
        }
    }
}

#[component]
fn ToastItem(notice: Notice) -> Element {
    let mut toasts = use_toasts();
    let id = notice.id;

    use_future(move || async move {
        sleep(TOAST_TTL).await;
        toasts.dismiss(id);
    });

    let class = match notice.level {
        NoticeLevel::Error => "toast error",
        NoticeLevel::Success => "toast success",
        NoticeLevel::Info => "toast info",
    };

    rsx! {
        div {
            class: class,
            if notice.level == NoticeLevel::Error {
                Icon { icon: FaCircleExclamation, width: 14, height: 14 }
            }
            span { class: "toast-message", "{notice.message}" }
            button {
                class: "toast-close",
                title: "Dismiss",
                onclick: move |_| toasts.dismiss(id),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
