use yew::prelude::*;

use crate::contact::controller::{Notification, NotificationKind};

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notification: Option<Notification>,
    pub on_close: Callback<()>,
}

/// Bottom-right notice for the last contact form outcome. Stays up until the
/// visitor closes it or the next outcome replaces it.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(notification) = props.notification.as_ref().filter(|n| n.visible) else {
        return html! {};
    };

    let kind_class = match notification.kind {
        NotificationKind::Success => "toast-success",
        NotificationKind::Failure => "toast-failure",
    };

    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status">
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        padding: 1rem 2rem;
                        color: white;
                        border-radius: 10px;
                        backdrop-filter: blur(10px);
                        box-shadow: 0 8px 30px rgba(0, 0, 0, 0.5);
                        z-index: 1000;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        animation: toastIn 0.4s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    .toast-success {
                        background: rgba(0, 184, 148, 0.95);
                    }
                    .toast-failure {
                        background: rgba(255, 71, 87, 0.95);
                    }
                    .toast p {
                        margin: 0;
                        font-size: 0.9rem;
                    }
                    .toast button {
                        background: none;
                        border: none;
                        color: white;
                        cursor: pointer;
                        padding: 0.5rem;
                        font-size: 1.2rem;
                        opacity: 0.8;
                    }
                    .toast button:hover {
                        opacity: 1;
                    }
                    @keyframes toastIn {
                        from { opacity: 0; transform: translateY(50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
            <p>{&notification.text}</p>
            <button {onclick} aria-label="Close">{"×"}</button>
        </div>
    }
}
