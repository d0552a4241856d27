//! Toast viewport

use leptos::prelude::*;

use crate::state::toasts::{use_toast_context, ToastKind};

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toasts = use_toast_context();

    view! {
        <div class="toast-viewport">
            {move || toasts.stack.get().into_iter().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Info => "toast toast-info",
                    ToastKind::Success => "toast toast-success",
                    ToastKind::Error => "toast toast-error",
                };
                let id = toast.id;

                view! {
                    <div class=class>
                        {toast.loading.then(|| view! { <span class="spinner spinner-xs"></span> })}
                        <div class="toast-body">
                            <p>{toast.message.clone()}</p>
                            {toast.detail.clone().map(|detail| view! {
                                <p class="toast-detail">{detail}</p>
                            })}
                        </div>
                        <button class="toast-close" on:click=move |_| toasts.dismiss(id)>
                            "✕"
                        </button>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
