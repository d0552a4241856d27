//! Network selection menu

use leptos::prelude::*;

use crate::state::network::use_network_context;
use crate::utils::networks::supported_networks;

/// Green dot once the chain client is up, a spinner while it is not.
#[component]
fn NetworkStatusIndicator() -> impl IntoView {
    let network_ctx = use_network_context();

    view! {
        {move || if network_ctx.ready.get() {
            view! { <span class="status-dot status-ready"></span> }.into_any()
        } else {
            view! { <span class="spinner spinner-xs"></span> }.into_any()
        }}
    }
}

#[component]
pub fn NetworkSelect() -> impl IntoView {
    let network_ctx = use_network_context();
    let (open, set_open) = signal(false);

    view! {
        <div class="network-select">
            <button
                class="btn btn-outline network-button"
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                {move || {
                    let network = network_ctx.network();
                    view! {
                        <img src=network.logo.clone() alt=network.name.clone() width="22"/>
                        <span>{network.name.clone()}</span>
                        <span class="network-provider">"(" {network.provider.clone()} ")"</span>
                    }
                }}
                <NetworkStatusIndicator/>
            </button>
            {move || open.get().then(|| view! {
                <ul class="network-menu">
                    {supported_networks().into_iter().map(|one| {
                        let id = one.id.clone();
                        let item_class = move || {
                            if network_ctx.network_id.get() == id {
                                "network-item current"
                            } else {
                                "network-item"
                            }
                        };
                        let pick = one.id.clone();

                        view! {
                            <li>
                                <button
                                    class=item_class
                                    on:click=move |_| {
                                        network_ctx.set_network_id(&pick);
                                        set_open.set(false);
                                    }
                                >
                                    <img src=one.logo.clone() alt=one.name.clone() width="18"/>
                                    <span>{one.name.clone()}</span>
                                    <span class="network-provider">
                                        "(" {one.provider.clone()} ")"
                                    </span>
                                </button>
                            </li>
                        }
                    }).collect::<Vec<_>>()}
                </ul>
            })}
        </div>
    }
}
