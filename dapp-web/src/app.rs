//! InkBoard app shell - Leptos frontend

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::{Navbar, ToastViewport};
use crate::pages::HomePage;
use crate::state::network::provide_network_context;
use crate::state::toasts::provide_toast_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    // Toasts first: both other providers report failures through them.
    provide_toast_context();
    provide_network_context();
    provide_wallet_context();

    view! {
        <Router>
            <div class="app-shell">
                <Navbar/>
                <ToastViewport/>
                <main class="page">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card not-found">
            <h1>"404 - Page Not Found"</h1>
            <p class="muted">"The page you're looking for doesn't exist."</p>
            <A href="/">
                <span class="btn">"Go to Home"</span>
            </A>
        </div>
    }
}
