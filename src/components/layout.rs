use leptos::*;
use leptos_router::*;

use crate::state::use_api_client;

/// How often the sidebar re-checks the backend
const HEALTH_POLL_MS: u32 = 30_000;

/// Layout component with sidebar and content outlet
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}

/// Sidebar with navigation links and backend status
#[component]
fn Sidebar() -> impl IntoView {
    let location = use_location();

    // The dashboard lives at "/", which every path starts with
    let is_active = move |path: &str| {
        let current = location.pathname.get();
        if path == "/" {
            current == "/"
        } else {
            current.starts_with(path)
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <h1>"Sensor Monitor"</h1>
            </div>
            <nav class="nav">
                <A
                    href="/"
                    class=move || if is_active("/") { "nav-link active" } else { "nav-link" }
                >
                    "Dashboard"
                </A>
                <A
                    href="/alerts"
                    class=move || if is_active("/alerts") { "nav-link active" } else { "nav-link" }
                >
                    "Alerts"
                </A>
                <A
                    href="/raw-data"
                    class=move || if is_active("/raw-data") { "nav-link active" } else { "nav-link" }
                >
                    "Raw Data"
                </A>
            </nav>
            <BackendIndicator />
        </aside>
    }
}

/// Online/offline badge driven by the backend root endpoint
#[component]
fn BackendIndicator() -> impl IntoView {
    let client = use_api_client();

    let (tick, set_tick) = create_signal(0);
    let health = create_local_resource(
        move || tick.get(),
        move |_| {
            let client = client.clone();
            async move {
                let result = client.fetch_health().await;
                if let Err(e) = &result {
                    log::warn!("Backend health check failed: {}", e);
                }
                result
            }
        },
    );

    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        let interval = Interval::new(HEALTH_POLL_MS, move || {
            set_tick.update(|n| *n += 1);
        });

        on_cleanup(move || drop(interval));
    }

    let status = move || match health.get() {
        None => ("status-dot", "Backend: checking"),
        Some(Ok(_)) => ("status-dot on", "Backend: online"),
        Some(Err(_)) => ("status-dot off", "Backend: offline"),
    };

    view! {
        <div class="backend-status">
            <span class=move || status().0 aria-hidden="true"></span>
            <span class="status-text">{move || status().1}</span>
        </div>
    }
}
