use leptos::*;

use super::table::DataTable;
use crate::display::{latest_cells, latest_headers};
use crate::models::StatsSummary;
use crate::state::use_api_client;

/// Summary page: message and alert counters plus the latest reading
#[component]
pub fn Dashboard() -> impl IntoView {
    let client = use_api_client();
    let failure_message = format!(
        "Failed to load dashboard. Is the backend running on {}?",
        client.config().base_url()
    );

    // Fetched once on mount; the trigger only moves on manual refresh
    let (trigger, set_trigger) = create_signal(0);
    let stats = create_local_resource(
        move || trigger.get(),
        move |_| {
            let client = client.clone();
            async move {
                let result = client.fetch_stats().await;
                if let Err(e) = &result {
                    log::error!("Failed to load stats: {}", e);
                }
                result
            }
        },
    );

    let refresh = move |_| {
        set_trigger.update(|n| *n += 1);
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Dashboard"</h2>
                <button class="refresh-button" on:click=refresh>
                    "Refresh"
                </button>
            </div>
            // An error replaces the cards and latest reading, not the header
            <Suspense fallback=move || view! { <p>"Loading dashboard..."</p> }>
                {
                    let failure_message = failure_message.clone();
                    move || {
                    stats.get().map(|result| match result {
                        Ok(summary) => view! { <StatsView summary=summary /> }.into_view(),
                        Err(_) => {
                            view! { <p class="error">{failure_message.clone()}</p> }.into_view()
                        }
                    })
                }
                }
            </Suspense>
        </div>
    }
}

#[component]
fn StatsView(summary: StatsSummary) -> impl IntoView {
    let latest_row = summary.latest().map(latest_cells);

    view! {
        <div class="cards">
            <MetricCard title="Total Messages" value=summary.total_messages />
            <MetricCard title="Total Alerts" value=summary.active_alerts_count />
        </div>

        <section class="section">
            <h3>"Latest Reading"</h3>
            {match latest_row {
                Some(cells) => {
                    view! { <DataTable headers=latest_headers() rows=vec![cells] /> }.into_view()
                }
                None => {
                    view! {
                        <p>
                            "No sensor data yet. Start the sensor simulator to publish MQTT messages."
                        </p>
                    }
                    .into_view()
                }
            }}
        </section>
    }
}

#[component]
fn MetricCard(title: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="card">
            <h3>{title}</h3>
            <p class="metric-value">{value}</p>
        </div>
    }
}
