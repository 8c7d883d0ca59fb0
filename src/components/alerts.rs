use leptos::*;

use super::paged::{use_paged_list, Pager};
use super::table::DataTable;
use crate::api::ApiClient;
use crate::display::{alert_cells, ALERT_HEADERS};
use crate::pagination::ListView;

const FAILURE_MESSAGE: &str = "Failed to load alerts.";

/// Index of the "Parameter" column
const PARAMETER_COLUMN: usize = 2;

/// Paginated list of threshold violations
#[component]
pub fn AlertsPage() -> impl IntoView {
    let alerts = use_paged_list(
        |client: ApiClient, page| async move { client.fetch_alerts(page).await },
        FAILURE_MESSAGE,
    );
    let state = alerts.state;

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Alerts"</h2>
                <button class="refresh-button" on:click=move |_| alerts.refresh()>
                    "Refresh"
                </button>
            </div>
            {move || {
                let list = state.get();
                let current = list.view();
                match current {
                    ListView::Loading => view! { <p>"Loading alerts..."</p> }.into_view(),
                    ListView::Failed(error) => {
                        view! { <p class="error">{error.to_string()}</p> }.into_view()
                    }
                    ListView::Ready(records) => {
                        let rows = records.iter().map(alert_cells).collect::<Vec<_>>();
                        let empty = records.is_empty();
                        view! {
                            <DataTable
                                headers=ALERT_HEADERS.to_vec()
                                rows=rows
                                highlight_column=PARAMETER_COLUMN
                                row_class="alert-row"
                            />
                            {empty.then(|| view! { <p>"No alerts yet."</p> })}
                            <Pager resource=alerts />
                        }
                        .into_view()
                    }
                }
            }}
        </div>
    }
}
