use leptos::*;

use super::paged::{use_paged_list, Pager};
use super::table::DataTable;
use crate::api::ApiClient;
use crate::display::{reading_cells, reading_headers};
use crate::pagination::ListView;

const FAILURE_MESSAGE: &str = "Failed to load sensor data.";

/// Paginated raw sensor readings, newest first
#[component]
pub fn RawDataPage() -> impl IntoView {
    let readings = use_paged_list(
        |client: ApiClient, page| async move { client.fetch_data(page).await },
        FAILURE_MESSAGE,
    );
    let state = readings.state;

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Raw Sensor Data"</h2>
                <button class="refresh-button" on:click=move |_| readings.refresh()>
                    "Refresh"
                </button>
            </div>
            {move || {
                let list = state.get();
                let current = list.view();
                match current {
                    ListView::Loading => view! { <p>"Loading data..."</p> }.into_view(),
                    ListView::Failed(error) => {
                        view! { <p class="error">{error.to_string()}</p> }.into_view()
                    }
                    ListView::Ready(records) => {
                        let rows = records.iter().map(reading_cells).collect::<Vec<_>>();
                        let empty = records.is_empty();
                        view! {
                            <DataTable headers=reading_headers() rows=rows />
                            {empty.then(|| view! { <p>"No sensor data yet."</p> })}
                            <Pager resource=readings />
                        }
                        .into_view()
                    }
                }
            }}
        </div>
    }
}
