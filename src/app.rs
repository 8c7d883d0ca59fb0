use leptos::*;
use leptos_router::*;

use crate::components::layout::Layout;
use crate::components::{AlertsPage, Dashboard, NotFound, RawDataPage};
use crate::state::provide_api_client;

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    // One client for the lifetime of the app
    provide_api_client();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Layout>
                    <Route path="" view=Dashboard />
                    <Route path="alerts" view=AlertsPage />
                    <Route path="raw-data" view=RawDataPage />
                    <Route path="*any" view=NotFound />
                </Route>
            </Routes>
        </Router>
    }
}
