use leptos::*;
use leptos_router::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h2>"Page not found"</h2>
            <A href="/">"Back to the dashboard"</A>
        </div>
    }
}
