use leptos::*;
use std::future::Future;

use crate::api::{ApiClient, ApiError};
use crate::pagination::{PageRequest, PagedList, Settled};
use crate::state::use_api_client;

/// Reactive handle to one paginated table
pub struct PagedResource<T: 'static> {
    pub state: RwSignal<PagedList<T>>,
    refresh: RwSignal<u32>,
}

impl<T: 'static> Clone for PagedResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for PagedResource<T> {}

impl<T: 'static> PagedResource<T> {
    pub fn previous(&self) {
        self.state.update(|s| {
            s.previous_page();
        });
    }

    pub fn next(&self) {
        self.state.update(|s| {
            s.next_page();
        });
    }

    /// Re-request the current page
    pub fn refresh(&self) {
        self.refresh.update(|n| *n += 1);
    }
}

/// Fetch one page on mount and again whenever the page changes or a refresh
/// is requested. Late responses for a page the user already left are dropped.
pub fn use_paged_list<T, F, Fut>(fetch: F, failure_message: &'static str) -> PagedResource<T>
where
    T: Clone + 'static,
    F: Fn(ApiClient, PageRequest) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    create_paged_list(use_api_client(), fetch, failure_message)
}

pub fn create_paged_list<T, F, Fut>(
    client: ApiClient,
    fetch: F,
    failure_message: &'static str,
) -> PagedResource<T>
where
    T: Clone + 'static,
    F: Fn(ApiClient, PageRequest) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let state = create_rw_signal(PagedList::<T>::new());
    let refresh = create_rw_signal(0u32);

    // Only re-run the effect when the page index itself changes
    let page = create_memo(move |_| state.with(|s| s.page()));

    create_effect(move |_| {
        page.track();
        refresh.track();

        let Some(ticket) = state.try_update(|s| s.begin()) else {
            return;
        };
        let request = ticket.request();
        log::debug!("Requesting page {} ({})", ticket.page(), request.query_string());

        let pending = fetch(client.clone(), request);
        spawn_local(async move {
            let result = pending.await;
            if let Err(e) = &result {
                log::error!("{} {}", failure_message, e);
            }

            let settled = state.try_update(|s| s.settle(ticket, result, failure_message));
            if settled == Some(Settled::Discarded) {
                log::debug!("Discarded stale response for page {}", ticket.page());
            }
        });
    });

    PagedResource { state, refresh }
}

/// Previous/Next controls with the 1-based page number
#[component]
pub fn Pager<T>(resource: PagedResource<T>) -> impl IntoView
where
    T: Clone + 'static,
{
    let state = resource.state;

    view! {
        <div class="pagination">
            <button
                on:click=move |_| resource.previous()
                disabled=move || state.with(|s| !s.has_previous_page())
            >
                "Previous"
            </button>
            <span>{move || format!("Page {}", state.with(|s| s.display_page()))}</span>
            <button
                on:click=move |_| resource.next()
                disabled=move || state.with(|s| !s.has_next_page())
            >
                "Next"
            </button>
        </div>
    }
}
