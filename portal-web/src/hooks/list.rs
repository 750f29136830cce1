//! The list-view controller shared by every paginated page.
//!
//! Keeps a filterable list in sync with backend data: re-fetches when the
//! effective filter tuple changes, exposes loading/empty/error states, and
//! guards against out-of-order responses with a monotonic request id.

use std::future::Future;

use shared::models::{ApiError, PageParams, Paginated};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::filters::FilterState;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);
}

/// View state of a list. A failed fetch degrades to `Loaded` with an empty
/// page rather than a distinct error state, so the view stays usable.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T: PartialEq> {
    Loading,
    Loaded(Paginated<T>),
}

impl<T: PartialEq> ListState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn page(&self) -> Option<&Paginated<T>> {
        match self {
            Self::Loading => None,
            Self::Loaded(page) => Some(page),
        }
    }
}

/// Handle returned by [`use_list_query`].
#[derive(Debug, Clone, PartialEq)]
pub struct UseListQueryHandle<T: PartialEq> {
    pub state: ListState<T>,
    /// User-facing message for the last failed fetch, if any.
    pub error: Option<String>,
    /// Clear the error notice without touching the data. Never re-fetches.
    pub dismiss: Callback<()>,
    /// Re-issue the current fetch. Only ever fired by an explicit user
    /// action; failed fetches are not retried on their own.
    pub retry: Callback<()>,
}

/// Fetch one page of a resource whenever the committed filters change.
///
/// Responses are tagged with an increasing request id; a response that is
/// no longer the latest issued is dropped, so a slow early request cannot
/// overwrite a newer view. In-flight requests are not cancelled.
#[hook]
pub fn use_list_query<T, F, Fut>(
    filters: &FilterState,
    per_page: u32,
    fetch: F,
) -> UseListQueryHandle<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn(PageParams) -> Fut + 'static,
    Fut: Future<Output = Result<Paginated<T>, ApiError>> + 'static,
{
    let state = use_state(|| ListState::<T>::Loading);
    let error = use_state(|| None::<String>);
    let generation = use_state(|| 0u32);
    let latest_request = use_mut_ref(|| 0u64);

    {
        let state = state.clone();
        let error = error.clone();
        let latest_request = latest_request.clone();
        use_effect_with(
            (filters.clone(), per_page, *generation),
            move |(filters, per_page, _generation)| {
                let params = filters.page_params(*per_page);
                let request_id = {
                    let mut sequence = latest_request.borrow_mut();
                    *sequence += 1;
                    *sequence
                };
                state.set(ListState::Loading);
                error.set(None);
                spawn_local(async move {
                    let result = fetch(params.clone()).await;
                    if *latest_request.borrow() != request_id {
                        // A newer fetch superseded this one.
                        return;
                    }
                    match result {
                        Ok(page) => state.set(ListState::Loaded(page)),
                        Err(err) => {
                            warn(&format!("fallo al listar: {err}"));
                            error.set(Some(err.user_message()));
                            state.set(ListState::Loaded(Paginated::empty(&params)));
                        }
                    }
                });
                || ()
            },
        );
    }

    let dismiss = {
        let error = error.clone();
        Callback::from(move |()| error.set(None))
    };

    let retry = {
        let generation = generation.clone();
        Callback::from(move |()| generation.set(*generation + 1))
    };

    UseListQueryHandle {
        state: (*state).clone(),
        error: (*error).clone(),
        dismiss,
        retry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_has_no_page() {
        let state = ListState::<u8>::Loading;
        assert!(state.is_loading());
        assert!(state.page().is_none());
    }

    #[test]
    fn loaded_exposes_the_page() {
        let page = Paginated {
            items: vec![1u8, 2],
            page: 1,
            per_page: 5,
            total: 2,
        };
        let state = ListState::Loaded(page.clone());
        assert!(!state.is_loading());
        assert_eq!(state.page(), Some(&page));
    }
}
