use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::routes::{Route, switch};
use crate::session::{self, SessionState};

#[function_component(App)]
pub fn app() -> Html {
    let (_session, dispatch) = use_store::<SessionState>();

    // Read the persisted session exactly once, before any guard runs.
    use_effect_with((), move |()| {
        session::hydrate(&dispatch);
        || ()
    });

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
