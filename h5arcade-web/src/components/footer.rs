use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>
            <p>{ "Games are provided by third parties and play inside their own frames." }</p>
            <Link<Route> to={Route::Privacy}>{ "Privacy Policy" }</Link<Route>>
        </footer>
    }
}
