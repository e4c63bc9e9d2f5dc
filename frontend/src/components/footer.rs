use yew::prelude::*;

use crate::utils::current_year;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <span class="muted">{ format!("© {} Inkflow", current_year()) }</span>
            </div>
        </footer>
    }
}
