use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <div class="container header-inner">
                <Link<Route> to={Route::Home} classes={classes!("brand")}>
                    { "Inkflow" }
                </Link<Route>>
                <nav class="site-nav">
                    <Link<Route> to={Route::Home} classes={classes!("nav-link")}>
                        { "Articles" }
                    </Link<Route>>
                    <Link<Route> to={Route::Admin} classes={classes!("nav-link")}>
                        { "Admin" }
                    </Link<Route>>
                </nav>
            </div>
        </header>
    }
}
