use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="container">
            <section class="card">
                <p class="muted">{ "404" }</p>
                <h1>{ "Page not found" }</h1>
                <p class="muted">{ "The page you are looking for does not exist." }</p>
            </section>
        </main>
    }
}
