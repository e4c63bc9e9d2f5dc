use inkflow_shared::Post;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{pages::post_detail::PostQuery, router::Route, utils::format_date};

#[derive(Properties, PartialEq, Clone)]
pub struct PostCardProps {
    pub post: Post,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;
    let query = PostQuery {
        slug: Some(post.slug.clone()),
    };

    html! {
        <article class="card post-card">
            <div class="post-meta">
                <span class="badge">{ format_date(&post.date) }</span>
                { for post.tags.iter().map(|tag| html! {
                    <span class="badge accent">{ format!("#{}", tag) }</span>
                }) }
            </div>
            <h3>
                <Link<Route, PostQuery> to={Route::Post} query={Some(query.clone())}>
                    { &post.title }
                </Link<Route, PostQuery>>
            </h3>
            <p class="excerpt">{ &post.excerpt }</p>
            <div class="post-actions">
                <Link<Route, PostQuery>
                    to={Route::Post}
                    query={Some(query)}
                    classes={classes!("button", "secondary")}
                >
                    { "Read" }
                </Link<Route, PostQuery>>
            </div>
        </article>
    }
}
