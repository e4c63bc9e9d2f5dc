use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RawHtmlProps {
    pub html: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Host element for markup produced by the shared block renderer.
///
/// The markup is already sanitized, so it is written with `set_inner_html`
/// and kept out of Yew's virtual DOM: whenever the rendered string changes
/// (the admin preview changes on every keystroke) the whole subtree is
/// replaced instead of diffed.
#[function_component(RawHtml)]
pub fn raw_html(props: &RawHtmlProps) -> Html {
    let host = use_node_ref();

    {
        let host = host.clone();
        use_effect_with(props.html.clone(), move |markup| {
            if let Some(element) = host.cast::<Element>() {
                element.set_inner_html(markup.as_str());
            }
            || ()
        });
    }

    html! {
        <div ref={host} class={props.class.clone()} />
    }
}
