use bazaar_commerce::prelude::*;
use leptos::prelude::*;

use crate::state::use_shop;

/// `<img>` that swaps to the placeholder once if the source fails to load.
#[component]
pub fn OptimizedImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let placeholder = use_shop().config.images.placeholder.clone();
    let image = RwSignal::new(ImageFallback::new(src, placeholder));

    view! {
        <img
            src=move || image.with(|i| i.src().to_string())
            alt=alt
            class=class
            loading="lazy"
            on:error=move |_| image.update(|i| {
                i.on_error();
            })
        />
    }
}
