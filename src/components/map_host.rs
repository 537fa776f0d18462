//! Host element for the Leaflet map.

use leptos::prelude::*;

use crate::state::AppCtx;

/// The `#map` container. The Leaflet instance is created once the element
/// exists in the DOM and torn down with the page.
#[component]
pub fn MapHost() -> impl IntoView {
    let ctx = expect_context::<AppCtx>();

    // Leaflet needs the container in the document before `L.map` runs, so
    // initialization happens in an effect rather than at view construction.
    Effect::new(move || {
        crate::map::init(ctx);
    });

    view! { <div id="map" class="map-host"></div> }
}
