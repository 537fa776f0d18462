//! Map controller.
//!
//! Owns every Leaflet object the app creates: the map itself, the search
//! marker, AOI layers, the edit toolbar handle, sampling markers, and the
//! sentinel overlays. Commands and components go through the facade
//! functions here instead of holding layer references themselves.
//!
//! Browser-only: on native builds (unit tests) every facade function is an
//! inert stub, mirroring how the network layer degrades.

pub mod style;

#[cfg(feature = "browser")]
pub mod leaflet;

use crate::net::types::{PointFeature, SentinelPreview};
use crate::state::AppCtx;
use crate::util::geo::{Geometry, LatLng};

/// Indonesia-wide overview shown before any project is selected.
pub const INITIAL_CENTER: LatLng = LatLng { lat: -2.0, lng: 118.0 };
pub const INITIAL_ZOOM: f64 = 5.0;
pub const SEARCH_ZOOM: f64 = 13.0;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "\u{a9} OpenStreetMap";

/// Create the map inside `#map`, replacing any previous instance.
pub fn init(ctx: AppCtx) {
    #[cfg(feature = "browser")]
    browser::init(ctx);
    #[cfg(not(feature = "browser"))]
    let _ = ctx;
}

/// Return to the country-wide overview.
pub fn reset_view() {
    #[cfg(feature = "browser")]
    browser::reset_view();
}

/// Drop the search marker at a found location and zoom to it.
pub fn place_search_marker(at: LatLng, label: &str) {
    #[cfg(feature = "browser")]
    browser::place_search_marker(at, label);
    #[cfg(not(feature = "browser"))]
    {
        let _ = (at, label);
    }
}

/// Show the editable (draft) AOI polygon and zoom to it.
pub fn show_draft_aoi(geometry: &Geometry) {
    #[cfg(feature = "browser")]
    browser::show_draft_aoi(geometry);
    #[cfg(not(feature = "browser"))]
    let _ = geometry;
}

pub fn clear_draft_aoi() {
    #[cfg(feature = "browser")]
    browser::clear_draft_aoi();
}

/// Show the selected project's stored AOI (red, dashed) and zoom to it.
pub fn show_project_aoi(geometry: &Geometry) {
    #[cfg(feature = "browser")]
    browser::show_project_aoi(geometry);
    #[cfg(not(feature = "browser"))]
    let _ = geometry;
}

pub fn clear_project_aoi() {
    #[cfg(feature = "browser")]
    browser::clear_project_aoi();
}

/// Attach the polygon edit toolbar to the draft AOI layer.
pub fn begin_edit() {
    #[cfg(feature = "browser")]
    browser::begin_edit();
}

/// Detach the edit toolbar and read the edited polygon back out.
pub fn end_edit() -> Option<Geometry> {
    #[cfg(feature = "browser")]
    {
        browser::end_edit()
    }
    #[cfg(not(feature = "browser"))]
    {
        None
    }
}

/// Clear and repopulate the sampling marker layer. Draft markers are
/// draggable; clicking any marker selects it for the detail panel.
pub fn redraw_points(ctx: AppCtx, features: &[PointFeature]) {
    #[cfg(feature = "browser")]
    browser::redraw_points(ctx, features);
    #[cfg(not(feature = "browser"))]
    let _ = (ctx, features);
}

/// Replace the sentinel imagery overlays and their layer control.
pub fn show_sentinel(preview: &SentinelPreview) {
    #[cfg(feature = "browser")]
    browser::show_sentinel(preview);
    #[cfg(not(feature = "browser"))]
    let _ = preview;
}

pub fn clear_sentinel() {
    #[cfg(feature = "browser")]
    browser::clear_sentinel();
}

/// Remove every project-scoped layer (AOIs, markers, sentinel overlays).
pub fn clear_project_layers() {
    #[cfg(feature = "browser")]
    browser::clear_project_layers();
}

#[cfg(feature = "browser")]
mod browser {
    use std::cell::RefCell;

    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::JsCast;

    use super::leaflet::{self, EditHandler, GeoJsonLayer, LeafletMouseEvent, Marker};
    use super::style;
    use crate::commands;
    use crate::net::types::{PointFeature, SentinelPreview, SurveyStatus};
    use crate::state::AppCtx;
    use crate::util::geo::{self, Geometry, LatLng};

    struct Controller {
        map: leaflet::Map,
        _tile: leaflet::TileLayer,
        search_marker: Option<Marker>,
        draft_aoi: Option<GeoJsonLayer>,
        project_aoi: Option<GeoJsonLayer>,
        edit_handler: Option<EditHandler>,
        markers: Vec<Marker>,
        marker_callbacks: Vec<Closure<dyn FnMut()>>,
        sentinel_true_color: Option<leaflet::TileLayer>,
        sentinel_ndvi: Option<leaflet::TileLayer>,
        sentinel_control: Option<leaflet::Control>,
        _map_click: Closure<dyn FnMut(LeafletMouseEvent)>,
    }

    thread_local! {
        static CONTROLLER: RefCell<Option<Controller>> = const { RefCell::new(None) };
    }

    fn with<R>(f: impl FnOnce(&mut Controller) -> R) -> Option<R> {
        CONTROLLER.with(|slot| slot.borrow_mut().as_mut().map(f))
    }

    pub fn init(ctx: AppCtx) {
        CONTROLLER.with(|slot| {
            if let Some(old) = slot.borrow_mut().take() {
                old.map.remove();
            }

            let map = leaflet::map("map");
            map.set_view(
                &leaflet::latlng_js(super::INITIAL_CENTER.lat, super::INITIAL_CENTER.lng),
                super::INITIAL_ZOOM,
            );
            let tile = leaflet::tile_layer(
                super::TILE_URL,
                &leaflet::options(&[(
                    "attribution",
                    JsValue::from_str(super::TILE_ATTRIBUTION),
                )]),
            );
            tile.add_to(&map);

            // One persistent click handler; manual placement is gated by
            // session state rather than by attaching/detaching listeners.
            let map_click = Closure::new(move |ev: LeafletMouseEvent| {
                let session = ctx.session.get_untracked();
                if !session.manual_mode || session.current_project_id.is_none() {
                    return;
                }
                let at = LatLng::new(ev.latlng().lat(), ev.latlng().lng());
                leptos::task::spawn_local(commands::sampling::manual_add(ctx, at));
            });
            map.on("click", map_click.as_ref().unchecked_ref());

            *slot.borrow_mut() = Some(Controller {
                map,
                _tile: tile,
                search_marker: None,
                draft_aoi: None,
                project_aoi: None,
                edit_handler: None,
                markers: Vec::new(),
                marker_callbacks: Vec::new(),
                sentinel_true_color: None,
                sentinel_ndvi: None,
                sentinel_control: None,
                _map_click: map_click,
            });
        });
    }

    pub fn reset_view() {
        with(|c| {
            c.map.set_view(
                &leaflet::latlng_js(super::INITIAL_CENTER.lat, super::INITIAL_CENTER.lng),
                super::INITIAL_ZOOM,
            );
        });
    }

    pub fn place_search_marker(at: LatLng, label: &str) {
        with(|c| {
            if let Some(old) = c.search_marker.take() {
                old.remove();
            }
            let marker = leaflet::marker(&leaflet::latlng_js(at.lat, at.lng), &JsValue::NULL);
            marker.add_to(&c.map).bind_popup(label).open_popup();
            c.map.set_view(&leaflet::latlng_js(at.lat, at.lng), super::SEARCH_ZOOM);
            c.search_marker = Some(marker);
        });
    }

    fn add_geojson(
        map: &leaflet::Map,
        geometry: &Geometry,
        style_json: serde_json::Value,
    ) -> GeoJsonLayer {
        let data = leaflet::to_js(&serde_json::json!({
            "type": "Feature",
            "geometry": geometry,
        }));
        let opts = leaflet::options(&[("style", leaflet::to_js(&style_json))]);
        let layer = leaflet::geo_json(&data, &opts);
        layer.add_to(map);
        layer
    }

    pub fn show_draft_aoi(geometry: &Geometry) {
        with(|c| {
            if let Some(old) = c.draft_aoi.take() {
                old.remove();
            }
            let layer = add_geojson(
                &c.map,
                geometry,
                serde_json::json!({
                    "color": style::AOI_DRAFT_COLOR,
                    "weight": 2,
                    "fillOpacity": 0.1,
                }),
            );
            if let Some(bounds) = geo::geometry_bounds(geometry) {
                c.map.fit_bounds(&leaflet::bounds_js(bounds));
            }
            c.draft_aoi = Some(layer);
        });
    }

    pub fn clear_draft_aoi() {
        with(|c| {
            if let Some(handler) = c.edit_handler.take() {
                handler.disable();
            }
            if let Some(layer) = c.draft_aoi.take() {
                layer.remove();
            }
        });
    }

    pub fn show_project_aoi(geometry: &Geometry) {
        with(|c| {
            if let Some(old) = c.project_aoi.take() {
                old.remove();
            }
            let layer = add_geojson(
                &c.map,
                geometry,
                serde_json::json!({
                    "color": style::AOI_PROJECT_COLOR,
                    "weight": 2,
                    "fillOpacity": 0.05,
                    "dashArray": "4,4",
                }),
            );
            if let Some(bounds) = geo::geometry_bounds(geometry) {
                c.map.fit_bounds(&leaflet::bounds_js(bounds));
            }
            c.project_aoi = Some(layer);
        });
    }

    pub fn clear_project_aoi() {
        with(|c| {
            if let Some(layer) = c.project_aoi.take() {
                layer.remove();
            }
        });
    }

    pub fn begin_edit() {
        with(|c| {
            let Some(layer) = &c.draft_aoi else { return };
            let handler = EditHandler::new(
                &c.map,
                &leaflet::options(&[("featureGroup", JsValue::clone(layer.as_ref()))]),
            );
            handler.enable();
            c.edit_handler = Some(handler);
        });
    }

    pub fn end_edit() -> Option<Geometry> {
        with(|c| {
            if let Some(handler) = c.edit_handler.take() {
                handler.disable();
            }
            let layer = c.draft_aoi.as_ref()?;
            geo::feature_geometry(&leaflet::from_js(&layer.to_geo_json()))
        })
        .flatten()
    }

    pub fn redraw_points(ctx: AppCtx, features: &[PointFeature]) {
        with(|c| {
            for marker in c.markers.drain(..) {
                marker.remove();
            }
            c.marker_callbacks.clear();

            for feature in features {
                let p = &feature.properties;
                let icon = leaflet::div_icon(&leaflet::options(&[
                    ("className", JsValue::from_str("sampling-marker")),
                    (
                        "html",
                        JsValue::from_str(&style::marker_icon_html(style::marker_color(p))),
                    ),
                ]));
                let draggable = p.survey_status == SurveyStatus::Draft;
                let marker = leaflet::marker(
                    &leaflet::latlng_js(p.latitude, p.longitude),
                    &leaflet::options(&[
                        ("icon", JsValue::clone(icon.as_ref())),
                        ("draggable", JsValue::from_bool(draggable)),
                    ]),
                );
                marker.add_to(&c.map);

                let point_id = p.id;
                let on_click: Closure<dyn FnMut()> = Closure::new(move || {
                    ctx.points.update(|pts| pts.selected = Some(point_id));
                });
                marker.on("click", on_click.as_ref().unchecked_ref());
                c.marker_callbacks.push(on_click);

                if draggable {
                    let dragged = marker.clone();
                    let on_dragend: Closure<dyn FnMut()> = Closure::new(move || {
                        let at = dragged.get_lat_lng();
                        leptos::task::spawn_local(commands::sampling::move_point(
                            ctx,
                            point_id,
                            LatLng::new(at.lat(), at.lng()),
                        ));
                    });
                    marker.on("dragend", on_dragend.as_ref().unchecked_ref());
                    c.marker_callbacks.push(on_dragend);
                }

                c.markers.push(marker);
            }

            if let Some(bounds) = geo::points_bounds(features.iter().map(|f| f.properties.latlng()))
            {
                c.map.fit_bounds(&leaflet::bounds_js(bounds));
            }
        });
    }

    pub fn show_sentinel(preview: &SentinelPreview) {
        with(|c| {
            remove_sentinel(c);

            let true_color = leaflet::tile_layer(&preview.true_color_url, &JsValue::NULL);
            let ndvi = leaflet::tile_layer(
                &preview.ndvi_url,
                &leaflet::options(&[("opacity", JsValue::from_f64(0.8))]),
            );
            true_color.add_to(&c.map);

            let control = leaflet::layers_control(
                &JsValue::NULL,
                &leaflet::options(&[
                    ("Sentinel True Color", JsValue::clone(true_color.as_ref())),
                    ("NDVI", JsValue::clone(ndvi.as_ref())),
                ]),
            );
            control.add_to(&c.map);

            c.sentinel_true_color = Some(true_color);
            c.sentinel_ndvi = Some(ndvi);
            c.sentinel_control = Some(control);
        });
    }

    pub fn clear_sentinel() {
        with(remove_sentinel);
    }

    fn remove_sentinel(c: &mut Controller) {
        if let Some(control) = c.sentinel_control.take() {
            control.remove();
        }
        if let Some(layer) = c.sentinel_true_color.take() {
            layer.remove();
        }
        if let Some(layer) = c.sentinel_ndvi.take() {
            layer.remove();
        }
    }

    pub fn clear_project_layers() {
        with(|c| {
            if let Some(handler) = c.edit_handler.take() {
                handler.disable();
            }
            if let Some(layer) = c.draft_aoi.take() {
                layer.remove();
            }
            if let Some(layer) = c.project_aoi.take() {
                layer.remove();
            }
            if let Some(marker) = c.search_marker.take() {
                marker.remove();
            }
            for marker in c.markers.drain(..) {
                marker.remove();
            }
            c.marker_callbacks.clear();
            remove_sentinel(c);
        });
    }
}
