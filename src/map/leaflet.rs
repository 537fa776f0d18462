//! Minimal wasm-bindgen bindings for the Leaflet global `L` and the
//! Leaflet.draw edit toolbar.
//!
//! Only the surface the survey map actually touches is bound; rendering and
//! editing internals stay on the JavaScript side. Loaded from the page shell
//! (`index.html`), so the `L` namespace is assumed present.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `L.Map` instance.
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn map(container_id: &str) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &Map, bounds: &JsValue);

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);

    /// `L.TileLayer` instance.
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

    #[wasm_bindgen(method)]
    pub fn remove(this: &TileLayer);

    /// `L.Marker` instance.
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(latlng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Marker);

    #[wasm_bindgen(method)]
    pub fn on(this: &Marker, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = getLatLng)]
    pub fn get_lat_lng(this: &Marker) -> JsLatLng;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    pub fn open_popup(this: &Marker) -> Marker;

    /// `L.LatLng` instance.
    #[wasm_bindgen(js_name = LatLng)]
    pub type JsLatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &JsLatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &JsLatLng) -> f64;

    /// Event object passed to `click` handlers.
    pub type LeafletMouseEvent;

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &LeafletMouseEvent) -> JsLatLng;

    /// `L.DivIcon` instance.
    pub type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    pub fn div_icon(options: &JsValue) -> DivIcon;

    /// `L.GeoJSON` layer.
    pub type GeoJsonLayer;

    #[wasm_bindgen(js_namespace = L, js_name = geoJSON)]
    pub fn geo_json(data: &JsValue, options: &JsValue) -> GeoJsonLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &GeoJsonLayer, map: &Map) -> GeoJsonLayer;

    #[wasm_bindgen(method)]
    pub fn remove(this: &GeoJsonLayer);

    #[wasm_bindgen(method, js_name = toGeoJSON)]
    pub fn to_geo_json(this: &GeoJsonLayer) -> JsValue;

    /// `L.Control.Layers` instance.
    pub type Control;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = layers)]
    pub fn layers_control(base: &JsValue, overlays: &JsValue) -> Control;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Control, map: &Map) -> Control;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Control);

    /// Leaflet.draw edit handler (`L.EditToolbar.Edit`).
    #[wasm_bindgen(js_namespace = ["L", "EditToolbar"], js_name = Edit)]
    pub type EditHandler;

    #[wasm_bindgen(constructor, js_namespace = ["L", "EditToolbar"], js_class = "Edit")]
    pub fn new(map: &Map, options: &JsValue) -> EditHandler;

    #[wasm_bindgen(method)]
    pub fn enable(this: &EditHandler);

    #[wasm_bindgen(method)]
    pub fn disable(this: &EditHandler);
}

/// Convert any serializable value into a JS object via JSON.
pub fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    serde_json::to_string(value)
        .ok()
        .and_then(|json| js_sys::JSON::parse(&json).ok())
        .unwrap_or(JsValue::NULL)
}

/// Read a JS value back into serde JSON. Returns `Null` on failure.
pub fn from_js(value: &JsValue) -> serde_json::Value {
    js_sys::JSON::stringify(value)
        .ok()
        .map(String::from)
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or(serde_json::Value::Null)
}

/// `[lat, lng]` array accepted wherever Leaflet wants a LatLng.
pub fn latlng_js(lat: f64, lng: f64) -> JsValue {
    let arr = js_sys::Array::new();
    arr.push(&JsValue::from_f64(lat));
    arr.push(&JsValue::from_f64(lng));
    arr.into()
}

/// `[[south, west], [north, east]]` bounds array.
pub fn bounds_js(((south, west), (north, east)): crate::util::geo::Bounds) -> JsValue {
    let arr = js_sys::Array::new();
    arr.push(&latlng_js(south, west));
    arr.push(&latlng_js(north, east));
    arr.into()
}

/// Build a plain options object from key/value pairs.
pub fn options(pairs: &[(&str, JsValue)]) -> JsValue {
    let obj = js_sys::Object::new();
    for (key, value) in pairs {
        let _ = js_sys::Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj.into()
}
