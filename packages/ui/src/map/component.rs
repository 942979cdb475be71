use api::Record;
use dioxus::prelude::*;

use super::projection::{LatLng, Viewport, LVIV};
use crate::icons::{FaLocationDot, FaMinus, FaPlus};
use crate::Icon;

const MAP_WIDTH: f64 = 800.0;
const MAP_HEIGHT: f64 = 500.0;
const DEFAULT_ZOOM: u8 = 13;
const PAN_STEP: f64 = 200.0;
const PIN_SIZE: f64 = 28.0;

/// Slippy map of OpenStreetMap tiles with a pin per record.
///
/// Clicking a pin calls `on_select` with the record id. Clicking the map
/// itself calls `on_pick` with the coordinate under the cursor, when set.
#[component]
pub fn RecordMap(
    records: Vec<Record>,
    #[props(default)] selected: Option<i64>,
    on_select: EventHandler<i64>,
    #[props(default)] on_pick: Option<EventHandler<LatLng>>,
) -> Element {
    let mut viewport = use_signal(|| Viewport::new(LVIV, DEFAULT_ZOOM, MAP_WIDTH, MAP_HEIGHT));
    let view = viewport();

    let pins: Vec<(i64, String, f64, f64)> = records
        .iter()
        .filter(|r| view.contains(LatLng::new(r.x, r.y)))
        .map(|r| {
            let (x, y) = view.to_screen(LatLng::new(r.x, r.y));
            // Anchor the pin's tip on the coordinate.
            (r.id, r.name.clone(), x - PIN_SIZE / 2.0, y - PIN_SIZE)
        })
        .collect();

    let handle_click = move |evt: MouseEvent| {
        let Some(on_pick) = on_pick else {
            return;
        };
        let point = evt.element_coordinates();
        on_pick.call(viewport().to_lat_lng(point.x, point.y));
    };

    rsx! {
        div {
            class: "map-wrapper",

            div {
                class: "map",
                style: "position: relative; overflow: hidden; width: {MAP_WIDTH}px; height: {MAP_HEIGHT}px;",
                onclick: handle_click,

                for tile in view.tiles() {
                    img {
                        key: "{tile.z}-{tile.left}-{tile.top}",
                        class: "map-tile",
                        src: tile.url(),
                        alt: "",
                        draggable: "false",
                        style: "position: absolute; left: {tile.left}px; top: {tile.top}px; width: 256px; height: 256px; pointer-events: none;",
                    }
                }

                for (id, name, left, top) in pins {
                    button {
                        key: "{id}",
                        class: if selected == Some(id) { "marker marker-selected" } else { "marker" },
                        title: "{name}",
                        style: "position: absolute; left: {left}px; top: {top}px; width: {PIN_SIZE}px; height: {PIN_SIZE}px;",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_select.call(id);
                        },
                        Icon { icon: FaLocationDot, width: PIN_SIZE as u32, height: PIN_SIZE as u32 }
                    }
                }

                MapOverlay {
                    class: "map-controls",
                    button {
                        title: "Zoom in",
                        onclick: move |_| viewport.write().zoom_in(),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                    }
                    button {
                        title: "Zoom out",
                        onclick: move |_| viewport.write().zoom_out(),
                        Icon { icon: FaMinus, width: 12, height: 12 }
                    }
                    button { title: "Pan north", onclick: move |_| viewport.write().pan(0.0, -PAN_STEP), "↑" }
                    button { title: "Pan south", onclick: move |_| viewport.write().pan(0.0, PAN_STEP), "↓" }
                    button { title: "Pan west", onclick: move |_| viewport.write().pan(-PAN_STEP, 0.0), "←" }
                    button { title: "Pan east", onclick: move |_| viewport.write().pan(PAN_STEP, 0.0), "→" }
                }

                MapOverlay {
                    class: "map-attribution",
                    "© "
                    a { href: "https://www.openstreetmap.org/copyright", "OpenStreetMap" }
                    " contributors"
                }
            }
        }
    }
}

/// Box drawn over the map. Clicks inside it never reach the map below, so
/// they cannot pick a point.
#[component]
fn MapOverlay(class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "{class}",
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::{Mutation, VirtualDom};

    fn click_listeners(app: fn() -> Element) -> usize {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_to_vec()
            .edits
            .iter()
            .filter(|edit| matches!(edit, Mutation::NewEventListener { name, .. } if name == "click"))
            .count()
    }

    #[test]
    fn test_attribution_swallows_clicks() {
        fn app() -> Element {
            rsx! {
                MapOverlay {
                    class: "map-attribution",
                    "© "
                    a { href: "https://www.openstreetmap.org/copyright", "OpenStreetMap" }
                }
            }
        }
        assert_eq!(click_listeners(app), 1);
    }

    #[test]
    fn test_plain_overlay_content_has_no_listener() {
        fn app() -> Element {
            rsx! {
                div { class: "map-attribution", "© OpenStreetMap" }
            }
        }
        assert_eq!(click_listeners(app), 0);
    }
}
