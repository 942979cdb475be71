//! Map widget for geo-tagged records.

mod component;
pub mod projection;

pub use component::RecordMap;
pub use projection::{LatLng, Viewport, LVIV};
