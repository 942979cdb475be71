//! # Web-Mercator viewport math
//!
//! OpenStreetMap tiles are 256px squares in the spherical Mercator
//! projection. At zoom `z` the world is `256 * 2^z` pixels wide; a point's
//! "world pixel" is its position in that square. A [`Viewport`] is a
//! rectangle of world pixels centred on a coordinate, and everything the map
//! component draws (tiles, pins, click positions) is converted through it.
//!
//! Latitudes are clamped to the projection's limit of ±85.0511° so that the
//! poles stay finite.

use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;
pub const MIN_ZOOM: u8 = 2;
pub const MAX_ZOOM: u8 = 18;
const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Lviv city centre, where the map opens.
pub const LVIV: LatLng = LatLng::new(49.8397, 24.0297);

fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom)
}

/// World pixel of a coordinate at `zoom`.
pub fn project(point: LatLng, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// Coordinate of a world pixel at `zoom`.
pub fn unproject(x: f64, y: f64, zoom: u8) -> LatLng {
    let size = world_size(zoom);
    let lng = x / size * 360.0 - 180.0;
    let n = PI * (1.0 - 2.0 * y / size);
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}

/// One tile to draw, with its offset inside the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub z: u8,
    pub left: f64,
    pub top: f64,
}

impl Tile {
    pub fn url(&self) -> String {
        format!("https://tile.openstreetmap.org/{}/{}/{}.png", self.z, self.x, self.y)
    }
}

/// The visible part of the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: u8, width: f64, height: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            width,
            height,
        }
    }

    /// World pixel of the viewport's top-left corner.
    fn origin(&self) -> (f64, f64) {
        let (cx, cy) = project(self.center, self.zoom);
        (cx - self.width / 2.0, cy - self.height / 2.0)
    }

    /// Position of a coordinate relative to the viewport's top-left corner.
    pub fn to_screen(&self, point: LatLng) -> (f64, f64) {
        let (ox, oy) = self.origin();
        let (x, y) = project(point, self.zoom);
        (x - ox, y - oy)
    }

    /// Coordinate under a position relative to the viewport's top-left corner.
    pub fn to_lat_lng(&self, x: f64, y: f64) -> LatLng {
        let (ox, oy) = self.origin();
        unproject(ox + x, oy + y, self.zoom)
    }

    pub fn contains(&self, point: LatLng) -> bool {
        let (x, y) = self.to_screen(point);
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    /// Tiles covering the viewport. Columns wrap around the antimeridian;
    /// rows beyond the poles are skipped.
    pub fn tiles(&self) -> Vec<Tile> {
        let (ox, oy) = self.origin();
        let count = 1i64 << self.zoom;
        let first_col = (ox / TILE_SIZE).floor() as i64;
        let last_col = ((ox + self.width) / TILE_SIZE).ceil() as i64;
        let first_row = (oy / TILE_SIZE).floor() as i64;
        let last_row = ((oy + self.height) / TILE_SIZE).ceil() as i64;

        let mut tiles = Vec::new();
        for row in first_row..last_row {
            if row < 0 || row >= count {
                continue;
            }
            for col in first_col..last_col {
                tiles.push(Tile {
                    x: col.rem_euclid(count) as u32,
                    y: row as u32,
                    z: self.zoom,
                    left: col as f64 * TILE_SIZE - ox,
                    top: row as f64 * TILE_SIZE - oy,
                });
            }
        }
        tiles
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    /// Move the centre by a screen offset in pixels.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.center = self.to_lat_lng(self.width / 2.0 + dx, self.height / 2.0 + dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_origin_projects_to_world_centre() {
        let (x, y) = project(LatLng::new(0.0, 0.0), 0);
        assert!(close(x, 128.0));
        assert!(close(y, 128.0));
    }

    #[test]
    fn test_unproject_inverts_project() {
        for zoom in [2, 13, 18] {
            let (x, y) = project(LVIV, zoom);
            let back = unproject(x, y, zoom);
            assert!(close(back.lat, LVIV.lat), "lat at zoom {zoom}");
            assert!(close(back.lng, LVIV.lng), "lng at zoom {zoom}");
        }
    }

    #[test]
    fn test_poles_are_clamped() {
        let (_, top) = project(LatLng::new(90.0, 0.0), 1);
        let (_, bottom) = project(LatLng::new(-90.0, 0.0), 1);
        assert!(close(top, 0.0));
        assert!(close(bottom, 512.0));
    }

    #[test]
    fn test_centre_is_middle_of_viewport() {
        let viewport = Viewport::new(LVIV, 13, 800.0, 500.0);
        let (x, y) = viewport.to_screen(LVIV);
        assert!(close(x, 400.0));
        assert!(close(y, 250.0));
        assert!(viewport.contains(LVIV));

        let picked = viewport.to_lat_lng(400.0, 250.0);
        assert!(close(picked.lat, LVIV.lat));
        assert!(close(picked.lng, LVIV.lng));
    }

    #[test]
    fn test_north_is_up_and_east_is_right() {
        let viewport = Viewport::new(LVIV, 13, 800.0, 500.0);
        let north_east = LatLng::new(LVIV.lat + 0.01, LVIV.lng + 0.01);
        let (x, y) = viewport.to_screen(north_east);
        assert!(x > 400.0);
        assert!(y < 250.0);
        assert!(!viewport.contains(LatLng::new(0.0, 0.0)));
    }

    #[test]
    fn test_tiles_cover_viewport() {
        let viewport = Viewport::new(LVIV, 13, 800.0, 500.0);
        let tiles = viewport.tiles();

        // 800px needs 4 or 5 columns, 500px needs 2 or 3 rows.
        assert!(tiles.len() >= 8 && tiles.len() <= 15, "{} tiles", tiles.len());
        assert!(tiles.iter().all(|t| t.z == 13));
        assert!(tiles.iter().any(|t| t.left <= 0.0 && t.top <= 0.0));
        assert!(tiles
            .iter()
            .any(|t| t.left + TILE_SIZE >= 800.0 && t.top + TILE_SIZE >= 500.0));
    }

    #[test]
    fn test_tiles_wrap_columns_and_skip_rows_past_poles() {
        let viewport = Viewport::new(LatLng::new(80.0, 179.9), 2, 800.0, 500.0);
        let tiles = viewport.tiles();
        assert!(tiles.iter().all(|t| t.x < 4 && t.y < 4));
        assert!(tiles.iter().any(|t| t.x == 0));
    }

    #[test]
    fn test_tile_url() {
        let tile = Tile {
            x: 4643,
            y: 2792,
            z: 13,
            left: 0.0,
            top: 0.0,
        };
        assert_eq!(tile.url(), "https://tile.openstreetmap.org/13/4643/2792.png");
    }

    #[test]
    fn test_zoom_is_bounded() {
        let mut viewport = Viewport::new(LVIV, 30, 100.0, 100.0);
        assert_eq!(viewport.zoom, MAX_ZOOM);
        viewport.zoom_in();
        assert_eq!(viewport.zoom, MAX_ZOOM);

        viewport.zoom = MIN_ZOOM;
        viewport.zoom_out();
        assert_eq!(viewport.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_pan_moves_centre() {
        let mut viewport = Viewport::new(LVIV, 13, 800.0, 500.0);
        viewport.pan(100.0, 0.0);
        assert!(viewport.center.lng > LVIV.lng);
        assert!(close(viewport.center.lat, LVIV.lat));

        viewport.pan(-100.0, 0.0);
        assert!(close(viewport.center.lng, LVIV.lng));
    }
}
