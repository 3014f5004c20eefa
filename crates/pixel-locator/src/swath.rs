//! Geolocation of swath granules with irregular 2D lon/lat arrays.
//!
//! The inverse lookup has no closed form. It runs in four stages:
//!
//! 1. a coarse seed index (every `seed_stride`-th pixel, bucketed on a
//!    lon/lat cell grid) gives a start pixel near the query;
//! 2. a coarse-to-fine descent from the seed, with steps halving down to one
//!    pixel, confined to `search_radius` pixels around the seed;
//! 3. an exhaustive check of the `wobble` neighborhood of the best pixel,
//!    which catches duplicated bow-tie lines;
//! 4. acceptance: the query must be no farther from the best pixel than that
//!    pixel's farthest valid 4-neighbor.
//!
//! All distances are computed between unit vectors, so swaths crossing the
//! antimeridian or a pole need no special handling.

use std::collections::HashMap;

use geoloc_common::{GeoPos, GeolocError, PixelPos, Result};
use nalgebra::Vector3;
use tracing::{debug, trace};

use crate::config::SwathSearchConfig;
use crate::sphere::{cosine_distance, unit_vector};
use crate::PixelLocator;

const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const NEIGHBORS_4: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Pixel locator over row-major swath geolocation arrays.
#[derive(Debug, Clone)]
pub struct SwathPixelLocator<'a> {
    lons: &'a [f32],
    lats: &'a [f32],
    width: usize,
    height: usize,
    config: SwathSearchConfig,
    seeds: SeedIndex,
}

impl<'a> SwathPixelLocator<'a> {
    /// Create a locator over `width * height` lon/lat values.
    ///
    /// Non-finite values mark gaps: such pixels have no geolocation and are
    /// never returned by the inverse lookup.
    pub fn new(
        lons: &'a [f32],
        lats: &'a [f32],
        width: usize,
        height: usize,
        config: SwathSearchConfig,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GeolocError::invalid_parameter(
                "width/height",
                format!("swath of {width}x{height} pixels is empty"),
            ));
        }
        config.validate().map_err(GeolocError::Config)?;

        let pixels = width
            .checked_mul(height)
            .ok_or_else(|| GeolocError::invalid_parameter("width/height", "too large"))?;
        GeolocError::check_len("lon", pixels, lons.len())?;
        GeolocError::check_len("lat", pixels, lats.len())?;

        let seed_cols = seed_positions(width, config.seed_stride);
        let seed_rows = seed_positions(height, config.seed_stride);
        let seeds = SeedIndex::build(&seed_cols, &seed_rows, config.min_cell_degrees, |c, r| {
            geo_at(lons, lats, width, c, r)
        });

        debug!(
            width,
            height,
            seeds = seeds.len(),
            cell_degrees = seeds.cell_degrees,
            "Created swath pixel locator"
        );

        Ok(Self {
            lons,
            lats,
            width,
            height,
            config,
            seeds,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn config(&self) -> &SwathSearchConfig {
        &self.config
    }

    fn vector_at(&self, col: usize, row: usize) -> Option<Vector3<f64>> {
        geo_at(self.lons, self.lats, self.width, col, row).map(|p| unit_vector(p.lon, p.lat))
    }

    fn distance_to(&self, col: usize, row: usize, query: &Vector3<f64>) -> Option<f64> {
        self.vector_at(col, row).map(|v| cosine_distance(&v, query))
    }

    fn offset(&self, (col, row): (usize, usize), dc: isize, dr: isize) -> Option<(usize, usize)> {
        let col = col.checked_add_signed(dc)?;
        let row = row.checked_add_signed(dr)?;
        (col < self.width && row < self.height).then_some((col, row))
    }

    /// Descend from `seed` towards the query, then check the wobble
    /// neighborhood. Returns the best pixel and its distance.
    fn refine(&self, seed: (usize, usize), query: &Vector3<f64>) -> Option<((usize, usize), f64)> {
        let radius = self.config.search_radius;
        let col_range = seed.0.saturating_sub(radius)..=seed.0.saturating_add(radius);
        let row_range = seed.1.saturating_sub(radius)..=seed.1.saturating_add(radius);

        let mut best = seed;
        let mut best_d = self.distance_to(seed.0, seed.1, query)?;
        let mut step = self.config.seed_stride as isize;

        loop {
            let center = best;
            for (dc, dr) in NEIGHBORS_8 {
                let Some(pos) = self.offset(center, dc * step, dr * step) else {
                    continue;
                };
                if !col_range.contains(&pos.0) || !row_range.contains(&pos.1) {
                    continue;
                }
                if let Some(d) = self.distance_to(pos.0, pos.1, query) {
                    if d < best_d {
                        best = pos;
                        best_d = d;
                    }
                }
            }

            if best == center {
                if step == 1 {
                    break;
                }
                step /= 2;
            }
        }

        let wobble = self.config.wobble;
        let center = best;
        let rows = center.1.saturating_sub(wobble)..=(center.1 + wobble).min(self.height - 1);
        for row in rows {
            let cols = center.0.saturating_sub(wobble)..=(center.0 + wobble).min(self.width - 1);
            for col in cols {
                if let Some(d) = self.distance_to(col, row, query) {
                    if d < best_d {
                        best = (col, row);
                        best_d = d;
                    }
                }
            }
        }

        Some((best, best_d))
    }

    /// Whether a query at distance `d` from `pixel` is covered by it.
    fn covers(&self, pixel: (usize, usize), d: f64) -> bool {
        let Some(here) = self.vector_at(pixel.0, pixel.1) else {
            return false;
        };

        let spacing = NEIGHBORS_4
            .iter()
            .filter_map(|&(dc, dr)| self.offset(pixel, dc, dr))
            .filter_map(|(c, r)| self.vector_at(c, r))
            .map(|v| cosine_distance(&here, &v))
            .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.max(d))));

        match spacing {
            Some(spacing) => d <= spacing,
            // isolated pixel: only an exact hit counts
            None => d <= 1e-12,
        }
    }
}

impl PixelLocator for SwathPixelLocator<'_> {
    fn geo_location(&self, x: f64, y: f64) -> Option<GeoPos> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        let (col, row) = (x.floor() as usize, y.floor() as usize);
        if col >= self.width || row >= self.height {
            return None;
        }
        geo_at(self.lons, self.lats, self.width, col, row)
    }

    fn pixel_location(&self, lon: f64, lat: f64) -> Vec<PixelPos> {
        if !lon.is_finite() || !lat.is_finite() {
            return Vec::new();
        }
        let query = unit_vector(lon, lat);

        let Some(seed) = self
            .seeds
            .nearest(lon, lat, |c, r| self.distance_to(c, r, &query))
        else {
            trace!(lon, lat, "No seed pixel near query");
            return Vec::new();
        };

        let Some((best, d)) = self.refine(seed, &query) else {
            return Vec::new();
        };

        if self.covers(best, d) {
            vec![PixelPos::center_of(best.0, best.1)]
        } else {
            trace!(lon, lat, col = best.0, row = best.1, "Query outside swath");
            Vec::new()
        }
    }
}

fn geo_at(lons: &[f32], lats: &[f32], width: usize, col: usize, row: usize) -> Option<GeoPos> {
    let i = row * width + col;
    let lon = *lons.get(i)?;
    let lat = *lats.get(i)?;
    (lon.is_finite() && lat.is_finite()).then(|| GeoPos::new(lon as f64, lat as f64))
}

/// Every `stride`-th index of `0..len`, always including the last one.
fn seed_positions(len: usize, stride: usize) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..len).step_by(stride.max(1)).collect();
    if positions.last() != Some(&(len - 1)) {
        positions.push(len - 1);
    }
    positions
}

/// Seed pixels bucketed on a regular lon/lat cell grid.
#[derive(Debug, Clone)]
struct SeedIndex {
    cell_degrees: f64,
    lat_cells: usize,
    lon_cells: usize,
    cells: HashMap<(usize, usize), Vec<(usize, usize)>>,
}

impl SeedIndex {
    /// The cell size is the largest angular distance between adjacent seeds
    /// (but at least `min_cell_degrees`), so the seed nearest to any point
    /// inside the swath lies in a neighboring latitude band.
    fn build(
        cols: &[usize],
        rows: &[usize],
        min_cell_degrees: f64,
        geo: impl Fn(usize, usize) -> Option<GeoPos>,
    ) -> Self {
        let mut spacing: f64 = 0.0;
        for (ri, &row) in rows.iter().enumerate() {
            for (ci, &col) in cols.iter().enumerate() {
                let Some(here) = geo(col, row) else {
                    continue;
                };
                let right = cols.get(ci + 1).and_then(|&c| geo(c, row));
                let below = rows.get(ri + 1).and_then(|&r| geo(col, r));
                for neighbor in right.iter().chain(below.iter()) {
                    spacing = spacing.max(here.angular_distance(neighbor).to_degrees());
                }
            }
        }

        let cell_degrees = spacing.max(min_cell_degrees).min(90.0);
        let mut index = Self {
            cell_degrees,
            lat_cells: (180.0 / cell_degrees).ceil() as usize,
            lon_cells: (360.0 / cell_degrees).ceil() as usize,
            cells: HashMap::new(),
        };

        for &row in rows {
            for &col in cols {
                if let Some(p) = geo(col, row) {
                    let key = (index.lat_cell(p.lat), index.lon_cell(p.lon));
                    index.cells.entry(key).or_default().push((col, row));
                }
            }
        }
        index
    }

    fn len(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    fn lat_cell(&self, lat: f64) -> usize {
        let cell = ((lat + 90.0) / self.cell_degrees).floor();
        cell.clamp(0.0, (self.lat_cells - 1) as f64) as usize
    }

    fn lon_cell(&self, lon: f64) -> usize {
        let cell = ((lon + 180.0) / self.cell_degrees).floor() as i64;
        cell.rem_euclid(self.lon_cells as i64) as usize
    }

    /// Nearest seed among the cells around (lon, lat).
    ///
    /// Longitude cells shrink towards the poles, so the longitude reach
    /// widens with latitude; close to a pole the whole band is scanned.
    fn nearest(
        &self,
        lon: f64,
        lat: f64,
        distance: impl Fn(usize, usize) -> Option<f64>,
    ) -> Option<(usize, usize)> {
        let lat_cell = self.lat_cell(lat);
        let first_band = lat_cell.saturating_sub(1);
        let last_band = (lat_cell + 1).min(self.lat_cells - 1);

        let band_south = -90.0 + first_band as f64 * self.cell_degrees;
        let band_north = (-90.0 + (last_band + 1) as f64 * self.cell_degrees).min(90.0);
        let max_abs_lat = band_south.abs().max(band_north.abs()).min(90.0);
        let cos_lat = max_abs_lat.to_radians().cos();

        let lon_cell = self.lon_cell(lon) as i64;
        let lon_range: Vec<usize> = if cos_lat < 1e-6 {
            (0..self.lon_cells).collect()
        } else {
            let reach = (1.0 / cos_lat).ceil() as i64;
            if 2 * reach + 1 >= self.lon_cells as i64 {
                (0..self.lon_cells).collect()
            } else {
                (lon_cell - reach..=lon_cell + reach)
                    .map(|c| c.rem_euclid(self.lon_cells as i64) as usize)
                    .collect()
            }
        };

        let mut best: Option<((usize, usize), f64)> = None;
        for band in first_band..=last_band {
            for &cell in &lon_range {
                let Some(seeds) = self.cells.get(&(band, cell)) else {
                    continue;
                };
                for &(col, row) in seeds {
                    let Some(d) = distance(col, row) else {
                        continue;
                    };
                    if best.map_or(true, |(_, best_d)| d < best_d) {
                        best = Some(((col, row), d));
                    }
                }
            }
        }
        best.map(|(pos, _)| pos)
    }
}
