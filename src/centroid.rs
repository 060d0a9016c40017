use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single representative point of a tracked object, in frame coordinates
/// (or the normalized 0-100 space, see `build_centroids`).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

/// Reduces a dense trajectory to at most `max_points` representative points.
///
/// Points are bucketed into a grid sized so that roughly `max_points` cells
/// cover the bounding box, keeping the first point seen per cell. If that
/// still leaves too many, the remainder is downsampled at an even stride.
/// `max_points == 0` disables compression and returns the input unchanged.
pub fn compress_centroids(centroids: &[Centroid], max_points: usize) -> Vec<Centroid> {
    if max_points == 0 || centroids.len() <= max_points {
        return centroids.to_vec();
    }

    let mut min_x = centroids[0].x;
    let mut max_x = centroids[0].x;
    let mut min_y = centroids[0].y;
    let mut max_y = centroids[0].y;
    for c in &centroids[1..] {
        min_x = min_x.min(c.x);
        max_x = max_x.max(c.x);
        min_y = min_y.min(c.y);
        max_y = max_y.max(c.y);
    }

    let width = max_x - min_x;
    let height = max_y - min_y;
    // Zero-area box means every point coincides.
    if width == 0.0 && height == 0.0 {
        return vec![centroids[0]];
    }

    let mut cell_size = (width * height / max_points as f64).sqrt();
    if cell_size <= 0.0 {
        // One dimension collapsed, grid along the other one.
        let max_range = width.max(height);
        if max_range <= 0.0 {
            return vec![centroids[0]];
        }
        cell_size = max_range / max_points as f64;
    }

    // First point per cell wins, in input order. Later steps index into
    // `reduced` positionally, so the order must be stable.
    let mut seen = HashSet::with_capacity(max_points);
    let mut reduced = Vec::with_capacity(max_points);
    for c in centroids {
        let key = (
            ((c.x - min_x) / cell_size).floor() as i64,
            ((c.y - min_y) / cell_size).floor() as i64,
        );
        if seen.insert(key) {
            reduced.push(*c);
        }
    }

    if reduced.len() <= max_points {
        return reduced;
    }

    // The stride below divides by `max_points - 1`.
    if max_points == 1 {
        return vec![reduced[0]];
    }

    let step = (reduced.len() - 1) as f64 / (max_points - 1) as f64;
    let mut downsampled = Vec::with_capacity(max_points);
    for i in 0..max_points {
        let idx = ((i as f64 * step).round() as usize).min(reduced.len() - 1);
        downsampled.push(reduced[idx]);
    }
    downsampled
}

/// Builds centroids from a trajectory of bounding boxes `[x1, y1, x2, y2, ..]`
/// as they arrive from the detection pipeline (dynamic JSON). Entries that are
/// not an array of at least 4 values are skipped. When both frame dimensions
/// are known the centers are rescaled into a fixed 0-100 space on both axes.
pub fn build_centroids(traject: &[Value], frame_width: f64, frame_height: f64) -> Vec<Centroid> {
    let mut centroids = Vec::with_capacity(traject.len());
    for entry in traject {
        let coord = match entry.as_array() {
            Some(coord) if coord.len() >= 4 => coord,
            _ => continue,
        };
        let num = |v: &Value| v.as_f64().unwrap_or(0.0);
        let (x1, y1) = (num(&coord[0]), num(&coord[1]));
        let (x2, y2) = (num(&coord[2]), num(&coord[3]));

        let mut center_x = x1 + (x2 - x1) / 2.0;
        let mut center_y = y1 + (y2 - y1) / 2.0;

        if frame_width > 0.0 && frame_height > 0.0 {
            center_x = center_x * 100.0 / frame_width;
            center_y = center_y * 100.0 / frame_height;
        }

        centroids.push(Centroid {
            x: center_x,
            y: center_y,
        });
    }
    centroids
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use serde_json::json;

    use super::{build_centroids, Centroid};

    fn assert_centroids_eq(got: &[Centroid], want: &[(f64, f64)]) {
        assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(want) {
            assert_float_absolute_eq!(g.x, w.0, 1e-9);
            assert_float_absolute_eq!(g.y, w.1, 1e-9);
        }
    }

    #[test]
    fn build_without_normalization() {
        let traject = [json!([0.0, 0.0, 10.0, 10.0]), json!([10.0, 20.0, 30.0, 40.0])];
        let got = build_centroids(&traject, 0.0, 0.0);
        assert_centroids_eq(&got, &[(5.0, 5.0), (20.0, 30.0)]);
    }

    #[test]
    fn build_with_normalization() {
        // Frame 50x100, centers rescaled into the 0-100 space.
        let traject = [json!([0.0, 0.0, 10.0, 10.0]), json!([10.0, 20.0, 30.0, 40.0])];
        let got = build_centroids(&traject, 50.0, 100.0);
        assert_centroids_eq(&got, &[(10.0, 5.0), (40.0, 30.0)]);
    }

    #[test]
    fn build_skips_invalid_entries() {
        let traject = [
            json!(123),
            json!([1.0, 2.0, 3.0]),
            json!([0.0, 0.0, 10.0, 10.0]),
        ];
        let got = build_centroids(&traject, 0.0, 0.0);
        assert_centroids_eq(&got, &[(5.0, 5.0)]);
    }

    #[test]
    fn build_requires_both_frame_dimensions() {
        let traject = [json!([0.0, 0.0, 10.0, 10.0])];
        let got = build_centroids(&traject, 50.0, 0.0);
        assert_centroids_eq(&got, &[(5.0, 5.0)]);
    }
}
