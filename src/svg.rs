//! Small module with display related functions.

use crate::snapshot::Snapshot;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufWriter, Error};
use std::path::Path;

/// point color (rgb)
const POINT_COLOR: [f32; 3] = [0.2, 0.4, 0.8];
/// final arrangements are drawn in green
const FINAL_COLOR: [f32; 3] = [0.1, 0.6, 0.2];
/// room left around the plot area
const MARGIN: f64 = 10.0;

/// Values are displayed as small squares.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    /// color (rgb)
    pub color: [f32; 3],
    /// x coordinate (center)
    pub x: f64,
    /// y coordinate (center)
    pub y: f64,
    /// side length
    pub size: f64,
}

/// Scatter chart of a snapshot: index on the x axis, value on the y axis
/// (larger values higher up).
pub fn scatter(snapshot: &Snapshot, svg_width: u32, svg_height: u32) -> Vec<Dot> {
    // the y axis always starts at 0
    let max = snapshot.values().iter().cloned().max().unwrap_or(0);
    let yrange = f64::from(max).max(1.0);
    let xrange = (snapshot.len().max(2) - 1) as f64;
    let width = f64::from(svg_width) - 2.0 * MARGIN;
    let height = f64::from(svg_height) - 2.0 * MARGIN;
    let size = (width / snapshot.len().max(1) as f64).max(1.0).min(4.0);
    let color = if snapshot.is_final() {
        FINAL_COLOR
    } else {
        POINT_COLOR
    };
    snapshot
        .points()
        .map(|(index, value)| Dot {
            color,
            x: MARGIN + index as f64 / xrange * width,
            y: MARGIN + height - f64::from(value) / yrange * height,
            size,
        })
        .collect()
}

/// Fill given file with an svg image of given snapshot.
pub fn fill_svg_file<W: Write>(
    snapshot: &Snapshot,
    svg_width: u32,
    svg_height: u32,
    file: &mut W,
) -> Result<(), Error> {
    writeln!(
        file,
        "<svg width=\"{}\" height=\"{}\" version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\">",
        svg_width, svg_height,
    )?;
    writeln!(
        file,
        "<rect width=\"100%\" height=\"100%\" fill=\"white\"/>"
    )?;
    for dot in scatter(snapshot, svg_width, svg_height) {
        writeln!(
            file,
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"rgb({},{},{})\"/>",
            dot.x - dot.size / 2.0,
            dot.y - dot.size / 2.0,
            dot.size,
            dot.size,
            (dot.color[0] * 255.0) as u32,
            (dot.color[1] * 255.0) as u32,
            (dot.color[2] * 255.0) as u32,
        )?;
    }
    file.write_all(b"</svg>\n")?;
    Ok(())
}

/// saves a snapshot as a standalone svg file.
pub fn write_svg_file<P: AsRef<Path>>(
    snapshot: &Snapshot,
    svg_width: u32,
    svg_height: u32,
    path: P,
) -> Result<(), Error> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "<?xml version=\"1.0\"?>")?;
    fill_svg_file(snapshot, svg_width, svg_height, &mut file)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SnapshotKind;

    #[test]
    fn one_dot_per_value_inside_the_image() {
        let snapshot = Snapshot::new(1, SnapshotKind::Intermediate, vec![0, 500, 999, 10]);
        let dots = scatter(&snapshot, 200, 100);
        assert_eq!(dots.len(), 4);
        assert!(dots
            .iter()
            .all(|d| d.x >= MARGIN && d.x <= 190.0 && d.y >= MARGIN && d.y <= 90.0));
        // biggest value highest, zero on the bottom line
        assert!((dots[2].y - MARGIN).abs() < 1e-9);
        assert!((dots[0].y - 90.0).abs() < 1e-9);
        assert!(dots[0].x < dots[1].x);
    }

    #[test]
    fn svg_has_a_rect_per_value() {
        let snapshot = Snapshot::new(3, SnapshotKind::Final, vec![1, 2, 3]);
        let mut out = Vec::new();
        fill_svg_file(&snapshot, 100, 100, &mut out).unwrap();
        let svg = String::from_utf8(out).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        // background + 3 points
        assert_eq!(svg.matches("<rect").count(), 4);
        assert!(svg.contains("rgb(25,153,51)"));
    }

    #[test]
    fn empty_snapshot_draws_an_empty_chart() {
        let snapshot = Snapshot::new(1, SnapshotKind::Final, Vec::new());
        assert!(scatter(&snapshot, 100, 100).is_empty());
    }
}
