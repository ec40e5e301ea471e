//! SVG rendering of the heatmap dashboard and race frames.

use std::path::Path;

use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use tracing::info;

use crate::{Heatmap, Race, ResultsError, ResultsResult};

/// Speed mapped to the bottom of the color scale.
pub const SPEED_MIN: f64 = 0.0;
/// Speed mapped to the top of the color scale; faster cells saturate.
pub const SPEED_MAX: f64 = 0.20;

const BACKGROUND: RGBColor = RGBColor(17, 17, 17);

// Inferno, sampled at five points.
const INFERNO: [(f64, (u8, u8, u8)); 5] = [
    (0.00, (0, 0, 4)),
    (0.25, (87, 16, 110)),
    (0.50, (188, 55, 84)),
    (0.75, (249, 142, 9)),
    (1.00, (252, 255, 164)),
];

fn render_err<E: std::fmt::Display>(e: E) -> ResultsError {
    ResultsError::Render(e.to_string())
}

fn ensure_parent(path: &Path) -> ResultsResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Color for `speed` on the dashboard scale.
pub fn speed_color(speed: f64) -> RGBColor {
    let t = ((speed - SPEED_MIN) / (SPEED_MAX - SPEED_MIN)).clamp(0.0, 1.0);
    let t = if t.is_nan() { 0.0 } else { t };
    for pair in INFERNO.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = (t - t0) / (t1 - t0);
            let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * f).round() as u8;
            return RGBColor(lerp(c0.0, c1.0), lerp(c0.1, c1.1), lerp(c0.2, c1.2));
        }
    }
    let (_, c) = INFERNO[INFERNO.len() - 1];
    RGBColor(c.0, c.1, c.2)
}

fn segment_index(v: &SegmentValue<usize>) -> Option<usize> {
    match v {
        SegmentValue::CenterOf(i) => Some(*i),
        _ => None,
    }
}

/// Render the speed heatmap: frequency on x, leg length on y (shortest leg
/// at the bottom), each cell annotated with its speed, cost of transport and
/// distance.
pub fn render_heatmap_svg(heatmap: &Heatmap, path: &Path) -> ResultsResult<()> {
    ensure_parent(path)?;
    let root = SVGBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&BACKGROUND).map_err(render_err)?;

    let (main, legend) = root.split_horizontally(1060);

    let cols = heatmap.cols();
    let rows = heatmap.rows();
    let mut chart = ChartBuilder::on(&main)
        .caption("The Desire Path: Resonance Frequency vs. Agility", ("sans-serif", 24).into_font().color(&WHITE))
        .margin(30)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d((0..cols).into_segmented(), (0..rows).into_segmented())
        .map_err(render_err)?;

    let freq_label = |v: &SegmentValue<usize>| {
        segment_index(v).and_then(|i| heatmap.frequencies.get(i)).map(|f| format!("{f}")).unwrap_or_default()
    };
    let leg_label = |v: &SegmentValue<usize>| {
        segment_index(v).and_then(|i| heatmap.leg_lengths.get(i)).map(|l| format!("{l:.2}")).unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Control Frequency (Hz)")
        .y_desc("Leg Length (m)")
        .x_labels(cols)
        .y_labels(rows)
        .x_label_formatter(&freq_label)
        .y_label_formatter(&leg_label)
        .axis_style(WHITE)
        .label_style(("sans-serif", 14).into_font().color(&WHITE))
        .axis_desc_style(("sans-serif", 16).into_font().color(&WHITE))
        .draw()
        .map_err(render_err)?;

    for row in 0..rows {
        for col in 0..cols {
            let Some(cell) = heatmap.get(row, col) else { continue };
            let color = speed_color(cell.speed);
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [
                        (SegmentValue::Exact(col), SegmentValue::Exact(row)),
                        (SegmentValue::Exact(col + 1), SegmentValue::Exact(row + 1)),
                    ],
                    color.filled(),
                )))
                .map_err(render_err)?;

            let ink = if (cell.speed - SPEED_MIN) / (SPEED_MAX - SPEED_MIN) > 0.6 { BLACK } else { WHITE };
            let small = ("sans-serif", 11).into_font().color(&ink);
            chart
                .draw_series(std::iter::once(
                    EmptyElement::at((SegmentValue::CenterOf(col), SegmentValue::CenterOf(row)))
                        + Text::new(format!("{:.3}", cell.speed), (-22, -18), ("sans-serif", 13).into_font().color(&ink))
                        + Text::new(format!("CoT {:.2}", cell.cot), (-22, -3), small.clone())
                        + Text::new(format!("{:.2}m", cell.distance), (-22, 10), small),
                ))
                .map_err(render_err)?;
        }
    }

    draw_colorbar(&legend)?;

    root.present().map_err(render_err)?;
    info!(path = %path.display(), rows, cols, "rendered heatmap");
    Ok(())
}

fn draw_colorbar(area: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>) -> ResultsResult<()> {
    let mut bar = ChartBuilder::on(area)
        .margin_top(80)
        .margin_bottom(90)
        .margin_right(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, SPEED_MIN..SPEED_MAX)
        .map_err(render_err)?;

    bar.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_labels(5)
        .y_label_formatter(&|v: &f64| format!("{v:.2}"))
        .y_desc("Speed (m/s)")
        .axis_style(WHITE)
        .label_style(("sans-serif", 12).into_font().color(&WHITE))
        .axis_desc_style(("sans-serif", 14).into_font().color(&WHITE))
        .draw()
        .map_err(render_err)?;

    let steps = 100;
    let h = (SPEED_MAX - SPEED_MIN) / f64::from(steps);
    bar.draw_series((0..steps).map(|i| {
        let lo = SPEED_MIN + f64::from(i) * h;
        Rectangle::new([(0.0, lo), (1.0, lo + h)], speed_color(lo + h / 2.0).filled())
    }))
    .map_err(render_err)?;
    Ok(())
}

/// Render one frame of the race as horizontal bars.
pub fn render_race_svg(race: &Race, frame: usize, path: &Path) -> ResultsResult<()> {
    ensure_parent(path)?;
    let root = SVGBackend::new(path, (1000, 400)).into_drawing_area();
    root.fill(&BACKGROUND).map_err(render_err)?;

    let limit = race.x_limit().max(f64::EPSILON);
    let caption = format!("The 'Desire Path' Effect (Robot L={:.2}m)", race.leg_length);
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 22).into_font().color(&WHITE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(230)
        .build_cartesian_2d(0.0..limit, (0..race.lanes.len()).into_segmented())
        .map_err(render_err)?;

    let lane_label = |v: &SegmentValue<usize>| {
        segment_index(v).and_then(|i| race.lanes.get(i)).map(|l| l.label.clone()).unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Distance Traveled (m)")
        .y_labels(race.lanes.len())
        .y_label_formatter(&lane_label)
        .axis_style(WHITE)
        .label_style(("sans-serif", 14).into_font().color(&WHITE))
        .axis_desc_style(("sans-serif", 14).into_font().color(&WHITE))
        .draw()
        .map_err(render_err)?;

    for (i, (lane, dist)) in race.lanes.iter().zip(race.distances_at(frame)).enumerate() {
        let color = hex_color(lane.color).unwrap_or(WHITE);
        let mut bar = Rectangle::new(
            [(0.0, SegmentValue::Exact(i)), (dist.min(limit), SegmentValue::Exact(i + 1))],
            color.filled(),
        );
        bar.set_margin(12, 12, 0, 0);
        chart.draw_series(std::iter::once(bar)).map_err(render_err)?;
        chart
            .draw_series(std::iter::once(Text::new(
                format!("{dist:.2}m"),
                (dist.min(limit), SegmentValue::CenterOf(i)),
                ("sans-serif", 14).into_font().color(&WHITE),
            )))
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    info!(path = %path.display(), frame, "rendered race frame");
    Ok(())
}

/// Parse `#RRGGBB`.
pub fn hex_color(hex: &str) -> Option<RGBColor> {
    let h = hex.strip_prefix('#')?;
    if h.len() != 6 {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(h.get(i..i + 2)?, 16).ok();
    Some(RGBColor(byte(0)?, byte(2)?, byte(4)?))
}
