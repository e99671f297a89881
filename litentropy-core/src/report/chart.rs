//! Bar chart comparing per-book averages with the reference baselines.
//!
//! `.svg` paths are drawn with the SVG backend, anything else as a bitmap.

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

use litentropy_entropy::reference_baselines;

use crate::analysis::CorpusResults;
use crate::errors::LitentropyError;

pub const CHART_TITLE: &str =
    "Entropy Analysis: Texts vs. Theoretical and Cryptographic Randomness";
pub const Y_AXIS_LABEL: &str = "Entropy (bits per character)";
const CHART_SIZE: (u32, u32) = (1500, 1000);
const NOTE_AREA_HEIGHT: u32 = 90;

/// Sampled from the viridis colormap.
const TEXT_PALETTE: [RGBColor; 6] = [
    RGBColor(68, 1, 84),
    RGBColor(59, 82, 139),
    RGBColor(33, 145, 140),
    RGBColor(94, 201, 98),
    RGBColor(253, 231, 37),
    RGBColor(49, 104, 142),
];

const BASELINE_PALETTE: [RGBColor; 3] = [
    RGBColor(255, 87, 51),
    RGBColor(199, 0, 57),
    RGBColor(144, 12, 63),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarKind {
    /// A measured book.
    Text,
    /// A fixed reference value.
    Baseline,
}

/// One bar of the comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub kind: BarKind,
}

/// Books first, in result order, then every reference baseline.
pub fn chart_bars(results: &CorpusResults) -> Vec<Bar> {
    let texts = results.averages().into_iter().map(|(name, value)| Bar {
        label: format!("\"{}\"", name),
        value,
        kind: BarKind::Text,
    });
    let baselines = reference_baselines().into_iter().map(|b| Bar {
        label: b.label.to_string(),
        value: b.bits_per_symbol,
        kind: BarKind::Baseline,
    });
    texts.chain(baselines).collect()
}

/// Top of the y axis: 10% of headroom above the tallest bar.
pub fn y_axis_limit(bars: &[Bar]) -> f64 {
    let max = bars.iter().map(|b| b.value).fold(0.0, f64::max);
    if max > 0.0 { max * 1.1 } else { 1.0 }
}

/// Footnote explaining that the chart shows densities, not key strength.
pub fn chart_note_lines() -> Vec<String> {
    let mut lines = vec!["Note: this chart compares entropy *density* (bits/character).".to_string()];
    for baseline in reference_baselines() {
        if let Some(total) = baseline.total_key_bits {
            lines.push(format!(
                "{} has a TOTAL entropy of {} bits, far beyond any text of comparable length.",
                baseline.label.trim_end_matches(" (density)"),
                total
            ));
        }
    }
    lines
}

/// Draws the chart for `results` to `path`.
pub fn render_chart(results: &CorpusResults, path: &Path) -> Result<(), LitentropyError> {
    info!("Generating comparison chart...");
    let bars = chart_bars(results);

    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        draw(SVGBackend::new(path, CHART_SIZE).into_drawing_area(), &bars)?;
    } else {
        draw(BitMapBackend::new(path, CHART_SIZE).into_drawing_area(), &bars)?;
    }

    info!("Chart saved successfully as '{}'!", path.display());
    Ok(())
}

fn render_err<E: std::fmt::Display>(e: E) -> LitentropyError {
    LitentropyError::Render(e.to_string())
}

fn bar_color(index: usize, bar: &Bar, text_count: usize) -> RGBColor {
    match bar.kind {
        BarKind::Text => TEXT_PALETTE[index % TEXT_PALETTE.len()],
        BarKind::Baseline => BASELINE_PALETTE[(index - text_count) % BASELINE_PALETTE.len()],
    }
}

fn draw<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, bars: &[Bar]) -> Result<(), LitentropyError> {
    root.fill(&WHITE).map_err(render_err)?;
    let (plot_area, note_area) = root.split_vertically((CHART_SIZE.1 - NOTE_AREA_HEIGHT) as i32);

    let y_max = y_axis_limit(bars);
    let text_count = bars.iter().filter(|b| b.kind == BarKind::Text).count();

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(CHART_TITLE, ("sans-serif", 30).into_font().style(FontStyle::Bold))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((0..bars.len()).into_segmented(), 0f64..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_label_style(("sans-serif", 15))
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => bars.get(*i).map(|b| b.label.clone()).unwrap_or_default(),
            _ => String::new(),
        })
        .y_desc(Y_AXIS_LABEL)
        .axis_desc_style(("sans-serif", 20))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(bars.iter().enumerate().map(|(i, bar)| {
            let mut rect = Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), bar.value)],
                bar_color(i, bar, text_count).filled(),
            );
            rect.set_margin(0, 0, 12, 12);
            rect
        }))
        .map_err(render_err)?;

    let label_offset = y_max * 0.01;
    chart
        .draw_series(bars.iter().enumerate().map(|(i, bar)| {
            Text::new(
                format!("{:.2}", bar.value),
                (SegmentValue::CenterOf(i), bar.value + label_offset),
                ("sans-serif", 18).into_font().style(FontStyle::Bold),
            )
        }))
        .map_err(render_err)?;

    let note_style = ("sans-serif", 15).into_font().style(FontStyle::Italic);
    for (row, line) in chart_note_lines().iter().enumerate() {
        note_area
            .draw(&Text::new(line.as_str(), (30, 10 + row as i32 * 22), note_style.clone()))
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::BookAnalysis;
    use approx::assert_abs_diff_eq;
    use litentropy_entropy::EntropyStats;

    fn results(means: &[(&str, f64)]) -> CorpusResults {
        CorpusResults {
            books: means
                .iter()
                .map(|(name, mean)| BookAnalysis {
                    name: name.to_string(),
                    sentence_count: 1,
                    stats: EntropyStats { count: 1, mean: *mean, ..Default::default() },
                })
                .collect(),
        }
    }

    #[test]
    fn books_come_before_baselines() {
        let bars = chart_bars(&results(&[("Moby Dick", 4.1), ("Frankenstein", 4.0)]));
        assert_eq!(bars.len(), 5);
        assert_eq!(bars[0].label, "\"Moby Dick\"");
        assert_eq!(bars[1].kind, BarKind::Text);
        assert!(bars[2..].iter().all(|b| b.kind == BarKind::Baseline));
        assert_abs_diff_eq!(bars[2].value, 95f64.log2(), epsilon = 1e-12);
        assert_eq!(bars[3].value, 8.0);
        assert_eq!(bars[4].value, 8.0);
    }

    #[test]
    fn y_axis_has_headroom_over_the_crypto_baseline() {
        let bars = chart_bars(&results(&[("Short", 3.9)]));
        assert_abs_diff_eq!(y_axis_limit(&bars), 8.8, epsilon = 1e-12);
        assert_eq!(y_axis_limit(&[]), 1.0);
    }

    #[test]
    fn baseline_colors_do_not_reuse_text_palette() {
        let bars = chart_bars(&results(&[("A", 4.0)]));
        let text_count = 1;
        assert_eq!(bar_color(0, &bars[0], text_count), TEXT_PALETTE[0]);
        assert_eq!(bar_color(1, &bars[1], text_count), BASELINE_PALETTE[0]);
        assert_eq!(bar_color(3, &bars[3], text_count), BASELINE_PALETTE[2]);
    }

    #[test]
    fn renders_png_and_svg_files() {
        let dir = tempfile::tempdir().unwrap();
        let data = results(&[("Moby Dick", 4.1), ("Frankenstein", 4.0)]);

        for name in ["entropy.png", "entropy.svg"] {
            let path = dir.path().join(name);
            render_chart(&data, &path).unwrap();
            let size = std::fs::metadata(&path).unwrap().len();
            assert!(size > 0, "{} is empty", name);
        }

        let svg = std::fs::read_to_string(dir.path().join("entropy.svg")).unwrap();
        assert!(svg.contains("<svg"));
        let png = std::fs::read(dir.path().join("entropy.png")).unwrap();
        assert_eq!(&png[..4], b"\x89PNG");
    }

    #[test]
    fn unwritable_path_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("entropy.png");
        let err = render_chart(&results(&[("A", 4.0)]), &path).unwrap_err();
        assert!(matches!(err, LitentropyError::Render(_)));
    }

    #[test]
    fn note_mentions_total_key_sizes() {
        let lines = chart_note_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("AES-256 key has a TOTAL entropy of 256 bits"));
        assert!(lines[2].contains("8192 bits"));
    }
}
