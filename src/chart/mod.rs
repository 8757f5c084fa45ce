pub mod style;

use std::error::Error;
use std::path::Path;

use chrono::Duration;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::GanttError;
use crate::models::{ActivityStatus, ProjectPlan};
use crate::stats::ProjectStats;

pub const WIDTH: u32 = 1600;
pub const HEIGHT: u32 = 1000;

const BAR_MARGIN_PX: u32 = 8;
const INFO_BOX_FILL: RGBColor = RGBColor(245, 222, 179);

/// Render the plan as a horizontal-bar timeline chart and write it to
/// `path` as a PNG, overwriting any existing file. The file is written
/// before any summary text is printed, so a failure here aborts the run
/// without a report.
pub fn render(plan: &ProjectPlan, stats: &ProjectStats, path: &Path) -> Result<(), GanttError> {
    draw(plan, stats, path).map_err(|e| GanttError::chart(e.to_string()))
}

fn draw(plan: &ProjectPlan, stats: &ProjectStats, path: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let centered = |size: i32| {
        TextStyle::from(("sans-serif", size).into_font()).pos(Pos::new(HPos::Center, VPos::Top))
    };
    root.draw(&Text::new(
        plan.title.as_str(),
        (WIDTH as i32 / 2, 16),
        centered(28),
    ))?;
    if let Some(ref subtitle) = plan.subtitle {
        root.draw(&Text::new(
            subtitle.as_str(),
            (WIDTH as i32 / 2, 52),
            centered(18),
        ))?;
    }

    let rows = plan.activities.len() as i32;
    // Pad the date axis so the first and last bars clear the plot edges.
    let x_start = stats.start - Duration::days(2);
    let x_end = stats.end + Duration::days(3);
    let span = (x_end - x_start).num_days();

    let mut chart = ChartBuilder::on(&root)
        .margin_top(84)
        .margin_right(40)
        .margin_bottom(10)
        .x_label_area_size(110)
        .y_label_area_size(300)
        .build_cartesian_2d(x_start..x_end, (0..rows).into_segmented())?;

    let names: Vec<String> = plan.activities.iter().map(|a| a.name.clone()).collect();
    let row_name = move |v: i32| -> String {
        // Row 0 renders at the top, matching input order.
        let idx = rows - 1 - v;
        names
            .get(idx as usize)
            .cloned()
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Timeline")
        .axis_desc_style(("sans-serif", 18))
        .x_labels((span / 7 + 1) as usize)
        .x_label_formatter(&|d| d.format("%Y-%m-%d").to_string())
        .x_label_style(("sans-serif", 13).into_font().transform(FontTransform::Rotate90))
        .y_labels(rows as usize)
        .y_label_formatter(&move |v| match v {
            SegmentValue::CenterOf(v) | SegmentValue::Exact(v) => row_name(*v),
            SegmentValue::Last => String::new(),
        })
        .label_style(("sans-serif", 14))
        .draw()?;

    // One series per status so the legend always carries all three colors,
    // including statuses with no activities.
    for status in ActivityStatus::ALL {
        let color = style::status_color(status);
        chart
            .draw_series(
                plan.activities
                    .iter()
                    .enumerate()
                    .filter(|(_, a)| a.status == status)
                    .map(|(i, a)| {
                        let row = rows - 1 - i as i32;
                        let mut bar = Rectangle::new(
                            [
                                (a.start, SegmentValue::Exact(row)),
                                (a.end + Duration::days(1), SegmentValue::Exact(row + 1)),
                            ],
                            color.filled(),
                        );
                        bar.set_margin(BAR_MARGIN_PX, BAR_MARGIN_PX, 0, 0);
                        bar
                    }),
            )?
            .label(status.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.filled()));
    }

    // Bar borders, drawn after the fills so every bar gets a visible outline.
    chart.draw_series(plan.activities.iter().enumerate().map(|(i, a)| {
        let row = rows - 1 - i as i32;
        let mut frame = Rectangle::new(
            [
                (a.start, SegmentValue::Exact(row)),
                (a.end + Duration::days(1), SegmentValue::Exact(row + 1)),
            ],
            BLACK.stroke_width(1),
        );
        frame.set_margin(BAR_MARGIN_PX, BAR_MARGIN_PX, 0, 0);
        frame
    }))?;

    let duration_style = TextStyle::from(("sans-serif", 15).into_font())
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(plan.activities.iter().enumerate().map(|(i, a)| {
        let row = rows - 1 - i as i32;
        let mid = a.start + Duration::days(a.duration_days() / 2);
        Text::new(
            format!("{}d", a.duration_days()),
            (mid, SegmentValue::CenterOf(row)),
            duration_style.clone(),
        )
    }))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", 15))
        .background_style(WHITE.mix(0.95))
        .border_style(BLACK)
        .draw()?;

    draw_info_box(&root, plan, stats)?;

    root.present()?;
    Ok(())
}

/// Upper-left overlay summarizing the project at the plan's reference date.
fn draw_info_box(
    root: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    plan: &ProjectPlan,
    stats: &ProjectStats,
) -> Result<(), Box<dyn Error>> {
    let lines = [
        format!("Project Duration: {} days", stats.span_days()),
        format!("Start Date: {}", stats.start.format("%Y-%m-%d")),
        format!("Current Date: {}", plan.as_of.format("%Y-%m-%d")),
        format!("Progress: {}% Complete", stats.percent_complete()),
        format!("Expected Completion: {}", stats.end.format("%Y-%m-%d")),
    ];
    let widest = lines.iter().map(|l| l.len()).max().unwrap_or(0) as i32;

    let (x0, y0) = (330, 104);
    let (w, h) = (widest * 9 + 24, lines.len() as i32 * 22 + 18);
    root.draw(&Rectangle::new(
        [(x0, y0), (x0 + w, y0 + h)],
        INFO_BOX_FILL.mix(0.85).filled(),
    ))?;
    root.draw(&Rectangle::new(
        [(x0, y0), (x0 + w, y0 + h)],
        BLACK.stroke_width(1),
    ))?;

    let style = TextStyle::from(("monospace", 15).into_font());
    for (i, line) in lines.iter().enumerate() {
        root.draw(&Text::new(
            line.as_str(),
            (x0 + 12, y0 + 12 + i as i32 * 22),
            style.clone(),
        ))?;
    }
    Ok(())
}
