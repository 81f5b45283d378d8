use chrono::NaiveDate;

use super::*;

fn layout(cols: usize) -> GridLayout {
    GridLayout::new(LayoutConfig::default(), cols)
}

#[test]
fn canvas_matches_closed_form() {
    let l = layout(53);
    // 60 + 53*15 - 3 + 20, 75 + 7*15 - 3 + 80
    assert_eq!(
        l.canvas(),
        Canvas {
            width: 872,
            height: 257
        }
    );
}

#[test]
fn cell_origins_step_by_pitch() {
    let l = layout(53);
    assert_eq!(l.cell_origin(0, 0), Point::new(60.0, 75.0));
    assert_eq!(l.cell_origin(2, 3), Point::new(90.0, 120.0));
    assert_eq!(l.cell_center(2, 3), Point::new(96.0, 126.0));
    assert_eq!(l.cell_origin(2, 3), l.cell_origin(2, 3));
}

#[test]
fn last_cell_touches_grid_corner() {
    let l = layout(10);
    let last = l.cell_rect(9, 6);
    let grid = l.grid_rect();
    assert_eq!(last.x1, grid.x1);
    assert_eq!(last.y1, grid.y1);
}

#[test]
fn bands_are_stacked_without_overlap() {
    let l = layout(53);
    let header = l.header_band();
    let border = l.border_rect();
    let lane = l.lane_band();
    let legend = l.legend_band();
    let footer = l.footer_band();

    assert!(header.y1 < l.month_label_baseline() - 11.0);
    assert!(l.month_label_baseline() < border.y0);
    assert!(border.y1 <= lane.y0);
    assert!(lane.y1 <= legend.y0);
    assert!(legend.y1 <= footer.y0);
    assert!(footer.y0 + 14.0 <= footer.y1);
    assert_eq!(footer.y1, f64::from(l.canvas().height));

    let swatch = l.legend_swatch(4);
    assert!(swatch.y0 >= legend.y0 && swatch.y1 <= legend.y1);
}

#[test]
fn weekday_labels_sit_left_of_grid() {
    let l = layout(5);
    for d in 0..7 {
        let a = l.weekday_label_anchor(d);
        assert!(a.x < l.grid_rect().x0);
        let r = l.cell_rect(0, d);
        assert!(a.y > r.y0 && a.y < r.y1);
    }
}

#[test]
fn validate_rejects_cramped_padding() {
    assert!(LayoutConfig::default().validate().is_ok());

    let mut cfg = LayoutConfig::default();
    cfg.cell = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = LayoutConfig::default();
    cfg.padding.bottom = 30;
    assert!(cfg.validate().is_err());

    let mut cfg = LayoutConfig::default();
    cfg.padding.top = 10;
    assert!(cfg.validate().is_err());
}

#[test]
fn month_markers_follow_first_of_month() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
    let days = start
        .iter_days()
        .take(70)
        .map(|d| (d, 0u32))
        .collect::<Vec<_>>();
    let cal = Calendar::from_days(days).unwrap();
    let l = layout(cal.week_count());

    let markers = l.month_markers(&cal);
    let names: Vec<&str> = markers.iter().map(|(_, m)| m.as_str()).collect();
    assert_eq!(names, vec!["Feb", "Mar"]);
    // 2024-02-01 falls in the fourth column.
    assert_eq!(markers[0].0, l.cell_origin(3, 0).x);
}
