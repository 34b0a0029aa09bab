//! Bankroll and ROI charts over stored tournament results.

pub mod render;
pub mod series;

pub use render::LineChart;
pub use series::{ROI_NOISE_THRESHOLD, Series, bankroll_series, roi_series};

use crate::tournament::TournamentRecord;

/// Cumulative bankroll by date, `None` when there is nothing to plot
pub fn bankroll_chart(records: &[TournamentRecord]) -> Option<LineChart> {
    let series = bankroll_series(records);
    (!series.is_empty())
        .then(|| LineChart::new("BR", "Bankroll change by date", "Current BR", series))
}

/// Running ROI by tournament count, `None` when there is nothing to plot
pub fn roi_chart(records: &[TournamentRecord]) -> Option<LineChart> {
    let series = roi_series(records);
    (!series.is_empty()).then(|| {
        LineChart::new(
            "ROI",
            "ROI change by number of tournaments",
            "Current ROI",
            series,
        )
        .with_y_bounds(-50.0, 150.0)
    })
}
