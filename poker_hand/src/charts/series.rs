//! Cumulative bankroll and ROI series over tournament results.

use crate::tournament::TournamentRecord;

/// Buy-ins below this amount are left out of the ROI series
pub const ROI_NOISE_THRESHOLD: f64 = 0.2;

/// Date label layout of the bankroll series
pub const DAY_LABEL_FORMAT: &str = "%m.%d.%Y";

/// Chart-ready series: one label per point
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    /// `None` marks a point without a finite value
    pub values: Vec<Option<f64>>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn push(&mut self, label: String, value: Option<f64>) {
        self.labels.push(label);
        self.values.push(value);
    }
}

fn chronological(records: &[TournamentRecord]) -> Vec<&TournamentRecord> {
    let mut sorted: Vec<&TournamentRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.started);
    sorted
}

/// Bankroll at the end of each played day
///
/// Records are grouped by calendar day (UTC). A day adds its prizes minus its
/// buy-ins, free entries adding only their prize; the value is the running
/// total across days.
pub fn bankroll_series(records: &[TournamentRecord]) -> Series {
    let mut days: Vec<(chrono::NaiveDate, f64)> = Vec::new();

    for record in chronological(records) {
        let day = record.started.date_naive();
        match days.last_mut() {
            Some((current, net)) if *current == day => *net += record.net_result(),
            _ => days.push((day, record.net_result())),
        }
    }

    let mut series = Series::default();
    let mut bankroll = 0.0;
    for (day, net) in days {
        bankroll += net;
        series.push(day.format(DAY_LABEL_FORMAT).to_string(), Some(bankroll));
    }
    series
}

/// Running ROI in percent, one point per counted tournament
///
/// Tournaments with a buy-in under [`ROI_NOISE_THRESHOLD`] are left out. Free
/// entries add their prize but no buy-in. While nothing has been paid yet the
/// ROI is undefined and the point is `None`.
pub fn roi_series(records: &[TournamentRecord]) -> Series {
    let mut series = Series::default();
    let mut paid = 0.0;
    let mut won = 0.0;

    for record in chronological(records) {
        if record.buy_in < ROI_NOISE_THRESHOLD {
            continue;
        }
        if !record.free {
            paid += record.buy_in;
        }
        won += record.my_prize;

        let roi = (paid > 0.0).then(|| 100.0 * ((won - paid) / paid));
        series.push((series.len() + 1).to_string(), roi);
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::TournamentType;
    use chrono::{TimeZone, Utc};

    fn record(
        id: &str,
        day: u32,
        hour: u32,
        buy_in: f64,
        prize: f64,
        free: bool,
    ) -> TournamentRecord {
        TournamentRecord {
            id: id.to_string(),
            name: format!("Tournament #{id}, Turbo $1, Hold'em No Limit"),
            kind: TournamentType::Turbo,
            buy_in,
            players: 100,
            total_prize_pool: 100.0,
            started: Utc.with_ymd_and_hms(2025, 1, day, hour, 0, 0).unwrap(),
            my_place: 5,
            my_prize: prize,
            reentries: 0,
            free,
        }
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("defined point");
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn test_bankroll_groups_by_day() {
        let records = vec![
            record("3", 14, 9, 1.0, 0.0, false),
            record("1", 13, 12, 2.0, 5.0, false),
            record("2", 13, 18, 1.0, 0.0, false),
        ];
        let series = bankroll_series(&records);
        assert_eq!(series.labels, vec!["01.13.2025", "01.14.2025"]);
        assert_close(series.values[0], 2.0);
        assert_close(series.values[1], 1.0);
    }

    #[test]
    fn test_bankroll_free_entry_adds_prize_only() {
        let records = vec![record("1", 13, 12, 5.0, 3.0, true)];
        let series = bankroll_series(&records);
        assert_close(series.values[0], 3.0);
    }

    #[test]
    fn test_roi_cumulative() {
        let records = vec![
            record("1", 13, 10, 2.0, 0.0, false),
            record("2", 13, 11, 2.0, 8.0, false),
        ];
        let series = roi_series(&records);
        assert_eq!(series.labels, vec!["1", "2"]);
        assert_close(series.values[0], -100.0);
        assert_close(series.values[1], 100.0);
    }

    #[test]
    fn test_roi_skips_noise_buy_ins() {
        let records = vec![
            record("1", 13, 10, 0.1, 50.0, false),
            record("2", 13, 11, 1.0, 1.5, false),
        ];
        let series = roi_series(&records);
        assert_eq!(series.len(), 1);
        assert_close(series.values[0], 50.0);
    }

    #[test]
    fn test_roi_undefined_before_first_paid_entry() {
        let records = vec![
            record("1", 13, 10, 1.0, 2.0, true),
            record("2", 13, 11, 1.0, 0.0, false),
        ];
        let series = roi_series(&records);
        assert_eq!(series.values[0], None);
        assert_close(series.values[1], 100.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(bankroll_series(&[]).is_empty());
        assert!(roi_series(&[]).is_empty());
    }
}
