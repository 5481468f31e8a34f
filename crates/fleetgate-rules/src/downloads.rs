//! Tachograph download-cycle compliance
//!
//! Applies the statutory download cadence (28 days for driver cards, 90
//! for vehicle units) to a subject's event history, and keeps that history
//! in an append-only log for audit display.

use chrono::NaiveDate;
use fleetgate_core::calendar::days_since;
use fleetgate_core::model::{DownloadEvent, DownloadStatus, RiskTier, SubjectKind};
use serde::{Deserialize, Serialize};

/// Days before the due date at which a subject becomes "due soon".
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

/// Compliance state of one subject given its download history.
///
/// Only the most recent matching download date counts; events for a
/// different subject kind are ignored. No history at all is tier High
/// ("never downloaded") with no last date and no days-until-due. The
/// bands are overdue → High, due within seven days → Medium, otherwise
/// Green; the tracker does not use the Low tier.
pub fn status(
    events: &[DownloadEvent],
    subject_kind: SubjectKind,
    today: NaiveDate,
) -> DownloadStatus {
    let last = events
        .iter()
        .filter(|event| event.subject_kind == subject_kind)
        .map(|event| event.download_date)
        .max();

    let Some(last_download) = last else {
        return DownloadStatus {
            tier: RiskTier::High,
            last_download: None,
            days_until_due: None,
        };
    };

    let days_until_due =
        subject_kind.rule_interval_days() - days_since(last_download, today);

    let tier = if days_until_due < 0 {
        RiskTier::High
    } else if days_until_due <= DUE_SOON_WINDOW_DAYS {
        RiskTier::Medium
    } else {
        RiskTier::Green
    };

    DownloadStatus {
        tier,
        last_download: Some(last_download),
        days_until_due: Some(days_until_due),
    }
}

/// Append-only download history for one fleet.
///
/// Events are never edited or removed once logged, matching the
/// no-deletion policy applied to defects elsewhere in the system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadLog {
    events: Vec<DownloadEvent>,
}

impl DownloadLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append a download event. There is no edit or removal counterpart.
    pub fn log(&mut self, event: DownloadEvent) {
        self.events.push(event);
    }

    /// All logged events, oldest first
    pub fn events(&self) -> &[DownloadEvent] {
        &self.events
    }

    /// Compliance state for one subject kind as of `today`
    pub fn status(&self, subject_kind: SubjectKind, today: NaiveDate) -> DownloadStatus {
        status(&self.events, subject_kind, today)
    }

    /// Most recent download date for one subject kind
    pub fn last_download(&self, subject_kind: SubjectKind) -> Option<NaiveDate> {
        self.events
            .iter()
            .filter(|event| event.subject_kind == subject_kind)
            .map(|event| event.download_date)
            .max()
    }

    /// Event counts for history display
    pub fn stats(&self) -> DownloadLogStats {
        let driver_card = self
            .events
            .iter()
            .filter(|e| e.subject_kind == SubjectKind::DriverCard)
            .count();

        DownloadLogStats {
            total: self.events.len(),
            driver_card,
            vehicle_unit: self.events.len() - driver_card,
        }
    }

    /// Export the history as JSON Lines
    pub fn to_jsonl(&self) -> String {
        self.events
            .iter()
            .filter_map(|event| serde_json::to_string(event).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Per-kind event counts over a download log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLogStats {
    pub total: usize,
    pub driver_card: usize,
    pub vehicle_unit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 16).unwrap()
    }

    fn card_event(days_ago: i64) -> DownloadEvent {
        DownloadEvent::new(SubjectKind::DriverCard, today() - Duration::days(days_ago))
    }

    #[test]
    fn test_never_downloaded() {
        let result = status(&[], SubjectKind::DriverCard, today());
        assert_eq!(result.tier, RiskTier::High);
        assert_eq!(result.last_download, None);
        assert_eq!(result.days_until_due, None);

        let result = status(&[], SubjectKind::VehicleUnit, today());
        assert_eq!(result.tier, RiskTier::High);
    }

    #[test]
    fn test_only_matching_kind_counts() {
        // a fresh vehicle-unit download says nothing about the card cycle
        let events = vec![DownloadEvent::new(SubjectKind::VehicleUnit, today())];
        let result = status(&events, SubjectKind::DriverCard, today());
        assert_eq!(result.tier, RiskTier::High);
        assert_eq!(result.last_download, None);
    }

    #[test]
    fn test_most_recent_event_wins() {
        let events = vec![card_event(40), card_event(3), card_event(20)];
        let result = status(&events, SubjectKind::DriverCard, today());
        assert_eq!(result.last_download, Some(today() - Duration::days(3)));
        assert_eq!(result.days_until_due, Some(25));
        assert_eq!(result.tier, RiskTier::Green);
    }

    #[test]
    fn test_card_cycle_bands() {
        // 28-day cycle: 29 days ago is one day overdue
        let overdue = status(&[card_event(29)], SubjectKind::DriverCard, today());
        assert_eq!(overdue.tier, RiskTier::High);
        assert_eq!(overdue.days_until_due, Some(-1));

        // due today
        let due_today = status(&[card_event(28)], SubjectKind::DriverCard, today());
        assert_eq!(due_today.tier, RiskTier::Medium);
        assert_eq!(due_today.days_until_due, Some(0));

        // seven days of slack left
        let due_soon = status(&[card_event(21)], SubjectKind::DriverCard, today());
        assert_eq!(due_soon.tier, RiskTier::Medium);
        assert_eq!(due_soon.days_until_due, Some(7));

        // eight days of slack: no "upcoming" band here, straight to Green
        let ok = status(&[card_event(20)], SubjectKind::DriverCard, today());
        assert_eq!(ok.tier, RiskTier::Green);
        assert_eq!(ok.days_until_due, Some(8));
    }

    #[test]
    fn test_vehicle_unit_cycle() {
        let unit = vec![DownloadEvent::new(
            SubjectKind::VehicleUnit,
            today() - Duration::days(91),
        )];
        let result = status(&unit, SubjectKind::VehicleUnit, today());
        assert_eq!(result.tier, RiskTier::High);
        assert_eq!(result.days_until_due, Some(-1));
    }

    #[test]
    fn test_log_then_status_round_trip() {
        let mut log = DownloadLog::new();
        log.log(DownloadEvent::new(SubjectKind::DriverCard, today()));

        let result = log.status(SubjectKind::DriverCard, today());
        assert_eq!(result.tier, RiskTier::Green);
        assert_eq!(result.days_until_due, Some(28));
        assert_eq!(result.last_download, Some(today()));
    }

    #[test]
    fn test_log_is_append_only() {
        let mut log = DownloadLog::new();
        log.log(card_event(30));
        log.log(card_event(1));

        // the stale event stays in history even though it no longer
        // drives the compliance state
        assert_eq!(log.events().len(), 2);
        assert_eq!(log.last_download(SubjectKind::DriverCard), Some(today() - Duration::days(1)));
    }

    #[test]
    fn test_stats() {
        let mut log = DownloadLog::new();
        log.log(card_event(1));
        log.log(card_event(2));
        log.log(DownloadEvent::new(SubjectKind::VehicleUnit, today()));

        assert_eq!(
            log.stats(),
            DownloadLogStats {
                total: 3,
                driver_card: 2,
                vehicle_unit: 1,
            }
        );
    }

    #[test]
    fn test_to_jsonl() {
        let mut log = DownloadLog::new();
        log.log(card_event(1).with_software("TachoScan"));
        log.log(DownloadEvent::new(SubjectKind::VehicleUnit, today()));

        let jsonl = log.to_jsonl();
        assert_eq!(jsonl.lines().count(), 2);
        assert!(jsonl.contains("\"DRIVER_CARD\""));
        assert!(jsonl.contains("\"VEHICLE_UNIT\""));
    }
}
