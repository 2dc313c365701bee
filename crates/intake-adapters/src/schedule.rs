//! Rolling-window scheduler with fixed business hours.

use chrono::{Duration, Local, NaiveDate, NaiveTime};
use tracing::debug;

use intake_core::{
    application::ports::{DateWindow, Scheduler},
    domain::DomainError,
    error::IntakeResult,
};

/// Days ahead of today that remain bookable.
pub const DEFAULT_HORIZON_DAYS: i64 = 90;

/// First bookable slot of the day.
pub const DEFAULT_OPENING: &str = "09:00";

/// Last bookable slot of the day (inclusive).
pub const DEFAULT_CLOSING: &str = "17:00";

/// Minutes between consecutive slots.
pub const DEFAULT_SLOT_MINUTES: i64 = 30;

/// Largest configurable horizon (ten years). Keeps window arithmetic
/// inside chrono's date range.
pub const MAX_HORIZON_DAYS: i64 = 3650;

/// Scheduler offering a window from today to a fixed horizon, with
/// evenly spaced slots between opening and closing time.
///
/// The closing time is itself a bookable slot.
pub struct RollingWindowScheduler {
    horizon_days: i64,
    opening: NaiveTime,
    closing: NaiveTime,
    slot_minutes: i64,
}

impl RollingWindowScheduler {
    /// Create a scheduler with the studio defaults: a 90-day window and
    /// half-hour slots from 09:00 to 17:00.
    pub fn studio_hours() -> Self {
        Self::new(
            DEFAULT_HORIZON_DAYS,
            NaiveTime::from_hms_opt(9, 0, 0).expect("default opening is valid"),
            NaiveTime::from_hms_opt(17, 0, 0).expect("default closing is valid"),
            DEFAULT_SLOT_MINUTES,
        )
        .expect("studio defaults are valid")
    }

    /// Create a scheduler with explicit hours.
    pub fn new(
        horizon_days: i64,
        opening: NaiveTime,
        closing: NaiveTime,
        slot_minutes: i64,
    ) -> Result<Self, DomainError> {
        if horizon_days < 0 {
            return Err(DomainError::InvalidScheduleWindow {
                reason: format!("horizon must be non-negative, got {horizon_days} days"),
            });
        }
        if horizon_days > MAX_HORIZON_DAYS {
            return Err(DomainError::InvalidScheduleWindow {
                reason: format!(
                    "horizon must be at most {MAX_HORIZON_DAYS} days, got {horizon_days}"
                ),
            });
        }
        if opening > closing {
            return Err(DomainError::InvalidScheduleWindow {
                reason: format!("opening {opening} is after closing {closing}"),
            });
        }
        if slot_minutes <= 0 {
            return Err(DomainError::InvalidScheduleWindow {
                reason: format!("slot length must be positive, got {slot_minutes} minutes"),
            });
        }
        Ok(Self {
            horizon_days,
            opening,
            closing,
            slot_minutes,
        })
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

impl Scheduler for RollingWindowScheduler {
    fn date_window(&self) -> IntakeResult<DateWindow> {
        let opens = self.today();
        let closes = opens + Duration::days(self.horizon_days);
        debug!(%opens, %closes, "computed booking window");
        Ok(DateWindow { opens, closes })
    }

    fn time_slots(&self) -> IntakeResult<Vec<NaiveTime>> {
        let step = Duration::minutes(self.slot_minutes);
        let mut slots = Vec::new();
        let mut cursor = self.opening;

        while cursor <= self.closing {
            slots.push(cursor);
            let (next, overflow) = cursor.overflowing_add_signed(step);
            if overflow != 0 {
                // Stepped past midnight, the day is exhausted.
                break;
            }
            cursor = next;
        }

        Ok(slots)
    }

    fn is_selectable(&self, date: NaiveDate) -> IntakeResult<bool> {
        Ok(self.date_window()?.contains(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn studio_hours_yield_seventeen_slots() {
        let slots = RollingWindowScheduler::studio_hours().time_slots().unwrap();
        assert_eq!(slots.len(), 17);
        assert_eq!(slots[0], NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(slots[1], NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(*slots.last().unwrap(), NaiveTime::from_hms_opt(17, 0, 0).unwrap());
    }

    #[test]
    fn window_spans_ninety_days_from_today() {
        let window = RollingWindowScheduler::studio_hours().date_window().unwrap();
        assert_eq!(window.opens, Local::now().date_naive());
        assert_eq!(window.closes - window.opens, Duration::days(90));
    }

    #[test]
    fn window_edges_are_selectable() {
        let scheduler = RollingWindowScheduler::studio_hours();
        let window = scheduler.date_window().unwrap();

        assert!(scheduler.is_selectable(window.opens).unwrap());
        assert!(scheduler.is_selectable(window.closes).unwrap());
        assert!(!scheduler.is_selectable(window.opens - Duration::days(1)).unwrap());
        assert!(!scheduler.is_selectable(window.closes + Duration::days(1)).unwrap());
    }

    #[test]
    fn closing_before_opening_is_rejected() {
        let opening = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        let closing = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert!(RollingWindowScheduler::new(90, opening, closing, 30).is_err());
    }

    #[test]
    fn oversized_horizon_is_rejected() {
        let opening = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let closing = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        assert!(RollingWindowScheduler::new(1_000_000_000, opening, closing, 30).is_err());
        assert!(RollingWindowScheduler::new(MAX_HORIZON_DAYS, opening, closing, 30).is_ok());
    }

    #[test]
    fn zero_length_slots_are_rejected() {
        let opening = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let closing = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        assert!(RollingWindowScheduler::new(90, opening, closing, 0).is_err());
    }

    #[test]
    fn slot_loop_stops_at_midnight() {
        let opening = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
        let closing = NaiveTime::from_hms_opt(23, 59, 0).unwrap();
        let scheduler = RollingWindowScheduler::new(1, opening, closing, 30).unwrap();
        let slots = scheduler.time_slots().unwrap();
        assert_eq!(slots.len(), 2);
    }
}
