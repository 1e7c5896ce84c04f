//! Clock implementations beyond `mockable::DefaultClock`.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at local noon of a given day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    pub fn on(date: NaiveDate) -> Self {
        let noon = date.and_time(chrono::NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default());
        let now = Local
            .from_local_datetime(&noon)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&noon));
        Self { now }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_its_day() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let clock = FixedClock::on(day);
        assert_eq!(clock.local().date_naive(), day);
        assert_eq!(clock.utc(), clock.local().with_timezone(&Utc));
    }
}
