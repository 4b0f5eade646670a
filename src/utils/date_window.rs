// Fenêtres de dates pour mettre en évidence l'activité récente (UTC)

use chrono::{Datelike, NaiveDateTime, Utc};
use serde::Serialize;

/// Vrai si la date tombe le même jour UTC qu'aujourd'hui
pub fn within_same_day(date: Option<NaiveDateTime>) -> bool {
    within_same_day_at(date, Utc::now().naive_utc())
}

/// Vrai si la date tombe dans la même semaine ISO (lundi → dimanche) que maintenant
pub fn within_same_week(date: Option<NaiveDateTime>) -> bool {
    within_same_week_at(date, Utc::now().naive_utc())
}

/// Vrai si la date tombe dans le même mois de la même année que maintenant
pub fn within_same_month(date: Option<NaiveDateTime>) -> bool {
    within_same_month_at(date, Utc::now().naive_utc())
}

pub fn within_same_day_at(date: Option<NaiveDateTime>, now: NaiveDateTime) -> bool {
    match date {
        Some(d) => d.date() == now.date(),
        None => false,
    }
}

// IsoWeek compare l'année ISO et le numéro de semaine
pub fn within_same_week_at(date: Option<NaiveDateTime>, now: NaiveDateTime) -> bool {
    match date {
        Some(d) => d.iso_week() == now.iso_week(),
        None => false,
    }
}

pub fn within_same_month_at(date: Option<NaiveDateTime>, now: NaiveDateTime) -> bool {
    match date {
        Some(d) => d.year() == now.year() && d.month() == now.month(),
        None => false,
    }
}

/// Les trois drapeaux d'activité récente d'une date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Recency {
    pub today: bool,
    pub this_week: bool,
    pub this_month: bool,
}

impl Recency {
    /// Calcule les drapeaux par rapport à l'instant présent
    pub fn of(date: Option<NaiveDateTime>) -> Self {
        Self {
            today: within_same_day(date),
            this_week: within_same_week(date),
            this_month: within_same_month(date),
        }
    }

    /// Calcule les drapeaux par rapport à un instant donné
    /// (le dashboard fige `now` une seule fois par requête)
    pub fn at(date: Option<NaiveDateTime>, now: NaiveDateTime) -> Self {
        Self {
            today: within_same_day_at(date, now),
            this_week: within_same_week_at(date, now),
            this_month: within_same_month_at(date, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_missing_date_is_never_recent() {
        let now = at(2024, 6, 12, 10);

        assert!(!within_same_day_at(None, now));
        assert!(!within_same_week_at(None, now));
        assert!(!within_same_month_at(None, now));
        assert!(!within_same_day(None));
        assert!(!within_same_week(None));
        assert!(!within_same_month(None));
        assert_eq!(Recency::of(None), Recency::default());
    }

    #[test]
    fn test_same_day() {
        let now = at(2024, 6, 12, 10);

        assert!(within_same_day_at(Some(at(2024, 6, 12, 0)), now));
        assert!(within_same_day_at(Some(at(2024, 6, 12, 23)), now));
        assert!(!within_same_day_at(Some(at(2024, 6, 11, 23)), now));
        assert!(!within_same_day_at(Some(at(2023, 6, 12, 10)), now));
    }

    #[test]
    fn test_same_iso_week() {
        // 2024-06-12 est un mercredi : semaine du lundi 10 au dimanche 16
        let now = at(2024, 6, 12, 10);

        assert!(within_same_week_at(Some(at(2024, 6, 10, 0)), now));
        assert!(within_same_week_at(Some(at(2024, 6, 16, 23)), now));
        assert!(!within_same_week_at(Some(at(2024, 6, 9, 23)), now));
        assert!(!within_same_week_at(Some(at(2024, 6, 17, 0)), now));
        // Même numéro de semaine, année différente
        assert!(!within_same_week_at(Some(at(2023, 6, 14, 10)), now));
    }

    #[test]
    fn test_iso_week_across_new_year() {
        // Le 1er janvier 2025 appartient à la semaine 1 de 2025, comme le 30 décembre 2024
        let now = at(2025, 1, 1, 12);

        assert!(within_same_week_at(Some(at(2024, 12, 30, 8)), now));
        assert!(!within_same_week_at(Some(at(2024, 12, 29, 8)), now));
    }

    #[test]
    fn test_same_month() {
        let now = at(2024, 6, 12, 10);

        assert!(within_same_month_at(Some(at(2024, 6, 1, 0)), now));
        assert!(within_same_month_at(Some(at(2024, 6, 30, 23)), now));
        assert!(!within_same_month_at(Some(at(2024, 5, 31, 23)), now));
        assert!(!within_same_month_at(Some(at(2023, 6, 12, 10)), now));
    }

    #[test]
    fn test_recency_flags() {
        let now = at(2024, 6, 12, 10);

        let recency = Recency::at(Some(at(2024, 6, 3, 10)), now);
        assert_eq!(recency, Recency { today: false, this_week: false, this_month: true });

        let recency = Recency::at(Some(now), now);
        assert_eq!(recency, Recency { today: true, this_week: true, this_month: true });
    }
}
