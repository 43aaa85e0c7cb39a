use crate::models::{AttentionLevel, Driver, DriverHistoryRecord, HistoryQuery};

/// Check if a driver can be suggested for a trip
#[inline]
pub fn is_eligible_for_dispatch(driver: &Driver) -> bool {
    driver.is_on_duty
}

/// Check if a driver's attention is at the critical level
#[inline]
pub fn is_critical(driver: &Driver) -> bool {
    driver.attention_level == AttentionLevel::Critical
}

/// Check if a history record matches the history view filters
///
/// The search term matches the driver name or license number, ignoring case.
/// The term is used as typed; surrounding whitespace is not stripped.
/// Status and risk level, when given, must match exactly.
#[inline]
pub fn matches_history_query(record: &DriverHistoryRecord, query: &HistoryQuery) -> bool {
    if let Some(term) = query.search.as_deref() {
        let term = term.to_lowercase();
        if !term.is_empty()
            && !record.name.to_lowercase().contains(&term)
            && !record.license_number.to_lowercase().contains(&term)
        {
            return false;
        }
    }

    if let Some(status) = query.status {
        if record.status != status {
            return false;
        }
    }

    if let Some(risk_level) = query.risk_level {
        if record.risk_level != risk_level {
            return false;
        }
    }

    true
}

/// Apply the history filters, keeping input order
pub fn filter_history<'a>(
    records: &'a [DriverHistoryRecord],
    query: &HistoryQuery,
) -> Vec<&'a DriverHistoryRecord> {
    records
        .iter()
        .filter(|record| matches_history_query(record, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DriverStatus, ExperienceLevel, RiskLevel};

    fn create_record(name: &str, license: &str, status: DriverStatus, risk: RiskLevel) -> DriverHistoryRecord {
        DriverHistoryRecord {
            id: license.to_string(),
            driver_id: license.to_string(),
            name: name.to_string(),
            image: String::new(),
            license_number: license.to_string(),
            vehicle_type: "camión de carga".to_string(),
            total_trips: 300,
            experience_level: ExperienceLevel::Expert,
            years_experience: 9,
            average_attention_score: 80.0,
            last_active_date: "2024-01-07".to_string(),
            status,
            incidents_count: 1,
            trip_type: "regional".to_string(),
            risk_level: risk,
            total_hours_driven: 2000.0,
            fatigue_incidents: 0,
        }
    }

    #[test]
    fn test_search_by_name_ignores_case() {
        let record = create_record("Carlos Mendoza", "B-123", DriverStatus::Active, RiskLevel::Low);
        let query = HistoryQuery {
            search: Some("MENDOZA".to_string()),
            ..Default::default()
        };

        assert!(matches_history_query(&record, &query));
    }

    #[test]
    fn test_search_by_license() {
        let record = create_record("Carlos Mendoza", "B-12345678", DriverStatus::Active, RiskLevel::Low);
        let query = HistoryQuery {
            search: Some("b-1234".to_string()),
            ..Default::default()
        };

        assert!(matches_history_query(&record, &query));
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let record = create_record("Carlos Mendoza", "B-123", DriverStatus::Active, RiskLevel::Low);
        let trailing_space = HistoryQuery {
            search: Some("mendoza ".to_string()),
            ..Default::default()
        };
        let inner_space = HistoryQuery {
            search: Some("carlos m".to_string()),
            ..Default::default()
        };

        assert!(!matches_history_query(&record, &trailing_space));
        assert!(matches_history_query(&record, &inner_space));
    }

    #[test]
    fn test_status_and_risk_are_anded() {
        let record = create_record("Lucía Torres", "C-9", DriverStatus::Suspended, RiskLevel::High);

        let both = HistoryQuery {
            status: Some(DriverStatus::Suspended),
            risk_level: Some(RiskLevel::High),
            ..Default::default()
        };
        let wrong_risk = HistoryQuery {
            status: Some(DriverStatus::Suspended),
            risk_level: Some(RiskLevel::Low),
            ..Default::default()
        };

        assert!(matches_history_query(&record, &both));
        assert!(!matches_history_query(&record, &wrong_risk));
    }

    #[test]
    fn test_empty_query_matches_all() {
        let records = vec![
            create_record("A", "1", DriverStatus::Active, RiskLevel::Low),
            create_record("B", "2", DriverStatus::Inactive, RiskLevel::Medium),
        ];

        assert_eq!(filter_history(&records, &HistoryQuery::default()).len(), 2);
    }
}
