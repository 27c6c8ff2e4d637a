use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::dto::{DailySummary, FoodLog, LogQuery};
use super::repo;
use crate::error::{AppError, Result};
use crate::state::AppState;

pub async fn list_food_logs(state: &AppState, query: &LogQuery) -> Result<Vec<FoodLog>> {
    let store = state
        .store
        .as_ref()
        .ok_or(AppError::Configuration("record store"))?;

    if query.user_id.is_empty() {
        return Err(AppError::Input("userId is required"));
    }
    for bound in [query.from.as_deref(), query.to.as_deref()].into_iter().flatten() {
        if OffsetDateTime::parse(bound, &Rfc3339).is_err() {
            return Err(AppError::Input("from/to must be RFC 3339 timestamps"));
        }
    }

    let rows = repo::list_by_user(
        store.as_ref(),
        &query.user_id,
        query.from.as_deref(),
        query.to.as_deref(),
    )
    .await?;

    Ok(rows.into_iter().map(FoodLog::from).collect())
}

/// Fold logs (already newest-first) into per-day totals for the dashboard.
/// Missing nutrition fields count as zero.
pub fn summarize(logs: &[FoodLog]) -> Vec<DailySummary> {
    let mut days: Vec<DailySummary> = Vec::new();
    for log in logs {
        let date = log.created_at.date().to_string();
        let day = match days.iter_mut().find(|d| d.date == date) {
            Some(day) => day,
            None => {
                days.push(DailySummary {
                    date,
                    calories: 0.0,
                    protein: 0.0,
                    carbs: 0.0,
                    fats: 0.0,
                    fiber: 0.0,
                    entries: 0,
                });
                days.last_mut().unwrap()
            }
        };
        day.calories += log.calories.unwrap_or_default();
        day.protein += log.protein.unwrap_or_default();
        day.carbs += log.carbs.unwrap_or_default();
        day.fats += log.fats.unwrap_or_default();
        day.fiber += log.fiber.unwrap_or_default();
        day.entries += 1;
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn log(created_at: OffsetDateTime, calories: f64, protein: f64) -> FoodLog {
        FoodLog {
            id: "1".into(),
            user_id: Some("user".into()),
            food_name: "Test".into(),
            calories: Some(calories),
            protein: Some(protein),
            carbs: None,
            fats: None,
            fiber: None,
            serving_size: None,
            confidence: None,
            breakdown: Vec::new(),
            image_url: None,
            created_at,
        }
    }

    #[test]
    fn test_summarize_groups_by_calendar_day() {
        let logs = vec![
            log(datetime!(2026-08-05 19:30 UTC), 600.0, 30.0),
            log(datetime!(2026-08-05 08:00 UTC), 400.0, 20.0),
            log(datetime!(2026-08-04 12:00 UTC), 500.0, 25.0),
        ];

        let days = summarize(&logs);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2026-08-05");
        assert_eq!(days[0].calories, 1000.0);
        assert_eq!(days[0].protein, 50.0);
        assert_eq!(days[0].entries, 2);
        assert_eq!(days[1].date, "2026-08-04");
        assert_eq!(days[1].entries, 1);
    }

    #[test]
    fn test_summarize_counts_entries_with_missing_nutrition() {
        let mut sparse = log(datetime!(2026-08-05 12:00 UTC), 0.0, 0.0);
        sparse.calories = None;
        sparse.protein = None;

        let days = summarize(&[sparse]);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].calories, 0.0);
        assert_eq!(days[0].entries, 1);
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize(&[]).is_empty());
    }
}
