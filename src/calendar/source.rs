use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    calendar::model::Calendar,
    foundation::error::{GalaxiaError, GalaxiaResult},
};

// Shape of the provider's GraphQL response. Every level is optional so a missing branch can be
// reported by name instead of as a generic serde failure.
#[derive(Debug, Deserialize)]
struct Response {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    user: Option<User>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct User {
    contributions_collection: Option<Collection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Collection {
    contribution_calendar: Option<ProviderCalendar>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderCalendar {
    total_contributions: u64,
    weeks: Vec<ProviderWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderWeek {
    contribution_days: Vec<ProviderDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderDay {
    date: String,
    contribution_count: u32,
}

/// Decode a contribution-calendar response into a [`Calendar`].
///
/// Any missing branch is fatal, and the provider's own `errors` payload is carried into the
/// message so the caller can surface the raw failure.
pub fn parse_provider_response(json: &str) -> GalaxiaResult<Calendar> {
    let resp: Response = serde_json::from_str(json)
        .map_err(|e| GalaxiaError::calendar(format!("malformed provider response: {e}")))?;

    let missing = |what: &str| {
        let raw = resp
            .errors
            .as_ref()
            .map(|e| format!("; provider errors: {e}"))
            .unwrap_or_default();
        GalaxiaError::calendar(format!("response is missing {what}{raw}"))
    };

    let cal = resp
        .data
        .as_ref()
        .ok_or_else(|| missing("data"))?
        .user
        .as_ref()
        .ok_or_else(|| missing("data.user"))?
        .contributions_collection
        .as_ref()
        .ok_or_else(|| missing("data.user.contributionsCollection"))?
        .contribution_calendar
        .as_ref()
        .ok_or_else(|| missing("data.user.contributionsCollection.contributionCalendar"))?;

    let mut days = Vec::with_capacity(cal.weeks.len() * 7);
    for week in &cal.weeks {
        for day in &week.contribution_days {
            let date = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d").map_err(|e| {
                GalaxiaError::calendar(format!("invalid day date '{}': {e}", day.date))
            })?;
            days.push((date, day.contribution_count));
        }
    }

    tracing::debug!(
        weeks = cal.weeks.len(),
        days = days.len(),
        total = cal.total_contributions,
        "decoded provider calendar"
    );
    Ok(Calendar::from_days(days)?.with_total(cal.total_contributions))
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/source.rs"]
mod tests;
