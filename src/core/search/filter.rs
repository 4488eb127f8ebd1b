//! Candidate filtering.
//!
//! Two independent decisions are made for every document:
//!
//! - [`matches_query`]: the text pre-filter. A document passes when
//!   at least one searchable field contains the whole normalized
//!   query as a substring. This is stricter than scoring, so a
//!   document can earn word-overlap credit and still be dropped here.
//! - [`AttributeFilter`]: the structured filters of a search request
//!   (record type, equality filters, creation date and amount ranges).

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::core::error::{Result, SearchError};
use crate::core::search::query::NormalizedQuery;
use crate::core::search::scorer::FIELD_WEIGHTS;
use crate::core::types::{parse_timestamp, Document, KindFilter, SearchRequest};

/// Check whether any searchable field contains the query text
pub fn matches_query(document: &Document, query: &NormalizedQuery) -> bool {
    FIELD_WEIGHTS.iter().any(|&(field, _)| {
        document
            .field(field)
            .is_some_and(|value| value.to_lowercase().contains(query.text()))
    })
}

/// Structured filters parsed from a [`SearchRequest`]
///
/// Equality filters compare exact strings, as the backend does. A
/// range bound excludes documents that lack the bounded value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeFilter {
    pub kind: KindFilter,
    pub department: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub vendor: Option<String>,
    pub contract_type: Option<String>,
    /// Inclusive lower bound on `$createdAt`
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `$createdAt`
    pub created_to: Option<DateTime<Utc>>,
    pub amount_min: Option<f64>,
    pub amount_max: Option<f64>,
}

impl AttributeFilter {
    /// Build and validate the filter for a request.
    ///
    /// Blank equality filters are ignored. A bare `YYYY-MM-DD` end
    /// date covers the whole day.
    pub fn from_request(request: &SearchRequest) -> Result<Self> {
        let created_from = parse_bound("startDate", request.start_date.as_deref(), false)?;
        let created_to = parse_bound("endDate", request.end_date.as_deref(), true)?;

        if let (Some(from), Some(to)) = (created_from, created_to) {
            if from > to {
                return Err(SearchError::invalid_parameter(
                    "startDate",
                    "must not be after endDate",
                ));
            }
        }

        for (name, value) in [
            ("amountMin", request.amount_min),
            ("amountMax", request.amount_max),
        ] {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(SearchError::invalid_parameter(name, "must be a finite number"));
            }
        }

        if let (Some(min), Some(max)) = (request.amount_min, request.amount_max) {
            if min > max {
                return Err(SearchError::invalid_parameter(
                    "amountMin",
                    "must not exceed amountMax",
                ));
            }
        }

        Ok(Self {
            kind: request.kind,
            department: non_blank(&request.department),
            status: non_blank(&request.status),
            priority: non_blank(&request.priority),
            vendor: non_blank(&request.vendor),
            contract_type: non_blank(&request.contract_type),
            created_from,
            created_to,
            amount_min: request.amount_min,
            amount_max: request.amount_max,
        })
    }

    /// Check whether a document satisfies every filter
    pub fn matches(&self, document: &Document) -> bool {
        if !self.kind.accepts(document.kind) {
            return false;
        }

        let equality = [
            (&self.department, &document.department),
            (&self.status, &document.status),
            (&self.priority, &document.priority),
            (&self.vendor, &document.vendor),
            (&self.contract_type, &document.contract_type),
        ];
        for (wanted, actual) in equality {
            if let Some(wanted) = wanted {
                if actual.as_deref() != Some(wanted.as_str()) {
                    return false;
                }
            }
        }

        if self.created_from.is_some() || self.created_to.is_some() {
            let Some(created) = document.created_at_utc() else {
                return false;
            };
            if self.created_from.is_some_and(|from| created < from)
                || self.created_to.is_some_and(|to| created > to)
            {
                return false;
            }
        }

        if self.amount_min.is_some() || self.amount_max.is_some() {
            let Some(amount) = document.amount else {
                return false;
            };
            if self.amount_min.is_some_and(|min| amount < min)
                || self.amount_max.is_some_and(|max| amount > max)
            {
                return false;
            }
        }

        true
    }

    /// True when no filter narrows the candidate set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_bound(
    name: &str,
    value: Option<&str>,
    end_of_day: bool,
) -> Result<Option<DateTime<Utc>>> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    // Date-only end bounds include the whole day
    if end_of_day {
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            let start = date.and_time(NaiveTime::MIN).and_utc();
            return Ok(Some(start + Duration::days(1) - Duration::milliseconds(1)));
        }
    }

    parse_timestamp(value).map(Some).ok_or_else(|| {
        SearchError::invalid_parameter(
            name,
            format!("'{value}' is not an RFC 3339 timestamp or YYYY-MM-DD date"),
        )
    })
}
