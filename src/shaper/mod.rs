//! Result shaping: row sets in, tool payloads out.

pub mod csv;

use crate::db::{Row, RowSet};
use crate::error::{DbError, ToolError};
use crate::models::{ContactRecord, CurrentCompany, NetworkStats, RankedValue};
use crate::query::labels;
use crate::tools::ToolRequest;
use serde::Serialize;
use serde_json::{json, Value};

/// Turn the row sets of an executed plan into the payload for `request`.
pub fn shape(request: &ToolRequest, sets: Vec<RowSet>) -> Result<Value, ToolError> {
    match request {
        ToolRequest::SearchNetwork { query, field, .. } => {
            let results = contacts(&sets, labels::CONTACTS)?;
            Ok(json!({
                "query": query,
                "field": field,
                "count": results.len(),
                "results": results,
            }))
        }
        ToolRequest::GetProfile { identifier } => {
            let record = contacts(&sets, labels::PROFILE)?
                .into_iter()
                .next()
                .ok_or_else(|| ToolError::NotFound(format!("no contact matches '{}'", identifier)))?;
            to_value(&record)
        }
        ToolRequest::FilterByKeywords {
            keywords,
            match_mode,
            ..
        } => {
            let results = contacts(&sets, labels::CONTACTS)?;
            Ok(json!({
                "keywords": keywords.as_slice(),
                "match_mode": match_mode,
                "count": results.len(),
                "results": results,
            }))
        }
        ToolRequest::AnalyzeNetwork => to_value(&network_stats(&sets)?),
        ToolRequest::ExportNetworkCsv => {
            let records = contacts(&sets, labels::CONTACTS)?;
            Ok(json!({
                "count": records.len(),
                "csv": csv::render(&records),
            }))
        }
    }
}

/// Map one row onto the nested contact shape.
pub fn contact_from_row(row: &Row) -> ContactRecord {
    ContactRecord {
        full_name: row.text("full_name").unwrap_or_default(),
        headline: row.text("headline"),
        location: row.text("location"),
        linkedin_url: row.text("linkedin_url"),
        current_company: CurrentCompany::from_parts(
            row.text("current_company_title"),
            row.text("current_company_name"),
            row.text("current_company_industry"),
        ),
        skills_top: row.text_array("skills_top"),
        keywords: row.text_array("keywords"),
    }
}

/// Assemble statistics from the overview and ranking sets.
pub fn network_stats(sets: &[RowSet]) -> Result<NetworkStats, ToolError> {
    let overview = find(sets, labels::OVERVIEW)?;
    let first = overview.rows.first();

    Ok(NetworkStats {
        total_contacts: first.and_then(|r| r.int("total_contacts")).unwrap_or(0),
        distinct_companies: first
            .and_then(|r| r.int("distinct_companies"))
            .unwrap_or(0),
        top_keywords: ranking(find(sets, labels::TOP_KEYWORDS)?),
        top_locations: ranking(find(sets, labels::TOP_LOCATIONS)?),
        top_companies: ranking(find(sets, labels::TOP_COMPANIES)?),
    })
}

fn ranking(set: &RowSet) -> Vec<RankedValue> {
    set.rows
        .iter()
        .filter_map(|row| {
            Some(RankedValue {
                value: row.text("value")?,
                count: row.int("count")?,
            })
        })
        .collect()
}

fn contacts(sets: &[RowSet], label: &str) -> Result<Vec<ContactRecord>, ToolError> {
    Ok(find(sets, label)?.rows.iter().map(contact_from_row).collect())
}

// A missing set means the plan and the shaper disagree; report it as a query
// failure so the caller still gets the sanitized database error.
fn find<'a>(sets: &'a [RowSet], label: &str) -> Result<&'a RowSet, ToolError> {
    sets.iter()
        .find(|set| set.label == label)
        .ok_or_else(|| ToolError::Database(DbError::query(format!("missing row set '{}'", label))))
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, ToolError> {
    serde_json::to_value(value)
        .map_err(|e| ToolError::Database(DbError::query(format!("serialization failed: {}", e))))
}
