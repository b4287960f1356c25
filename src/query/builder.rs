//! Builds parameterized SQL for each tool request.

use super::statement::{escape_like, QueryPlan, SqlParam, Statement};
use crate::domain::{KeywordSet, MatchMode, SearchField};
use crate::tools::ToolRequest;

/// Columns selected for every contact-returning query, in shaper order.
pub const CONTACT_COLUMNS: &str = "full_name, headline, location, linkedin_url, \
     current_company_title, current_company_name, current_company_industry, \
     skills_top, keywords";

/// Deterministic ordering shared by every contact list.
const CONTACT_ORDER: &str = "full_name ASC, linkedin_url ASC NULLS LAST";

/// Statement labels, used by the shaper to pick row sets.
pub mod labels {
    pub const CONTACTS: &str = "contacts";
    pub const PROFILE: &str = "profile";
    pub const OVERVIEW: &str = "overview";
    pub const TOP_KEYWORDS: &str = "top_keywords";
    pub const TOP_LOCATIONS: &str = "top_locations";
    pub const TOP_COMPANIES: &str = "top_companies";
}

/// Translates tool requests into query plans.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    search_cap: usize,
    top_n: usize,
}

impl QueryBuilder {
    /// # Arguments
    /// * `search_cap` - Upper bound on `search_network` rows
    /// * `top_n` - Length of each `analyze_network` ranking
    pub fn new(search_cap: usize, top_n: usize) -> Self {
        Self {
            search_cap: search_cap.max(1),
            top_n: top_n.max(1),
        }
    }

    pub fn search_cap(&self) -> usize {
        self.search_cap
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Build the plan for a validated request.
    pub fn build(&self, request: &ToolRequest) -> QueryPlan {
        match request {
            ToolRequest::SearchNetwork {
                query,
                field,
                limit,
            } => QueryPlan::single(self.search_network(query, *field, *limit)),
            ToolRequest::GetProfile { identifier } => {
                QueryPlan::single(Self::get_profile(identifier))
            }
            ToolRequest::FilterByKeywords {
                keywords,
                match_mode,
                limit,
            } => QueryPlan::single(Self::filter_by_keywords(keywords, *match_mode, *limit)),
            ToolRequest::AnalyzeNetwork => self.analyze_network(),
            ToolRequest::ExportNetworkCsv => QueryPlan::single(Self::export_all()),
        }
    }

    /// Case-insensitive substring search, exact matches ranked first.
    fn search_network(
        &self,
        query: &str,
        field: Option<SearchField>,
        limit: Option<usize>,
    ) -> Statement {
        let fields: Vec<SearchField> = match field {
            Some(field) => vec![field],
            None => SearchField::ALL.to_vec(),
        };

        let predicate = fields
            .iter()
            .map(|f| format!("{} ILIKE $1 ESCAPE '\\'", f.column()))
            .collect::<Vec<_>>()
            .join(" OR ");
        let exact = fields
            .iter()
            .map(|f| format!("lower({}) = lower($2)", f.column()))
            .collect::<Vec<_>>()
            .join(" OR ");

        let limit = limit.unwrap_or(self.search_cap).clamp(1, self.search_cap);

        let sql = format!(
            "SELECT {CONTACT_COLUMNS} FROM people \
             WHERE ({predicate}) \
             ORDER BY CASE WHEN {exact} THEN 0 ELSE 1 END, {CONTACT_ORDER} \
             LIMIT $3"
        );

        Statement::new(
            labels::CONTACTS,
            sql,
            vec![
                SqlParam::Text(format!("%{}%", escape_like(query))),
                SqlParam::Text(query.to_string()),
                SqlParam::Int(limit as i64),
            ],
        )
    }

    /// Exact lookup by name (case-insensitive) or profile URL.
    ///
    /// A URL hit wins over a name hit; among equal names the lowest URL wins.
    fn get_profile(identifier: &str) -> Statement {
        let sql = format!(
            "SELECT {CONTACT_COLUMNS} FROM people \
             WHERE lower(full_name) = lower($1) OR linkedin_url = $1 \
             ORDER BY (linkedin_url = $1) DESC NULLS LAST, linkedin_url ASC NULLS LAST \
             LIMIT 1"
        );
        Statement::new(
            labels::PROFILE,
            sql,
            vec![SqlParam::Text(identifier.to_string())],
        )
    }

    /// Set intersection (`any`) or superset (`all`) over lowercased keywords.
    fn filter_by_keywords(
        keywords: &KeywordSet,
        match_mode: MatchMode,
        limit: Option<usize>,
    ) -> Statement {
        let mut params = vec![SqlParam::TextArray(keywords.as_slice().to_vec())];

        let mut sql = format!(
            "SELECT {CONTACT_COLUMNS} FROM people \
             WHERE ARRAY(SELECT lower(btrim(k)) FROM unnest(keywords) AS k) {} $1::text[] \
             ORDER BY {CONTACT_ORDER}",
            match_mode.array_operator()
        );
        if let Some(limit) = limit {
            sql.push_str(" LIMIT $2");
            params.push(SqlParam::Int(limit.max(1) as i64));
        }

        Statement::new(labels::CONTACTS, sql, params)
    }

    /// Overview counts plus three frequency rankings.
    fn analyze_network(&self) -> QueryPlan {
        let top_n = SqlParam::Int(self.top_n as i64);

        let overview = Statement::new(
            labels::OVERVIEW,
            "SELECT COUNT(*)::BIGINT AS total_contacts, \
             COUNT(DISTINCT NULLIF(btrim(current_company_name), ''))::BIGINT AS distinct_companies \
             FROM people",
            vec![],
        );

        // Each keyword counts once per contact even if repeated in the array
        let top_keywords = Statement::new(
            labels::TOP_KEYWORDS,
            "SELECT kw.value AS value, COUNT(*)::BIGINT AS count \
             FROM people AS p \
             CROSS JOIN LATERAL (SELECT DISTINCT lower(btrim(k)) AS value FROM unnest(p.keywords) AS k) AS kw \
             WHERE kw.value <> '' \
             GROUP BY 1 ORDER BY 2 DESC, 1 ASC LIMIT $1",
            vec![top_n.clone()],
        );

        let top_locations = Statement::new(
            labels::TOP_LOCATIONS,
            Self::ranking_sql("location"),
            vec![top_n.clone()],
        );

        let top_companies = Statement::new(
            labels::TOP_COMPANIES,
            Self::ranking_sql("current_company_name"),
            vec![top_n],
        );

        QueryPlan {
            statements: vec![overview, top_keywords, top_locations, top_companies],
        }
    }

    fn ranking_sql(column: &'static str) -> String {
        format!(
            "SELECT btrim({column}) AS value, COUNT(*)::BIGINT AS count \
             FROM people \
             WHERE {column} IS NOT NULL AND btrim({column}) <> '' \
             GROUP BY 1 ORDER BY 2 DESC, 1 ASC LIMIT $1"
        )
    }

    fn export_all() -> Statement {
        Statement::new(
            labels::CONTACTS,
            format!("SELECT {CONTACT_COLUMNS} FROM people ORDER BY {CONTACT_ORDER}"),
            vec![],
        )
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(50, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> QueryBuilder {
        QueryBuilder::new(50, 10)
    }

    fn search(query: &str, field: Option<SearchField>, limit: Option<usize>) -> Statement {
        let plan = builder().build(&ToolRequest::SearchNetwork {
            query: query.to_string(),
            field,
            limit,
        });
        plan.statements.into_iter().next().unwrap()
    }

    fn placeholder_count(sql: &str) -> usize {
        (1..=9).filter(|n| sql.contains(&format!("${}", n))).count()
    }

    #[test]
    fn test_search_all_fields_uses_or() {
        let stmt = search("acme", None, None);
        assert!(stmt.sql.contains("full_name ILIKE $1"));
        assert!(stmt.sql.contains("OR headline ILIKE $1"));
        assert!(stmt.sql.contains("OR current_company_name ILIKE $1"));
        assert_eq!(stmt.label, labels::CONTACTS);
    }

    #[test]
    fn test_search_single_field() {
        let stmt = search("acme", Some(SearchField::Company), None);
        assert!(stmt.sql.contains("current_company_name ILIKE $1"));
        assert!(!stmt.sql.contains("headline ILIKE"));
        assert!(!stmt.sql.contains("full_name ILIKE"));
    }

    #[test]
    fn test_search_binds_values_instead_of_interpolating() {
        let hostile = "x'; DROP TABLE people; --";
        let stmt = search(hostile, None, None);
        assert!(!stmt.sql.contains("DROP TABLE"));
        assert_eq!(stmt.params[0], SqlParam::Text(format!("%{}%", hostile)));
        assert_eq!(stmt.params[1], SqlParam::Text(hostile.to_string()));
        assert_eq!(placeholder_count(&stmt.sql), stmt.params.len());
    }

    #[test]
    fn test_search_escapes_wildcards() {
        let stmt = search("50%_off", None, None);
        assert_eq!(stmt.params[0], SqlParam::Text("%50\\%\\_off%".to_string()));
    }

    #[test]
    fn test_search_limit_is_capped() {
        assert_eq!(search("a", None, None).params[2], SqlParam::Int(50));
        assert_eq!(search("a", None, Some(10)).params[2], SqlParam::Int(10));
        assert_eq!(search("a", None, Some(500)).params[2], SqlParam::Int(50));
        assert_eq!(search("a", None, Some(0)).params[2], SqlParam::Int(1));
    }

    #[test]
    fn test_search_orders_exact_matches_first() {
        let stmt = search("Jane", Some(SearchField::Name), None);
        let order = stmt.sql.split("ORDER BY").nth(1).unwrap();
        assert!(order.starts_with(" CASE WHEN lower(full_name) = lower($2) THEN 0 ELSE 1 END"));
        assert!(order.contains("full_name ASC, linkedin_url ASC NULLS LAST"));
    }

    #[test]
    fn test_get_profile_orders_by_url() {
        let plan = builder().build(&ToolRequest::GetProfile {
            identifier: "John Doe".to_string(),
        });
        let stmt = &plan.statements[0];
        assert_eq!(stmt.label, labels::PROFILE);
        assert!(stmt.sql.contains("lower(full_name) = lower($1) OR linkedin_url = $1"));
        assert!(stmt.sql.contains("linkedin_url ASC NULLS LAST"));
        assert!(stmt.sql.ends_with("LIMIT 1"));
        assert_eq!(stmt.params, vec![SqlParam::Text("John Doe".to_string())]);
    }

    #[test]
    fn test_filter_any_and_all_operators() {
        let keywords =
            KeywordSet::new(vec!["founder".to_string(), "ai".to_string()]).unwrap();

        let any = builder().build(&ToolRequest::FilterByKeywords {
            keywords: keywords.clone(),
            match_mode: MatchMode::Any,
            limit: None,
        });
        assert!(any.statements[0].sql.contains("&& $1::text[]"));
        assert!(any.statements[0].sql.contains("lower(btrim(k))"));
        assert!(!any.statements[0].sql.contains("LIMIT"));

        let all = builder().build(&ToolRequest::FilterByKeywords {
            keywords,
            match_mode: MatchMode::All,
            limit: Some(5),
        });
        let stmt = &all.statements[0];
        assert!(stmt.sql.contains("@> $1::text[]"));
        assert!(stmt.sql.ends_with("LIMIT $2"));
        assert_eq!(
            stmt.params,
            vec![
                SqlParam::TextArray(vec!["ai".to_string(), "founder".to_string()]),
                SqlParam::Int(5),
            ]
        );
    }

    #[test]
    fn test_analyze_network_plan() {
        let plan = builder().build(&ToolRequest::AnalyzeNetwork);
        let names: Vec<_> = plan.statements.iter().map(|s| s.label).collect();
        assert_eq!(
            names,
            vec![
                labels::OVERVIEW,
                labels::TOP_KEYWORDS,
                labels::TOP_LOCATIONS,
                labels::TOP_COMPANIES
            ]
        );
        for stmt in &plan.statements[1..] {
            assert!(stmt.sql.contains("ORDER BY 2 DESC, 1 ASC"));
            assert_eq!(stmt.params, vec![SqlParam::Int(10)]);
        }
    }

    #[test]
    fn test_export_has_no_params() {
        let plan = builder().build(&ToolRequest::ExportNetworkCsv);
        assert!(plan.statements[0].params.is_empty());
        assert!(plan.statements[0].sql.contains("ORDER BY full_name ASC"));
    }
}
