//! Record-store REST client
//!
//! Thin client for the hosted record store's PostgREST-dialect API.
//! Repositories build a [`ListQuery`] and decode typed rows; pagination
//! totals come from the `Content-Range` response header when an exact
//! count is requested.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_RANGE, RANGE};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{RepoError, RepoResult};

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Declarative list query: equality filters, an optional or-group for
/// free-text search, ordering, and an inclusive row range.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    select: Option<String>,
    filters: Vec<(String, String)>,
    or_group: Option<String>,
    order: Option<(String, SortDirection)>,
    range: Option<(usize, usize)>,
    count_exact: bool,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Columns (or embedded resources) to select; defaults to `*`
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.select = Some(columns.into());
        self
    }

    /// Equality filter on a column
    pub fn eq(mut self, column: &str, value: impl Into<String>) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.into())));
        self
    }

    /// Raw filter expression on a column, e.g. `in.(a,b,c)`
    pub fn filter(mut self, column: &str, expression: impl Into<String>) -> Self {
        self.filters.push((column.to_string(), expression.into()));
        self
    }

    /// Case-insensitive substring search across the given columns,
    /// combined as a single or-group
    pub fn search(mut self, columns: &[&str], term: &str) -> Self {
        // Commas and parens are reserved in filter syntax; strip them from
        // the term rather than erroring on user input.
        let sanitized: String = term
            .chars()
            .filter(|c| !matches!(c, ',' | '(' | ')'))
            .collect();
        let parts: Vec<String> = columns
            .iter()
            .map(|c| format!("{}.ilike.*{}*", c, sanitized))
            .collect();
        self.or_group = Some(format!("({})", parts.join(",")));
        self
    }

    /// Order by a column
    pub fn order(mut self, column: &str, direction: SortDirection) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    /// Page expressed as 1-based page number and page size; requests an
    /// exact total count alongside the rows
    pub fn page(mut self, page: usize, page_size: usize) -> Self {
        let offset = (page.max(1) - 1) * page_size;
        self.range = Some((offset, offset + page_size - 1));
        self.count_exact = true;
        self
    }

    /// Render the query-string pairs (exposed for tests)
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        params.push((
            "select".to_string(),
            self.select.clone().unwrap_or_else(|| "*".to_string()),
        ));
        for (column, expression) in &self.filters {
            params.push((column.clone(), expression.clone()));
        }
        if let Some(group) = &self.or_group {
            params.push(("or".to_string(), group.clone()));
        }
        if let Some((column, direction)) = &self.order {
            params.push((
                "order".to_string(),
                format!("{}.{}", column, direction.as_str()),
            ));
        }
        params
    }

    fn range_header(&self) -> Option<String> {
        self.range.map(|(from, to)| format!("{}-{}", from, to))
    }
}

/// Rows plus the exact total reported by the backend (when requested)
#[derive(Debug)]
pub struct ListResult<T> {
    pub rows: Vec<T>,
    pub total: Option<u64>,
}

/// Parse the total row count out of a `Content-Range` header value,
/// e.g. `0-19/42` or `*/42`
pub(crate) fn parse_content_range_total(value: &str) -> Option<u64> {
    let total = value.rsplit('/').next()?;
    total.parse().ok()
}

/// Client for the record store's table API
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(key) = HeaderValue::from_str(&self.api_key) {
            headers.insert("apikey", key);
        }
        if let Ok(bearer) = HeaderValue::from_str(&format!("Bearer {}", self.api_key)) {
            headers.insert(reqwest::header::AUTHORIZATION, bearer);
        }
        headers
    }

    /// List rows matching the query
    pub async fn list<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &ListQuery,
    ) -> RepoResult<ListResult<T>> {
        let mut headers = self.auth_headers();
        if let Some(range) = query.range_header() {
            headers.insert(
                RANGE,
                HeaderValue::from_str(&range)
                    .map_err(|e| RepoError::Backend(format!("Invalid range header: {}", e)))?,
            );
            if query.count_exact {
                headers.insert("Prefer", HeaderValue::from_static("count=exact"));
            }
        }

        let response = self
            .http
            .get(self.table_url(table))
            .headers(headers)
            .query(&query.to_params())
            .send()
            .await?;

        let status = response.status();
        let total = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RepoError::Backend(format!(
                "List {} failed ({}): {}",
                table, status, body
            )));
        }

        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| RepoError::Decode(format!("Failed to decode {} rows: {}", table, e)))?;

        Ok(ListResult { rows, total })
    }

    /// Fetch a single row by id; `Ok(None)` when the row does not exist
    pub async fn get_by_id<T: DeserializeOwned>(
        &self,
        table: &str,
        select: &str,
        id: &str,
    ) -> RepoResult<Option<T>> {
        let mut headers = self.auth_headers();
        headers.insert(
            "Accept",
            HeaderValue::from_static("application/vnd.pgrst.object+json"),
        );

        let response = self
            .http
            .get(self.table_url(table))
            .headers(headers)
            .query(&[
                ("select", select.to_string()),
                ("id", format!("eq.{}", id)),
            ])
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_ACCEPTABLE | StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let row: T = response.json().await.map_err(|e| {
                    RepoError::Decode(format!("Failed to decode {} row: {}", table, e))
                })?;
                Ok(Some(row))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(RepoError::Backend(format!(
                    "Get {} {} failed ({}): {}",
                    table, id, status, body
                )))
            }
        }
    }

    /// Insert a row and return the created representation
    pub async fn create<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        body: &B,
    ) -> RepoResult<T> {
        let mut headers = self.auth_headers();
        headers.insert(
            "Prefer",
            HeaderValue::from_static("return=representation"),
        );
        headers.insert(
            "Accept",
            HeaderValue::from_static("application/vnd.pgrst.object+json"),
        );

        let response = self
            .http
            .post(self.table_url(table))
            .headers(headers)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(RepoError::Backend(format!(
                "Create {} failed ({}): {}",
                table, status, text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| RepoError::Decode(format!("Failed to decode created {}: {}", table, e)))
    }

    /// Partial update by id; fields the DTO serializes as absent are left
    /// unchanged server-side, explicit nulls clear values
    pub async fn update<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        id: &str,
        body: &B,
    ) -> RepoResult<T> {
        let mut headers = self.auth_headers();
        headers.insert(
            "Prefer",
            HeaderValue::from_static("return=representation"),
        );
        headers.insert(
            "Accept",
            HeaderValue::from_static("application/vnd.pgrst.object+json"),
        );

        let response = self
            .http
            .patch(self.table_url(table))
            .headers(headers)
            .query(&[("id", format!("eq.{}", id))])
            .json(body)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_ACCEPTABLE | StatusCode::NOT_FOUND => {
                Err(RepoError::NotFound(format!("{} {}", table, id)))
            }
            status if status.is_success() => response.json().await.map_err(|e| {
                RepoError::Decode(format!("Failed to decode updated {}: {}", table, e))
            }),
            status => {
                let text = response.text().await.unwrap_or_default();
                Err(RepoError::Backend(format!(
                    "Update {} {} failed ({}): {}",
                    table, id, status, text
                )))
            }
        }
    }

    /// Delete a row by id
    pub async fn delete(&self, table: &str, id: &str) -> RepoResult<()> {
        let response = self
            .http
            .delete(self.table_url(table))
            .headers(self.auth_headers())
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(RepoError::Backend(format!(
                "Delete {} {} failed ({}): {}",
                table, id, status, text
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_renders_filters_in_order() {
        let query = ListQuery::new()
            .select("*,main_category_data:categories!main_category(id,name,slug)")
            .eq("main_category", "cat-1")
            .search(&["name", "description"], "mug")
            .order("created_at", SortDirection::Desc)
            .page(2, 20);

        let params = query.to_params();
        assert_eq!(
            params[0],
            (
                "select".to_string(),
                "*,main_category_data:categories!main_category(id,name,slug)".to_string()
            )
        );
        assert!(params.contains(&("main_category".to_string(), "eq.cat-1".to_string())));
        assert!(params.contains(&(
            "or".to_string(),
            "(name.ilike.*mug*,description.ilike.*mug*)".to_string()
        )));
        assert!(params.contains(&("order".to_string(), "created_at.desc".to_string())));
        assert_eq!(query.range_header().as_deref(), Some("20-39"));
    }

    #[test]
    fn search_strips_reserved_characters() {
        let query = ListQuery::new().search(&["name"], "a,b(c)");
        let params = query.to_params();
        assert!(params.contains(&("or".to_string(), "(name.ilike.*abc*)".to_string())));
    }

    #[test]
    fn page_one_starts_at_offset_zero() {
        let query = ListQuery::new().page(1, 20);
        assert_eq!(query.range_header().as_deref(), Some("0-19"));
    }

    #[test]
    fn parses_content_range_totals() {
        assert_eq!(parse_content_range_total("0-19/42"), Some(42));
        assert_eq!(parse_content_range_total("*/5"), Some(5));
        assert_eq!(parse_content_range_total("*/*"), None);
        assert_eq!(parse_content_range_total("garbage"), None);
    }
}
