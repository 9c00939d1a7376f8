//! Search request parameters
//!
//! A request is assembled in three layers, highest priority first:
//! 1. Per-call [`SearchParams`]
//! 2. Client-level [`SearchDefaults`]
//! 3. Built-in defaults (`gl=us`, `hl=en`, `page=1`, `num=10`, `autocorrect=true`)
//!
//! `q` only ever comes from the call.

use mcp_common::{FieldError, InvalidArguments};
use serde::Serialize;

pub const DEFAULT_COUNTRY: &str = "us";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_NUM: u32 = 10;
pub const DEFAULT_AUTOCORRECT: bool = true;

/// Per-call search parameters
///
/// Build one from a bare query with `"rust".into()`, or fill in any subset of
/// the optional fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    /// Search query
    pub q: String,
    pub autocorrect: Option<bool>,
    /// Country code
    pub gl: Option<String>,
    /// Interface language
    pub hl: Option<String>,
    /// 1-based result page
    pub page: Option<u32>,
    /// Results per page
    pub num: Option<u32>,
}

impl SearchParams {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Default::default()
        }
    }

    pub fn num(mut self, num: u32) -> Self {
        self.num = Some(num);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn locale(mut self, gl: impl Into<String>, hl: impl Into<String>) -> Self {
        self.gl = Some(gl.into());
        self.hl = Some(hl.into());
        self
    }

    pub fn autocorrect(mut self, autocorrect: bool) -> Self {
        self.autocorrect = Some(autocorrect);
        self
    }

    /// Merge over `defaults`, fill built-in defaults and validate
    pub fn resolve(self, defaults: &SearchDefaults) -> Result<SearchRequest, InvalidArguments> {
        defaults.merge(self).validate()
    }
}

impl From<&str> for SearchParams {
    fn from(q: &str) -> Self {
        Self::new(q)
    }
}

impl From<String> for SearchParams {
    fn from(q: String) -> Self {
        Self::new(q)
    }
}

/// Client-level defaults: every [`SearchParams`] field except `q`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchDefaults {
    pub autocorrect: Option<bool>,
    pub gl: Option<String>,
    pub hl: Option<String>,
    pub page: Option<u32>,
    pub num: Option<u32>,
}

impl SearchDefaults {
    /// Field-by-field merge; a field set on the call always wins
    pub fn merge(&self, call: SearchParams) -> SearchParams {
        SearchParams {
            q: call.q,
            autocorrect: call.autocorrect.or(self.autocorrect),
            gl: call.gl.or_else(|| self.gl.clone()),
            hl: call.hl.or_else(|| self.hl.clone()),
            page: call.page.or(self.page),
            num: call.num.or(self.num),
        }
    }
}

/// A fully populated request, exactly as posted to Serper
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub q: String,
    pub gl: String,
    pub hl: String,
    pub page: u32,
    pub num: u32,
    pub autocorrect: bool,
}

impl SearchParams {
    fn validate(self) -> Result<SearchRequest, InvalidArguments> {
        let mut errors = Vec::new();

        let page = self.page.unwrap_or(DEFAULT_PAGE);
        if page == 0 {
            errors.push(FieldError::new("page", "Number must be greater than 0"));
        }

        let num = self.num.unwrap_or(DEFAULT_NUM);
        if num == 0 {
            errors.push(FieldError::new("num", "Number must be greater than 0"));
        }

        if !errors.is_empty() {
            return Err(InvalidArguments { errors });
        }

        Ok(SearchRequest {
            q: self.q,
            gl: self.gl.unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            hl: self.hl.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            page,
            num,
            autocorrect: self.autocorrect.unwrap_or(DEFAULT_AUTOCORRECT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn locale_defaults() -> SearchDefaults {
        SearchDefaults {
            autocorrect: Some(true),
            gl: Some("us".to_string()),
            hl: Some("en".to_string()),
            page: Some(1),
            num: None,
        }
    }

    #[test]
    fn test_call_fields_override_defaults() {
        let request = SearchParams::new("cats")
            .num(5)
            .resolve(&locale_defaults())
            .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "q": "cats",
                "num": 5,
                "gl": "us",
                "hl": "en",
                "page": 1,
                "autocorrect": true
            })
        );
    }

    #[test]
    fn test_call_wins_field_by_field() {
        let defaults = SearchDefaults {
            gl: Some("de".to_string()),
            hl: Some("de".to_string()),
            num: Some(20),
            ..Default::default()
        };

        let request = SearchParams::new("bier")
            .locale("at", "de")
            .autocorrect(false)
            .resolve(&defaults)
            .unwrap();

        assert_eq!(request.gl, "at");
        assert_eq!(request.hl, "de");
        assert_eq!(request.num, 20);
        assert!(!request.autocorrect);
    }

    #[test]
    fn test_bare_query_gets_builtin_defaults() {
        let request = SearchParams::from("rust").resolve(&SearchDefaults::default()).unwrap();

        assert_eq!(
            request,
            SearchRequest {
                q: "rust".to_string(),
                gl: "us".to_string(),
                hl: "en".to_string(),
                page: 1,
                num: 10,
                autocorrect: true,
            }
        );
    }

    #[test]
    fn test_query_is_never_defaulted() {
        let merged = locale_defaults().merge(SearchParams::new(""));
        assert_eq!(merged.q, "");
    }

    #[test]
    fn test_zero_page_and_num_rejected() {
        let err = SearchParams::new("rust")
            .page(0)
            .num(0)
            .resolve(&SearchDefaults::default())
            .unwrap_err();

        assert!(err.mentions("page"));
        assert!(err.mentions("num"));
        assert_eq!(err.errors.len(), 2);
    }

    #[test]
    fn test_zero_default_rejected_unless_overridden() {
        let defaults = SearchDefaults {
            num: Some(0),
            ..Default::default()
        };
        assert!(SearchParams::new("rust").resolve(&defaults).is_err());
        assert!(SearchParams::new("rust").num(3).resolve(&defaults).is_ok());
    }
}
