/// Generic search parameter passed to the resource store.
#[derive(Debug, Clone)]
pub struct SearchParam {
    pub name: String,
    pub value: String,
    pub modifier: Option<String>, // "exact", "contains", "missing", "not"
    pub prefix: Option<String>,   // "eq", "ne", "gt", "lt", "ge", "le"
}

/// Query against a single resource type. The store materializes the full
/// result set before returning, so an unset limit means "all matches".
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub params: Vec<SearchParam>,
    pub limit: Option<i64>,
    pub offset: i64,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.push(SearchParam {
            name: name.to_string(),
            value: value.to_string(),
            modifier: None,
            prefix: None,
        });
        self
    }

    pub fn with_prefixed_param(mut self, name: &str, prefix: &str, value: &str) -> Self {
        self.params.push(SearchParam {
            name: name.to_string(),
            value: value.to_string(),
            modifier: None,
            prefix: Some(prefix.to_string()),
        });
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}
