use crate::case::CasePolicy;
use crate::error::NormalizeError;

/// Options of a normalize call
///
/// Every field is optional when read from JSON (`{"camelizeKeys": false}`), the missing
/// ones taking their defaults:
///   - `camelizeKeys`: `true`
///   - `camelizeTypeValues`: `true`
///   - `filterEndpoint`: `true`, strip the query string off the endpoint key
///   - `endpoint`: none, no endpoint projection is built
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizeOptions {
    pub camelize_keys: bool,
    pub camelize_type_values: bool,
    pub filter_endpoint: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self { camelize_keys: true, camelize_type_values: true, filter_endpoint: true, endpoint: None }
    }
}

impl NormalizeOptions {
    pub fn from_json(s: &str) -> crate::Result<Self> {
        serde_json::from_str(s).map_err(NormalizeError::InvalidOptions)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn camelize_keys(mut self, camelize_keys: bool) -> Self {
        self.camelize_keys = camelize_keys;
        self
    }

    pub fn camelize_type_values(mut self, camelize_type_values: bool) -> Self {
        self.camelize_type_values = camelize_type_values;
        self
    }

    pub fn filter_endpoint(mut self, filter_endpoint: bool) -> Self {
        self.filter_endpoint = filter_endpoint;
        self
    }

    pub fn case_policy(&self) -> CasePolicy {
        CasePolicy { keys: self.camelize_keys, type_values: self.camelize_type_values }
    }

    /// The endpoint an endpoint projection is built for; an empty string counts as none.
    pub fn endpoint(&self) -> Option<&str> { self.endpoint.as_deref().filter(|e| !e.is_empty()) }

    /// The key the endpoint projection is stored under: the endpoint without its query
    /// string when `filter_endpoint` is set, the raw endpoint otherwise.
    pub fn endpoint_key(&self) -> Option<&str> {
        let endpoint = self.endpoint()?;
        if self.filter_endpoint {
            Some(strip_query(endpoint))
        } else {
            Some(endpoint)
        }
    }
}

/// `posts/me?page=2` -> `posts/me`
pub fn strip_query(endpoint: &str) -> &str {
    match endpoint.find('?') {
        Some(pos) => &endpoint[..pos],
        None => endpoint,
    }
}
