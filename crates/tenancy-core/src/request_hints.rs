/// Read access to the parts of an inbound request that may carry a tenant hint.
///
/// Implemented by whatever the HTTP layer uses to represent requests.
pub trait TenantHints {
    /// First value of the query parameter `name`, matched exactly.
    fn query_param(&self, name: &str) -> Option<&str>;

    /// Value of the header `name`, matched case-insensitively.
    fn header(&self, name: &str) -> Option<&str>;
}

/// Owned query parameters and headers, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHints {
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl RequestHints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl TenantHints for RequestHints {
    fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
