use std::fmt::Display;

/// A single GET request to one upstream endpoint: a path relative to the API
/// base plus the query parameters to send with it.
///
/// Parameters are kept in insertion order so the constructed query string is
/// deterministic. Entries are only ever added for values that are actually
/// present; the upstream API distinguishes an absent parameter from an empty
/// one on some endpoints.
pub struct Request {
    pub path: String,
    pub query_params: Vec<(String, String)>,
}

impl Request {
    /// `path` is relative to the API base, without a leading slash,
    /// e.g. `"animal/dog"` or `"canvas/triggered"`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query_params: Vec::new(),
        }
    }

    /// Append a query parameter. Any scalar that formats through `Display`
    /// is accepted; `0`, `false` and `""` are sent like any other value.
    pub fn with_query(mut self, key: &str, value: impl Display) -> Self {
        self.query_params.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter only when a value is present. `None` leaves
    /// the query string untouched.
    pub fn with_query_opt(self, key: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.with_query(key, value),
            None => self,
        }
    }

    /// Forward the client token as the `key` parameter, if one was
    /// configured. Only call sites for token-capable endpoints use this;
    /// other endpoints reject unexpected parameters.
    pub fn with_key(self, token: Option<&str>) -> Self {
        self.with_query_opt("key", token)
    }
}
