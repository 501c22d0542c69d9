use std::fmt;

/// A GraphQL query stored server-side, addressed by endpoint and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRef {
    pub endpoint: String,
    pub name: String,
}

impl QueryRef {
    pub fn new(endpoint: &str, name: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for QueryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.endpoint, self.name)
    }
}

/// Scalar value of a persisted-query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{s}"),
            ParamValue::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

/// Ordered persisted-query parameters.
///
/// AEM expects parameters as `;name=value` path segments appended to the
/// query URL. Values are interpolated as-is, without escaping; that is the
/// wire format, not an oversight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(Vec<(String, ParamValue)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, value: impl Into<ParamValue>) {
        self.0.push((name.to_string(), value.into()));
    }

    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.push(name, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as `;name=value` segments, in insertion order.
    pub fn to_path_segments(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.0 {
            out.push_str(&format!(";{name}={value}"));
        }
        out
    }
}
