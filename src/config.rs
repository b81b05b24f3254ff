//! Page-level configuration: API prefix, CSRF token and employee context.
//!
//! The server-rendered employee page hands everything over through `data-*`
//! attributes on the mount element and a `<meta name="csrf-token">` tag.
//! Parsing is split from DOM access so the rules are testable natively.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_PREFIX: &str = "/rrhh";
pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const CSRF_META_NAME: &str = "csrf-token";
pub const MOUNT_ELEMENT_ID: &str = "legajo-app";
pub const ATTR_EMPLOYEE_ID: &str = "data-empleado-id";
pub const ATTR_ROLE: &str = "data-rol";
pub const ATTR_API_PREFIX: &str = "data-api-prefix";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("mount element #{0} not found")]
    MissingMountElement(String),
    #[error("missing employee id attribute")]
    MissingEmployeeId,
    #[error("invalid employee id: {0}")]
    InvalidEmployeeId(String),
    #[error("browser document not available")]
    NoDocument,
}

/// Who is looking at the record.
///
/// Only hides or shows controls; the server validates every mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    /// HR staff: may approve or reject pending items.
    Privileged,
    /// The employee viewing their own record.
    #[default]
    SelfService,
}

impl Role {
    /// Parse the `data-rol` attribute. Unknown or missing values fall back
    /// to [`Role::SelfService`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|r| r.trim().to_ascii_lowercase()).as_deref() {
            Some("rrhh" | "admin" | "privileged") => Self::Privileged,
            _ => Self::SelfService,
        }
    }

    pub fn is_privileged(self) -> bool {
        matches!(self, Self::Privileged)
    }
}

/// Employee whose record is displayed, fixed for the page lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmployeeContext {
    pub employee_id: i64,
    pub role: Role,
}

impl EmployeeContext {
    /// Build the context from raw attribute values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the id is missing, not numeric, or not
    /// positive.
    pub fn from_attributes(employee_id: Option<&str>, role: Option<&str>) -> Result<Self, ConfigError> {
        let raw = employee_id.map(str::trim).filter(|v| !v.is_empty()).ok_or(ConfigError::MissingEmployeeId)?;
        let employee_id = raw
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidEmployeeId(raw.to_owned()))?;
        if employee_id <= 0 {
            return Err(ConfigError::InvalidEmployeeId(raw.to_owned()));
        }
        Ok(Self { employee_id, role: Role::parse(role) })
    }
}

/// Transport-level settings shared by every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Path prefix for every endpoint, without a trailing slash.
    pub api_prefix: String,
    /// Token sent in [`CSRF_HEADER`] on mutating requests.
    pub csrf_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_prefix: DEFAULT_API_PREFIX.to_owned(), csrf_token: None }
    }
}

impl ClientConfig {
    /// Normalize raw page values: blank prefix means the default, trailing
    /// slashes are dropped, blank tokens are ignored.
    pub fn new(api_prefix: Option<&str>, csrf_token: Option<&str>) -> Self {
        let api_prefix = match api_prefix.map(|p| p.trim().trim_end_matches('/')) {
            Some(p) if !p.is_empty() => {
                if p.starts_with('/') || p.contains("://") {
                    p.to_owned()
                } else {
                    format!("/{p}")
                }
            }
            _ => DEFAULT_API_PREFIX.to_owned(),
        };
        let csrf_token = csrf_token.map(str::trim).filter(|t| !t.is_empty()).map(str::to_owned);
        Self { api_prefix, csrf_token }
    }
}

/// Read configuration and context from the live document.
///
/// # Errors
///
/// Returns [`ConfigError`] when the mount element or employee id is absent.
#[cfg(feature = "csr")]
pub fn read_from_document() -> Result<(ClientConfig, EmployeeContext), ConfigError> {
    let document = web_sys::window().and_then(|w| w.document()).ok_or(ConfigError::NoDocument)?;
    let mount = document
        .get_element_by_id(MOUNT_ELEMENT_ID)
        .ok_or_else(|| ConfigError::MissingMountElement(MOUNT_ELEMENT_ID.to_owned()))?;

    let context = EmployeeContext::from_attributes(
        mount.get_attribute(ATTR_EMPLOYEE_ID).as_deref(),
        mount.get_attribute(ATTR_ROLE).as_deref(),
    )?;

    let token = document
        .query_selector(&format!("meta[name=\"{CSRF_META_NAME}\"]"))
        .unwrap_or(None)
        .and_then(|meta| meta.get_attribute("content"));
    let config = ClientConfig::new(mount.get_attribute(ATTR_API_PREFIX).as_deref(), token.as_deref());

    Ok((config, context))
}
