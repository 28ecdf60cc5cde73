/// Options for render-plan and plain-text conversion.
///
/// # Examples
///
/// ```rust
/// use richtext_plan_engine::PlanOptions;
///
/// let options = PlanOptions::new()
///     .with_locale("de-DE")
///     .with_protocol_relative_scheme("http:");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOptions {
    /// Locale key used when a field is stored per locale.
    pub locale: String,
    /// Prepended to protocol-relative (`//host/...`) asset URLs.
    pub protocol_relative_scheme: String,
}

impl PlanOptions {
    pub const DEFAULT_LOCALE: &'static str = "en-US";
    pub const DEFAULT_PROTOCOL_RELATIVE_SCHEME: &'static str = "https:";

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[inline]
    pub fn with_protocol_relative_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.protocol_relative_scheme = scheme.into();
        self
    }

    /// Absolute form of an asset URL.
    pub fn absolute_url(&self, url: &str) -> String {
        if url.starts_with("//") {
            format!("{}{url}", self.protocol_relative_scheme)
        } else {
            url.to_string()
        }
    }
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            locale: Self::DEFAULT_LOCALE.to_string(),
            protocol_relative_scheme: Self::DEFAULT_PROTOCOL_RELATIVE_SCHEME.to_string(),
        }
    }
}
