use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, de::DeserializeOwned};

/// Title used for embedded assets that carry none.
pub const ASSET_FALLBACK_TITLE: &str = "image";
/// Title used for embedded entries with neither a title nor an id.
pub const ENTRY_FALLBACK_TITLE: &str = "entry";

/// A field value that is either keyed by locale or stored plainly.
///
/// Deserialization tries the per-locale shape first: `{"en-US": "Title"}` is
/// `ByLocale`, while `"Title"` or `{"url": "//cdn/x.png"}` is `Plain`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Localized<T> {
    ByLocale(BTreeMap<String, T>),
    Plain(T),
}

impl<T> Localized<T> {
    /// The value for `locale`, or the plain value.
    ///
    /// A per-locale map without an entry for `locale` resolves to `None`.
    pub fn resolve(&self, locale: &str) -> Option<&T> {
        match self {
            Self::ByLocale(values) => values.get(locale),
            Self::Plain(value) => Some(value),
        }
    }
}

impl<T> From<T> for Localized<T> {
    fn from(value: T) -> Self {
        Self::Plain(value)
    }
}

/// Reads an optional field, treating a value of the wrong shape as absent so
/// one malformed payload doesn't reject the whole document.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            log::debug!("ignoring malformed field: {err}");
            Ok(None)
        }
    }
}

/// The `data` payload of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NodeData {
    /// Direct link target of a `hyperlink`.
    #[serde(default, deserialize_with = "lenient")]
    pub uri: Option<String>,
    /// Referenced entry or asset.
    #[serde(default, deserialize_with = "lenient")]
    pub target: Option<Target>,
}

/// A referenced entry or asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Target {
    #[serde(default, deserialize_with = "lenient")]
    pub sys: Option<Sys>,
    #[serde(default, deserialize_with = "lenient")]
    pub fields: Option<Fields>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sys {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Fields {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<Localized<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub file: Option<Localized<AssetFile>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AssetFile {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
}

impl NodeData {
    /// Payload with only a direct link target.
    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            target: None,
        }
    }

    /// Payload referencing `target`.
    pub fn with_target(target: Target) -> Self {
        Self {
            uri: None,
            target: Some(target),
        }
    }

    fn fields(&self) -> Option<&Fields> {
        self.target.as_ref()?.fields.as_ref()
    }

    /// Localized title of the referenced target.
    pub fn target_title(&self, locale: &str) -> Option<&str> {
        self.fields()?
            .title
            .as_ref()?
            .resolve(locale)
            .map(String::as_str)
    }

    /// Identifier of the referenced target.
    pub fn target_id(&self) -> Option<&str> {
        self.target.as_ref()?.sys.as_ref()?.id.as_deref()
    }

    /// File URL of the referenced asset, exactly as stored.
    pub fn file_url(&self, locale: &str) -> Option<&str> {
        self.fields()?
            .file
            .as_ref()?
            .resolve(locale)?
            .url
            .as_deref()
    }

    /// Display title of an embedded entry: title, then id, then `"entry"`.
    pub fn entry_title(&self, locale: &str) -> &str {
        self.target_title(locale)
            .or_else(|| self.target_id())
            .unwrap_or(ENTRY_FALLBACK_TITLE)
    }

    /// Display title of an embedded asset: title, then `"image"`.
    pub fn asset_title(&self, locale: &str) -> &str {
        self.target_title(locale).unwrap_or(ASSET_FALLBACK_TITLE)
    }
}

impl Target {
    /// An entry reference carrying only an id.
    pub fn entry(id: impl Into<String>) -> Self {
        Self {
            sys: Some(Sys {
                id: Some(id.into()),
            }),
            fields: None,
        }
    }

    /// An asset reference with a plain (non-localized) file URL and title.
    pub fn asset(url: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            sys: None,
            fields: Some(Fields {
                title: title.map(|t| Localized::Plain(t.to_string())),
                file: Some(Localized::Plain(AssetFile {
                    url: Some(url.into()),
                })),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn data_from(json: &str) -> NodeData {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn plain_title_and_file() {
        let data = data_from(
            r#"{"target": {"fields": {"title": "My Photo", "file": {"url": "//cdn/p.jpg"}}}}"#,
        );
        assert_eq!(data.target_title("en-US"), Some("My Photo"));
        assert_eq!(data.file_url("en-US"), Some("//cdn/p.jpg"));
    }

    #[test]
    fn localized_title_and_file() {
        let data = data_from(
            r#"{"target": {"fields": {
                "title": {"en-US": "Photo", "de-DE": "Foto"},
                "file": {"en-US": {"url": "//cdn/en.jpg", "fileName": "en.jpg"}}
            }}}"#,
        );
        assert_eq!(data.target_title("de-DE"), Some("Foto"));
        assert_eq!(data.target_title("en-US"), Some("Photo"));
        assert_eq!(data.file_url("en-US"), Some("//cdn/en.jpg"));
        assert_eq!(data.file_url("de-DE"), None);
    }

    #[test]
    fn plain_file_with_extra_fields() {
        let data = data_from(
            r#"{"target": {"fields": {"file": {
                "url": "https://cdn/x.png",
                "fileName": "x.png",
                "details": {"size": 12}
            }}}}"#,
        );
        assert_eq!(data.file_url("en-US"), Some("https://cdn/x.png"));
    }

    #[test]
    fn entry_title_fallback_chain() {
        let titled = data_from(r#"{"target": {"sys": {"id": "abc"}, "fields": {"title": "T"}}}"#);
        assert_eq!(titled.entry_title("en-US"), "T");

        let id_only = data_from(r#"{"target": {"sys": {"id": "abc"}}}"#);
        assert_eq!(id_only.entry_title("en-US"), "abc");

        let missing_locale =
            data_from(r#"{"target": {"sys": {"id": "abc"}, "fields": {"title": {"fr": "N"}}}}"#);
        assert_eq!(missing_locale.entry_title("en-US"), "abc");

        let empty = NodeData::default();
        assert_eq!(empty.entry_title("en-US"), ENTRY_FALLBACK_TITLE);
    }

    #[test]
    fn asset_title_ignores_id() {
        let data = data_from(r#"{"target": {"sys": {"id": "asset-1"}}}"#);
        assert_eq!(data.asset_title("en-US"), ASSET_FALLBACK_TITLE);
    }

    #[test]
    fn mistyped_fields_are_treated_as_absent() {
        let data = data_from(
            r#"{"uri": 7, "target": {"sys": {"id": "abc"}, "fields": {"title": 42, "file": "x"}}}"#,
        );
        assert_eq!(data.uri, None);
        assert_eq!(data.target_title("en-US"), None);
        assert_eq!(data.file_url("en-US"), None);
        assert_eq!(data.entry_title("en-US"), "abc");
    }

    #[test]
    fn mistyped_locale_value_is_treated_as_absent() {
        let data = data_from(r#"{"target": {"fields": {"title": {"en-US": 42}}}}"#);
        assert_eq!(data.asset_title("en-US"), ASSET_FALLBACK_TITLE);
    }

    #[test]
    fn empty_payload() {
        let data = data_from("{}");
        assert_eq!(data, NodeData::default());
        assert_eq!(data.file_url("en-US"), None);
        assert_eq!(data.target_id(), None);
    }
}
