//! Parsed embed block model

use crate::attrs::{attrs_from_json, AttributeMap};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Block name of the embed block handled by the renderer
pub const EMBED_BLOCK_NAME: &str = "core/embed";

/// A parsed block as produced by the block parser
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(default, deserialize_with = "lenient_string")]
    pub block_name: Option<String>,

    /// Block parsers encode "no attributes" as `[]`; any non-object is treated that way
    #[serde(default, deserialize_with = "lenient_attributes")]
    pub attrs: BlockAttributes,

    /// Original rendered content, returned unchanged when the block is not enhanced
    #[serde(default, rename = "innerHTML")]
    pub inner_html: String,
}

impl Block {
    #[must_use]
    pub fn is_embed(&self) -> bool {
        self.block_name.as_deref() == Some(EMBED_BLOCK_NAME)
    }
}

/// Embed block attributes
///
/// The well-known embed fields are typed; everything else (the media settings
/// overrides such as `muted` or `playButton`) is kept raw in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockAttributes {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,

    /// Embed type reported by oEmbed discovery (`video`, `rich`, ...)
    #[serde(
        default,
        rename = "type",
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub embed_type: Option<String>,

    #[serde(
        default,
        rename = "providerNameSlug",
        alias = "providerSlug",
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub provider_slug: Option<String>,

    #[serde(
        default,
        rename = "className",
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub class_name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BlockAttributes {
    #[must_use]
    pub fn new(url: impl Into<String>, provider_slug: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            provider_slug: Some(provider_slug.into()),
            ..Self::default()
        }
    }

    /// Builder-style setter for a raw override attribute
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Provider slug, or `fallback` when unset or empty
    #[must_use]
    pub fn provider_slug_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.provider_slug
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(fallback)
    }

    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    /// Scalar override attributes; `null` and non-scalar values are dropped
    #[must_use]
    pub fn overrides(&self) -> AttributeMap {
        attrs_from_json(&self.extra)
    }
}

/// Strings pass through; any other JSON value reads as unset
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn lenient_attributes<'de, D>(deserializer: D) -> Result<BlockAttributes, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(BlockAttributes::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::AttrValue;
    use serde_json::json;

    #[test]
    fn test_deserialize_block() {
        let block: Block = serde_json::from_value(json!({
            "blockName": "core/embed",
            "attrs": {
                "url": "https://www.youtube.com/watch?v=abc",
                "type": "video",
                "providerNameSlug": "youtube",
                "className": "is-style-wide",
                "muted": true,
                "responsive": true
            },
            "innerHTML": "<figure>original</figure>"
        }))
        .unwrap();

        assert!(block.is_embed());
        assert_eq!(block.attrs.embed_type.as_deref(), Some("video"));
        assert_eq!(block.attrs.provider_slug_or("video"), "youtube");
        assert_eq!(block.attrs.class_name.as_deref(), Some("is-style-wide"));
        assert_eq!(block.inner_html, "<figure>original</figure>");

        let overrides = block.attrs.overrides();
        assert_eq!(overrides.get("muted"), Some(&AttrValue::Flag(true)));
        assert!(!overrides.contains_key("url"));
    }

    #[test]
    fn test_provider_slug_alias_and_fallback() {
        let attrs: BlockAttributes =
            serde_json::from_value(json!({"providerSlug": "vimeo"})).unwrap();
        assert_eq!(attrs.provider_slug_or("video"), "vimeo");

        let attrs: BlockAttributes =
            serde_json::from_value(json!({"providerNameSlug": ""})).unwrap();
        assert_eq!(attrs.provider_slug_or("video"), "video");

        assert_eq!(BlockAttributes::default().provider_slug_or("rich"), "rich");
    }

    #[test]
    fn test_overrides_drop_non_scalars() {
        let attrs = BlockAttributes::default()
            .with("muted", true)
            .with("poster", json!(null))
            .with("tracks", json!([{"src": "a.vtt"}]));

        let overrides = attrs.overrides();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get("muted"), Some(&AttrValue::Flag(true)));
    }

    #[test]
    fn test_non_embed_block() {
        let block: Block =
            serde_json::from_value(json!({"blockName": "core/paragraph"})).unwrap();
        assert!(!block.is_embed());
        assert_eq!(block.attrs.url(), "");
    }

    #[test]
    fn test_attribute_less_blocks_in_mixed_array() {
        let blocks: Vec<Block> = serde_json::from_value(json!([
            {"blockName": "core/paragraph", "attrs": [], "innerHTML": "<p>x</p>"},
            {"blockName": null, "attrs": {}, "innerHTML": "\n\n"},
            {
                "blockName": "core/embed",
                "attrs": {"url": "https://vimeo.com/1", "type": "video", "providerNameSlug": "vimeo"},
                "innerHTML": "<figure>v</figure>"
            }
        ]))
        .unwrap();

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].attrs, BlockAttributes::default());
        assert_eq!(blocks[0].inner_html, "<p>x</p>");
        assert!(blocks[1].block_name.is_none());
        assert_eq!(blocks[2].attrs.url(), "https://vimeo.com/1");
    }

    #[test]
    fn test_non_string_typed_fields_read_as_unset() {
        let block: Block = serde_json::from_value(json!({
            "blockName": "core/embed",
            "attrs": {
                "url": 42,
                "type": ["video"],
                "providerNameSlug": null,
                "className": {"a": 1},
                "muted": true
            }
        }))
        .unwrap();

        assert!(block.attrs.url.is_none());
        assert!(block.attrs.embed_type.is_none());
        assert_eq!(block.attrs.provider_slug_or("video"), "video");
        assert!(block.attrs.class_name.is_none());
        assert_eq!(block.attrs.overrides().get("muted"), Some(&AttrValue::Flag(true)));
    }

    #[test]
    fn test_scalar_attrs_read_as_empty() {
        let block: Block =
            serde_json::from_value(json!({"blockName": "core/embed", "attrs": "oops"})).unwrap();
        assert_eq!(block.attrs, BlockAttributes::default());
    }
}
