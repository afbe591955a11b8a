//! Free-text annotations attached to signal and pin rows.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Optional annotations for the HDL output and the constraint output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// Text attached to the HDL declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdl: Option<String>,
    /// Text attached to the XDC constraint block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xdc: Option<String>,
}

impl Comment {
    /// Creates a comment from its two optional parts.
    pub fn new(hdl: Option<&str>, xdc: Option<&str>) -> Self {
        Self {
            hdl: hdl.map(str::to_string),
            xdc: xdc.map(str::to_string),
        }
    }

    /// Creates a comment that applies the same text to both outputs.
    pub fn both(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            hdl: Some(text.clone()),
            xdc: Some(text),
        }
    }

    /// Returns the XDC annotation, treating an empty string as absent.
    pub fn xdc_text(&self) -> Option<&str> {
        self.xdc.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns the HDL annotation, treating an empty string as absent.
    pub fn hdl_text(&self) -> Option<&str> {
        self.hdl.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns `true` when neither annotation is present.
    pub fn is_empty(&self) -> bool {
        self.hdl.is_none() && self.xdc.is_none()
    }
}

/// Accepts `null`, a bare string (used for both outputs), or an object with
/// optional `hdl` and `xdc` keys.
impl<'de> Deserialize<'de> for Comment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CommentVisitor;

        impl<'de> Visitor<'de> for CommentVisitor {
            type Value = Comment;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("null, a string, or an object with 'hdl' or 'xdc'")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Comment::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Comment::default())
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                d.deserialize_any(self)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Comment::both(v))
            }

            fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut comment = Comment::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "hdl" => comment.hdl = map.next_value()?,
                        "xdc" => comment.xdc = map.next_value()?,
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                Ok(comment)
            }
        }

        deserializer.deserialize_any(CommentVisitor)
    }
}
