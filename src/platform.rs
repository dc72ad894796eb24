//! The closed platform set and its publishing rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Destination platforms, declared in generation priority order:
/// short-form first, long-form last. `Ord` follows that order, so a
/// `BTreeMap` keyed by `Platform` iterates in cycle order.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Microblog,
    Caption,
    Blog,
}

/// How a generated image rides along when publishing to a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAttachment {
    /// Platform takes text only.
    None,
    /// Platform uploads from a local file, referenced by storage path.
    LocalPath,
    /// Platform embeds a fetchable url.
    RemoteUrl,
}

impl Platform {
    /// Every platform, in generation priority order.
    pub const ALL: [Platform; 3] = [Platform::Microblog, Platform::Caption, Platform::Blog];

    /// Identifier used on the wire and in backend content maps.
    pub fn wire_id(&self) -> &'static str {
        match self {
            Platform::Microblog => "microblog",
            Platform::Caption => "caption",
            Platform::Blog => "blog",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Microblog => "Microblog",
            Platform::Caption => "Caption",
            Platform::Blog => "Blog",
        }
    }

    /// Hard character limit enforced by the destination, if any.
    pub fn char_limit(&self) -> Option<usize> {
        match self {
            Platform::Microblog => Some(280),
            Platform::Caption => Some(2200),
            Platform::Blog => None,
        }
    }

    /// Fixed attachment rule: captions upload the local file, blog posts
    /// embed the url, microblog posts go out as text only.
    pub fn image_attachment(&self) -> ImageAttachment {
        match self {
            Platform::Microblog => ImageAttachment::None,
            Platform::Caption => ImageAttachment::LocalPath,
            Platform::Blog => ImageAttachment::RemoteUrl,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_id())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "microblog" => Ok(Platform::Microblog),
            "caption" => Ok(Platform::Caption),
            "blog" => Ok(Platform::Blog),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

/// Voice requested for a generation cycle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Casual,
    Reflective,
    Technical,
    Humorous,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tone::Casual => "casual",
            Tone::Reflective => "reflective",
            Tone::Technical => "technical",
            Tone::Humorous => "humorous",
        };
        f.write_str(name)
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "casual" => Ok(Tone::Casual),
            "reflective" => Ok(Tone::Reflective),
            "technical" => Ok(Tone::Technical),
            "humorous" => Ok(Tone::Humorous),
            other => Err(format!("unknown tone: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order_is_short_form_first() {
        assert!(Platform::Microblog < Platform::Caption);
        assert!(Platform::Caption < Platform::Blog);
        assert_eq!(
            Platform::ALL.to_vec(),
            vec![Platform::Microblog, Platform::Caption, Platform::Blog]
        );
    }

    #[test]
    fn attachment_rules_are_fixed() {
        assert_eq!(Platform::Microblog.image_attachment(), ImageAttachment::None);
        assert_eq!(Platform::Caption.image_attachment(), ImageAttachment::LocalPath);
        assert_eq!(Platform::Blog.image_attachment(), ImageAttachment::RemoteUrl);
    }

    #[test]
    fn char_limits_match_destinations() {
        assert_eq!(Platform::Microblog.char_limit(), Some(280));
        assert_eq!(Platform::Caption.char_limit(), Some(2200));
        assert_eq!(Platform::Blog.char_limit(), None);
    }

    #[test]
    fn platform_round_trips_through_wire_id() {
        for platform in Platform::ALL {
            assert_eq!(platform.wire_id().parse::<Platform>(), Ok(platform));
        }
        assert!("linkedin".parse::<Platform>().is_err());
    }

    #[test]
    fn tone_parses_case_insensitively() {
        assert_eq!("Casual".parse::<Tone>(), Ok(Tone::Casual));
        assert_eq!("TECHNICAL".parse::<Tone>(), Ok(Tone::Technical));
        assert!("sarcastic".parse::<Tone>().is_err());
    }

    #[test]
    fn wire_serialization_is_lowercase() {
        assert_eq!(serde_json::to_string(&Platform::Microblog).unwrap(), "\"microblog\"");
        assert_eq!(serde_json::to_string(&Tone::Reflective).unwrap(), "\"reflective\"");
    }
}
