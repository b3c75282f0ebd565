use clap::ValueEnum;
use std::fmt;

/// Identity profile controlling the outbound `User-Agent` header
///
/// Each profile maps to a fixed browser identity string, so the request
/// looks like an ordinary page load from that class of device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IdentityProfile {
    #[default]
    Desktop,
    Mobile,
    Tablet,
}

impl IdentityProfile {
    /// Returns the `User-Agent` string sent for this profile
    pub fn user_agent(&self) -> &'static str {
        match self {
            Self::Desktop => {
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
            }
            Self::Mobile => {
                "Mozilla/5.0 (iPhone; CPU iPhone OS 14_6 like Mac OS X) AppleWebKit/605.1.15 \
                 (KHTML, like Gecko) Version/14.1.1 Mobile/15E148 Safari/604.1"
            }
            Self::Tablet => {
                "Mozilla/5.0 (iPad; CPU OS 13_2 like Mac OS X) AppleWebKit/605.1.15 \
                 (KHTML, like Gecko) CriOS/91.0.4472.77 Mobile/15E148 Safari/604.1"
            }
        }
    }
}

impl fmt::Display for IdentityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Desktop => f.write_str("desktop"),
            Self::Mobile => f.write_str("mobile"),
            Self::Tablet => f.write_str("tablet"),
        }
    }
}

/// Tags the text extractor may target
///
/// This is the full vocabulary; a scrape selects an ordered subset of it
/// (see [`default_tags`] for the usual selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum TargetTag {
    P,
    H1,
    H2,
    H3,
    H4,
    Span,
    Li,
    Div,
}

impl TargetTag {
    /// Returns the tag name as used in selectors and result rows
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P => "p",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::Span => "span",
            Self::Li => "li",
            Self::Div => "div",
        }
    }
}

impl fmt::Display for TargetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The default tag selection for text extraction
pub fn default_tags() -> Vec<TargetTag> {
    vec![TargetTag::P, TargetTag::H1, TargetTag::H2]
}

/// Per-invocation options for one scrape
///
/// There is no configuration file; everything is supplied per call.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Target URL as given by the caller (scheme optional)
    pub url: String,

    /// Identity profile for the outbound request
    pub profile: IdentityProfile,

    /// Ordered tag selection for the text extractor
    pub tags: Vec<TargetTag>,
}

impl ScrapeOptions {
    /// Creates options for a URL with the default profile and tag selection
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            profile: IdentityProfile::default(),
            tags: default_tags(),
        }
    }
}
