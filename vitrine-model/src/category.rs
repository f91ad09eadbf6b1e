use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Closed set of categories a catalog entry can fall into.
///
/// The wire names are part of the public HTTP contract: documents travel as
/// `"doc"`, everything else uses its lowercase variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaCategory {
    /// Still images
    Image,
    /// Video containers
    Video,
    /// Office documents, PDFs and plain text
    #[cfg_attr(feature = "serde", serde(rename = "doc"))]
    Document,
    /// Anything the classifier does not recognise
    Other,
}

impl MediaCategory {
    pub fn all() -> &'static [MediaCategory] {
        use MediaCategory::*;
        &[Image, Video, Document, Other]
    }

    /// Name used on the wire and in query strings.
    pub fn api_name(&self) -> &'static str {
        match self {
            MediaCategory::Image => "image",
            MediaCategory::Video => "video",
            MediaCategory::Document => "doc",
            MediaCategory::Other => "other",
        }
    }

    /// Singular badge label for a card.
    pub fn label(&self) -> &'static str {
        match self {
            MediaCategory::Image => "Image",
            MediaCategory::Video => "Video",
            MediaCategory::Document => "Document",
            MediaCategory::Other => "Other",
        }
    }
}

impl Display for MediaCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl Display for UnknownCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unknown media category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for MediaCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" | "images" => Ok(MediaCategory::Image),
            "video" | "videos" => Ok(MediaCategory::Video),
            "doc" | "docs" | "document" | "documents" => {
                Ok(MediaCategory::Document)
            }
            "other" => Ok(MediaCategory::Other),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}
