use std::fmt;

use serde::{Deserialize, Serialize};

/// User-facing choice between the placeholder image and a versioned build.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ImageSelector {
    /// Use the public placeholder image.
    Default,
    /// Use the given tag from the private repository.
    Version(String),
}

impl ImageSelector {
    /// Interpret a raw version flag.
    ///
    /// The value equal to `sentinel` selects [`ImageSelector::Default`]; anything else is a version tag.
    pub fn parse(selector: &str, sentinel: &str) -> Self {
        if selector == sentinel {
            ImageSelector::Default
        } else {
            ImageSelector::Version(selector.to_string())
        }
    }

    /// Build the image reference for this selector.
    pub fn resolve(&self, repository: &str, public_image: &str) -> ImageRef {
        match self {
            ImageSelector::Default => ImageRef::Public {
                image: public_image.to_string(),
            },
            ImageSelector::Version(tag) => ImageRef::Repository {
                repository: repository.to_string(),
                tag: tag.clone(),
            },
        }
    }
}

/// Container image handed to the service provisioner.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageRef {
    /// Image pulled from a public registry by name.
    Public { image: String },
    /// Tagged image inside a caller-supplied repository.
    Repository { repository: String, tag: String },
}

impl ImageRef {
    /// Returns a short symbolic identifier, mainly for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ImageRef::Public { .. } => "public",
            ImageRef::Repository { .. } => "repository",
        }
    }

    /// Tag of a repository image, `None` for the public placeholder.
    pub fn tag(&self) -> Option<&str> {
        match self {
            ImageRef::Public { .. } => None,
            ImageRef::Repository { tag, .. } => Some(tag.as_str()),
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Public { image } => f.write_str(image),
            ImageRef::Repository { repository, tag } => write!(f, "{repository}:{tag}"),
        }
    }
}
