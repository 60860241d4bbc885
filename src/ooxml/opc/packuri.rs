//! Part names.
//!
//! A part name is an absolute, slash-separated path inside the package, such
//! as `/ppt/slides/slide1.xml`. The zip member for it is the same path
//! without the leading slash.

use std::borrow::Borrow;
use std::fmt;

/// Part name of the package itself, the source of the package relationships.
pub const PACKAGE_URI: &str = "/";

/// Zip member holding the content type map.
pub const CONTENT_TYPES_MEMBER: &str = "[Content_Types].xml";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI(String);

impl PackURI {
    /// Wrap an absolute part name. Fails unless `uri` starts with `/`.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self, String> {
        let uri = uri.into();
        if uri.starts_with('/') {
            Ok(Self(uri))
        } else {
            Err(format!("part name must start with '/': {:?}", uri))
        }
    }

    /// The package pseudo-part `/`.
    pub fn package() -> Self {
        Self(PACKAGE_URI.to_string())
    }

    /// Resolve a relationship target against `base_uri`, the directory of the
    /// source part.
    ///
    /// `.` and `..` segments are collapsed; `..` at the root stays at the root.
    /// Targets that start with `/` ignore the base.
    pub fn resolve(base_uri: &str, target: &str) -> Self {
        let base = if target.starts_with('/') { "" } else { base_uri };

        let mut segments: Vec<&str> = Vec::new();
        for segment in base.split('/').chain(target.split('/')) {
            match segment {
                "" | "." => {},
                ".." => {
                    segments.pop();
                },
                name => segments.push(name),
            }
        }

        Self(format!("/{}", segments.join("/")))
    }

    /// Directory part of the name: `/ppt/slides` for `/ppt/slides/slide1.xml`,
    /// `/` for top-level names and for the package itself.
    pub fn base_uri(&self) -> &str {
        match self.0.rsplit_once('/') {
            Some((dir, _)) if !dir.is_empty() => dir,
            _ => PACKAGE_URI,
        }
    }

    /// Last path segment; empty for the package.
    pub fn filename(&self) -> &str {
        self.0.rsplit_once('/').map_or("", |(_, name)| name)
    }

    /// Extension of the filename without the dot, or `""`.
    pub fn extension(&self) -> &str {
        self.filename().rsplit_once('.').map_or("", |(_, ext)| ext)
    }

    /// The zip member name.
    #[inline]
    pub fn membername(&self) -> &str {
        self.0.strip_prefix('/').unwrap_or(&self.0)
    }

    /// Part name of the `.rels` part holding this part's relationships.
    pub fn rels_uri(&self) -> PackURI {
        let dir = match self.base_uri() {
            PACKAGE_URI => "",
            dir => dir,
        };
        Self(format!("{}/_rels/{}.rels", dir, self.filename()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackURI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackURI {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PackURI {
    fn borrow(&self) -> &str {
        &self.0
    }
}
