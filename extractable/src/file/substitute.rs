//! File substitute markers.

/// Metadata marker standing in for a native file object.
///
/// Platforms without file handles (mobile clients, mainly) describe a local
/// resource with three strings — a URI, a display name, and a content-type
/// label — and feed that marker through the same extraction pipeline as a
/// real file. The marker has no behavior: fields are stored verbatim at
/// construction, with no validation, and are read-only afterwards. Callers
/// needing stricter guarantees wrap the constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct FileSubstitute {
    uri: String,
    name: String,
    // Serialized as "type", the field name mobile transports use.
    #[cfg_attr(feature = "json", serde(rename = "type"))]
    content_type: String,
}

impl FileSubstitute {
    /// Creates a marker from its three fields, stored verbatim.
    #[must_use]
    pub fn new(
        uri: impl Into<String>,
        name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
            content_type: content_type.into(),
        }
    }

    /// The resource URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The content-type label.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }
}

#[cfg(test)]
mod tests {
    use super::FileSubstitute;

    #[test]
    fn fields_are_stored_verbatim() {
        let substitute = FileSubstitute::new("file:///tmp/a.txt", "a.txt", "text/plain");
        assert_eq!(substitute.uri(), "file:///tmp/a.txt");
        assert_eq!(substitute.name(), "a.txt");
        assert_eq!(substitute.content_type(), "text/plain");
    }

    #[test]
    fn no_validation_is_applied() {
        let substitute = FileSubstitute::new("", "", "not a/mime//type");
        assert_eq!(substitute.uri(), "");
        assert_eq!(substitute.name(), "");
        assert_eq!(substitute.content_type(), "not a/mime//type");
    }
}
