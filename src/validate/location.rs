//! Structural locations: where in the tree a fact was observed.

use serde::Serialize;

/// One step of a [`Location`]: a field name or a list index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(&'static str),
    Index(usize),
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(i) => write!(f, "{}", i),
        }
    }
}

/// Ordered path from the questionnaire root, e.g. `questions.0.cases.1.questions.2.id`.
///
/// Serialized as a flat array of field names and indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Location {
    segments: Vec<PathSegment>,
}

impl Location {
    pub fn root() -> Self {
        Location::default()
    }

    /// A new location with `name` appended.
    pub fn field(&self, name: &'static str) -> Self {
        self.with(PathSegment::Field(name))
    }

    /// A new location with `index` appended.
    pub fn index(&self, index: usize) -> Self {
        self.with(PathSegment::Index(index))
    }

    fn with(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Location { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl<const N: usize> From<[PathSegment; N]> for Location {
    fn from(segments: [PathSegment; N]) -> Self {
        Location {
            segments: segments.to_vec(),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
