use serde::{Deserialize, Serialize};

/// A named, normalized text to be aligned
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub content: String,
}

impl Document {
    pub fn new(id: String, content: String) -> Self {
        Self { id, content }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl From<(&str, &str)> for Document {
    fn from((id, content): (&str, &str)) -> Self {
        Self::new(id.to_string(), content.to_string())
    }
}

/// One row of a star alignment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlignedDocument {
    pub id: String,
    pub aligned: String,
}

impl AlignedDocument {
    pub fn new(id: String, aligned: String) -> Self {
        Self { id, aligned }
    }

    /// Number of alignment columns
    pub fn len(&self) -> usize {
        self.aligned.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned.is_empty()
    }

    /// The row with every `gap` removed
    pub fn ungapped(&self, gap: char) -> String {
        self.aligned.chars().filter(|&c| c != gap).collect()
    }
}
