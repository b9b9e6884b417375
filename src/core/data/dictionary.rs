use crate::core::{DictError, Dict, FlatDict, flat_dict_with_limit};

/// The dictionary loaded from one locale file.
#[derive(Debug, Clone)]
pub struct LocaleDictionary {
    /// Locale code (e.g., "en", "zh").
    pub locale: String,
    /// File path of the dictionary file.
    pub file_path: String,
    pub dict: Dict,
}

impl LocaleDictionary {
    pub fn new(locale: impl Into<String>, file_path: impl Into<String>, dict: Dict) -> Self {
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            dict,
        }
    }

    /// Flatten the dictionary, bounding nesting at `max_depth`.
    pub fn flatten(&self, max_depth: usize) -> Result<FlatDict<'_>, DictError> {
        flat_dict_with_limit(&self.dict, max_depth)
    }
}
