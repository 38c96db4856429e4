use serde::Deserialize;

use crate::error::Result;
use crate::news::Category;

#[derive(Debug, Default, Deserialize)]
pub struct NewsQuery {
    pub category: Option<String>,
}

impl NewsQuery {
    /// Missing or blank selects `general`.
    pub fn category(&self) -> Result<Category> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") => Ok(Category::default()),
            Some(raw) => Ok(raw.parse::<Category>()?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn defaults_to_general() {
        assert_eq!(NewsQuery::default().category().unwrap(), Category::General);
        let blank = NewsQuery {
            category: Some("  ".into()),
        };
        assert_eq!(blank.category().unwrap(), Category::General);
    }

    #[test]
    fn rejects_unknown_category() {
        let query = NewsQuery {
            category: Some("gossip".into()),
        };
        assert!(matches!(query.category(), Err(AppError::InvalidCategory(c)) if c == "gossip"));
    }
}
