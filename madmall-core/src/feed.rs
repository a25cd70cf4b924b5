/// CMS feed stub.
///
/// No CMS is wired up yet; pages that list blog posts or legal pages get
/// an empty snapshot with the expected shape.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostCollection {
    pub items: Vec<FeedItem>,
    pub item: Option<FeedItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogSection {
    pub posts: PostCollection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegalPages {
    pub items: Vec<FeedItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    pub blog: BlogSection,
    pub legal_pages: LegalPages,
}

impl FeedSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_feed_shape() {
        let json = serde_json::to_value(FeedSnapshot::empty()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "blog": { "posts": { "items": [], "item": null } },
                "legalPages": { "items": [] }
            })
        );
    }
}
