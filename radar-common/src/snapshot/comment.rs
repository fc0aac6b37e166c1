use serde::{Deserialize, Serialize};

/// Comment thread node; replies nest inline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub article_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    pub content: String,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Number of nodes in this thread, including self
    pub fn thread_size(&self) -> usize {
        1 + self.replies.iter().map(Comment::thread_size).sum::<usize>()
    }
}
