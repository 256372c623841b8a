use std::fmt;

use strum::Display;

/// Names of the cached queries.
///
/// Invalidation works at tag granularity: marking a tag stale touches every
/// cached entry issued under it, whatever its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum QueryTag {
    Users,
    SearchedUsers,
    UserById,
    RecentPosts,
    PostById,
    UserPosts,
    SearchPosts,
    SavedPosts,
    LikedPosts,
    RoomMessages,
}

/// Cache key: a tag plus the parameter the query was issued with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub tag: QueryTag,
    pub param: Option<String>,
}

impl QueryKey {
    /// Key for a query without parameters.
    #[must_use]
    pub fn of(tag: QueryTag) -> Self {
        Self { tag, param: None }
    }

    /// Key for a query parameterized by an id or search term.
    #[must_use]
    pub fn with_param(tag: QueryTag, param: impl Into<String>) -> Self {
        Self {
            tag,
            param: Some(param.into()),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Some(param) => write!(f, "{}:{}", self.tag, param),
            None => write!(f, "{}", self.tag),
        }
    }
}
