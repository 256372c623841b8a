use strum::{Display, EnumIter};

use super::keys::QueryTag;

/// Server-state mutations issued by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Mutation {
    FollowUserToggle,
    SignOut,
    CreateComment,
    LikeComment,
    LikePost,
    UnlikePost,
    SavePost,
    DeleteSavedPost,
    DeletePost,
}

impl Mutation {
    /// The cached queries whose displayed data this mutation can change.
    ///
    /// Kept as one fixed table rather than per-call-site side effects so
    /// the mapping can be reviewed and tested without any network.
    #[must_use]
    pub const fn invalidates(self) -> &'static [QueryTag] {
        match self {
            Self::FollowUserToggle => &[QueryTag::UserById],
            Self::LikeComment => &[QueryTag::PostById],
            Self::LikePost
            | Self::UnlikePost
            | Self::SavePost
            | Self::DeleteSavedPost
            | Self::DeletePost => &[QueryTag::RecentPosts],
            Self::SignOut | Self::CreateComment => &[],
        }
    }
}
