// src/domain/post/policy.rs
use crate::domain::identity::Identity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    View,
    Create,
    Update,
    Delete,
}

/// Role-based access rules for posts. Reading is open to everyone, anonymous
/// visitors included; every mutation requires an admin. There is no
/// per-post ownership override.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostPolicy;

impl PostPolicy {
    pub fn allows(&self, actor: Option<&Identity>, action: PostAction) -> bool {
        match action {
            PostAction::View => true,
            PostAction::Create | PostAction::Update | PostAction::Delete => {
                actor.is_some_and(Identity::is_admin)
            }
        }
    }
}
