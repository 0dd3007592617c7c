// src/application/commands/posts/authorize.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        identity::Identity,
        post::{PostAction, PostPolicy},
    },
};

pub(crate) fn ensure_allowed(
    policy: &PostPolicy,
    actor: Option<&Identity>,
    action: PostAction,
) -> ApplicationResult<()> {
    if policy.allows(actor, action) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "not permitted to {} posts",
            match action {
                PostAction::View => "view",
                PostAction::Create => "create",
                PostAction::Update => "update",
                PostAction::Delete => "delete",
            }
        )))
    }
}
