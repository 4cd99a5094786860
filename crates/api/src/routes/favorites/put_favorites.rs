use trailhead_database::User;
use trailhead_result::{create_error, Result};

/// # Replace Favorites
///
/// Replacing the favorites list wholesale is not supported;
/// only privileged users get as far as the rejection.
#[put("/")]
pub async fn put(user: User) -> Result<NotSupported> {
    if !user.privileged {
        return Err(create_error!(NotPrivileged));
    }

    Ok(NotSupported("PUT is not supported on /favorites"))
}

#[derive(Responder)]
#[response(status = 403, content_type = "plain")]
pub struct NotSupported(&'static str);
