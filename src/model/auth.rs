/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::responses::LoginResponse;

/// Authenticated session held by a client between `login` and `logout`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque session token sent as `sessionID` on every request
    pub session_id: String,
    /// Identifier of the logged-in user
    pub user_id: String,
}

impl From<LoginResponse> for Session {
    fn from(v: LoginResponse) -> Self {
        Self {
            session_id: v.session_id,
            user_id: v.user_id,
        }
    }
}
