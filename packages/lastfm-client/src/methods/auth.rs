//! `auth.*` methods

use tracing::instrument;

use crate::call_spec::{AuthPolicy, CallSpec};
use crate::error::LastfmResult;
use crate::invoker::MethodInvoker;
use crate::methods::{select, select_text};
use crate::models::Session;
use crate::params::ParameterSet;

pub const GET_TOKEN: CallSpec = CallSpec::get("auth.getToken", &[], &[]).with_auth(AuthPolicy::SIGNED);

pub const GET_SESSION: CallSpec =
    CallSpec::get("auth.getSession", &["token"], &[]).with_auth(AuthPolicy::SIGNED);

/// Desktop/web authentication flow
pub struct Auth<'a> {
    invoker: &'a MethodInvoker,
}

impl<'a> Auth<'a> {
    pub(crate) fn new(invoker: &'a MethodInvoker) -> Self {
        Self { invoker }
    }

    /// Fetch an unauthorized request token
    #[instrument(skip(self))]
    pub async fn get_token(&self) -> LastfmResult<String> {
        let payload = self.invoker.invoke(&GET_TOKEN, ParameterSet::new()).await?;
        select_text(payload, &["token"])
    }

    /// Exchange a user-authorized token for a session
    ///
    /// The session key is not stored automatically; pass `session.key` to
    /// [`crate::LastfmClient::set_session`].
    #[instrument(skip(self, token))]
    pub async fn get_session(&self, token: &str) -> LastfmResult<Session> {
        let args = ParameterSet::new().with("token", token);
        let payload = self.invoker.invoke(&GET_SESSION, args).await?;
        Session::try_from(&select(payload, &["session"])?)
    }
}
