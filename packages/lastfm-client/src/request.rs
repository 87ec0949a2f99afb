//! Final request assembly: api_key, signature and session key

use crate::call_spec::{AuthPolicy, HttpVerb};
use crate::credentials::Credentials;
use crate::error::LastfmResult;
use crate::params::ParameterSet;
use crate::signer;

/// A request ready for the transport
///
/// `params` go into the query string for GET and into a form body for POST.
/// No value is ever nil at this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: String,
    pub verb: HttpVerb,
    pub params: Vec<(String, String)>,
}

impl PreparedRequest {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Builds [`PreparedRequest`]s from call arguments and a credentials snapshot
pub struct RequestBuilder<'a> {
    credentials: &'a Credentials,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// # Errors
    /// `LastfmError::MissingCredential` when the policy needs a session key or
    /// shared secret the credentials do not carry.
    pub fn build(
        &self,
        method: &str,
        mut params: ParameterSet,
        verb: HttpVerb,
        auth: AuthPolicy,
    ) -> LastfmResult<PreparedRequest> {
        params.strip_nil();
        params.insert("method", method);
        params.insert("api_key", self.credentials.api_key());

        let session_key = if auth.needs_session {
            Some(self.credentials.require_session_key()?)
        } else {
            None
        };

        if auth.needs_signature {
            let secret = self.credentials.secret()?;
            let signature = signer::sign(&params, secret, session_key);
            params.insert("api_sig", signature);
        }

        if let Some(session_key) = session_key {
            params.insert("sk", session_key);
        }

        let params = params
            .iter()
            .filter_map(|(name, value)| value.to_wire().map(|wire| (name.to_string(), wire)))
            .collect();

        Ok(PreparedRequest {
            method: method.to_string(),
            verb,
            params,
        })
    }
}
