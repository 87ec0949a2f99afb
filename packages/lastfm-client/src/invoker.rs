//! Generic "invoke a named remote method" primitive

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, instrument, warn};

use crate::call_spec::{AuthPolicy, CallSpec, HttpVerb};
use crate::credentials::Credentials;
use crate::decoder;
use crate::error::{LastfmError, LastfmResult};
use crate::params::ParameterSet;
use crate::request::RequestBuilder;
use crate::transport::Transport;
use crate::xml::{LfmDocument, NormalizedNode};

/// Runs the call pipeline: validate, build and sign, send, normalize, decode
///
/// Cloning is cheap; clones share credentials and transport. The session key
/// is single-writer/many-reader: each call works on a snapshot taken before
/// any I/O.
#[derive(Clone)]
pub struct MethodInvoker {
    credentials: Arc<RwLock<Credentials>>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for MethodInvoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodInvoker")
            .field("credentials", &self.credentials_snapshot())
            .finish_non_exhaustive()
    }
}

impl MethodInvoker {
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials: Arc::new(RwLock::new(credentials)),
            transport,
        }
    }

    /// Replace (or clear) the session key used by session-bound methods
    pub fn set_session(&self, session_key: Option<String>) {
        self.credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set_session_key(session_key);
    }

    pub fn session_key(&self) -> Option<String> {
        self.credentials_snapshot().session_key().map(str::to_string)
    }

    fn credentials_snapshot(&self) -> Credentials {
        self.credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Invoke a cataloged method and return its normalized payload
    ///
    /// # Errors
    /// - `LastfmError::InvalidArgument` if a required parameter is missing
    ///   (nothing is sent)
    /// - `LastfmError::MissingCredential` if the method needs a secret or
    ///   session key that is not set
    /// - `LastfmError::Http`, `LastfmError::Xml`, `LastfmError::Api` from
    ///   the exchange itself
    #[instrument(skip(self, spec, args), fields(method = spec.method))]
    pub async fn invoke(
        &self,
        spec: &CallSpec,
        args: ParameterSet,
    ) -> LastfmResult<NormalizedNode> {
        let params = spec.prepare(args)?;
        self.request(spec.method, params, spec.verb, spec.auth).await
    }

    /// Invoke a method whose only result is success
    pub async fn invoke_void(&self, spec: &CallSpec, args: ParameterSet) -> LastfmResult<bool> {
        self.invoke(spec, args).await?;
        Ok(true)
    }

    /// Send an arbitrary method without catalogue validation
    #[instrument(skip(self, params), fields(verb = %verb))]
    pub async fn request(
        &self,
        method: &str,
        params: ParameterSet,
        verb: HttpVerb,
        auth: AuthPolicy,
    ) -> LastfmResult<NormalizedNode> {
        let credentials = self.credentials_snapshot();
        let request = RequestBuilder::new(&credentials).build(method, params, verb, auth)?;

        debug!(
            method = %method,
            param_count = request.params.len(),
            signed = auth.needs_signature,
            session = auth.needs_session,
            "Sending Last.fm request"
        );

        let body = self.transport.send(&request).await?;
        let document = LfmDocument::parse(&body)?;

        if let Err(e) = decoder::check(&document) {
            if let LastfmError::Api { code, message } = &e {
                warn!(method = %method, code, message = %message, "Last.fm reported an error");
            }
            return Err(e);
        }

        Ok(document.into_payload())
    }
}
