//! Static descriptions of remote methods

use std::fmt;

use crate::error::{LastfmError, LastfmResult};
use crate::params::{ParamValue, ParameterSet};

/// HTTP verb a method is sent with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    Get,
    Post,
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpVerb::Get => write!(f, "GET"),
            HttpVerb::Post => write!(f, "POST"),
        }
    }
}

/// Authentication requirements of a method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthPolicy {
    pub needs_signature: bool,
    pub needs_session: bool,
}

impl AuthPolicy {
    /// Plain `api_key` call
    pub const NONE: Self = Self {
        needs_signature: false,
        needs_session: false,
    };

    /// Signed with the shared secret, no user session
    pub const SIGNED: Self = Self {
        needs_signature: true,
        needs_session: false,
    };

    /// Signed and acting on behalf of the authenticated user
    pub const SESSION: Self = Self {
        needs_signature: true,
        needs_session: true,
    };
}

/// Default for an optional parameter the caller left out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDefault {
    Nil,
    Text(&'static str),
    Integer(i64),
}

impl From<ParamDefault> for ParamValue {
    fn from(default: ParamDefault) -> Self {
        match default {
            ParamDefault::Nil => ParamValue::Nil,
            ParamDefault::Text(text) => ParamValue::Text(text.to_string()),
            ParamDefault::Integer(n) => ParamValue::Integer(n),
        }
    }
}

/// One remote method: name, parameters, verb and auth requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSpec {
    pub method: &'static str,
    pub required: &'static [&'static str],
    pub optional: &'static [(&'static str, ParamDefault)],
    pub verb: HttpVerb,
    pub auth: AuthPolicy,
}

impl CallSpec {
    /// Unauthenticated GET method
    pub const fn get(
        method: &'static str,
        required: &'static [&'static str],
        optional: &'static [(&'static str, ParamDefault)],
    ) -> Self {
        Self {
            method,
            required,
            optional,
            verb: HttpVerb::Get,
            auth: AuthPolicy::NONE,
        }
    }

    /// Write method: POST, signed, with session key
    pub const fn post(
        method: &'static str,
        required: &'static [&'static str],
        optional: &'static [(&'static str, ParamDefault)],
    ) -> Self {
        Self {
            method,
            required,
            optional,
            verb: HttpVerb::Post,
            auth: AuthPolicy::SESSION,
        }
    }

    pub const fn with_auth(self, auth: AuthPolicy) -> Self {
        Self { auth, ..self }
    }

    /// Check required parameters and fill in optional defaults
    ///
    /// Fails before any I/O when a required parameter is absent or nil.
    /// Undeclared parameters pass through untouched.
    pub fn prepare(&self, mut args: ParameterSet) -> LastfmResult<ParameterSet> {
        if let Some(missing) = self.required.iter().find(|name| !args.has_value(name)) {
            return Err(LastfmError::InvalidArgument(format!(
                "{} requires parameter '{}'",
                self.method, missing
            )));
        }

        for (name, default) in self.optional {
            if !args.contains(name) {
                args.insert(*name, *default);
            }
        }

        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP_ARTISTS: CallSpec = CallSpec::get(
        "user.getTopArtists",
        &["user"],
        &[
            ("limit", ParamDefault::Integer(50)),
            ("period", ParamDefault::Text("overall")),
            ("page", ParamDefault::Nil),
        ],
    );

    #[test]
    fn test_prepare_fills_defaults() {
        let params = TOP_ARTISTS
            .prepare(ParameterSet::new().with("user", "test"))
            .unwrap();
        assert_eq!(params.get("limit"), Some(&ParamValue::Integer(50)));
        assert_eq!(params.get("period"), Some(&ParamValue::from("overall")));
        assert_eq!(params.get("page"), Some(&ParamValue::Nil));
    }

    #[test]
    fn test_prepare_keeps_caller_values() {
        let params = TOP_ARTISTS
            .prepare(ParameterSet::new().with("user", "test").with("limit", 4u32))
            .unwrap();
        assert_eq!(params.get("limit"), Some(&ParamValue::Integer(4)));
    }

    #[test]
    fn test_prepare_rejects_missing_required() {
        let result = TOP_ARTISTS.prepare(ParameterSet::new().with("limit", 4u32));
        assert!(matches!(result, Err(LastfmError::InvalidArgument(msg)) if msg.contains("'user'")));
    }

    #[test]
    fn test_prepare_rejects_nil_required() {
        let result = TOP_ARTISTS.prepare(ParameterSet::new().with("user", None::<&str>));
        assert!(matches!(result, Err(LastfmError::InvalidArgument(_))));
    }

    #[test]
    fn test_post_spec_requires_session() {
        let spec = CallSpec::post("track.love", &["artist", "track"], &[]);
        assert_eq!(spec.verb, HttpVerb::Post);
        assert_eq!(spec.auth, AuthPolicy::SESSION);

        let spec = CallSpec::get("auth.getToken", &[], &[]).with_auth(AuthPolicy::SIGNED);
        assert_eq!(spec.verb, HttpVerb::Get);
        assert!(spec.auth.needs_signature && !spec.auth.needs_session);
    }
}
