//! Request signatures (`api_sig`)
//!
//! Last.fm verifies `md5(name1 value1 name2 value2 ... secret)` where the
//! names are sorted bytewise. `format` and `api_sig` never take part, and
//! nil values are skipped. The session key is signed as an ordinary `sk`
//! parameter, so it sorts in with the rest. A credential session key takes
//! the place of any `sk` already in the set; without one, a caller's `sk`
//! is signed like any other parameter.

use md5::{Digest, Md5};

use crate::params::ParameterSet;

const UNSIGNED_PARAMS: [&str; 2] = ["format", "api_sig"];

/// Compute the lowercase hex MD5 signature for a parameter set
pub fn sign(params: &ParameterSet, secret: &str, session_key: Option<&str>) -> String {
    let mut entries: Vec<(&str, String)> = params
        .iter()
        .filter(|(name, _)| !UNSIGNED_PARAMS.contains(name))
        .filter(|(name, _)| session_key.is_none() || *name != "sk")
        .filter_map(|(name, value)| value.to_wire().map(|wire| (name, wire)))
        .collect();

    if let Some(session_key) = session_key {
        entries.push(("sk", session_key.to_string()));
    }

    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut hasher = Md5::new();
    for (name, value) in &entries {
        hasher.update(name.as_bytes());
        hasher.update(value.as_bytes());
    }
    hasher.update(secret.as_bytes());

    format!("{:x}", hasher.finalize())
}
