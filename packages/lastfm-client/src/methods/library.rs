//! `library.*` methods

use crate::call_spec::{CallSpec, ParamDefault};
use crate::error::LastfmResult;
use crate::invoker::MethodInvoker;
use crate::methods::select_list;
use crate::models::Paging;
use crate::params::ParameterSet;
use crate::xml::NormalizedNode;

pub const GET_ARTISTS: CallSpec = CallSpec::get(
    "library.getArtists",
    &["user"],
    &[("limit", ParamDefault::Nil), ("page", ParamDefault::Nil)],
);

pub struct Library<'a> {
    invoker: &'a MethodInvoker,
}

impl<'a> Library<'a> {
    pub(crate) fn new(invoker: &'a MethodInvoker) -> Self {
        Self { invoker }
    }

    /// Artists in a user's library
    pub async fn get_artists(&self, user: &str, paging: Paging) -> LastfmResult<Vec<NormalizedNode>> {
        let args = ParameterSet::new()
            .with("user", user)
            .with_opt("limit", paging.limit)
            .with_opt("page", paging.page);
        select_list(self.invoker.invoke(&GET_ARTISTS, args).await?, &["artists", "artist"])
    }
}
