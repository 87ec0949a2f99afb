//! `geo.*` methods

use crate::call_spec::{CallSpec, ParamDefault};
use crate::error::LastfmResult;
use crate::invoker::MethodInvoker;
use crate::methods::select_list;
use crate::models::Paging;
use crate::params::ParameterSet;
use crate::xml::NormalizedNode;

pub const GET_EVENTS: CallSpec = CallSpec::get(
    "geo.getEvents",
    &[],
    &[
        ("location", ParamDefault::Nil),
        ("distance", ParamDefault::Nil),
        ("limit", ParamDefault::Nil),
        ("page", ParamDefault::Nil),
    ],
);

pub struct Geo<'a> {
    invoker: &'a MethodInvoker,
}

impl<'a> Geo<'a> {
    pub(crate) fn new(invoker: &'a MethodInvoker) -> Self {
        Self { invoker }
    }

    /// Events near `location` (or the caller's IP location when `None`)
    pub async fn get_events(
        &self,
        location: Option<&str>,
        distance: Option<u32>,
        paging: Paging,
    ) -> LastfmResult<Vec<NormalizedNode>> {
        let args = ParameterSet::new()
            .with_opt("location", location)
            .with_opt("distance", distance)
            .with_opt("limit", paging.limit)
            .with_opt("page", paging.page);
        select_list(self.invoker.invoke(&GET_EVENTS, args).await?, &["events", "event"])
    }
}
