//! `album.*` methods

use crate::call_spec::CallSpec;
use crate::error::LastfmResult;
use crate::invoker::MethodInvoker;
use crate::methods::select;
use crate::params::ParameterSet;
use crate::xml::NormalizedNode;

pub const GET_INFO: CallSpec = CallSpec::get("album.getInfo", &["artist", "album"], &[]);

pub struct Album<'a> {
    invoker: &'a MethodInvoker,
}

impl<'a> Album<'a> {
    pub(crate) fn new(invoker: &'a MethodInvoker) -> Self {
        Self { invoker }
    }

    /// Album metadata including the `tracks.track` listing
    pub async fn get_info(&self, artist: &str, album: &str) -> LastfmResult<NormalizedNode> {
        let args = ParameterSet::new()
            .with("artist", artist)
            .with("album", album);
        select(self.invoker.invoke(&GET_INFO, args).await?, &["album"])
    }
}
