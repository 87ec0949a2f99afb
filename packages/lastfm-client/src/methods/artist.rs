//! `artist.*` methods

use tracing::{debug, instrument};

use crate::call_spec::{CallSpec, ParamDefault};
use crate::error::LastfmResult;
use crate::invoker::MethodInvoker;
use crate::methods::{select, select_list};
use crate::models::Paging;
use crate::params::ParameterSet;
use crate::xml::NormalizedNode;

const PAGING: &[(&str, ParamDefault)] = &[("limit", ParamDefault::Nil), ("page", ParamDefault::Nil)];

pub const GET_INFO: CallSpec = CallSpec::get(
    "artist.getInfo",
    &["artist"],
    &[("lang", ParamDefault::Nil), ("autocorrect", ParamDefault::Nil)],
);
pub const GET_EVENTS: CallSpec = CallSpec::get("artist.getEvents", &["artist"], &[]);
pub const GET_TOP_TAGS: CallSpec = CallSpec::get("artist.getTopTags", &["artist"], &[]);
pub const GET_IMAGES: CallSpec = CallSpec::get("artist.getImages", &["artist"], PAGING);
pub const GET_SIMILAR: CallSpec =
    CallSpec::get("artist.getSimilar", &["artist"], &[("limit", ParamDefault::Nil)]);
pub const SEARCH: CallSpec = CallSpec::get("artist.search", &["artist"], PAGING);

pub struct Artist<'a> {
    invoker: &'a MethodInvoker,
}

impl<'a> Artist<'a> {
    pub(crate) fn new(invoker: &'a MethodInvoker) -> Self {
        Self { invoker }
    }

    /// Artist metadata; `lang` selects the biography language
    #[instrument(skip(self))]
    pub async fn get_info(
        &self,
        artist: &str,
        lang: Option<&str>,
        autocorrect: Option<bool>,
    ) -> LastfmResult<NormalizedNode> {
        let args = ParameterSet::new()
            .with("artist", artist)
            .with_opt("lang", lang)
            .with_opt("autocorrect", autocorrect);
        select(self.invoker.invoke(&GET_INFO, args).await?, &["artist"])
    }

    /// Upcoming events
    #[instrument(skip(self))]
    pub async fn get_events(&self, artist: &str) -> LastfmResult<Vec<NormalizedNode>> {
        let args = ParameterSet::new().with("artist", artist);
        select_list(self.invoker.invoke(&GET_EVENTS, args).await?, &["events", "event"])
    }

    #[instrument(skip(self))]
    pub async fn get_top_tags(&self, artist: &str) -> LastfmResult<Vec<NormalizedNode>> {
        let args = ParameterSet::new().with("artist", artist);
        select_list(self.invoker.invoke(&GET_TOP_TAGS, args).await?, &["toptags", "tag"])
    }

    pub async fn get_images(
        &self,
        artist: &str,
        paging: Paging,
    ) -> LastfmResult<Vec<NormalizedNode>> {
        let args = ParameterSet::new()
            .with("artist", artist)
            .with_opt("limit", paging.limit)
            .with_opt("page", paging.page);
        select_list(self.invoker.invoke(&GET_IMAGES, args).await?, &["images", "image"])
    }

    /// Similar artists, best match first
    #[instrument(skip(self))]
    pub async fn get_similar(
        &self,
        artist: &str,
        limit: Option<u32>,
    ) -> LastfmResult<Vec<NormalizedNode>> {
        let args = ParameterSet::new()
            .with("artist", artist)
            .with_opt("limit", limit);
        let similar = select_list(
            self.invoker.invoke(&GET_SIMILAR, args).await?,
            &["similarartists", "artist"],
        )?;

        debug!(artist = %artist, result_count = similar.len(), "Found similar artists");
        Ok(similar)
    }

    /// Search by name; returns the whole `results` block (paging totals plus
    /// `artistmatches`)
    pub async fn search(&self, artist: &str, paging: Paging) -> LastfmResult<NormalizedNode> {
        let args = ParameterSet::new()
            .with("artist", artist)
            .with_opt("limit", paging.limit)
            .with_opt("page", paging.page);
        select(self.invoker.invoke(&SEARCH, args).await?, &["results"])
    }
}
