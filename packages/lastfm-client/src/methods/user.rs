//! `user.*` methods

use tracing::{debug, instrument};

use crate::call_spec::{AuthPolicy, CallSpec, ParamDefault};
use crate::error::LastfmResult;
use crate::invoker::MethodInvoker;
use crate::methods::{select, select_list};
use crate::models::{Paging, TimeRange};
use crate::params::ParameterSet;
use crate::xml::NormalizedNode;

const FRIEND_LIST: &[(&str, ParamDefault)] = &[
    ("recenttracks", ParamDefault::Nil),
    ("limit", ParamDefault::Nil),
    ("page", ParamDefault::Nil),
];

pub const GET_INFO: CallSpec = CallSpec::get("user.getInfo", &["user"], &[]);
pub const GET_FRIENDS: CallSpec = CallSpec::get("user.getFriends", &["user"], FRIEND_LIST);
pub const GET_NEIGHBOURS: CallSpec = CallSpec::get("user.getNeighbours", &["user"], FRIEND_LIST);
pub const GET_RECENT_TRACKS: CallSpec = CallSpec::get(
    "user.getRecentTracks",
    &["user"],
    &[
        ("limit", ParamDefault::Nil),
        ("page", ParamDefault::Nil),
        ("to", ParamDefault::Nil),
        ("from", ParamDefault::Nil),
    ],
);
pub const GET_TOP_ARTISTS: CallSpec = CallSpec::get(
    "user.getTopArtists",
    &["user"],
    &[
        ("limit", ParamDefault::Integer(50)),
        ("period", ParamDefault::Text("overall")),
        ("page", ParamDefault::Nil),
        ("to", ParamDefault::Nil),
        ("from", ParamDefault::Nil),
    ],
);
pub const GET_RECOMMENDED_EVENTS: CallSpec = CallSpec::get(
    "user.getRecommendedEvents",
    &[],
    &[("limit", ParamDefault::Integer(50)), ("page", ParamDefault::Nil)],
)
.with_auth(AuthPolicy::SESSION);

pub struct User<'a> {
    invoker: &'a MethodInvoker,
}

impl<'a> User<'a> {
    pub(crate) fn new(invoker: &'a MethodInvoker) -> Self {
        Self { invoker }
    }

    /// Profile information
    #[instrument(skip(self))]
    pub async fn get_info(&self, user: &str) -> LastfmResult<NormalizedNode> {
        let args = ParameterSet::new().with("user", user);
        let info = select(self.invoker.invoke(&GET_INFO, args).await?, &["user"])?;
        Ok(match info {
            NormalizedNode::List(users) => users
                .into_iter()
                .next()
                .unwrap_or(NormalizedNode::Text(String::new())),
            single => single,
        })
    }

    pub async fn get_friends(
        &self,
        user: &str,
        recent_tracks: Option<bool>,
        paging: Paging,
    ) -> LastfmResult<Vec<NormalizedNode>> {
        let args = Self::friend_list_args(user, recent_tracks, paging);
        select_list(self.invoker.invoke(&GET_FRIENDS, args).await?, &["friends", "user"])
    }

    /// Users with similar taste
    ///
    /// The response carries the queried name as a `user` attribute on
    /// `<neighbours>`, which normalizes into the same sequence as the
    /// `<user>` elements. That leading text entry is dropped here.
    #[instrument(skip(self))]
    pub async fn get_neighbours(
        &self,
        user: &str,
        recent_tracks: Option<bool>,
        paging: Paging,
    ) -> LastfmResult<Vec<NormalizedNode>> {
        let args = Self::friend_list_args(user, recent_tracks, paging);
        let mut neighbours = select_list(
            self.invoker.invoke(&GET_NEIGHBOURS, args).await?,
            &["neighbours", "user"],
        )?;

        if matches!(neighbours.first(), Some(NormalizedNode::Text(_))) {
            debug!("Dropping leading user attribute from neighbours list");
            neighbours.remove(0);
        }
        Ok(neighbours)
    }

    pub async fn get_recent_tracks(
        &self,
        user: &str,
        paging: Paging,
        range: TimeRange,
    ) -> LastfmResult<Vec<NormalizedNode>> {
        let args = ParameterSet::new()
            .with("user", user)
            .with_opt("limit", paging.limit)
            .with_opt("page", paging.page)
            .with_opt("to", range.to)
            .with_opt("from", range.from);
        select_list(
            self.invoker.invoke(&GET_RECENT_TRACKS, args).await?,
            &["recenttracks", "track"],
        )
    }

    /// Top artists; `limit` defaults to 50 and `period` to `overall`
    pub async fn get_top_artists(
        &self,
        user: &str,
        limit: Option<u32>,
        period: Option<&str>,
        page: Option<u32>,
        range: TimeRange,
    ) -> LastfmResult<Vec<NormalizedNode>> {
        let args = ParameterSet::new()
            .with("user", user)
            .with_opt("limit", limit)
            .with_opt("period", period)
            .with_opt("page", page)
            .with_opt("to", range.to)
            .with_opt("from", range.from);
        select_list(
            self.invoker.invoke(&GET_TOP_ARTISTS, args).await?,
            &["topartists", "artist"],
        )
    }

    /// Event recommendations for the authenticated user
    pub async fn get_recommended_events(&self, paging: Paging) -> LastfmResult<Vec<NormalizedNode>> {
        let args = ParameterSet::new()
            .with_opt("limit", paging.limit)
            .with_opt("page", paging.page);
        select_list(
            self.invoker.invoke(&GET_RECOMMENDED_EVENTS, args).await?,
            &["events", "event"],
        )
    }

    fn friend_list_args(user: &str, recent_tracks: Option<bool>, paging: Paging) -> ParameterSet {
        ParameterSet::new()
            .with("user", user)
            .with_opt("recenttracks", recent_tracks)
            .with_opt("limit", paging.limit)
            .with_opt("page", paging.page)
    }
}
