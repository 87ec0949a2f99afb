//! `track.*` methods
//!
//! Write methods (tagging, loving, scrobbling, ...) are POSTed, signed and
//! bound to the current session key. They return `true` on success.

use chrono::{DateTime, Utc};
use tracing::instrument;

use crate::call_spec::{AuthPolicy, CallSpec, ParamDefault};
use crate::error::LastfmResult;
use crate::invoker::MethodInvoker;
use crate::methods::{select, select_list};
use crate::models::Paging;
use crate::params::ParameterSet;
use crate::xml::NormalizedNode;

const ARTIST_TRACK: &[&str] = &["artist", "track"];
const USERNAME: &[(&str, ParamDefault)] = &[("username", ParamDefault::Nil)];
const ALBUM_MBID: &[(&str, ParamDefault)] = &[("album", ParamDefault::Nil), ("mbid", ParamDefault::Nil)];

pub const ADD_TAGS: CallSpec = CallSpec::post("track.addTags", &["artist", "track", "tags"], &[]);
pub const BAN: CallSpec = CallSpec::post("track.ban", ARTIST_TRACK, &[]);
pub const GET_INFO: CallSpec = CallSpec::get("track.getInfo", ARTIST_TRACK, USERNAME);
pub const GET_CORRECTION: CallSpec = CallSpec::get("track.getCorrection", ARTIST_TRACK, USERNAME);
pub const GET_SIMILAR: CallSpec = CallSpec::get("track.getSimilar", ARTIST_TRACK, &[]);
pub const GET_TAGS: CallSpec =
    CallSpec::get("track.getTags", ARTIST_TRACK, &[]).with_auth(AuthPolicy::SESSION);
pub const GET_TOP_FANS: CallSpec = CallSpec::get("track.getTopFans", ARTIST_TRACK, &[]);
pub const GET_TOP_TAGS: CallSpec = CallSpec::get("track.getTopTags", ARTIST_TRACK, &[]);
pub const LOVE: CallSpec = CallSpec::post("track.love", ARTIST_TRACK, &[]);
pub const REMOVE_TAG: CallSpec = CallSpec::post("track.removeTag", &["artist", "track", "tag"], &[]);
pub const SEARCH: CallSpec = CallSpec::get(
    "track.search",
    &["track"],
    &[
        ("artist", ParamDefault::Nil),
        ("limit", ParamDefault::Nil),
        ("page", ParamDefault::Nil),
    ],
);
pub const SHARE: CallSpec = CallSpec::post(
    "track.share",
    &["artist", "track", "recipient"],
    &[("message", ParamDefault::Nil)],
);
pub const SCROBBLE: CallSpec =
    CallSpec::post("track.scrobble", &["artist", "track", "timestamp"], ALBUM_MBID);
pub const UPDATE_NOW_PLAYING: CallSpec =
    CallSpec::post("track.updateNowPlaying", ARTIST_TRACK, ALBUM_MBID);

pub struct Track<'a> {
    invoker: &'a MethodInvoker,
}

impl<'a> Track<'a> {
    pub(crate) fn new(invoker: &'a MethodInvoker) -> Self {
        Self { invoker }
    }

    fn artist_track(artist: &str, track: &str) -> ParameterSet {
        ParameterSet::new().with("artist", artist).with("track", track)
    }

    /// Tag a track; Last.fm accepts at most ten tags per call
    #[instrument(skip(self))]
    pub async fn add_tags(&self, artist: &str, track: &str, tags: &[&str]) -> LastfmResult<bool> {
        let args = Self::artist_track(artist, track).with("tags", tags.join(","));
        self.invoker.invoke_void(&ADD_TAGS, args).await
    }

    #[instrument(skip(self))]
    pub async fn ban(&self, artist: &str, track: &str) -> LastfmResult<bool> {
        self.invoker
            .invoke_void(&BAN, Self::artist_track(artist, track))
            .await
    }

    /// Track metadata; with `username`, includes that user's playcount
    pub async fn get_info(
        &self,
        artist: &str,
        track: &str,
        username: Option<&str>,
    ) -> LastfmResult<NormalizedNode> {
        let args = Self::artist_track(artist, track).with_opt("username", username);
        select(self.invoker.invoke(&GET_INFO, args).await?, &["track"])
    }

    pub async fn get_correction(
        &self,
        artist: &str,
        track: &str,
        username: Option<&str>,
    ) -> LastfmResult<NormalizedNode> {
        let args = Self::artist_track(artist, track).with_opt("username", username);
        select(
            self.invoker.invoke(&GET_CORRECTION, args).await?,
            &["corrections", "correction"],
        )
    }

    pub async fn get_similar(&self, artist: &str, track: &str) -> LastfmResult<Vec<NormalizedNode>> {
        let payload = self
            .invoker
            .invoke(&GET_SIMILAR, Self::artist_track(artist, track))
            .await?;
        select_list(payload, &["similartracks", "track"])
    }

    /// Tags the authenticated user applied to the track
    pub async fn get_tags(&self, artist: &str, track: &str) -> LastfmResult<Vec<NormalizedNode>> {
        let payload = self
            .invoker
            .invoke(&GET_TAGS, Self::artist_track(artist, track))
            .await?;
        select_list(payload, &["tags", "tag"])
    }

    pub async fn get_top_fans(&self, artist: &str, track: &str) -> LastfmResult<Vec<NormalizedNode>> {
        let payload = self
            .invoker
            .invoke(&GET_TOP_FANS, Self::artist_track(artist, track))
            .await?;
        select_list(payload, &["topfans", "user"])
    }

    pub async fn get_top_tags(&self, artist: &str, track: &str) -> LastfmResult<Vec<NormalizedNode>> {
        let payload = self
            .invoker
            .invoke(&GET_TOP_TAGS, Self::artist_track(artist, track))
            .await?;
        select_list(payload, &["toptags", "tag"])
    }

    #[instrument(skip(self))]
    pub async fn love(&self, artist: &str, track: &str) -> LastfmResult<bool> {
        self.invoker
            .invoke_void(&LOVE, Self::artist_track(artist, track))
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_tag(&self, artist: &str, track: &str, tag: &str) -> LastfmResult<bool> {
        let args = Self::artist_track(artist, track).with("tag", tag);
        self.invoker.invoke_void(&REMOVE_TAG, args).await
    }

    /// Search by title, optionally narrowed to an artist; returns the whole
    /// `results` block
    pub async fn search(
        &self,
        track: &str,
        artist: Option<&str>,
        paging: Paging,
    ) -> LastfmResult<NormalizedNode> {
        let args = ParameterSet::new()
            .with_opt("artist", artist)
            .with("track", track)
            .with_opt("limit", paging.limit)
            .with_opt("page", paging.page);
        select(self.invoker.invoke(&SEARCH, args).await?, &["results"])
    }

    /// Share a track with a user name or e-mail address
    #[instrument(skip(self, message))]
    pub async fn share(
        &self,
        artist: &str,
        track: &str,
        recipient: &str,
        message: Option<&str>,
    ) -> LastfmResult<bool> {
        let args = Self::artist_track(artist, track)
            .with("recipient", recipient)
            .with_opt("message", message);
        self.invoker.invoke_void(&SHARE, args).await
    }

    /// Record a play that started at `timestamp`
    #[instrument(skip(self))]
    pub async fn scrobble(
        &self,
        artist: &str,
        track: &str,
        timestamp: DateTime<Utc>,
        album: Option<&str>,
        mbid: Option<&str>,
    ) -> LastfmResult<bool> {
        let args = Self::artist_track(artist, track)
            .with("timestamp", timestamp)
            .with_opt("album", album)
            .with_opt("mbid", mbid);
        self.invoker.invoke_void(&SCROBBLE, args).await
    }

    #[instrument(skip(self))]
    pub async fn update_now_playing(
        &self,
        artist: &str,
        track: &str,
        album: Option<&str>,
        mbid: Option<&str>,
    ) -> LastfmResult<bool> {
        let args = Self::artist_track(artist, track)
            .with_opt("album", album)
            .with_opt("mbid", mbid);
        self.invoker.invoke_void(&UPDATE_NOW_PLAYING, args).await
    }
}
