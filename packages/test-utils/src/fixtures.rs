//! Canned `<lfm>` response bodies
//!
//! Trimmed copies of real service responses, kept small enough to assert on.

pub const OK_EMPTY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="ok">
</lfm>
"#;

pub const OK_FOO: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="ok">
<foo>bar</foo></lfm>
"#;

pub const NG_INVALID_KEY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="failed">
<error code="10">Invalid API key - You must be granted a valid key by last.fm</error></lfm>
"#;

pub const AUTH_GET_TOKEN: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="ok">
<token>xxxyyyzzz</token></lfm>
"#;

pub const AUTH_GET_SESSION: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="ok">
  <session>
    <name>MyLastFMUsername</name>
    <key>zzzyyyxxx</key>
    <subscriber>0</subscriber>
  </session>
</lfm>
"#;

pub const TRACK_GET_INFO: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="ok">
<track>
  <id>1019817</id>
  <name>Believe</name>
  <mbid></mbid>
  <url>http://www.last.fm/music/Cher/_/Believe</url>
  <duration>240000</duration>
  <streamable fulltrack="1">1</streamable>
  <listeners>69572</listeners>
  <playcount>281445</playcount>
  <artist>
    <name>Cher</name>
    <mbid>bfcc6d75-a6a5-4bc6-8282-47aec8531818</mbid>
    <url>http://www.last.fm/music/Cher</url>
  </artist>
  <album position="1">
    <artist>Cher</artist>
    <title>Believe</title>
    <mbid>61bf0388-b8a9-48f4-81d1-7eb02706dfb0</mbid>
    <url>http://www.last.fm/music/Cher/Believe</url>
    <image size="small">http://userserve-ak.last.fm/serve/64s/8674593.jpg</image>
    <image size="medium">http://userserve-ak.last.fm/serve/126/8674593.jpg</image>
    <image size="large">http://userserve-ak.last.fm/serve/174s/8674593.jpg</image>
    <image size="extralarge">http://userserve-ak.last.fm/serve/300x300/8674593.jpg</image>
  </album>
  <toptags>
    <tag>
      <name>pop</name>
      <url>http://www.last.fm/tag/pop</url>
    </tag>
    <tag>
      <name>dance</name>
      <url>http://www.last.fm/tag/dance</url>
    </tag>
    <tag>
      <name>90s</name>
      <url>http://www.last.fm/tag/90s</url>
    </tag>
    <tag>
      <name>cher</name>
      <url>http://www.last.fm/tag/cher</url>
    </tag>
    <tag>
      <name>female vocalists</name>
      <url>http://www.last.fm/tag/female%20vocalists</url>
    </tag>
  </toptags>
  <wiki>
    <published>Sun, 27 Jul 2008 15:44:58 +0000</published>
    <summary>Believe is the title track of Cher's 23rd studio album.</summary>
  </wiki>
</track></lfm>
"#;

/// Same track with a single image and a single tag
pub const TRACK_GET_INFO_SINGLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="ok">
<track>
  <name>Believe</name>
  <album position="1">
    <title>Believe</title>
    <image size="small">http://userserve-ak.last.fm/serve/64s/8674593.jpg</image>
  </album>
  <toptags>
    <tag>
      <name>pop</name>
      <url>http://www.last.fm/tag/pop</url>
    </tag>
  </toptags>
</track></lfm>
"#;

pub const TRACK_GET_CORRECTION: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="ok">
  <corrections>
    <correction index="0" artistcorrected="1" trackcorrected="0">
      <track>
        <name>One More Cup of Coffee</name>
        <mbid/>
        <url>www.last.fm/music/The+White+Stripes/_/One+More+Cup+of+Coffee</url>
        <artist>
          <name>The White Stripes</name>
          <mbid>11ae9fbb-f3d7-4a47-936f-4c0a04d3b3b5</mbid>
          <url>www.last.fm/music/The+White+Stripes</url>
        </artist>
      </track>
    </correction>
  </corrections>
</lfm>
"#;

pub const TRACK_GET_TOP_TAGS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="ok">
<toptags artist="Cher" track="Believe">
  <tag>
    <name>alternative</name>
    <count>100</count>
    <url>www.last.fm/tag/alternative</url>
  </tag>
  <tag>
    <name>indie</name>
    <count>98</count>
    <url>www.last.fm/tag/indie</url>
  </tag>
</toptags></lfm>
"#;

pub const TRACK_SEARCH: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="ok">
  <results for="Believe" xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">
    <opensearch:Query role="request" searchTerms="Believe" startPage="3" />
    <opensearch:totalResults>40540</opensearch:totalResults>
    <opensearch:startIndex>20</opensearch:startIndex>
    <opensearch:itemsPerPage>10</opensearch:itemsPerPage>
    <trackmatches>
      <track>
        <name>Make Me Believe</name>
        <artist>Godsmack</artist>
        <url>http://www.last.fm/music/Godsmack/_/Make+Me+Believe</url>
        <listeners>57</listeners>
      </track>
      <track>
        <name>I Believe</name>
        <artist>Tiffany Giardina</artist>
        <url>http://www.last.fm/music/Tiffany+Giardina/_/I+Believe</url>
        <listeners>14</listeners>
      </track>
    </trackmatches>
  </results>
</lfm>
"#;

pub const ARTIST_GET_SIMILAR: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="ok">
<similarartists artist="Cher">
  <artist>
    <name>Sonny &amp; Cher</name>
    <mbid>3d6e4b6d-2700-458c-9722-9021965a8164</mbid>
    <match>1</match>
    <url>www.last.fm/music/Sonny+&amp;+Cher</url>
  </artist>
  <artist>
    <name>Madonna</name>
    <mbid>79239441-bfd5-4981-a70c-55c3f15c1287</mbid>
    <match>0.521561</match>
    <url>www.last.fm/music/Madonna</url>
  </artist>
</similarartists></lfm>
"#;

pub const ARTIST_GET_EVENTS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="ok">
<events artist="Cher" festivalsonly="0" total="1">
  <event>
    <id>3318430</id>
    <title>Cher</title>
    <artists>
      <artist>Cher</artist>
      <headliner>Cher</headliner>
    </artists>
    <venue>
      <name>Caesars Palace</name>
      <location>
        <city>Las Vegas</city>
        <country>United States</country>
      </location>
    </venue>
    <startDate>Sat, 18 Jun 2011 19:30:00</startDate>
  </event>
</events></lfm>
"#;

pub const USER_GET_NEIGHBOURS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="ok">
<neighbours user="rj">
  <user>
    <name>Dennis</name>
    <url>http://www.last.fm/user/Dennis</url>
    <image size="small">http://userserve-ak.last.fm/serve/34/1.jpg</image>
    <match>0.04</match>
  </user>
  <user>
    <name>Olivier</name>
    <url>http://www.last.fm/user/Olivier</url>
    <image size="small">http://userserve-ak.last.fm/serve/34/2.jpg</image>
    <match>0.03</match>
  </user>
</neighbours></lfm>
"#;

pub const USER_GET_INFO: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="ok">
<user>
  <id>1000002</id>
  <name>RJ</name>
  <realname>Richard Jones </realname>
  <url>http://www.last.fm/user/RJ</url>
  <country>UK</country>
  <age>27</age>
  <gender>m</gender>
  <subscriber>1</subscriber>
  <playcount>54189</playcount>
  <playlists>4</playlists>
</user></lfm>
"#;

pub const USER_GET_TOP_ARTISTS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="ok">
<topartists user="RJ" type="overall">
  <artist rank="1">
    <name>Dream Theater</name>
    <playcount>1337</playcount>
    <mbid>28503ab7-8bf2-4666-a7bd-2644bfc7cb1d</mbid>
    <url>http://www.last.fm/music/Dream+Theater</url>
  </artist>
</topartists></lfm>
"#;

pub const USER_GET_RECENT_TRACKS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="ok">
<recenttracks user="RJ" page="1" perPage="10" totalPages="3019">
  <track nowplaying="true">
    <artist mbid="2f9ecbed-27be-40e6-abca-6de49d50299e">Aretha Franklin</artist>
    <name>Sisters Are Doing It For Themselves</name>
    <album mbid=""></album>
  </track>
  <track>
    <artist mbid="e4a1cb2b-2ff2-4b0a-8d0c-8d7e1a4b4c5f">Nina Simone</artist>
    <name>Sinnerman</name>
    <album mbid="">Pastel Blues</album>
    <date uts="1213031819">9 Jun 2008, 17:16</date>
  </track>
</recenttracks></lfm>
"#;
