// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Length of a `YouTube` video id.
const YOUTUBE_ID_LEN: usize = 11;

/// URL fragments that precede a `YouTube` video id.
const YOUTUBE_MARKERS: &[&str] = &["youtube.com/watch?v=", "youtube.com/embed/", "youtu.be/"];

/// How a course preview video is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoEmbed {
    /// A `YouTube` video, played through the embed player.
    YouTube {
        /// The 11-character video id.
        id: String,
    },
    /// Any other URL, played directly as a video source.
    Direct {
        /// The source URL.
        url: String,
    },
}

impl VideoEmbed {
    /// Resolves a preview URL.
    ///
    /// Watch, embed, and short `YouTube` links are recognized anywhere in the
    /// string, with or without scheme and `www.`.
    #[must_use]
    pub fn resolve(url: &str) -> Self {
        YOUTUBE_MARKERS
            .iter()
            .find_map(|marker| youtube_id_after(url, marker))
            .map_or_else(
                || Self::Direct {
                    url: url.to_string(),
                },
                |id| Self::YouTube { id },
            )
    }

    /// Returns the URL to load in the player.
    #[must_use]
    pub fn player_url(&self) -> String {
        match self {
            Self::YouTube { id } => format!("https://www.youtube.com/embed/{id}?autoplay=1"),
            Self::Direct { url } => url.clone(),
        }
    }
}

fn youtube_id_after(url: &str, marker: &str) -> Option<String> {
    url.match_indices(marker).find_map(|(idx, _)| {
        let rest: &str = &url[idx + marker.len()..];
        let id: String = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .take(YOUTUBE_ID_LEN)
            .collect();
        (id.len() == YOUTUBE_ID_LEN).then_some(id)
    })
}
