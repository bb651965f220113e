use serde::{Deserialize, Deserializer, Serialize};

use crate::api::ApiError;
use crate::utils::{format_duration, format_published_short, parse_published_at};

/// A playable episode, the only shape the player ever sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Episode {
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    /// Length in whole seconds.
    pub duration: u32,
    pub url: String,
}

/// Episode record as served by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: String,
    #[serde(alias = "publishedAt")]
    pub published_at: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    pub file: EpisodeFile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeFile {
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_seconds")]
    pub duration: u32,
}

/// Page-level view of an episode: the playable part plus what the listing
/// and detail pages print around it.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeDetails {
    pub id: String,
    pub episode: Episode,
    pub published_at: String,
    pub description: String,
    pub duration_label: String,
}

impl TryFrom<EpisodeRecord> for EpisodeDetails {
    type Error = ApiError;

    fn try_from(record: EpisodeRecord) -> Result<Self, Self::Error> {
        let published = parse_published_at(&record.published_at)
            .ok_or_else(|| ApiError::InvalidDate(record.published_at.clone()))?;
        let duration = record.file.duration;

        Ok(Self {
            id: record.id,
            episode: Episode {
                title: record.title,
                members: record.members,
                thumbnail: record.thumbnail,
                duration,
                url: record.file.url,
            },
            published_at: format_published_short(published.date()),
            description: record.description,
            duration_label: format_duration(duration),
        })
    }
}

// Some backends send the duration as a string, others as a float.
fn deserialize_seconds<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let seconds = match &value {
        serde_json::Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok().and_then(|f| {
            if f.is_finite() && f >= 0.0 {
                Some(f as u64)
            } else {
                None
            }
        }),
        serde_json::Value::Null => Some(0),
        _ => None,
    };

    seconds
        .and_then(|s| u32::try_from(s).ok())
        .ok_or_else(|| serde::de::Error::custom(format!("invalid duration: {value}")))
}
