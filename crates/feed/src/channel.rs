//! Assembles the episode collection into an RSS channel.
//!
//! Feed-level metadata is templated from the show identifier and the fixed
//! application identity; each episode becomes one item whose guid and
//! enclosure are the audio URL.

use rozhlas::Episode;
use rss::extension::atom::{AtomExtensionBuilder, Link};
use rss::extension::itunes::ITunesChannelExtensionBuilder;
use rss::{Channel, ChannelBuilder, EnclosureBuilder, GuidBuilder, Item, ItemBuilder};

use crate::error::FeedError;
use crate::Result;

pub const APP_NAME: &str = "Cesky Rozhlas iRadio Podcast Enabler";
pub const APP_URL: &str = "https://app.evandar.cz/crofeed/";

const AUDIO_MIME: &str = "audio/mpeg";

/// Build the feed for `show_id` from a non-empty episode collection.
///
/// The channel's publish date is the newest episode's instant; an empty
/// collection cannot produce one and fails with [`FeedError::Empty`].
pub fn build_channel(episodes: &[Episode], show_id: &str, request_url: &str) -> Result<Channel> {
    let newest = episodes
        .iter()
        .map(|e| e.published)
        .max()
        .ok_or(FeedError::Empty)?;

    let items: Vec<Item> = episodes.iter().map(episode_item).collect();

    let title = format!("{}: {}", show_id, APP_NAME);
    let itunes = ITunesChannelExtensionBuilder::default()
        .subtitle(Some(title.clone()))
        .build();
    let self_link = Link {
        href: request_url.to_string(),
        rel: "self".to_string(),
        ..Default::default()
    };
    let atom = AtomExtensionBuilder::default().links(vec![self_link]).build();

    let channel = ChannelBuilder::default()
        .title(title)
        .link(format!("{}porad?id={}", APP_URL, show_id))
        .description(format!(
            "{}. Vytváří RSS podcast feed pro pořady, ke kterým je Český rozhlas na svém webu neposkytuje.",
            APP_NAME
        ))
        .language(Some("cs".to_string()))
        .copyright(Some(
            "Tato aplikace pouze na odkazuje na data Českého Rozhlasu.".to_string(),
        ))
        .pub_date(Some(newest.to_rfc2822()))
        .itunes_ext(Some(itunes))
        .atom_ext(Some(atom))
        .items(items)
        .build();

    Ok(channel)
}

/// Serialize the channel as pretty-printed XML.
pub fn render(channel: &Channel) -> Result<String> {
    let buf = channel.pretty_write_to(Vec::new(), b' ', 2)?;
    Ok(String::from_utf8(buf)?)
}

fn episode_item(episode: &Episode) -> Item {
    let guid = GuidBuilder::default()
        .value(episode.audio_url.clone())
        .permalink(false)
        .build();
    let enclosure = EnclosureBuilder::default()
        .url(episode.audio_url.clone())
        .length(episode.duration_secs.to_string())
        .mime_type(AUDIO_MIME)
        .build();

    // No long-form description upstream; the title doubles as both.
    ItemBuilder::default()
        .guid(Some(guid))
        .title(Some(episode.title.clone()))
        .description(Some(episode.title.clone()))
        .enclosure(Some(enclosure))
        .pub_date(Some(episode.published.to_rfc2822()))
        .build()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::Europe::Prague;

    use super::*;

    fn episode(title: &str, audio_url: &str, day: u32) -> Episode {
        Episode {
            title: title.to_string(),
            audio_url: audio_url.to_string(),
            published: Prague.with_ymd_and_hms(2023, 6, day, 10, 0, 0).unwrap(),
            duration_secs: 0,
        }
    }

    #[test]
    fn test_channel_pub_date_is_newest_episode() {
        let episodes = vec![
            episode("Starší", "https://media.rozhlas.cz/_audio/1.mp3", 1),
            episode("Novější", "https://media.rozhlas.cz/_audio/2.mp3", 3),
            episode("Prostřední", "https://media.rozhlas.cz/_audio/3.mp3", 2),
        ];
        let channel = build_channel(&episodes, "show", "/feed.xml").unwrap();
        assert_eq!(
            channel.pub_date(),
            Some(
                Prague
                    .with_ymd_and_hms(2023, 6, 3, 10, 0, 0)
                    .unwrap()
                    .to_rfc2822()
                    .as_str()
            )
        );
    }

    #[test]
    fn test_empty_collection_is_an_error() {
        let err = build_channel(&[], "show", "/feed.xml").unwrap_err();
        assert!(matches!(err, FeedError::Empty));
    }

    #[test]
    fn test_item_fields() {
        let episodes = vec![episode("Díl", "https://media.rozhlas.cz/_audio/5.mp3", 1)];
        let channel = build_channel(&episodes, "show", "/feed.xml").unwrap();

        assert_eq!(channel.items().len(), 1);
        let item = &channel.items()[0];
        assert_eq!(item.title(), Some("Díl"));
        assert_eq!(item.description(), Some("Díl"));

        let guid = item.guid().unwrap();
        assert_eq!(guid.value(), "https://media.rozhlas.cz/_audio/5.mp3");
        assert!(!guid.is_permalink());

        let enclosure = item.enclosure().unwrap();
        assert_eq!(enclosure.url(), "https://media.rozhlas.cz/_audio/5.mp3");
        assert_eq!(enclosure.length(), "0");
        assert_eq!(enclosure.mime_type(), "audio/mpeg");
    }

    #[test]
    fn test_channel_metadata_is_templated_from_show_id() {
        let episodes = vec![episode("Díl", "/a.mp3", 1)];
        let channel = build_channel(&episodes, "dvojka", "/feed.xml?id=dvojka").unwrap();

        assert_eq!(
            channel.title(),
            "dvojka: Cesky Rozhlas iRadio Podcast Enabler"
        );
        assert_eq!(
            channel.link(),
            "https://app.evandar.cz/crofeed/porad?id=dvojka"
        );
        assert_eq!(channel.language(), Some("cs"));
    }

    #[test]
    fn test_render_produces_rss_document() {
        let episodes = vec![episode("Díl", "https://media.rozhlas.cz/_audio/5.mp3", 1)];
        let channel = build_channel(&episodes, "show", "/feed.xml").unwrap();
        let xml = render(&channel).unwrap();

        assert!(xml.contains("<rss"));
        assert!(xml.contains("https://media.rozhlas.cz/_audio/5.mp3"));
        assert!(xml.contains("audio/mpeg"));
    }
}
