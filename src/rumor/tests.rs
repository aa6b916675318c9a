//! Unit tests for rumor intake

use super::*;
use crate::social::testing::RecordingSocial;
use crate::social::DirectMessage;
use crate::INDICATOR;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn follower(id: &str) -> Follower {
    Follower {
        id: id.to_string(),
        name: format!("Fan {id}"),
    }
}

fn dm(sender: &str, text: &str) -> DirectMessage {
    DirectMessage {
        sender_id: sender.to_string(),
        text: text.to_string(),
    }
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_rumor_case_insensitive() {
        assert_eq!(
            parse_rumor("rumor trade rumors are heating up"),
            Some("trade rumors are heating up")
        );
        assert_eq!(parse_rumor("RUMOR big news"), Some("big news"));
        assert_eq!(parse_rumor("RuMoR mixed case"), Some("mixed case"));
    }

    #[test]
    fn test_parse_rumor_without_prefix() {
        assert_eq!(parse_rumor("hello there"), None);
        assert_eq!(parse_rumor("RUMORless message"), None);
        assert_eq!(parse_rumor(""), None);
        assert_eq!(parse_rumor("RUMOR"), None);
    }

    #[test]
    fn test_parse_rumor_preserves_remainder_verbatim() {
        assert_eq!(parse_rumor("RUMOR  two spaces"), Some(" two spaces"));
    }

    #[test]
    fn test_paraphrase_is_deterministic_for_fixed_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first = paraphrase(&mut a, "the commish is asleep");
        let second = paraphrase(&mut b, "the commish is asleep");
        assert_eq!(first, second);
        assert!(first.contains("\"the commish is asleep\""));
    }
}

#[cfg(test)]
mod scan_tests {
    use super::*;

    #[tokio::test]
    async fn test_indicator_bounds_collection_and_ack_sent_once() {
        // Feed is newest-first; everything at or below the ack is old news.
        let social = RecordingSocial::new()
            .with_followers(vec![follower("f1")])
            .with_dm_feed(
                "f1",
                vec![
                    dm("f1", "RUMOR second fresh"),
                    dm("f1", "RUMOR first fresh"),
                    dm("bot", &format!("Got it! {INDICATOR}")),
                    dm("f1", "RUMOR already processed"),
                ],
            );

        let mut rng = StdRng::seed_from_u64(1);
        let posted = scan_dms(&social, &social.followers().await.unwrap(), INDICATOR, &mut rng)
            .await
            .unwrap();

        assert_eq!(posted, 2);
        let posts = social.posts();
        assert_eq!(posts.len(), 2);
        // Oldest collected message is processed first.
        assert!(posts[0].contains("\"first fresh\""));
        assert!(posts[1].contains("\"second fresh\""));

        let acks = social.sent_dms();
        assert_eq!(acks.len(), 1);
        assert_eq!(acks[0].0, "f1");
        assert!(acks[0].1.contains(INDICATOR));
    }

    #[tokio::test]
    async fn test_no_pending_messages_sends_no_ack() {
        let social = RecordingSocial::new()
            .with_followers(vec![follower("f1")])
            .with_dm_feed("f1", vec![dm("bot", &format!("Got it! {INDICATOR}"))]);

        let mut rng = StdRng::seed_from_u64(1);
        let posted = scan_dms(&social, &social.followers().await.unwrap(), INDICATOR, &mut rng)
            .await
            .unwrap();

        assert_eq!(posted, 0);
        assert!(social.posts().is_empty());
        assert!(social.sent_dms().is_empty());
    }

    #[tokio::test]
    async fn test_non_rumor_messages_acked_but_not_posted() {
        let social = RecordingSocial::new()
            .with_followers(vec![follower("f1")])
            .with_dm_feed("f1", vec![dm("f1", "hey great bot!")]);

        let mut rng = StdRng::seed_from_u64(1);
        let posted = scan_dms(&social, &social.followers().await.unwrap(), INDICATOR, &mut rng)
            .await
            .unwrap();

        assert_eq!(posted, 0);
        assert!(social.posts().is_empty());
        // The boundary still advances so the message is not re-read next scan.
        assert_eq!(social.sent_dms().len(), 1);
    }

    #[tokio::test]
    async fn test_publish_failure_skips_message_and_continues() {
        let social = RecordingSocial::new()
            .with_followers(vec![follower("f1")])
            .with_dm_feed("f1", vec![dm("f1", "RUMOR unpublishable")])
            .failing_publish();

        let mut rng = StdRng::seed_from_u64(1);
        let posted = scan_dms(&social, &social.followers().await.unwrap(), INDICATOR, &mut rng)
            .await
            .unwrap();

        assert_eq!(posted, 0);
    }

    #[tokio::test]
    async fn test_multiple_followers_counted_together() {
        let social = RecordingSocial::new()
            .with_followers(vec![follower("f1"), follower("f2")])
            .with_dm_feed("f1", vec![dm("f1", "RUMOR from fan one")])
            .with_dm_feed("f2", vec![dm("f2", "RUMOR from fan two")]);

        let mut rng = StdRng::seed_from_u64(1);
        let posted = scan_dms(&social, &social.followers().await.unwrap(), INDICATOR, &mut rng)
            .await
            .unwrap();

        assert_eq!(posted, 2);
        assert_eq!(social.sent_dms().len(), 2);
    }
}
