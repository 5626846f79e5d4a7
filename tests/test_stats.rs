use chrono::{DateTime, Duration, Utc};
use record_store_be::models::rating::Rating;
use record_store_be::ratings::stats::{album_stats, user_stats};

fn now() -> DateTime<Utc> {
    "2026-08-30T12:00:00Z".parse().unwrap()
}

#[allow(clippy::too_many_arguments)]
fn make_rating(
    id: i64,
    user_id: i64,
    album_id: i64,
    score: i16,
    verified: bool,
    review_text_length: i32,
    helpful_votes: i32,
    unhelpful_votes: i32,
    age_days: i64,
) -> Rating {
    let created_at = now() - Duration::days(age_days);
    Rating {
        id,
        user_id,
        album_id,
        score,
        is_verified_purchase: verified,
        review_text_length,
        helpful_votes,
        unhelpful_votes,
        created_at,
        updated_at: created_at,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_album_stats_empty() {
    let stats = album_stats(1, &[], now()).unwrap();

    assert_eq!(stats.album_id, 1);
    assert_close(stats.weighted_rating, 0.0);
    assert_eq!(stats.rating_count, 0);
    assert_eq!(stats.verified_rating_count, 0);
    for score in 1..=5 {
        assert_eq!(stats.rating_distribution[&score], 0);
        assert_eq!(stats.verified_rating_distribution[&score], 0);
    }
}

#[test]
fn test_album_stats_rejects_non_positive_id() {
    assert!(album_stats(0, &[], now()).is_err());
    assert!(album_stats(-3, &[], now()).is_err());
}

#[test]
fn test_album_stats_single_fresh_verified_rating() {
    // Score 5, no votes, no text, age 0: quality is 0 on the weight side,
    // leaving just the 1.5 verified factor on a score of 5.
    let ratings = [make_rating(1, 10, 1, 5, true, 0, 0, 0, 0)];
    let stats = album_stats(1, &ratings, now()).unwrap();

    assert_close(stats.weighted_rating, 7.5);
    assert_eq!(stats.rating_count, 1);
    assert_eq!(stats.verified_rating_count, 1);
    assert_eq!(stats.rating_distribution[&5], 1);
    assert_eq!(stats.verified_rating_distribution[&5], 1);
}

#[test]
fn test_album_stats_mixed_ratings() {
    let ratings = [
        // quality = 0.7 * 0.5 + 0.3 = 0.65; weight = (1 + 1.0) * 1.65 = 3.3.
        make_rating(1, 10, 1, 4, false, 100, 5, 5, 0),
        // quality = 0.35; weight = 1.35.
        make_rating(2, 11, 1, 2, false, 0, 0, 0, 0),
    ];
    let stats = album_stats(1, &ratings, now()).unwrap();

    // (4 * 3.3 + 2 * 1.35) / 2 = (13.2 + 2.7) / 2.
    assert_close(stats.weighted_rating, 7.95);
    assert_eq!(stats.rating_count, 2);
    assert_eq!(stats.verified_rating_count, 0);
    assert_eq!(stats.rating_distribution[&4], 1);
    assert_eq!(stats.rating_distribution[&2], 1);
}

#[test]
fn test_album_stats_skips_corrupt_scores_everywhere() {
    let ratings = [
        make_rating(1, 10, 1, 5, true, 0, 0, 0, 0),
        // Out-of-range score: excluded from distribution, counts and average.
        make_rating(2, 11, 1, 9, true, 500, 3, 0, 0),
        make_rating(3, 12, 1, 0, false, 0, 0, 0, 0),
    ];
    let stats = album_stats(1, &ratings, now()).unwrap();

    assert_eq!(stats.rating_count, 1);
    assert_eq!(stats.verified_rating_count, 1);
    assert_close(stats.weighted_rating, 7.5);
    let total: i64 = stats.rating_distribution.values().sum();
    assert_eq!(total, 1);
}

#[test]
fn test_album_stats_idempotent() {
    let ratings = [
        make_rating(1, 10, 1, 3, false, 250, 2, 1, 40),
        make_rating(2, 11, 1, 5, true, 0, 12, 4, 200),
    ];
    let at = now();

    let first = album_stats(1, &ratings, at).unwrap();
    let second = album_stats(1, &ratings, at).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_album_stats_age_decays_weight() {
    let fresh = [make_rating(1, 10, 1, 4, false, 0, 0, 0, 0)];
    let aged = [make_rating(1, 10, 1, 4, false, 0, 0, 0, 300)];

    let fresh_stats = album_stats(1, &fresh, now()).unwrap();
    let aged_stats = album_stats(1, &aged, now()).unwrap();
    assert!(aged_stats.weighted_rating < fresh_stats.weighted_rating);
}

#[test]
fn test_user_stats_empty() {
    let stats = user_stats(7, &[]).unwrap();

    assert_eq!(stats.user_id, 7);
    assert_eq!(stats.total_ratings, 0);
    assert_close(stats.average_rating, 0.0);
    assert_eq!(stats.helpful_votes_received, 0);
    assert_eq!(stats.total_review_length, 0);
}

#[test]
fn test_user_stats_rejects_non_positive_id() {
    assert!(user_stats(0, &[]).is_err());
    assert!(user_stats(-1, &[]).is_err());
}

#[test]
fn test_user_stats_totals_and_average() {
    let ratings = [
        make_rating(1, 7, 1, 4, false, 120, 3, 1, 10),
        make_rating(2, 7, 2, 5, true, 80, 7, 0, 30),
        make_rating(3, 7, 3, 2, false, 0, 0, 2, 5),
    ];
    let stats = user_stats(7, &ratings).unwrap();

    assert_eq!(stats.total_ratings, 3);
    // (4 + 5 + 2) / 3 rounded to 2 decimals.
    assert_close(stats.average_rating, 3.67);
    assert_eq!(stats.helpful_votes_received, 10);
    assert_eq!(stats.total_review_length, 200);
    assert_eq!(stats.rating_distribution[&4], 1);
    assert_eq!(stats.rating_distribution[&5], 1);
    assert_eq!(stats.rating_distribution[&2], 1);
}

#[test]
fn test_user_stats_skips_corrupt_scores_from_totals() {
    let ratings = [
        make_rating(1, 7, 1, 4, false, 120, 3, 0, 0),
        make_rating(2, 7, 2, 11, false, 999, 50, 0, 0),
    ];
    let stats = user_stats(7, &ratings).unwrap();

    assert_eq!(stats.total_ratings, 1);
    assert_close(stats.average_rating, 4.0);
    assert_eq!(stats.helpful_votes_received, 3);
    assert_eq!(stats.total_review_length, 120);
}
