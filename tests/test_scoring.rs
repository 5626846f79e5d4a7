use record_store_be::ratings::score::{review_quality, weighted_score};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_review_quality_stays_in_unit_interval() {
    let cases = [
        (0, 0, 0),
        (0, 0, 5000),
        (1, 0, 0),
        (0, 1, 0),
        (10, 0, 100),
        (0, 10, 100),
        (3, 7, 1999),
        (100, 1, 2001),
    ];

    for (helpful, unhelpful, length) in cases {
        let quality = review_quality(helpful, unhelpful, length).unwrap();
        assert!(
            (0.0..=1.0).contains(&quality),
            "quality {} out of range for ({}, {}, {})",
            quality,
            helpful,
            unhelpful,
            length
        );
    }
}

#[test]
fn test_review_quality_neutral_prior() {
    // No votes and no text: 0.5 helpfulness prior weighted at 0.7.
    assert_close(review_quality(0, 0, 0).unwrap(), 0.35);
}

#[test]
fn test_review_quality_length_bands() {
    // Below minimum length the score ramps linearly.
    assert_close(review_quality(0, 0, 5).unwrap(), 0.35 + 0.3 * 0.5);

    // Anywhere in [10, 2000] the length score is 1.0.
    assert_close(review_quality(0, 0, 10).unwrap(), 0.65);
    assert_close(review_quality(0, 0, 2000).unwrap(), 0.65);

    // Past the maximum it decays as max/length.
    assert_close(review_quality(0, 0, 4000).unwrap(), 0.35 + 0.3 * 0.5);
    assert_close(review_quality(0, 0, 20000).unwrap(), 0.38);

    // 2001 characters sits just under the flat band, before rounding.
    let just_over = review_quality(73, 27, 2001).unwrap();
    let at_max = review_quality(73, 27, 2000).unwrap();
    assert!(just_over <= at_max);
}

#[test]
fn test_review_quality_helpfulness_ratio() {
    // 9 of 10 votes helpful, text comfortably in the flat band.
    assert_close(review_quality(9, 1, 100).unwrap(), 0.93);

    // All votes unhelpful, no text.
    assert_close(review_quality(0, 10, 0).unwrap(), 0.0);
}

#[test]
fn test_review_quality_rejects_negative_inputs() {
    assert!(review_quality(-1, 0, 0).is_err());
    assert!(review_quality(0, -1, 0).is_err());
    assert!(review_quality(0, 0, -1).is_err());
}

#[test]
fn test_weighted_score_baseline() {
    // No verified bonus, no votes, zero quality, fresh rating: weight is 1.0.
    assert_close(weighted_score(5, 0, false, 0.0, 0).unwrap(), 5.0);
}

#[test]
fn test_weighted_score_all_factors_maxed() {
    // 1.5 * (1 + 2.0) * (1 + 1.0) * 1.0 = 9.0 weight on a score of 5.
    assert_close(weighted_score(5, 100, true, 1.0, 0).unwrap(), 45.0);
}

#[test]
fn test_weighted_score_verified_bonus() {
    assert_close(weighted_score(5, 0, true, 0.0, 0).unwrap(), 7.5);
}

#[test]
fn test_weighted_score_vote_bonus_caps_at_two() {
    // 20 votes and 2000 votes both hit the +2.0 cap.
    let at_cap = weighted_score(4, 20, false, 0.0, 0).unwrap();
    let far_past_cap = weighted_score(4, 2000, false, 0.0, 0).unwrap();
    assert_close(at_cap, 12.0);
    assert_close(far_past_cap, 12.0);
}

#[test]
fn test_weighted_score_age_penalty_floor() {
    // Half strength after a year, and no further decay after ten.
    assert_close(weighted_score(4, 0, false, 0.0, 365).unwrap(), 2.0);
    assert_close(weighted_score(4, 0, false, 0.0, 3650).unwrap(), 2.0);

    // Half a year in, the penalty is still above the floor.
    let half_year = weighted_score(4, 0, false, 0.0, 182).unwrap();
    assert!(half_year > 2.0);
}

#[test]
fn test_weighted_score_rejects_out_of_range_score() {
    for score in [0, 6, -1, 100] {
        let result = weighted_score(score, 0, false, 0.0, 0);
        assert!(result.is_err(), "score {} should be rejected", score);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Rating must be between 1 and 5")
        );
    }
}
