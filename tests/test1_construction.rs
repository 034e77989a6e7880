use chrono::{Local, TimeZone};
use speedgolf_score::{ScoreError, SpeedgolfScore};

#[test]
fn test1_field_scores_are_always_valid() {
    for m in [-1000, -61, -1, 0, 1, 59, 134, 1000] {
        for s in [-121, -60, -1, 0, 1, 59, 60, 121] {
            let score = SpeedgolfScore::new(m, s);
            assert!(score.is_valid(), "({m}, {s})");
            assert_eq!(score.is_under_par(), Some(m < 0 || s < 0), "({m}, {s})");
        }
    }
}

#[test]
fn test1_duration_from_local_times() {
    // the driver round: tee off at 10:50 local, hole out 64 minutes later
    let start = Local.with_ymd_and_hms(2019, 3, 8, 10, 50, 0).unwrap();
    let finish = Local.with_ymd_and_hms(2019, 3, 8, 11, 54, 42).unwrap();
    let duration = SpeedgolfScore::from_instants(&start, &finish);
    assert_eq!(duration.to_string(), "64:42");
    assert_eq!(duration.is_under_par(), Some(false));
}

#[test]
fn test1_duration_rejects_reversed_instants() {
    let start = Local.with_ymd_and_hms(2019, 3, 8, 10, 50, 0).unwrap();
    let finish = Local.with_ymd_and_hms(2019, 3, 8, 10, 0, 0).unwrap();
    assert_eq!(
        SpeedgolfScore::try_from_instants(&start, &finish),
        Err(ScoreError::UnorderedInstants)
    );
    let invalid = SpeedgolfScore::from_instants(&start, &finish);
    assert!(!invalid.is_valid());
    assert_eq!(invalid.to_string(), "Invalid Speedgolf Score");
}

#[test]
fn test1_string_scores() {
    let cases = [
        ("3:10", Some((3, 10)), Some(false)),
        ("-3:45", Some((-3, -45)), Some(true)),
        ("-0:05", Some((0, -5)), Some(true)),
        ("999:59", Some((999, 59)), Some(false)),
        ("Even", Some((0, 0)), Some(false)),
        ("1:2", None, None),
        ("12:61", None, None),
        ("three:10", None, None),
    ];
    for (text, fields, under_par) in cases {
        let score = SpeedgolfScore::from_string(text);
        assert_eq!(score.fields(), fields, "{text}");
        assert_eq!(score.is_under_par(), under_par, "{text}");
        assert_eq!(score.is_valid(), fields.is_some(), "{text}");
    }
}

#[test]
fn test1_string_round_trip() {
    for m in [-999, -134, -7, -1, 0, 1, 7, 64, 134, 999] {
        for s in [0, 1, 9, 10, 30, 59] {
            let original = SpeedgolfScore::new(m, s);
            let reparsed = SpeedgolfScore::from_string(&original.to_string());
            assert_eq!(
                reparsed.is_equal_to(&original),
                Some(true),
                "({m}, {s}) rendered as {original}"
            );
        }
    }
}

#[test]
fn test1_even_is_never_numeric() {
    assert_eq!(SpeedgolfScore::new(0, 0).to_string(), "Even");
    assert_eq!(SpeedgolfScore::from_string("0:00").to_string(), "Even");
    assert_eq!(SpeedgolfScore::default().to_string(), "Even");
}
