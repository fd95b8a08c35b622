use job_tracker::statistics::{AgeBucket, BucketCounts, DerivedStat, StatAdjuster, StatBaselines};

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn classification_covers_the_documented_ranges() {
    let cases = [
        (18..=21, AgeBucket::EarlyYouth),
        (22..=25, AgeBucket::MidYouth),
        (26..=30, AgeBucket::LateYouth),
    ];
    for (range, bucket) in cases {
        for age in range {
            assert_eq!(AgeBucket::classify(age), Some(bucket), "age {age}");
        }
    }

    for age in (0..=17).chain(31..=200) {
        assert!(AgeBucket::classify(age).is_none(), "age {age}");
    }
}

#[test]
fn zero_counts_reproduce_the_baselines() {
    let adjuster = StatAdjuster::default();
    let derived = adjuster.recompute(&BucketCounts::new());

    for bucket in AgeBucket::ordered() {
        assert_eq!(
            *derived.get(bucket),
            DerivedStat::from(adjuster.baselines().baseline(bucket)),
            "bucket {bucket}"
        );
    }
}

#[test]
fn percentages_never_go_negative() {
    let adjuster = StatAdjuster::default();
    for count in [0, 1, 7, 19, 20, 44, 45, 1_000, i64::MAX] {
        let counts = AgeBucket::ordered()
            .into_iter()
            .fold(BucketCounts::new(), |counts, bucket| counts.with(bucket, count));
        for (bucket, stat) in adjuster.recompute(&counts).iter() {
            assert!(stat.unemployment_pct >= 0.0, "{bucket} count {count}");
            assert!(stat.neet_pct >= 0.0, "{bucket} count {count}");
        }
    }
}

#[test]
fn underemployment_and_wage_pass_through() {
    let adjuster = StatAdjuster::default();
    for count in [0, 3, 50, 10_000] {
        let counts = BucketCounts::new()
            .with(AgeBucket::EarlyYouth, count)
            .with(AgeBucket::LateYouth, count * 2);
        for (bucket, stat) in adjuster.recompute(&counts).iter() {
            let baseline = adjuster.baselines().baseline(bucket);
            assert_eq!(stat.underemployment_pct, baseline.underemployment_pct);
            assert_eq!(stat.avg_wage_php, baseline.avg_wage_php);
        }
    }
}

#[test]
fn recompute_is_idempotent() {
    let adjuster = StatAdjuster::default();
    let counts = BucketCounts::new()
        .with(AgeBucket::EarlyYouth, 5)
        .with(AgeBucket::MidYouth, 2);

    assert_eq!(adjuster.recompute(&counts), adjuster.recompute(&counts));
}

#[test]
fn documented_scenarios_hold() {
    let adjuster = StatAdjuster::default();

    let early = adjuster.recompute(&BucketCounts::new().with(AgeBucket::EarlyYouth, 3));
    approx(early.get(AgeBucket::EarlyYouth).unemployment_pct, 13.45);
    approx(early.get(AgeBucket::EarlyYouth).neet_pct, 18.16);

    let late = adjuster.recompute(&BucketCounts::new().with(AgeBucket::LateYouth, 100));
    assert_eq!(late.get(AgeBucket::LateYouth).unemployment_pct, 0.0);
}

#[test]
fn custom_baselines_are_respected() {
    let stat = StatBaselines::standard().baseline(AgeBucket::MidYouth);
    let adjuster = StatAdjuster::new(StatBaselines::standard().with_entry(
        AgeBucket::MidYouth,
        stat,
        1.0,
    ));

    let derived = adjuster.recompute(&BucketCounts::new().with(AgeBucket::MidYouth, 2));
    approx(derived.get(AgeBucket::MidYouth).unemployment_pct, 7.8);
    approx(derived.get(AgeBucket::MidYouth).neet_pct, 12.0);
}
