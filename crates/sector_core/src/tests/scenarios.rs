use super::*;

#[test]
fn single_event_is_padded_with_filler() {
    let events = compute_sector_events(&ranges(&[("HOSTILE", 5, 5)]), &test_config()).unwrap();

    assert_eq!(events.len(), 2);
    let hostile = event(&events, "HOSTILE");
    assert_eq!(hostile.pmf, Pmf::point(5));
    assert_close(hostile.probability.expected_slots, 5.0);
    assert_close(hostile.probability.slot_probability, 0.25);
    assert_close(
        hostile.probability.traversal_probability,
        1.0 - 455.0 / 125_970.0,
    );

    let neutral = event(&events, "NEUTRAL");
    assert_eq!(neutral.pmf, Pmf::point(15));
    assert_close(neutral.probability.expected_slots, 15.0);
    assert_close(neutral.probability.traversal_probability, 1.0);
}

#[test]
fn exactly_full_pool_keeps_both_events_whole() {
    let events = compute_sector_events(
        &ranges(&[("HOSTILE", 10, 10), ("MERCHANT", 10, 10)]),
        &test_config(),
    )
    .unwrap();

    assert_eq!(events.len(), 2, "no filler expected: {events:?}");
    assert_eq!(event(&events, "HOSTILE").pmf, Pmf::point(10));
    assert_eq!(event(&events, "MERCHANT").pmf, Pmf::point(10));
}

#[test]
fn oversubscribed_pool_drops_instances_from_both() {
    let events = compute_sector_events(
        &ranges(&[("HOSTILE", 15, 15), ("MERCHANT", 15, 15)]),
        &test_config(),
    )
    .unwrap();

    assert_eq!(events.len(), 2);
    for result in &events {
        assert_mass_one(&result.pmf, &result.key);
        let below: f64 = result
            .pmf
            .iter()
            .filter(|&(n, _)| n < 15)
            .map(|(_, mass)| mass)
            .sum();
        assert!(below > 0.0, "{} kept all instances", result.key);
        assert_close(result.probability.expected_slots, 10.0);
    }
}

#[test]
fn declared_filler_absorbs_unclaimed_beacons() {
    let events = compute_sector_events(
        &ranges(&[("HOSTILE", 6, 6), ("NEUTRAL", 4, 4)]),
        &test_config(),
    )
    .unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(event(&events, "NEUTRAL").pmf, Pmf::point(14));
}

#[test]
fn custom_filler_key_and_sector_size() {
    let config = SectorConfig {
        total_slots: 10,
        traversal_length: 6,
        filler_key: "NEUTRAL_CIVILIAN".to_string(),
    };
    let events = compute_sector_events(&ranges(&[("STORE", 1, 3)]), &config).unwrap();

    let filler = event(&events, "NEUTRAL_CIVILIAN");
    assert_eq!(filler.pmf.support().collect::<Vec<_>>(), vec![7, 8, 9]);
    assert_close(filler.probability.expected_slots, 8.0);
}

#[test]
fn zero_range_reaching_the_builder_is_an_error() {
    let err = compute_sector_events(&ranges(&[("NEVER", 0, 0)]), &test_config()).unwrap_err();
    assert!(matches!(err, EngineError::InvalidRange { .. }));
}

#[test]
fn invalid_config_is_rejected_before_any_work() {
    let config = SectorConfig {
        traversal_length: 30,
        ..test_config()
    };
    let err = compute_sector_events(&ranges(&[("STORE", 1, 2)]), &config).unwrap_err();
    assert_eq!(err.stable_code(), "SECTOR-1005");
}

#[test]
fn every_result_is_a_proper_distribution() {
    let region = civilian_region();
    let events = compute_sector_events(&region.events, &test_config()).unwrap();

    assert_eq!(events.len(), region.events.len() + 1);
    for result in &events {
        assert_mass_one(&result.pmf, &result.key);
        let p = result.probability;
        assert!(p.expected_slots >= 0.0);
        assert!((0.0..=1.0).contains(&p.slot_probability));
        assert!((0.0..=1.0).contains(&p.traversal_probability));
    }
}
