use alert_internal::alarm::{AlarmBand, Branches, Thresholds};

#[test]
pub fn near_covers_everything_up_to_five_meters(){
    let t = Thresholds::default();
    for d in [0u16, 1, 150, 299, 300, 301, 450, 500]{
        assert!(t.branches(d).near, "{} cm should be near", d);
    }
    assert!(!t.branches(501).near);
    assert!(!t.branches(u16::MAX).near);
}

#[test]
pub fn caution_band_is_inclusive(){
    let t = Thresholds::default();
    assert_eq!(t.branches(500), Branches{near: true, caution: true, danger: false});
    assert_eq!(t.branches(400), Branches{near: true, caution: true, danger: false});
    assert_eq!(t.branches(301), Branches{near: true, caution: true, danger: false});
}

#[test]
pub fn bands_overlap_at_the_shared_boundary(){
    let t = Thresholds::default();
    assert_eq!(t.branches(300), Branches{near: true, caution: true, danger: true});
}

#[test]
pub fn below_the_boundary_only_danger_runs(){
    let t = Thresholds::default();
    assert_eq!(t.branches(299), Branches{near: true, caution: false, danger: true});
    assert_eq!(t.branches(150), Branches{near: true, caution: false, danger: true});
    // A sensor timeout reads as zero and is treated as very near
    assert_eq!(t.branches(0), Branches{near: true, caution: false, danger: true});
}

#[test]
pub fn far_readings_match_nothing(){
    let t = Thresholds::default();
    assert_eq!(t.branches(600), Branches::default());
}

#[test]
pub fn reported_band_prefers_caution_on_the_boundary(){
    let t = Thresholds::default();
    assert_eq!(t.band(600), AlarmBand::Safe);
    assert_eq!(t.band(500), AlarmBand::Caution);
    assert_eq!(t.band(300), AlarmBand::Caution);
    assert_eq!(t.band(299), AlarmBand::Danger);
    assert_eq!(t.band(0), AlarmBand::Danger);
}

#[test]
pub fn custom_thresholds(){
    let t = Thresholds{near_cm: 200, caution_min_cm: 100, danger_max_cm: 50};
    assert_eq!(t.band(150), AlarmBand::Caution);
    // Gap between the bands is near but neither caution nor danger
    assert_eq!(t.branches(75), Branches{near: true, caution: false, danger: false});
    assert_eq!(t.band(75), AlarmBand::Safe);
    assert_eq!(t.band(50), AlarmBand::Danger);
}
