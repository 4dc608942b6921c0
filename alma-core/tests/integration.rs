//! Integration Tests — End-to-End Affect Flows
//!
//! These tests verify complete scenarios across modules:
//! personality → default mood, emotions → VEC, VEC + time → mood, mood → label.

use alma_core::config::OvershootPolicy;
use alma_core::dynamics::{self, MoodDynamics};
use alma_core::emotion::map_to_pad;
use alma_core::mood::classify;
use alma_core::personality::default_moods;
use alma_core::{
    AlmaConfig, AlmaError, EmotionAndIntensity, EmotionType, Intensity, MoodIntensity, OceanModel,
    PadModel, PadMoodOctant, VirtualEmotionCenter,
};

const TOLERANCE: f32 = 1e-2;

fn active(pairs: &[(EmotionType, f32)]) -> Vec<EmotionAndIntensity> {
    pairs
        .iter()
        .map(|&(emotion, intensity)| EmotionAndIntensity::try_new(emotion, intensity).unwrap())
        .collect()
}

fn assert_pad(actual: PadModel, p: f32, a: f32, d: f32) {
    assert!(
        (actual.pleasure - p).abs() < TOLERANCE
            && (actual.arousal - a).abs() < TOLERANCE
            && (actual.dominance - d).abs() < TOLERANCE,
        "expected P:{p}, A:{a}, D:{d}, got {actual}"
    );
}

// ---------------------------------------------------------------------------
// Full pipeline: personality + emotions → 20 simulated minutes → mood label
// ---------------------------------------------------------------------------

#[test]
fn twenty_minutes_of_hope_and_admiration_ends_moderately_relaxed() {
    const SIMULATED_SECONDS: u32 = 20 * 60;
    const TIME_STEP: u32 = 10;

    let personality = OceanModel::new(0.4, 0.8, 0.6, 0.3, 0.4).unwrap();
    let default_mood = personality.to_default_mood();
    let vec = VirtualEmotionCenter::aggregate(&active(&[
        (EmotionType::Hope, 0.5),
        (EmotionType::Admiration, 1.0),
    ]))
    .unwrap();

    let mut current = default_mood;
    for _ in (0..SIMULATED_SECONDS).step_by(TIME_STEP as usize) {
        current = current
            .apply_push_pull(&vec, TIME_STEP as f32)
            .apply_return_to_default(default_mood, TIME_STEP as f32);
    }

    let mood = current.to_mood();
    assert_eq!(mood.octant, PadMoodOctant::Relaxed);
    assert_eq!(mood.intensity, MoodIntensity::Moderately);
}

#[test]
fn engine_step_matches_chained_free_functions() {
    let personality = OceanModel::new(0.4, 0.8, 0.6, 0.3, 0.4).unwrap();
    let default_mood = personality.to_default_mood();
    let vec = VirtualEmotionCenter::aggregate(&active(&[(EmotionType::Fear, 0.9)])).unwrap();
    let engine = MoodDynamics::default();

    let mut chained = default_mood;
    let mut stepped = default_mood;
    for _ in 0..60 {
        chained = chained
            .apply_push_pull(&vec, 10.0)
            .apply_return_to_default(default_mood, 10.0);
        stepped = engine.step(stepped, default_mood, Some(&vec), 10.0);
    }
    assert_eq!(chained, stepped);
}

// ---------------------------------------------------------------------------
// Personality → default mood
// ---------------------------------------------------------------------------

#[test]
fn personality_maps_to_reference_default_mood() {
    let personality = OceanModel::new(0.4, 0.8, 0.6, 0.3, 0.4).unwrap();
    assert_pad(personality.to_default_mood(), 0.38, -0.08, 0.50);
}

#[test]
fn batch_conversion_matches_single_conversion() {
    let people = vec![
        OceanModel::new(0.4, 0.8, 0.6, 0.3, 0.4).unwrap(),
        OceanModel::new(-1.0, -1.0, -1.0, -1.0, -1.0).unwrap(),
        OceanModel::new(1.0, 0.0, -0.5, 0.25, -0.75).unwrap(),
    ];
    let moods = default_moods(&people);
    assert_eq!(moods.len(), people.len());
    for (person, mood) in people.iter().zip(&moods) {
        assert_eq!(person.to_default_mood(), *mood);
    }
}

#[test]
fn out_of_range_trait_is_a_construction_error() {
    let err = OceanModel::new(0.0, 0.0, 0.0, 0.0, -1.5).unwrap_err();
    assert!(matches!(err, AlmaError::RangeViolation { scalar: "trait", .. }));
}

// ---------------------------------------------------------------------------
// Emotion → PAD table
// ---------------------------------------------------------------------------

#[test]
fn every_emotion_maps_to_its_table_entry() {
    let table = [
        (EmotionType::None, 0.0, 0.0, 0.0),
        (EmotionType::Admiration, 0.5, 0.3, -0.2),
        (EmotionType::Anger, -0.51, 0.59, 0.25),
        (EmotionType::Disliking, -0.4, 0.2, 0.1),
        (EmotionType::Disappointment, -0.3, 0.1, -0.4),
        (EmotionType::Distress, -0.4, -0.2, -0.5),
        (EmotionType::Fear, -0.64, 0.6, -0.43),
        (EmotionType::FearsConfirmed, -0.5, -0.3, -0.7),
        (EmotionType::Gloating, 0.3, -0.3, -0.1),
        (EmotionType::Gratification, 0.6, 0.5, 0.4),
        (EmotionType::Gratitude, 0.4, 0.2, -0.3),
        (EmotionType::HappyFor, 0.4, 0.2, 0.2),
        (EmotionType::Hate, -0.6, 0.6, 0.3),
        (EmotionType::Hope, 0.2, 0.2, -0.1),
        (EmotionType::Joy, 0.4, 0.2, 0.1),
        (EmotionType::Liking, 0.4, 0.16, -0.24),
        (EmotionType::Love, 0.3, 0.1, 0.2),
        (EmotionType::Pity, -0.4, -0.2, -0.5),
        (EmotionType::Pride, 0.4, 0.3, 0.3),
        (EmotionType::Relief, 0.2, -0.3, 0.4),
        (EmotionType::Remorse, -0.3, 0.1, -0.6),
        (EmotionType::Reproach, -0.3, -0.1, 0.4),
        (EmotionType::Resentment, -0.2, -0.3, -0.2),
        (EmotionType::Satisfaction, 0.3, -0.2, 0.4),
        (EmotionType::Shame, -0.3, 0.1, -0.6),
    ];

    assert_eq!(table.len(), EmotionType::ALL.len());
    for (emotion, p, a, d) in table {
        assert_eq!(map_to_pad(emotion), PadModel::new(p, a, d), "{emotion}");
    }
}

#[test]
fn raw_value_outside_the_table_is_unmapped() {
    assert!(matches!(
        EmotionType::try_from(25_u8),
        Err(AlmaError::UnmappedCategory(_))
    ));
    assert!(matches!(
        "Ennui".parse::<EmotionType>(),
        Err(AlmaError::UnmappedCategory(_))
    ));
}

// ---------------------------------------------------------------------------
// Virtual emotion center
// ---------------------------------------------------------------------------

#[test]
fn vec_of_two_emotions() {
    let vec = VirtualEmotionCenter::aggregate(&active(&[
        (EmotionType::Hope, 0.5),
        (EmotionType::Admiration, 1.0),
    ]))
    .unwrap();

    assert!((vec.intensity.value() - 0.75).abs() < TOLERANCE);
    assert_pad(vec.center, 0.7, 0.5, -0.3);
}

#[test]
fn vec_of_many_emotions_clamps_saturated_axes() {
    let vec = VirtualEmotionCenter::aggregate(&active(&[
        (EmotionType::Admiration, 0.5),
        (EmotionType::Gratification, 1.0),
        (EmotionType::Gratitude, 0.5),
        (EmotionType::HappyFor, 1.0),
        (EmotionType::Joy, 0.5),
        (EmotionType::Liking, 1.0),
        (EmotionType::Pride, 0.75),
    ]))
    .unwrap();

    assert!((vec.intensity.value() - 0.75).abs() < TOLERANCE);
    assert_eq!(vec.center.pleasure, 1.0);
    assert_eq!(vec.center.arousal, 1.0);
    assert!((vec.center.dominance - 0.26).abs() < TOLERANCE);
}

#[test]
fn no_active_emotions_means_no_vec() {
    assert!(matches!(
        VirtualEmotionCenter::aggregate(&[]),
        Err(AlmaError::EmptyAggregation)
    ));
}

// ---------------------------------------------------------------------------
// Mood dynamics
// ---------------------------------------------------------------------------

#[test]
fn pull_phase() {
    let vec = VirtualEmotionCenter::new(PadModel::new(0.5, 0.0, 0.0), Intensity::new(0.5).unwrap());
    assert_pad(PadModel::ORIGIN.apply_push_pull(&vec, 300.0), 0.25, 0.0, 0.0);
}

#[test]
fn push_phase() {
    let vec = VirtualEmotionCenter::new(PadModel::new(0.25, 0.0, 0.0), Intensity::new(0.5).unwrap());
    assert_pad(PadModel::new(0.5, 0.0, 0.0).apply_push_pull(&vec, 300.0), 0.75, 0.0, 0.0);
}

#[test]
fn return_to_default_mood() {
    let mood = PadModel::new(1.0, 0.0, 0.0).apply_return_to_default(PadModel::ORIGIN, 600.0);
    assert_pad(mood, 1.0 - 3.0_f32.sqrt() / 2.0, 0.0, 0.0);
}

#[test]
fn one_long_step_equals_many_short_steps_along_a_line() {
    let start = PadModel::new(1.0, 0.0, 0.0);
    let once = dynamics::apply_return_to_default(start, PadModel::ORIGIN, 300.0);
    let mut many = start;
    for _ in 0..30 {
        many = dynamics::apply_return_to_default(many, PadModel::ORIGIN, 10.0);
    }
    assert_pad(once, many.pleasure, many.arousal, many.dominance);
}

#[test]
fn bounded_overshoot_policy_from_config() {
    let config = AlmaConfig::from_toml("[dynamics]\novershoot = \"bounded\"\n").unwrap();
    let engine = MoodDynamics::from(&config.dynamics);
    assert_eq!(engine.overshoot(), OvershootPolicy::Bounded);

    let settled = engine.return_to_default(PadModel::new(1.0, 0.0, 0.0), PadModel::ORIGIN, 86_400.0);
    assert_pad(settled, 0.0, 0.0, 0.0);
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn classifier_reference_points() {
    let slight = classify(&PadModel::new(0.25, -0.18, 0.12));
    assert_eq!(slight.octant, PadMoodOctant::Relaxed);
    assert_eq!(slight.intensity, MoodIntensity::Slightly);

    let moderate = classify(&PadModel::new(0.38, -0.08, 0.50));
    assert_eq!(moderate.octant, PadMoodOctant::Relaxed);
    assert_eq!(moderate.intensity, MoodIntensity::Moderately);

    let exuberant = classify(&PadModel::new(0.35, 0.39, 0.34));
    assert_eq!(exuberant.octant, PadMoodOctant::Exuberant);
    assert_eq!(exuberant.intensity, MoodIntensity::Moderately);
}

// ---------------------------------------------------------------------------
// Snapshots: values survive a serde round trip
// ---------------------------------------------------------------------------

#[test]
fn vec_and_mood_serialize_to_json() {
    let vec = VirtualEmotionCenter::aggregate(&active(&[(EmotionType::Joy, 0.4)])).unwrap();
    let json = serde_json::to_string(&vec).unwrap();
    let restored: VirtualEmotionCenter = serde_json::from_str(&json).unwrap();
    assert_eq!(vec, restored);

    let mood = PadModel::new(-0.5, 0.5, 0.5).to_mood();
    let json = serde_json::to_string(&mood).unwrap();
    assert!(json.contains("Hostile"));
}

#[test]
fn emotions_deserialize_by_name() {
    let parsed: Vec<EmotionAndIntensity> = serde_json::from_str(
        r#"[{"emotion":"Hope","intensity":0.5},{"emotion":"happy_for","intensity":1.0}]"#,
    )
    .unwrap();
    assert_eq!(parsed[0].emotion, EmotionType::Hope);
    assert_eq!(parsed[1].emotion, EmotionType::HappyFor);

    let bad = serde_json::from_str::<EmotionAndIntensity>(r#"{"emotion":"Hope","intensity":2.0}"#);
    assert!(bad.is_err());
}
