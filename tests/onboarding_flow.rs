//! Integration tests for the onboarding flow.
//!
//! These tests drive the controller through its public API with in-memory
//! adapters and verify:
//! 1. Navigation bounds and completion percentages
//! 2. Recommendation batches at trigger steps
//! 3. Completion analytics and profile submission
//! 4. Patch merge semantics

use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;

use onboarding_wizard::adapters::{
    InMemoryEventBus, InMemoryProfileSink, SimulatedRecommendationProvider,
    StaticRecommendationProvider,
};
use onboarding_wizard::application::OnboardingController;
use onboarding_wizard::domain::foundation::{OnboardingId, Percentage};
use onboarding_wizard::domain::onboarding::{
    reduce, CriticalFieldTable, FlowRules, OnboardingAction, OnboardingState,
};
use onboarding_wizard::domain::profile::{
    CefrLevel, GoalsPatch, IdentityPatch, ProfilePatch, SkillArea, TimeToGoal, UserProfile,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    controller: OnboardingController,
    sink: Arc<InMemoryProfileSink>,
    bus: Arc<InMemoryEventBus>,
}

fn harness(provider: Arc<dyn onboarding_wizard::ports::RecommendationProvider>) -> Harness {
    let sink = Arc::new(InMemoryProfileSink::new());
    let bus = Arc::new(InMemoryEventBus::new());
    let controller =
        OnboardingController::new(FlowRules::default(), provider, sink.clone(), bus.clone());
    Harness {
        controller,
        sink,
        bus,
    }
}

async fn advance_to(controller: &OnboardingController, step: u8) {
    while controller.snapshot().await.step().current() < step {
        controller.next().await.unwrap();
    }
}

// =============================================================================
// Navigation
// =============================================================================

#[tokio::test(start_paused = true)]
async fn three_nexts_from_step_four_reach_step_seven_with_business_batch() {
    let h = harness(Arc::new(SimulatedRecommendationProvider::default()));
    h.controller
        .update_profile(ProfilePatch::goals(
            GoalsPatch::default().primary_goals(vec!["business_english".into()]),
        ))
        .await
        .unwrap();
    advance_to(&h.controller, 4).await;

    for _ in 0..3 {
        h.controller.next().await.unwrap();
    }
    let state = h.controller.snapshot().await;
    assert_eq!(state.step().current(), 7);
    assert_eq!(state.profile().onboarding_step(), 7);
    assert_eq!(state.profile().analytics().completion_percentage, Percentage::new(35));

    h.controller.wait_for_recommendations().await.unwrap();
    let state = h.controller.snapshot().await;
    let batch = &state.profile().analytics().ai_recommendations;
    assert!(!batch.is_empty());
    for expected in [
        "Focus on business vocabulary and professional communication",
        "Add daily conversation practice to build speaking confidence",
    ] {
        assert!(batch.iter().any(|s| s == expected), "missing {}", expected);
    }
}

#[tokio::test]
async fn next_at_last_step_and_back_at_first_step_are_noops() {
    let h = harness(Arc::new(StaticRecommendationProvider::new(vec![])));

    let first = h.controller.back().await.unwrap();
    assert_eq!(first.step().current(), 1);

    advance_to(&h.controller, 20).await;
    let before = h.bus.event_count();
    let last = h.controller.next().await.unwrap();

    assert_eq!(last.step().current(), 20);
    assert_eq!(last.profile().analytics().completion_percentage, Percentage::HUNDRED);
    assert_eq!(h.bus.event_count(), before);
}

#[tokio::test]
async fn every_trigger_step_requests_one_batch() {
    let provider = StaticRecommendationProvider::new(vec!["Tip".into()]);
    let h = harness(Arc::new(provider.clone()));

    advance_to(&h.controller, 20).await;
    h.controller.wait_for_recommendations().await.unwrap();

    let steps: Vec<u8> = provider.calls().iter().map(|c| c.step).collect();
    assert_eq!(steps, vec![5, 10, 15]);

    let state = h.controller.snapshot().await;
    assert_eq!(state.pending_recommendations(), 0);
    assert_eq!(state.latest_recommendation_step(), Some(15));
    // batches overtaken by a newer request are dropped; the latest always lands
    let generated = h.bus.events_of_type("onboarding.recommendations_generated.v1");
    assert!(generated.iter().any(|e| e.payload["step"] == 15));
}

#[tokio::test(start_paused = true)]
async fn later_batch_replaces_earlier_one() {
    let provider = SimulatedRecommendationProvider::default().with_delay(Duration::from_millis(10));
    let h = harness(Arc::new(provider));

    advance_to(&h.controller, 5).await;
    h.controller.wait_for_recommendations().await.unwrap();
    let first = h.controller.snapshot().await.profile().analytics().ai_recommendations.clone();

    h.controller
        .update_profile(ProfilePatch::goals(
            GoalsPatch::default().primary_goals(vec!["travel".into()]),
        ))
        .await
        .unwrap();
    advance_to(&h.controller, 10).await;
    h.controller.wait_for_recommendations().await.unwrap();
    let second = h.controller.snapshot().await.profile().analytics().ai_recommendations.clone();

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 3);
    assert_eq!(
        second.last().map(String::as_str),
        Some("Unlock the travel phrases pack for real-world situations")
    );
}

// =============================================================================
// Completion
// =============================================================================

#[tokio::test]
async fn completing_empty_profile_reports_every_skill_gap() {
    let h = harness(Arc::new(StaticRecommendationProvider::new(vec![])));

    let state = h.controller.complete().await.unwrap();
    let analytics = state.profile().analytics();

    assert_eq!(analytics.completion_percentage, Percentage::HUNDRED);
    assert_eq!(analytics.skill_gaps, SkillArea::ALL.to_vec());
    assert!(analytics.strength_areas.is_empty());
    assert_eq!(analytics.estimated_time_to_goal, Some(TimeToGoal::Unknown));
    assert_eq!(h.sink.count(), 1);
}

#[tokio::test]
async fn completion_estimates_time_and_freezes_profile() {
    let h = harness(Arc::new(StaticRecommendationProvider::new(vec![])));
    h.controller
        .update_profile(ProfilePatch::goals(
            GoalsPatch::default()
                .target_level(Some(CefrLevel::B2))
                .daily_minutes(Some(30)),
        ))
        .await
        .unwrap();

    let done = h.controller.complete().await.unwrap();
    assert_eq!(
        done.profile().analytics().estimated_time_to_goal,
        Some(TimeToGoal::Months(64))
    );

    let after = h
        .controller
        .update_profile(ProfilePatch::goals(GoalsPatch::default().daily_minutes(Some(90))))
        .await
        .unwrap();
    assert_eq!(after.profile().goals().daily_minutes, Some(30));
    assert_eq!(h.sink.count(), 1);
}

#[tokio::test]
async fn full_run_publishes_events_in_order() {
    let h = harness(Arc::new(StaticRecommendationProvider::new(vec![])));

    h.controller
        .update_profile(ProfilePatch::identity(
            IdentityPatch::default().first_name(Some("Ana".into())),
        ))
        .await
        .unwrap();
    h.controller.next().await.unwrap();
    h.controller.complete().await.unwrap();

    let types: Vec<String> = h
        .bus
        .published_events()
        .into_iter()
        .map(|e| e.event_type)
        .collect();
    assert_eq!(
        types,
        vec![
            "onboarding.profile_updated.v1",
            "onboarding.step_changed.v1",
            "onboarding.completed.v1",
        ]
    );
    let id = h.controller.snapshot().await.id().to_string();
    assert_eq!(h.bus.events_for_aggregate(&id).len(), 3);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn completion_tracks_step_over_any_walk(
        total in 1u8..=40,
        moves in proptest::collection::vec(any::<bool>(), 0..80),
    ) {
        let rules = FlowRules::new(total, [], CriticalFieldTable::default()).unwrap();
        let mut state = OnboardingState::new(OnboardingId::new(), &rules);

        for forward in moves {
            let action = if forward { OnboardingAction::Next } else { OnboardingAction::Back };
            state = reduce(&state, action, &rules).state;

            let step = state.step().current();
            prop_assert!((1..=total).contains(&step));
            let expected = (f64::from(step) * 100.0 / f64::from(total)).round() as u8;
            prop_assert_eq!(state.profile().analytics().completion_percentage.value(), expected);
        }
    }

    #[test]
    fn merge_overwrites_only_present_keys(
        first_name in "[A-Za-z]{1,12}",
        email in "[a-z]{1,8}@example\\.com",
        minutes in 1u16..600,
        new_first_name in proptest::option::of(proptest::option::of("[A-Za-z]{1,12}")),
        new_minutes in proptest::option::of(proptest::option::of(1u16..600)),
    ) {
        let mut profile = UserProfile::new();
        profile.apply_patch(&ProfilePatch {
            identity: IdentityPatch::default()
                .first_name(Some(first_name.clone()))
                .email(Some(email.clone())),
            goals: GoalsPatch::default().daily_minutes(Some(minutes)),
            ..ProfilePatch::default()
        });

        profile.apply_patch(&ProfilePatch {
            identity: IdentityPatch {
                first_name: new_first_name.clone(),
                ..IdentityPatch::default()
            },
            goals: GoalsPatch {
                daily_minutes: new_minutes,
                ..GoalsPatch::default()
            },
            ..ProfilePatch::default()
        });

        let expected_name = new_first_name.unwrap_or(Some(first_name));
        prop_assert_eq!(profile.identity().first_name.clone(), expected_name);
        prop_assert_eq!(profile.identity().email.clone(), Some(email));
        prop_assert_eq!(profile.goals().daily_minutes, new_minutes.unwrap_or(Some(minutes)));
    }
}
