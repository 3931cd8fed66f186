//! OnboardingController - owns the flow state and runs reducer effects.
//!
//! Every operation dispatches an [`OnboardingAction`] through the pure
//! reducer and stores the resulting state. It then hands a completed profile
//! to the sink, publishes the events, and only after that spawns any
//! recommendation request. Spawned tasks fold the provider's answer back in
//! and publish it with the triggering step change as its cause.

use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use super::OnboardingError;
use crate::domain::foundation::{EventId, OnboardingId};
use crate::domain::onboarding::{
    reduce, Effect, FlowRules, OnboardingAction, OnboardingEvent, OnboardingState, Transition,
};
use crate::domain::profile::{ProfilePatch, UserProfile};
use crate::ports::{EventPublisher, ProfileSink, RecommendationProvider, RecommendationRequest};

/// Single owner of one onboarding run.
///
/// Cloning is cheap and every clone drives the same run.
///
/// # Example
///
/// ```ignore
/// let controller = OnboardingController::new(rules, provider, sink, publisher);
/// controller.update_profile(patch).await?;
/// controller.next().await?;
/// controller.wait_for_recommendations().await?;
/// let state = controller.snapshot().await;
/// ```
#[derive(Clone)]
pub struct OnboardingController {
    inner: Arc<Inner>,
}

struct Inner {
    rules: FlowRules,
    state: RwLock<OnboardingState>,
    provider: Arc<dyn RecommendationProvider>,
    sink: Arc<dyn ProfileSink>,
    publisher: Arc<dyn EventPublisher>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl OnboardingController {
    /// Starts a new run at step 1.
    pub fn new(
        rules: FlowRules,
        provider: Arc<dyn RecommendationProvider>,
        sink: Arc<dyn ProfileSink>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        let state = OnboardingState::new(OnboardingId::new(), &rules);
        tracing::debug!(
            onboarding_id = %state.id(),
            total_steps = rules.total_steps(),
            "Onboarding started"
        );
        Self {
            inner: Arc::new(Inner {
                rules,
                state: RwLock::new(state),
                provider,
                sink,
                publisher,
                tasks: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn rules(&self) -> &FlowRules {
        &self.inner.rules
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Merges `patch` into the profile; only keys present in the patch change.
    pub async fn update_profile(
        &self,
        patch: ProfilePatch,
    ) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingAction::UpdateProfile(patch)).await
    }

    /// Advances one step; a no-op at the last step.
    ///
    /// Arriving at a trigger step starts a recommendation request in the
    /// background.
    pub async fn next(&self) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingAction::Next).await
    }

    /// Goes back one step; a no-op at step 1.
    pub async fn back(&self) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingAction::Back).await
    }

    /// Completes the run and hands the profile to the sink.
    pub async fn complete(&self) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingAction::Complete).await
    }

    /// Current state (a copy).
    pub async fn snapshot(&self) -> OnboardingState {
        self.inner.state.read().await.clone()
    }

    /// Waits until every recommendation request issued so far has settled.
    pub async fn wait_for_recommendations(&self) -> Result<(), OnboardingError> {
        loop {
            let handles = std::mem::take(&mut *self.inner.tasks.lock().await);
            if handles.is_empty() {
                return Ok(());
            }
            for joined in join_all(handles).await {
                joined.map_err(|e| OnboardingError::TaskFailed(e.to_string()))?;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────────────────────

    async fn dispatch(&self, action: OnboardingAction) -> Result<OnboardingState, OnboardingError> {
        self.dispatch_guarded(action, |_| Ok(())).await
    }

    /// Dispatches `action` only if `guard` accepts the current state.
    ///
    /// The guard runs under the write lock that applies the action, so no
    /// other update can land between the check and the transition.
    pub(crate) async fn dispatch_guarded<G>(
        &self,
        action: OnboardingAction,
        guard: G,
    ) -> Result<OnboardingState, OnboardingError>
    where
        G: FnOnce(&OnboardingState) -> Result<(), OnboardingError> + Send,
    {
        let name = action.name();
        let transition = self.inner.transition_guarded(action, guard).await?;

        if transition.is_noop() {
            tracing::debug!(action = name, "Action had no effect");
            return Ok(transition.state);
        }

        let mut requests = Vec::new();
        for effect in transition.effects {
            match effect {
                Effect::RequestRecommendations {
                    onboarding_id,
                    step,
                    profile,
                    cause,
                } => requests.push((
                    RecommendationRequest {
                        onboarding_id,
                        step,
                        profile,
                    },
                    cause,
                )),
                Effect::EmitProfile {
                    onboarding_id,
                    profile,
                } => self.emit_profile(onboarding_id, &profile).await?,
            }
        }

        // Publish before spawning so a batch never reaches the bus ahead of
        // the step change that asked for it.
        let published = self.inner.publish(&transition.events, None).await;
        for (request, cause) in requests {
            self.spawn_request(request, cause).await;
        }
        published?;

        Ok(transition.state)
    }

    async fn spawn_request(&self, request: RecommendationRequest, cause: EventId) {
        tracing::info!(
            onboarding_id = %request.onboarding_id,
            step = request.step,
            "Requesting recommendations"
        );
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            inner.settle_recommendations(request, cause).await;
        });
        self.inner.tasks.lock().await.push(handle);
    }

    async fn emit_profile(
        &self,
        onboarding_id: OnboardingId,
        profile: &UserProfile,
    ) -> Result<(), OnboardingError> {
        self.inner
            .sink
            .submit(onboarding_id, profile)
            .await
            .map_err(OnboardingError::ProfileSink)?;
        tracing::info!(
            %onboarding_id,
            completeness = profile.analytics().profile_completeness.value(),
            skill_gaps = profile.analytics().skill_gaps.len(),
            "Onboarding completed"
        );
        Ok(())
    }
}

impl Inner {
    /// Checks `guard`, reduces under the write lock and stores the next state.
    async fn transition_guarded<G>(
        &self,
        action: OnboardingAction,
        guard: G,
    ) -> Result<Transition, OnboardingError>
    where
        G: FnOnce(&OnboardingState) -> Result<(), OnboardingError>,
    {
        let mut state = self.state.write().await;
        guard(&state)?;
        let transition = reduce(&state, action, &self.rules);
        *state = transition.state.clone();
        Ok(transition)
    }

    /// Publishes `events` in order; `cause` marks them as consequences of an
    /// earlier event.
    async fn publish(
        &self,
        events: &[OnboardingEvent],
        cause: Option<&EventId>,
    ) -> Result<(), OnboardingError> {
        for event in events {
            log_event(event);
        }
        let envelopes = events
            .iter()
            .map(|event| match cause {
                Some(cause) => event.to_envelope().with_causation_id(cause.as_str()),
                None => event.to_envelope(),
            })
            .collect();
        self.publisher
            .publish_all(envelopes)
            .await
            .map_err(OnboardingError::EventPublish)
    }

    /// Runs one provider request and folds the outcome back into the state.
    ///
    /// Provider failures are logged and dropped; there is no retry.
    async fn settle_recommendations(&self, request: RecommendationRequest, cause: EventId) {
        let step = request.step;
        let action = match self.provider.recommend(request).await {
            Ok(suggestions) => OnboardingAction::RecommendationsReady { step, suggestions },
            Err(err) => {
                tracing::warn!(step, error = %err, "Recommendation request failed");
                OnboardingAction::RecommendationsFailed { step }
            }
        };
        let delivered = matches!(action, OnboardingAction::RecommendationsReady { .. });

        let transition = match self.transition_guarded(action, |_| Ok(())).await {
            Ok(transition) => transition,
            Err(err) => {
                tracing::warn!(step, error = %err, "Recommendation outcome not applied");
                return;
            }
        };
        if delivered && transition.events.is_empty() {
            if transition.state.is_completed() {
                tracing::info!(step, "Recommendations arrived after completion; ignored");
            } else {
                tracing::info!(step, "Recommendations superseded by a newer request; ignored");
            }
        }
        if let Err(err) = self.publish(&transition.events, Some(&cause)).await {
            tracing::warn!(step, error = %err, "Failed to publish recommendation event");
        }
    }
}

fn log_event(event: &OnboardingEvent) {
    match event {
        OnboardingEvent::ProfileUpdated(e) => tracing::debug!(
            onboarding_id = %e.onboarding_id,
            fields = e.changed_fields.len(),
            completeness = e.profile_completeness.value(),
            "Profile updated"
        ),
        OnboardingEvent::StepChanged(e) => tracing::info!(
            onboarding_id = %e.onboarding_id,
            from = e.from_step,
            step = e.to_step,
            completion = e.completion_percentage.value(),
            "Step changed"
        ),
        OnboardingEvent::RecommendationsGenerated(e) => tracing::info!(
            onboarding_id = %e.onboarding_id,
            step = e.step,
            count = e.suggestions.len(),
            "Recommendations ready"
        ),
        OnboardingEvent::Completed(e) => tracing::debug!(
            onboarding_id = %e.onboarding_id,
            strengths = e.strength_areas.len(),
            time_to_goal = %e.estimated_time_to_goal,
            "Completion event emitted"
        ),
    }
}
