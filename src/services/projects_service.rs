use crate::client::ProjectApiClient;
use crate::error::AppError;
use crate::form::{FormState, SubmitDecision, SubmissionOutcome};
use crate::notify::Notifier;
use crate::services::context::SubmitContext;

pub struct ProjectsService;

impl ProjectsService {
    /// Run one submission attempt end to end: decide, call the API, fold the
    /// outcome back into the form, notify the user.
    ///
    /// Rejections short-circuit before any network call. No retries: every
    /// outcome is terminal for this attempt and returns the form to idle.
    pub async fn submit(
        state: &mut FormState,
        ctx: &SubmitContext,
        client: &ProjectApiClient,
        notifier: &dyn Notifier,
    ) -> SubmissionOutcome {
        let outcome = match state.submit_requested(ctx.board_id) {
            SubmitDecision::Reject(outcome) => outcome,
            SubmitDecision::Submit(request) => {
                state.submit_started();

                let outcome = match client.add_project(&request).await {
                    Ok(()) => SubmissionOutcome::Created,
                    Err(AppError::Server { status }) => {
                        SubmissionOutcome::ServerRejected { status }
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "Project creation request failed");
                        SubmissionOutcome::NetworkFailed {
                            message: err.user_message(),
                        }
                    }
                };

                state.response_received(&outcome);
                outcome
            }
        };

        Self::notify_outcome(notifier, ctx, &outcome).await;
        outcome
    }

    async fn notify_outcome(
        notifier: &dyn Notifier,
        ctx: &SubmitContext,
        outcome: &SubmissionOutcome,
    ) {
        match outcome {
            SubmissionOutcome::RejectedEmpty { message } => {
                notifier.error("Empty input", message).await;
            }
            SubmissionOutcome::RejectedDuplicate { message } => {
                notifier.error("Error creating project", message).await;
            }
            SubmissionOutcome::RejectedInFlight => {
                notifier
                    .error(
                        "Error creating project",
                        "A submission is already in progress.",
                    )
                    .await;
            }
            SubmissionOutcome::Created => {
                notifier
                    .success("Project created successfully!", ctx.success_toast)
                    .await;
            }
            SubmissionOutcome::ServerRejected { .. } => {
                notifier
                    .error(
                        "Error creating project",
                        "There was an error while creating the project.",
                    )
                    .await;
            }
            SubmissionOutcome::NetworkFailed { message } => {
                notifier
                    .error("Error", &format!("An unexpected error occurred: {}", message))
                    .await;
            }
        }
    }
}
