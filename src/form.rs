use crate::models::project::{CreateProjectRequest, ProjectDraft, ProjectRecord};
use crate::validation::project::validate_create_project;

/// Terminal outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    RejectedEmpty { message: String },
    RejectedDuplicate { message: String },
    RejectedInFlight,
    Created,
    ServerRejected { status: u16 },
    NetworkFailed { message: String },
}

/// What a submit request should do, decided before any I/O happens.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    Submit(CreateProjectRequest),
    Reject(SubmissionOutcome),
}

/// State owned by the create-project form: the draft being edited, the
/// session-local list of projects created so far, and the in-flight flag.
///
/// All transitions are plain methods so the flow can be unit tested without
/// any terminal or network in the loop.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    draft: ProjectDraft,
    existing_projects: Vec<ProjectRecord>,
    in_flight: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title_changed(&mut self, value: impl Into<String>) {
        self.draft.title = value.into();
    }

    pub fn description_changed(&mut self, value: impl Into<String>) {
        self.draft.description = value.into();
    }

    /// Decide what to do with a submit request, in strict order: in-flight
    /// guard, emptiness validation, duplicate-title check against the session
    /// cache, and only then the network request.
    pub fn submit_requested(&self, board_id: i64) -> SubmitDecision {
        if self.in_flight {
            return SubmitDecision::Reject(SubmissionOutcome::RejectedInFlight);
        }

        if let Err(err) = validate_create_project(&self.draft.title, &self.draft.description) {
            return SubmitDecision::Reject(SubmissionOutcome::RejectedEmpty {
                message: err.user_message(),
            });
        }

        // Exact, case-sensitive title match only
        if self
            .existing_projects
            .iter()
            .any(|project| project.title == self.draft.title)
        {
            let err = crate::error::AppError::conflict_with_code(
                "Project with the same title already exists. Please choose a different title.",
                Some("title".to_string()),
                "PROJECT_TITLE_EXISTS",
            );
            return SubmitDecision::Reject(SubmissionOutcome::RejectedDuplicate {
                message: err.user_message(),
            });
        }

        SubmitDecision::Submit(CreateProjectRequest {
            title: self.draft.title.clone(),
            description: self.draft.description.clone(),
            board_id,
        })
    }

    /// Mark the request as outstanding. Call after a `Submit` decision, before
    /// the network call is issued.
    pub fn submit_started(&mut self) {
        self.in_flight = true;
    }

    /// Fold a terminal outcome back into the form. On `Created` the draft is
    /// appended to the session cache and both fields reset to empty strings;
    /// every other outcome leaves the draft untouched so the user can correct
    /// and resubmit.
    pub fn response_received(&mut self, outcome: &SubmissionOutcome) {
        self.in_flight = false;

        if matches!(outcome, SubmissionOutcome::Created) {
            let title = std::mem::take(&mut self.draft.title);
            let description = std::mem::take(&mut self.draft.description);
            self.existing_projects.push(ProjectRecord { title, description });
        }
    }

    pub fn title(&self) -> &str {
        &self.draft.title
    }

    pub fn description(&self) -> &str {
        &self.draft.description
    }

    pub fn existing_projects(&self) -> &[ProjectRecord] {
        &self.existing_projects
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}
