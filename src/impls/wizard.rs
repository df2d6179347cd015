//! Report submission wizard
//!
//! `details -> evidence -> review -> submitted`. Only `Submit` touches the store and only from
//! the review step. A failed insert leaves the wizard on review with the draft intact

use log::info;

use super::errors::PortalError;
use super::store::CaseStore;
use crate::portalapi::types::cases::CaseStatus;
use crate::portalapi::types::report::{
    ContactMethod, DraftField, NewCase, Redirect, ReportDraft, WizardEvent, WizardResponse,
    WizardState, WizardStep,
};

/// Shown on the confirmation screen. Not derived from the stored case
pub const TRACKING_CODE: &str = "WB-23791-XR";
pub const MAX_EVIDENCE_BYTES: u64 = 10 * 1024 * 1024;
pub const REDIRECT_PATH: &str = "/cases";
pub const REDIRECT_AFTER_MS: u64 = 2000;

fn optional(text: &str) -> Option<String> {
    let text = text.trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

impl ReportDraft {
    /// Required before leaving the details step
    pub fn check_details(&self) -> Result<(), PortalError> {
        if self.title.trim().is_empty() {
            return Err(PortalError::EmptyInput("Please enter a title".to_string()));
        }

        if self.description.trim().is_empty() {
            return Err(PortalError::EmptyInput(
                "Please enter a description".to_string(),
            ));
        }

        if self.category.is_none() {
            return Err(PortalError::EmptyInput(
                "Please select a category".to_string(),
            ));
        }

        Ok(())
    }

    /// Row to insert. Status and counters always start from zero
    pub fn to_new_case(&self) -> Result<NewCase, PortalError> {
        self.check_details()?;

        let category = self
            .category
            .ok_or_else(|| PortalError::EmptyInput("Please select a category".to_string()))?;

        Ok(NewCase {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category,
            location: optional(&self.location),
            date: optional(&self.date),
            organization: optional(&self.organization),
            individuals: optional(&self.individuals),
            status: CaseStatus::New,
            votes: 0,
            comments: 0,
            views: 0,
            progress: 0,
        })
    }

    fn edit(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Description => &mut self.description,
            DraftField::Location => &mut self.location,
            DraftField::Date => &mut self.date,
            DraftField::Organization => &mut self.organization,
            DraftField::Individuals => &mut self.individuals,
            DraftField::AdditionalInfo => &mut self.additional_info,
            DraftField::Name | DraftField::Email if self.anonymous => return,
            DraftField::Name => &mut self.name,
            DraftField::Email => &mut self.email,
        };

        *slot = value;
    }
}

impl WizardState {
    fn reject(&self, event: &'static str) -> PortalError {
        PortalError::InvalidTransition {
            step: self.step,
            event,
        }
    }

    /// Applies every event except `Submit`, which needs the store
    pub fn apply(&self, event: WizardEvent) -> Result<WizardState, PortalError> {
        if self.step == WizardStep::Submitted {
            return Err(self.reject("change the report"));
        }

        let mut next = self.clone();

        match event {
            WizardEvent::EditField { field, value } => next.draft.edit(field, value),
            WizardEvent::SetCategory { category } => next.draft.category = Some(category),
            WizardEvent::SetAnonymous { anonymous } => {
                next.draft.anonymous = anonymous;

                if anonymous {
                    next.draft.name.clear();
                    next.draft.email.clear();
                    next.draft.contact_method = ContactMethod::AnonymousPortal;
                }
            }
            WizardEvent::SetContactMethod { method } => {
                if method == ContactMethod::SecureEmail && next.draft.anonymous {
                    return Err(PortalError::Validation(
                        "Secure email is not available for anonymous reports".to_string(),
                    ));
                }

                next.draft.contact_method = method;
            }
            WizardEvent::AddFiles { files } => {
                if let Some(file) = files.iter().find(|f| f.size_bytes > MAX_EVIDENCE_BYTES) {
                    return Err(PortalError::Validation(format!(
                        "{} is larger than 10MB",
                        file.name
                    )));
                }

                next.draft.files.extend(files);
            }
            WizardEvent::RemoveFile { index } => {
                if index < next.draft.files.len() {
                    next.draft.files.remove(index);
                }
            }
            WizardEvent::Next => {
                next.step = match self.step {
                    WizardStep::Details => {
                        self.draft.check_details()?;
                        WizardStep::Evidence
                    }
                    WizardStep::Evidence => WizardStep::Review,
                    _ => return Err(self.reject("continue")),
                }
            }
            WizardEvent::Back => {
                next.step = match self.step {
                    WizardStep::Evidence => WizardStep::Details,
                    WizardStep::Review => WizardStep::Evidence,
                    _ => return Err(self.reject("go back")),
                }
            }
            WizardEvent::Submit => return Err(self.reject("submit")),
        }

        Ok(next)
    }
}

/// Inserts the draft and moves to the submitted step. On failure the state is left as is
pub async fn submit(state: &WizardState, store: &dyn CaseStore) -> Result<WizardState, PortalError> {
    if state.step != WizardStep::Review {
        return Err(state.reject("submit"));
    }

    let new_case = state.draft.to_new_case()?;

    let created = store.insert_case(&new_case).await?;

    info!("Report submitted as case {}", created.id);

    Ok(WizardState {
        step: WizardStep::Submitted,
        draft: ReportDraft::default(),
        tracking_code: Some(TRACKING_CODE.to_string()),
    })
}

/// Runs one wizard event. The redirect is only set once the report is stored
pub async fn reduce(
    state: WizardState,
    event: WizardEvent,
    store: &dyn CaseStore,
) -> Result<WizardResponse, PortalError> {
    let state = match event {
        WizardEvent::Submit => submit(&state, store).await?,
        event => state.apply(event)?,
    };

    let redirect = (state.step == WizardStep::Submitted).then(|| Redirect {
        path: REDIRECT_PATH.to_string(),
        after_ms: REDIRECT_AFTER_MS,
    });

    Ok(WizardResponse { state, redirect })
}
