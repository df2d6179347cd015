use crate::portalapi::types::{
    cases::{CaseListAction, CaseListState, FeaturedTab},
    report::{WizardEvent, WizardState},
    resources::{ResourceListAction, ResourceListState},
};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumVariantNames};
use ts_rs::TS;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, TS, Display, Clone, EnumVariantNames)]
#[ts(export, export_to = ".generated/PortalQuery.ts")]
pub enum PortalQuery {
    /// Returns vocabularies and constants for the portal frontend
    Hello,
    /// Returns one page of the Cases screen
    ///
    /// The optional action is applied to the state before the page is built
    ListCases {
        /// Current screen state
        #[serde(default)]
        state: CaseListState,
        /// Action to take
        action: Option<CaseListAction>,
    },
    /// Returns the sample cases shown on the home page
    FeaturedCases {
        /// Tab to show
        tab: FeaturedTab,
    },
    /// Returns one page of the resource catalog
    ListResources {
        /// Current screen state
        #[serde(default)]
        state: ResourceListState,
        /// Action to take
        action: Option<ResourceListAction>,
    },
    /// Returns the resources shown on the home page
    FeaturedResources,
    /// Advances the report wizard
    ///
    /// `Submit` stores the report and is the only event with a side effect
    ReportWizard {
        /// Current wizard state
        #[serde(default)]
        state: WizardState,
        /// Event to apply
        event: WizardEvent,
    },
    /// Asks the AI endpoint whether a message looks like a scam
    AnalyzeMessage {
        /// Message pasted by the user
        message: String,
    },
}
