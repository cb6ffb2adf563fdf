//! System instruction sent ahead of every user prompt.

use crate::models::Organization;

/// Build the brand-specific system instruction for an organization.
///
/// Only the brand guide, goals and style preferences are interpolated;
/// `personas` is stored at onboarding but deliberately left out of the
/// template until there is a decided way to use it.
pub fn build_system_instruction(organization: &Organization) -> String {
    format!(
        "You are a content creator for a brand. Follow the brand guide: {}. \
         Keep these goals in mind: {}. \
         Write in the following style: {}.",
        organization.brand_guide, organization.goals, organization.style_preferences
    )
}
