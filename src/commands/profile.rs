use crate::db::{keys, Repository};
use crate::errors::Result;
use crate::models::BillingProfile;

/// Load the billing profile, empty when nothing has been saved yet.
pub fn get_billing_profile(repo: &impl Repository) -> BillingProfile {
    repo.get_or_default(keys::BILLING_INFO)
}

pub fn save_billing_profile(repo: &impl Repository, profile: &BillingProfile) -> Result<()> {
    repo.set(keys::BILLING_INFO, profile)?;
    Ok(())
}

/// The uploaded logo as a data-URI string, if any.
pub fn get_logo(repo: &impl Repository) -> Option<String> {
    repo.get_or_default(keys::USER_LOGO)
}

pub fn save_logo(repo: &impl Repository, data_uri: &str) -> Result<()> {
    repo.set(keys::USER_LOGO, &data_uri)?;
    Ok(())
}

pub fn clear_logo(repo: &impl Repository) -> Result<()> {
    repo.remove_raw(keys::USER_LOGO)?;
    Ok(())
}
