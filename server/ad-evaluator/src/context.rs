//! Per-evaluation view: the submission, its tokenized copy, and the resolved
//! reference profiles.

use crate::tables::{self, CountryProfile, IndustryProfile, PlatformProfile};
use crate::text::{self, AdCopy};
use crate::types::AdSubmission;

pub struct Context<'a> {
  pub submission: &'a AdSubmission,
  pub copy: AdCopy,
  pub title_len: usize,
  pub description_len: usize,
  pub audience_len: usize,
  pub platform: Option<&'static PlatformProfile>,
  pub industry: Option<&'static IndustryProfile>,
  pub country: Option<&'static CountryProfile>,
}

impl<'a> Context<'a> {
  pub fn new(submission: &'a AdSubmission) -> Self {
    let platform = tables::platform_profile(&submission.platform);
    let industry = tables::industry_profile(&submission.industry);
    let country = tables::country_profile(&submission.country);

    if platform.is_none() {
      tracing::debug!(platform = %submission.platform, "unrecognized platform; neutral defaults apply");
    }
    if industry.is_none() {
      tracing::debug!(industry = %submission.industry, "unrecognized industry; neutral defaults apply");
    }
    if country.is_none() {
      tracing::debug!(country = %submission.country, "unrecognized country; no market adjustment");
    }

    Self {
      submission,
      copy: AdCopy::new(&submission.title, &submission.description),
      title_len: text::char_len(&submission.title),
      description_len: text::char_len(&submission.description),
      audience_len: text::char_len(&submission.audience_description),
      platform,
      industry,
      country,
    }
  }
}
