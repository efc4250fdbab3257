//! Core types for the ad evaluator (JSON contracts + enumerated keys).

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// String-keyed enums
// ---------------------------------------------------------------------------

/// Declares an enum parsed loosely from its wire label. Labels outside the
/// known set are kept verbatim in an `Other` variant so unvalidated form
/// input never fails to deserialize.
macro_rules! string_enum {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $($variant:ident => $label:literal,)+
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(from = "String", into = "String")]
    pub enum $name {
      $($variant,)+
      Other(String),
    }

    impl $name {
      /// Every recognized variant, in declaration order.
      pub const KNOWN: &'static [$name] = &[$($name::$variant,)+];

      pub fn from_str_loose(s: &str) -> Self {
        let key = s.trim();
        $(
          if key.eq_ignore_ascii_case($label) {
            return Self::$variant;
          }
        )+
        Self::Other(s.to_string())
      }

      pub fn as_str(&self) -> &str {
        match self {
          $(Self::$variant => $label,)+
          Self::Other(s) => s.as_str(),
        }
      }

      pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
      }
    }

    impl From<String> for $name {
      fn from(s: String) -> Self {
        Self::from_str_loose(&s)
      }
    }

    impl From<$name> for String {
      fn from(v: $name) -> String {
        match v {
          $name::Other(s) => s,
          known => known.as_str().to_string(),
        }
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
      }
    }
  };
}

string_enum! {
  /// Ad platform the campaign runs on.
  pub enum Platform {
    Facebook => "facebook",
    Instagram => "instagram",
    GoogleAds => "google-ads",
    LinkedIn => "linkedin",
    TikTok => "tiktok",
    Twitter => "twitter",
    YouTube => "youtube",
    Pinterest => "pinterest",
  }
}

string_enum! {
  pub enum Industry {
    Technology => "technology",
    Ecommerce => "ecommerce",
    Retail => "retail",
    Healthcare => "healthcare",
    Finance => "finance",
    Education => "education",
    RealEstate => "real-estate",
    Travel => "travel",
    Food => "food",
    Fitness => "fitness",
    Fashion => "fashion",
    Automotive => "automotive",
    Entertainment => "entertainment",
  }
}

string_enum! {
  /// Target market (ISO-like country code).
  pub enum Country {
    Us => "US",
    Uk => "UK",
    Ca => "CA",
    Au => "AU",
    De => "DE",
    In => "IN",
    Br => "BR",
  }
}

string_enum! {
  pub enum AgeBracket {
    From18To24 => "18-24",
    From25To34 => "25-34",
    From35To44 => "35-44",
    From45To54 => "45-54",
    From55To64 => "55-64",
    Over65 => "65+",
    All => "all",
  }
}

string_enum! {
  pub enum Gender {
    All => "all",
    Male => "male",
    Female => "female",
  }
}

string_enum! {
  /// Monthly budget bracket in USD, lowest to highest.
  pub enum BudgetBracket {
    Under1000 => "under-1000",
    From1000To5000 => "1000-5000",
    From5000To10000 => "5000-10000",
    From10000To25000 => "10000-25000",
    Over25000 => "25000-plus",
  }
}

string_enum! {
  /// Campaign goal.
  pub enum Goal {
    BrandAwareness => "brand-awareness",
    Traffic => "traffic",
    Engagement => "engagement",
    LeadGeneration => "lead-generation",
    Sales => "sales",
    AppInstalls => "app-installs",
  }
}

string_enum! {
  pub enum AdType {
    Text => "text",
    Image => "image",
    Video => "video",
    Carousel => "carousel",
    Story => "story",
    Search => "search",
    Display => "display",
  }
}

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the form layer sends)
// ---------------------------------------------------------------------------

/// One ad submission. Unknown fields are silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdSubmission {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub description: String,
  pub platform: Platform,
  pub industry: Industry,
  pub country: Country,
  #[serde(default)]
  pub audience_description: String,
  pub target_age: AgeBracket,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub target_gender: Option<Gender>,
  pub budget: BudgetBracket,
  pub goals: Goal,
  pub ad_type: AdType,
  #[serde(default)]
  pub language: String,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

/// Five clamped sub-scores plus their rounded mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBundle {
  pub creativity: u8,
  pub platform_viability: u8,
  pub audience_alignment: u8,
  pub predicted_engagement: u8,
  pub predicted_conversion: u8,
  pub overall: u8,
}

impl ScoreBundle {
  /// Build a bundle; `overall` is round(mean) of the five parts.
  pub fn new(
    creativity: u8,
    platform_viability: u8,
    audience_alignment: u8,
    predicted_engagement: u8,
    predicted_conversion: u8,
  ) -> Self {
    let sum = creativity as u32
      + platform_viability as u32
      + audience_alignment as u32
      + predicted_engagement as u32
      + predicted_conversion as u32;
    let overall = (sum as f64 / 5.0).round() as u8;
    Self {
      creativity,
      platform_viability,
      audience_alignment,
      predicted_engagement,
      predicted_conversion,
      overall,
    }
  }

  /// (label, value) pairs for the five sub-scores, in report order.
  pub fn parts(&self) -> [(&'static str, u8); 5] {
    [
      ("creativity", self.creativity),
      ("platform viability", self.platform_viability),
      ("audience alignment", self.audience_alignment),
      ("predicted engagement", self.predicted_engagement),
      ("predicted conversion", self.predicted_conversion),
    ]
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
  pub strengths: Vec<String>,
  pub weaknesses: Vec<String>,
  pub platform_specific: Vec<String>,
  pub audience_insights: Vec<String>,
  pub competitor_analysis: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
  pub evaluation_id: String,
  pub scores: ScoreBundle,
  pub analysis: AnalysisReport,
  pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
