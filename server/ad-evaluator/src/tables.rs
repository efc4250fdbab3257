//! Static reference tables: platform limits and benchmarks, industry
//! audiences, country markets, and goal alignment.
//!
//! Lists hold wire labels (`Platform::as_str` and friends) so lookups compare
//! against the submission's canonical label.

use std::ops::RangeInclusive;

use crate::types::{AdType, BudgetBracket, Country, Goal, Industry, Platform};

/// Click-through-rate benchmark triple, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CtrBenchmark {
  pub high: f64,
  pub average: f64,
  pub low: f64,
}

#[derive(Debug)]
pub struct PlatformProfile {
  /// Hard title limit in characters.
  pub title_limit: usize,
  /// Hard description limit in characters.
  pub description_limit: usize,
  pub optimal_title: RangeInclusive<usize>,
  pub optimal_description: RangeInclusive<usize>,
  pub best_industries: &'static [&'static str],
  pub best_ad_types: &'static [&'static str],
  pub ctr: CtrBenchmark,
  pub cost_multiplier: f64,
  /// Descriptive only; not used in scoring.
  pub audience_factors: &'static [&'static str],
}

#[derive(Debug)]
pub struct AudienceProfile {
  /// Inclusive (lower, upper) core age range.
  pub age_range: (u8, u8),
  pub interests: &'static [&'static str],
}

#[derive(Debug)]
pub struct IndustryProfile {
  /// Average CTR in percent.
  pub avg_ctr: f64,
  pub best_platforms: &'static [&'static str],
  pub key_terms: &'static [&'static str],
  pub audience: AudienceProfile,
  /// Tags with `_` standing in for spaces, e.g. `free_trial`.
  pub conversion_factors: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Competitiveness {
  High,
  Medium,
  Low,
}

impl Competitiveness {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::High => "high",
      Self::Medium => "medium",
      Self::Low => "low",
    }
  }
}

#[derive(Debug)]
pub struct CountryProfile {
  pub cpc_multiplier: f64,
  pub competitiveness: Competitiveness,
  pub languages: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Platforms
// ---------------------------------------------------------------------------

static FACEBOOK: PlatformProfile = PlatformProfile {
  title_limit: 100,
  description_limit: 500,
  optimal_title: 25..=60,
  optimal_description: 90..=250,
  best_industries: &["ecommerce", "retail", "fitness", "food", "travel", "education", "real-estate", "automotive"],
  best_ad_types: &["image", "video", "carousel"],
  ctr: CtrBenchmark { high: 1.6, average: 0.9, low: 0.5 },
  cost_multiplier: 1.0,
  audience_factors: &["broad demographic reach", "detailed interest targeting", "lookalike audiences"],
};

static INSTAGRAM: PlatformProfile = PlatformProfile {
  title_limit: 80,
  description_limit: 2200,
  optimal_title: 20..=50,
  optimal_description: 100..=300,
  best_industries: &["fashion", "food", "fitness", "travel", "ecommerce", "entertainment"],
  best_ad_types: &["image", "video", "story", "carousel"],
  ctr: CtrBenchmark { high: 1.2, average: 0.6, low: 0.3 },
  cost_multiplier: 1.1,
  audience_factors: &["visual-first audience", "younger demographics", "influencer culture"],
};

static GOOGLE_ADS: PlatformProfile = PlatformProfile {
  title_limit: 90,
  description_limit: 300,
  optimal_title: 25..=60,
  optimal_description: 60..=180,
  best_industries: &["technology", "finance", "healthcare", "education", "real-estate", "automotive", "travel", "ecommerce"],
  best_ad_types: &["text", "search", "display"],
  ctr: CtrBenchmark { high: 6.0, average: 3.2, low: 1.5 },
  cost_multiplier: 1.5,
  audience_factors: &["high purchase intent", "keyword-driven discovery", "cross-device reach"],
};

static LINKEDIN: PlatformProfile = PlatformProfile {
  title_limit: 150,
  description_limit: 600,
  optimal_title: 30..=70,
  optimal_description: 100..=300,
  best_industries: &["technology", "finance", "education"],
  best_ad_types: &["text", "image", "video", "carousel"],
  ctr: CtrBenchmark { high: 0.8, average: 0.44, low: 0.2 },
  cost_multiplier: 2.0,
  audience_factors: &["professional decision makers", "job-title targeting", "B2B intent"],
};

static TIKTOK: PlatformProfile = PlatformProfile {
  title_limit: 100,
  description_limit: 300,
  optimal_title: 15..=40,
  optimal_description: 50..=150,
  best_industries: &["fashion", "food", "fitness", "entertainment", "ecommerce"],
  best_ad_types: &["video"],
  ctr: CtrBenchmark { high: 2.0, average: 1.0, low: 0.5 },
  cost_multiplier: 0.9,
  audience_factors: &["Gen Z and young millennials", "trend-driven content", "short attention spans"],
};

static TWITTER: PlatformProfile = PlatformProfile {
  title_limit: 70,
  description_limit: 280,
  optimal_title: 20..=50,
  optimal_description: 70..=200,
  best_industries: &["technology", "entertainment", "finance"],
  best_ad_types: &["text", "image", "video"],
  ctr: CtrBenchmark { high: 1.5, average: 0.86, low: 0.3 },
  cost_multiplier: 0.8,
  audience_factors: &["real-time conversation", "news-oriented users", "hashtag discovery"],
};

static YOUTUBE: PlatformProfile = PlatformProfile {
  title_limit: 100,
  description_limit: 5000,
  optimal_title: 30..=70,
  optimal_description: 100..=500,
  best_industries: &["entertainment", "education", "technology", "automotive", "fitness", "travel"],
  best_ad_types: &["video"],
  ctr: CtrBenchmark { high: 1.0, average: 0.65, low: 0.3 },
  cost_multiplier: 1.2,
  audience_factors: &["long-form viewing", "how-to and review intent", "broad age reach"],
};

static PINTEREST: PlatformProfile = PlatformProfile {
  title_limit: 100,
  description_limit: 500,
  optimal_title: 20..=60,
  optimal_description: 100..=300,
  best_industries: &["fashion", "food", "real-estate", "travel", "retail", "ecommerce"],
  best_ad_types: &["image", "carousel", "video"],
  ctr: CtrBenchmark { high: 0.8, average: 0.5, low: 0.2 },
  cost_multiplier: 0.7,
  audience_factors: &["planning mindset", "predominantly female audience", "seasonal inspiration"],
};

/// Profile for a known platform; `None` for `Platform::Other`.
pub fn platform_profile(platform: &Platform) -> Option<&'static PlatformProfile> {
  let profile = match platform {
    Platform::Facebook => &FACEBOOK,
    Platform::Instagram => &INSTAGRAM,
    Platform::GoogleAds => &GOOGLE_ADS,
    Platform::LinkedIn => &LINKEDIN,
    Platform::TikTok => &TIKTOK,
    Platform::Twitter => &TWITTER,
    Platform::YouTube => &YOUTUBE,
    Platform::Pinterest => &PINTEREST,
    Platform::Other(_) => return None,
  };
  Some(profile)
}

// ---------------------------------------------------------------------------
// Industries
// ---------------------------------------------------------------------------

static TECHNOLOGY: IndustryProfile = IndustryProfile {
  avg_ctr: 2.1,
  best_platforms: &["google-ads", "linkedin", "twitter", "youtube"],
  key_terms: &["software", "cloud", "platform", "secure", "automation", "integration", "data", "scalable", "analytics"],
  audience: AudienceProfile {
    age_range: (25, 45),
    interests: &["software", "gadgets", "innovation", "productivity"],
  },
  conversion_factors: &["free_trial", "demo", "roi", "security", "integration", "support"],
};

static ECOMMERCE: IndustryProfile = IndustryProfile {
  avg_ctr: 2.7,
  best_platforms: &["facebook", "instagram", "google-ads", "pinterest", "tiktok"],
  key_terms: &["shop", "sale", "discount", "shipping", "deal", "order", "checkout", "collection"],
  audience: AudienceProfile {
    age_range: (18, 45),
    interests: &["online shopping", "deals", "lifestyle", "product reviews"],
  },
  conversion_factors: &["free_shipping", "discount", "limited_time", "reviews", "easy_returns", "secure_checkout"],
};

static RETAIL: IndustryProfile = IndustryProfile {
  avg_ctr: 2.5,
  best_platforms: &["facebook", "instagram", "google-ads", "pinterest"],
  key_terms: &["store", "sale", "new arrivals", "discount", "quality", "selection", "brand"],
  audience: AudienceProfile {
    age_range: (25, 54),
    interests: &["shopping", "home goods", "seasonal sales", "local stores"],
  },
  conversion_factors: &["in_store", "limited_time", "discount", "loyalty", "free_shipping"],
};

static HEALTHCARE: IndustryProfile = IndustryProfile {
  avg_ctr: 3.3,
  best_platforms: &["google-ads", "facebook", "youtube"],
  key_terms: &["health", "care", "doctor", "wellness", "treatment", "patient", "clinic", "appointment"],
  audience: AudienceProfile {
    age_range: (35, 65),
    interests: &["wellness", "family health", "preventive care", "insurance"],
  },
  conversion_factors: &["trusted", "certified", "appointment", "insurance", "consultation"],
};

static FINANCE: IndustryProfile = IndustryProfile {
  avg_ctr: 2.9,
  best_platforms: &["google-ads", "linkedin", "facebook", "twitter"],
  key_terms: &["finance", "invest", "savings", "loan", "credit", "rates", "retirement", "banking"],
  audience: AudienceProfile {
    age_range: (25, 55),
    interests: &["investing", "personal finance", "real estate", "retirement planning"],
  },
  conversion_factors: &["low_rates", "secure", "no_fees", "expert_advice", "calculator"],
};

static EDUCATION: IndustryProfile = IndustryProfile {
  avg_ctr: 3.8,
  best_platforms: &["facebook", "google-ads", "youtube", "linkedin"],
  key_terms: &["learn", "course", "skills", "certificate", "online", "training", "degree", "class"],
  audience: AudienceProfile {
    age_range: (18, 35),
    interests: &["career growth", "online learning", "certifications", "self-improvement"],
  },
  conversion_factors: &["free_trial", "certificate", "flexible", "career", "scholarship"],
};

static REAL_ESTATE: IndustryProfile = IndustryProfile {
  avg_ctr: 3.7,
  best_platforms: &["facebook", "google-ads", "instagram", "youtube", "pinterest"],
  key_terms: &["home", "property", "house", "listing", "mortgage", "apartment", "realtor", "neighborhood"],
  audience: AudienceProfile {
    age_range: (28, 55),
    interests: &["home buying", "interior design", "investment property", "relocation"],
  },
  conversion_factors: &["virtual_tour", "free_valuation", "financing", "location", "open_house"],
};

static TRAVEL: IndustryProfile = IndustryProfile {
  avg_ctr: 4.7,
  best_platforms: &["instagram", "facebook", "google-ads", "pinterest", "youtube"],
  key_terms: &["travel", "trip", "vacation", "destination", "flight", "hotel", "adventure", "explore"],
  audience: AudienceProfile {
    age_range: (25, 54),
    interests: &["adventure", "culture", "luxury travel", "budget travel"],
  },
  conversion_factors: &["best_price", "free_cancellation", "limited_time", "all_inclusive", "reviews"],
};

static FOOD: IndustryProfile = IndustryProfile {
  avg_ctr: 2.4,
  best_platforms: &["instagram", "facebook", "tiktok", "pinterest"],
  key_terms: &["delicious", "fresh", "recipe", "restaurant", "delivery", "menu", "taste", "organic"],
  audience: AudienceProfile {
    age_range: (18, 44),
    interests: &["cooking", "dining out", "food delivery", "healthy eating"],
  },
  conversion_factors: &["free_delivery", "discount", "order_online", "fresh", "new_menu"],
};

static FITNESS: IndustryProfile = IndustryProfile {
  avg_ctr: 2.8,
  best_platforms: &["instagram", "facebook", "tiktok", "youtube"],
  key_terms: &["fitness", "workout", "gym", "training", "health", "strength", "results", "wellness"],
  audience: AudienceProfile {
    age_range: (18, 40),
    interests: &["exercise", "nutrition", "sports", "wellness"],
  },
  conversion_factors: &["free_trial", "results", "personal_training", "membership", "transformation"],
};

static FASHION: IndustryProfile = IndustryProfile {
  avg_ctr: 2.2,
  best_platforms: &["instagram", "facebook", "tiktok", "pinterest"],
  key_terms: &["style", "fashion", "collection", "trend", "outfit", "wear", "designer", "look"],
  audience: AudienceProfile {
    age_range: (18, 34),
    interests: &["style", "trends", "influencers", "sustainable fashion"],
  },
  conversion_factors: &["free_shipping", "new_arrivals", "limited_edition", "easy_returns", "discount"],
};

static AUTOMOTIVE: IndustryProfile = IndustryProfile {
  avg_ctr: 4.0,
  best_platforms: &["facebook", "google-ads", "youtube"],
  key_terms: &["car", "vehicle", "drive", "test drive", "dealer", "lease", "financing", "performance"],
  audience: AudienceProfile {
    age_range: (25, 64),
    interests: &["cars", "road trips", "car maintenance", "electric vehicles"],
  },
  conversion_factors: &["test_drive", "financing", "trade_in", "warranty", "limited_time"],
};

static ENTERTAINMENT: IndustryProfile = IndustryProfile {
  avg_ctr: 2.1,
  best_platforms: &["tiktok", "youtube", "instagram", "facebook", "twitter"],
  key_terms: &["watch", "stream", "show", "music", "game", "movie", "event", "tickets"],
  audience: AudienceProfile {
    age_range: (18, 34),
    interests: &["movies", "music", "gaming", "live events"],
  },
  conversion_factors: &["exclusive", "early_access", "limited_time", "free_trial", "tickets"],
};

/// Profile for a known industry; `None` for `Industry::Other`.
pub fn industry_profile(industry: &Industry) -> Option<&'static IndustryProfile> {
  let profile = match industry {
    Industry::Technology => &TECHNOLOGY,
    Industry::Ecommerce => &ECOMMERCE,
    Industry::Retail => &RETAIL,
    Industry::Healthcare => &HEALTHCARE,
    Industry::Finance => &FINANCE,
    Industry::Education => &EDUCATION,
    Industry::RealEstate => &REAL_ESTATE,
    Industry::Travel => &TRAVEL,
    Industry::Food => &FOOD,
    Industry::Fitness => &FITNESS,
    Industry::Fashion => &FASHION,
    Industry::Automotive => &AUTOMOTIVE,
    Industry::Entertainment => &ENTERTAINMENT,
    Industry::Other(_) => return None,
  };
  Some(profile)
}

// ---------------------------------------------------------------------------
// Countries
// ---------------------------------------------------------------------------

static US: CountryProfile = CountryProfile {
  cpc_multiplier: 1.0,
  competitiveness: Competitiveness::High,
  languages: &["en", "es"],
};

static UK: CountryProfile = CountryProfile {
  cpc_multiplier: 0.85,
  competitiveness: Competitiveness::High,
  languages: &["en"],
};

static CA: CountryProfile = CountryProfile {
  cpc_multiplier: 0.8,
  competitiveness: Competitiveness::Medium,
  languages: &["en", "fr"],
};

static AU: CountryProfile = CountryProfile {
  cpc_multiplier: 0.9,
  competitiveness: Competitiveness::Medium,
  languages: &["en"],
};

static DE: CountryProfile = CountryProfile {
  cpc_multiplier: 0.75,
  competitiveness: Competitiveness::Medium,
  languages: &["de", "en"],
};

static IN: CountryProfile = CountryProfile {
  cpc_multiplier: 0.2,
  competitiveness: Competitiveness::Low,
  languages: &["en", "hi"],
};

static BR: CountryProfile = CountryProfile {
  cpc_multiplier: 0.3,
  competitiveness: Competitiveness::Low,
  languages: &["pt"],
};

/// Profile for a known country; `None` for `Country::Other`.
pub fn country_profile(country: &Country) -> Option<&'static CountryProfile> {
  let profile = match country {
    Country::Us => &US,
    Country::Uk => &UK,
    Country::Ca => &CA,
    Country::Au => &AU,
    Country::De => &DE,
    Country::In => &IN,
    Country::Br => &BR,
    Country::Other(_) => return None,
  };
  Some(profile)
}

// ---------------------------------------------------------------------------
// Goals and budgets
// ---------------------------------------------------------------------------

/// Industries whose campaigns typically pursue this goal.
pub fn goal_aligned_industries(goal: &Goal) -> &'static [&'static str] {
  match goal {
    Goal::BrandAwareness => &["fashion", "entertainment", "food", "automotive", "retail"],
    Goal::Traffic => &["ecommerce", "travel", "education", "entertainment"],
    Goal::Engagement => &["entertainment", "fitness", "food", "fashion"],
    Goal::LeadGeneration => &["technology", "finance", "real-estate", "education", "healthcare", "automotive"],
    Goal::Sales => &["ecommerce", "retail", "fashion", "food", "travel"],
    Goal::AppInstalls => &["technology", "entertainment", "fitness", "finance"],
    Goal::Other(_) => &[],
  }
}

/// Representative monthly spend in USD for a bracket; 0 when unrecognized.
pub fn budget_spend(budget: &BudgetBracket) -> u32 {
  match budget {
    BudgetBracket::Under1000 => 500,
    BudgetBracket::From1000To5000 => 3_000,
    BudgetBracket::From5000To10000 => 7_500,
    BudgetBracket::From10000To25000 => 17_500,
    BudgetBracket::Over25000 => 30_000,
    BudgetBracket::Other(_) => 0,
  }
}

/// Best-fit check for an ad type on a platform.
pub fn is_best_ad_type(profile: &PlatformProfile, ad_type: &AdType) -> bool {
  profile.best_ad_types.contains(&ad_type.as_str())
}
