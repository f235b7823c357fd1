//! Fixed thresholds and signal weights shared by the validators.
//!
//! Thresholds are per operation and never vary with the detected format tier.

/// Vigil version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower and upper bound of every confidence and risk score.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

// --- Thresholds ---

/// Email is valid iff confidence is strictly above this.
pub const EMAIL_VALID_THRESHOLD: f64 = 60.0;
/// Phone is valid iff confidence is strictly above this.
pub const PHONE_VALID_THRESHOLD: f64 = 70.0;
/// Person name is valid iff confidence is strictly above this.
pub const NAME_VALID_THRESHOLD: f64 = 60.0;
/// Generic field is valid iff confidence is strictly above this.
pub const GENERIC_VALID_THRESHOLD: f64 = 50.0;
/// Content is approved iff risk is strictly below this.
pub const MODERATION_APPROVAL_THRESHOLD: f64 = 50.0;

// --- Email ---

pub const EMAIL_BASE_CONFIDENCE: i32 = 50;
pub const EMAIL_TYPO_PENALTY: i32 = -30;
pub const EMAIL_RECOGNIZED_TLD_BONUS: i32 = 15;
pub const EMAIL_TRUSTED_DOMAIN_BONUS: i32 = 20;
pub const EMAIL_SENSIBLE_LENGTH_BONUS: i32 = 10;
pub const EMAIL_LOW_ENTROPY_PENALTY: i32 = -15;
pub const EMAIL_DIGIT_RUN_PENALTY: i32 = -20;
pub const EMAIL_INJECTION_PENALTY: i32 = -30;
pub const EMAIL_WEAK_DOMAIN_PENALTY: i32 = -25;
/// Addresses shorter than or equal to this are not given the length bonus.
pub const EMAIL_MIN_SENSIBLE_LENGTH: usize = 5;
/// Addresses longer than or equal to this are not given the length bonus.
pub const EMAIL_MAX_SENSIBLE_LENGTH: usize = 100;
/// Digit runs at least this long in the address are penalized.
pub const EMAIL_DIGIT_RUN_LENGTH: usize = 5;

// --- Entropy ---

/// Shannon entropy (bits/char) below which text is considered repetitive.
pub const LOW_ENTROPY_BITS: f64 = 2.0;
/// Entropy is only meaningful once a string is at least this long.
pub const ENTROPY_MIN_LENGTH: usize = 6;

// --- Phone ---

pub const PHONE_US_BASE_CONFIDENCE: i32 = 90;
pub const PHONE_US_COUNTRY_CODE_BASE_CONFIDENCE: i32 = 95;
pub const PHONE_INTERNATIONAL_BASE_CONFIDENCE: i32 = 80;
pub const PHONE_REPEATED_DIGIT_PENALTY: i32 = -30;
pub const PHONE_SEQUENTIAL_DIGIT_PENALTY: i32 = -40;
pub const PHONE_AREA_CODE_PENALTY: i32 = -15;
/// Runs of identical digits at least this long are penalized.
pub const PHONE_REPEATED_DIGIT_RUN: usize = 6;
pub const PHONE_INTERNATIONAL_MIN_DIGITS: usize = 10;
pub const PHONE_INTERNATIONAL_MAX_DIGITS: usize = 15;

// --- Moderation ---

pub const SQL_INJECTION_RISK: i32 = 40;
pub const XSS_RISK: i32 = 35;
pub const SPAM_TERM_RISK: i32 = 15;
pub const PROFANITY_HIT_RISK: i32 = 10;
pub const PUNCTUATION_BURST_RISK: i32 = 10;
pub const SHOUTING_RISK: i32 = 20;
pub const EXCESSIVE_LINKS_RISK: i32 = 25;
pub const NEGATIVE_SENTIMENT_RISK: i32 = 15;
/// Uppercase-letter share of all characters above which text is "shouting".
pub const SHOUTING_RATIO: f64 = 0.3;
/// More links than this are treated as link spam.
pub const MAX_LINKS: usize = 2;
/// Negative sentiment above this confidence adds risk.
pub const STRONG_NEGATIVE_CONFIDENCE: f64 = 80.0;

// --- Sentiment ---

/// Each profanity occurrence counts as this many negative words.
pub const PROFANITY_NEGATIVE_WEIGHT: usize = 3;
/// A ratio must exceed this to yield a non-neutral label.
pub const SENTIMENT_MIN_RATIO: f64 = 0.1;
/// Ratio multiplier for non-neutral confidence.
pub const SENTIMENT_RATIO_SCALE: f64 = 500.0;
pub const SENTIMENT_NEUTRAL_CONFIDENCE: f64 = 60.0;
/// Negative sentiment at or above this confidence is inappropriate.
pub const SENTIMENT_INAPPROPRIATE_CONFIDENCE: f64 = 70.0;

// --- Name ---

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 100;
pub const NAME_NATURAL_BASE: i32 = 80;
pub const NAME_UNNATURAL_BASE: i32 = 40;
pub const NAME_NO_CONSONANT_BASE: i32 = 10;
pub const NAME_FULL_NAME_BONUS: i32 = 20;
pub const NAME_DIGIT_PENALTY: i32 = -25;
pub const NAME_PROFANITY_PENALTY: i32 = -40;
pub const NAME_LOW_ENTROPY_PENALTY: i32 = -15;
/// Vowel/consonant ratio range considered natural.
pub const NAME_NATURAL_RATIO_MIN: f64 = 0.25;
pub const NAME_NATURAL_RATIO_MAX: f64 = 1.5;
