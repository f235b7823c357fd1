mod field_kind;
mod history_record;
mod rule_category;
mod score;
mod sentiment;
mod stats;
mod validation_request;
mod validation_result;

pub use field_kind::FieldKind;
pub use history_record::HistoryRecord;
pub use rule_category::{RuleCategory, RuleScope};
pub use score::Score;
pub use sentiment::{Sentiment, SentimentLabel};
pub use stats::{Stats, StatsReport};
pub use validation_request::ValidationRequest;
pub use validation_result::ValidationResult;
