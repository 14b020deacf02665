pub mod formatter;

pub use formatter::{
    format_breakdown, format_fee, format_json, format_match_results, format_percent,
    format_pet_age, format_pet_detail, should_use_colors, NO_MATCHES,
};
