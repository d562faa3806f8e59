pub mod age;
pub mod age_block;
pub mod dose;
pub mod lexicon;
pub mod lookup;
pub mod ocr;
pub mod planner;
pub mod scheduler;
pub mod timing;

pub use age::calc_age;
pub use age_block::select_age_block;
pub use dose::parse_dose_freq;
pub use planner::plan_times_by_timing;
pub use scheduler::build_schedule;
pub use timing::normalize_timing;
