use crate::cli::commands::age_on;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dose::{parse_age_ranges, parse_dose_freq};
use crate::core::{normalize_timing, select_age_block};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::paint_timing;
use crate::utils::date::{parse_optional_date, today};
use crate::utils::formatting::describe_bracket;

const WRAP_WIDTH: usize = 72;
const LABEL_WIDTH: usize = 11;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Classify {
        text,
        age,
        birthdate,
    } = cmd
    {
        let age = match age {
            Some(a) => Some(*a),
            None => {
                let birthdate = parse_optional_date(birthdate.as_ref())?.or(cfg.birthdate);
                age_on(birthdate, today())?
            }
        };

        let block = select_age_block(text, age);
        let timing = normalize_timing(Some(&block));
        let dose = parse_dose_freq(&block);
        let ranges = parse_age_ranges(text);

        header("Usage");
        let age_str = age.map_or_else(|| "unknown".to_string(), |a| a.to_string());
        println!("{:<LABEL_WIDTH$}{}", "Age:", age_str);
        println!("{}", wrap_labelled("Block:", &block));
        println!(
            "{:<LABEL_WIDTH$}{} ({})",
            "Timing:",
            paint_timing(timing, timing.label()),
            timing.code()
        );
        println!("{:<LABEL_WIDTH$}{}", "Per dose:", dose.per_dose);
        println!("{:<LABEL_WIDTH$}{}", "Frequency:", dose.frequency);

        println!();
        header("Ranges");
        println!("{}", describe_bracket(&ranges.child));
        println!("{}", describe_bracket(&ranges.adult));

        let (per_dose, unit, freq, timing) = ranges.preferred();
        if per_dose > 0 || freq > 0 {
            println!(
                "{:<LABEL_WIDTH$}1회 {per_dose}{unit} | 1일 {freq}회 | {}",
                "Preferred:",
                timing.label()
            );
        }
    }
    Ok(())
}

/// `label` followed by `text` wrapped under itself.
fn wrap_labelled(label: &str, text: &str) -> String {
    let indent = " ".repeat(LABEL_WIDTH);
    let first = format!("{label:<LABEL_WIDTH$}");
    let options = textwrap::Options::new(WRAP_WIDTH)
        .initial_indent(&first)
        .subsequent_indent(&indent);
    let body = if text.is_empty() { "-" } else { text };
    textwrap::fill(body, options)
}
