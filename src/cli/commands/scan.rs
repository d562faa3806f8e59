use crate::cli::commands::read_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lexicon::{DrugLexicon, scan_prescription};
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::prescription::OcrLines;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan {
        input,
        lexicon,
        file,
        force,
    } = cmd
    {
        let lexicon_path = match lexicon {
            Some(p) => expand_tilde(p),
            None => cfg.lexicon_path().ok_or_else(|| {
                AppError::Config(
                    "no lexicon given (use --lexicon or set 'lexicon' in the config)".into(),
                )
            })?,
        };

        let lexicon = DrugLexicon::load(&lexicon_path)?;
        if lexicon.is_empty() {
            warning(format!("Lexicon {} has no entries", lexicon_path.display()));
        } else {
            info(format!(
                "Loaded {} lexicon entries from {}",
                lexicon.len(),
                lexicon_path.display()
            ));
        }

        let lines: OcrLines = read_input(input)?;
        let scan = scan_prescription(
            &lexicon,
            &lines.texts,
            lines.scores.as_deref(),
            cfg.min_ocr_score,
        );

        ExportLogic::export_scan(&scan, file.as_deref(), *force)?;
    }
    Ok(())
}
