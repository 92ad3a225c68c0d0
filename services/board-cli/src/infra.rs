use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use talent_board::board::{BoardService, InMemoryCatalogSource};
use talent_board::catalog::Catalog;
use talent_board::config::AppConfig;
use talent_board::error::AppError;
use talent_board::telemetry;
use tracing::info;

pub(crate) type Board = BoardService<InMemoryCatalogSource>;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Load configuration and install the tracing subscriber.
pub(crate) fn init() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

/// Open the catalog named by flags or configuration.
///
/// `--catalog` and `--today` win over `APP_CATALOG_PATH` and `APP_REFERENCE_DATE`.
pub(crate) fn open_board(
    config: &AppConfig,
    catalog_override: Option<PathBuf>,
    today_override: Option<NaiveDate>,
) -> Result<Board, AppError> {
    let today = today_override
        .or(config.catalog.reference_date)
        .unwrap_or_else(|| Local::now().date_naive());

    let source = match catalog_override.or_else(|| config.catalog.snapshot_path.clone()) {
        Some(path) => {
            let catalog = Catalog::load(path)?;
            InMemoryCatalogSource::new(catalog)
        }
        None => InMemoryCatalogSource::seed(),
    };

    info!(environment = ?config.environment, %today, "board ready");
    Ok(BoardService::new(Arc::new(source), today))
}

/// Seed-backed board pinned to the day after the newest seed activity.
pub(crate) fn seed_board(today: Option<NaiveDate>) -> Board {
    let today = today
        .or_else(|| NaiveDate::from_ymd_opt(2025, 1, 14))
        .unwrap_or_else(|| Local::now().date_naive());
    BoardService::new(Arc::new(InMemoryCatalogSource::seed()), today)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_padded_iso_dates() {
        assert_eq!(
            parse_date(" 2025-01-14 "),
            Ok(NaiveDate::from_ymd_opt(2025, 1, 14).expect("valid date"))
        );
        assert!(parse_date("14/01/2025").is_err());
    }

    #[test]
    fn seed_board_defaults_to_the_demo_reference_day() {
        let board = seed_board(None);
        assert_eq!(
            board.today(),
            NaiveDate::from_ymd_opt(2025, 1, 14).expect("valid date")
        );
    }
}
