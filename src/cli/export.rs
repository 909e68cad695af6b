//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::Utc;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_json, export_purchases_csv, export_yaml, ExportFormat};
use crate::models::Ledger;

use super::session::Session;

/// Export the session ledger
///
/// Writes to `output` if given, to a timestamped file in the export directory
/// if `save` is set, and to stdout otherwise.
pub fn handle_export(
    session: &Session,
    format: ExportFormat,
    output: Option<PathBuf>,
    save: bool,
) -> LedgerResult<()> {
    let output = match output {
        Some(path) => Some(path),
        None if save => Some(default_export_path(session, format)?),
        None => None,
    };

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&session.ledger, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| LedgerError::Export(e.to_string()))?;
            println!("Exported {} to: {}", format, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(&session.ledger, format, &mut handle)?;
        }
    }

    Ok(())
}

fn default_export_path(session: &Session, format: ExportFormat) -> LedgerResult<PathBuf> {
    let dir = session.paths.export_dir();
    std::fs::create_dir_all(&dir)
        .map_err(|e| LedgerError::Export(format!("Failed to create export directory: {}", e)))?;

    let stamp = Utc::now().format("%Y%m%d-%H%M%S");
    Ok(dir.join(format!("ledger-{}.{}", stamp, format.extension())))
}

fn write_export<W: Write>(ledger: &Ledger, format: ExportFormat, writer: &mut W) -> LedgerResult<()> {
    match format {
        ExportFormat::Csv => export_purchases_csv(ledger, writer),
        ExportFormat::Json => export_json(ledger, writer),
        ExportFormat::Yaml => export_yaml(ledger, writer),
    }
}
