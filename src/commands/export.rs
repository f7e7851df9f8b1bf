use clap::{Args, Subcommand};
use std::path::PathBuf;

use menuboard_core::{ExportKind, Id, MenuBoard};

#[derive(Args)]
pub struct ExportCommand {
    #[command(subcommand)]
    pub command: ExportSubcommand,
}

#[derive(Subcommand)]
pub enum ExportSubcommand {
    /// Download the printable menu PDF
    Pdf {
        /// Restaurant ID
        restaurant: Id,

        /// Output file (default: menu_<id>.pdf)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Download the menu QR code image
    Qr {
        /// Restaurant ID
        restaurant: Id,

        /// Output file (default: menu_qr_<id>.png)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

impl ExportCommand {
    pub async fn run(&self, board: &MenuBoard) -> Result<(), Box<dyn std::error::Error>> {
        let (kind, restaurant, output) = match &self.command {
            ExportSubcommand::Pdf { restaurant, output } => (ExportKind::Pdf, *restaurant, output),
            ExportSubcommand::Qr { restaurant, output } => (ExportKind::Qr, *restaurant, output),
        };

        let bytes = board.client().export(kind, restaurant).await?;
        let path = output
            .clone()
            .unwrap_or_else(|| PathBuf::from(kind.default_file_name(restaurant)));

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &bytes)?;

        println!("Saved {} to {} ({} bytes)", kind, path.display(), bytes.len());
        Ok(())
    }
}
