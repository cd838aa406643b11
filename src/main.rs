use anyhow::Result;

use usage_pie::app::{status_or_degraded, App};
use usage_pie::compose::MagickComposer;
use usage_pie::config::{Config, Mode};
use usage_pie::logging::setup_logging;

fn main() -> Result<()> {
    // Parse CLI arguments; unknown options exit nonzero via clap
    let cli = Config::parse_args();

    // Setup logging
    setup_logging(cli.debug);

    match cli.mode() {
        Mode::Status => {
            println!("{}", status_or_degraded(&cli).to_json_line());
        }
        Mode::GenerateSprites => {
            let app = App::from_cli(&cli)?;
            print!("{}", app.generate_sprites(&MagickComposer::default())?);
        }
        Mode::GenerateCss => {
            print!("{}", App::from_cli(&cli)?.css());
        }
    }
    Ok(())
}
