use anyhow::Result;
use clap::Parser as ClapParser;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;

use cli::command::{Cli, Commands, LogFormat};
use cli::dump::cmd_dump;
use cli::field::{cmd_read, cmd_write};
use cli::lcm::cmd_lcm;
use cli::palette::cmd_palette;
use cli::scan::cmd_scan;

mod cli;
mod input;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let base_level = cli.loglevel.to_level_filter();

    let multi = MultiProgress::new();

    let mut env_builder = env_logger::Builder::from_default_env();
    env_builder.filter_level(base_level);
    match cli.log_format {
        LogFormat::Plain => {
            env_builder.format_timestamp_secs();
        }
        LogFormat::Json => {
            env_builder.format(|buf, record| {
                use std::io::Write;
                writeln!(
                    buf,
                    "{{\"ts\":{},\"lvl\":\"{}\",\"msg\":\"{}\"}}",
                    buf.timestamp(),
                    record.level(),
                    record.args().to_string().escape_default()
                )
            });
        }
    }

    let pb = if cli.progress {
        let logger = env_builder.build();
        LogWrapper::new(multi.clone(), logger).try_init()?;
        Some(&multi)
    } else {
        env_builder.try_init()?;
        None
    };

    log::debug!(
        "{} {} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_DESCRIBE").unwrap_or("unknown revision")
    );

    romkit::utils::debug::set_debug(cli.debug_views);

    match cli.command {
        Commands::Read(ref args) => cmd_read(args, &cli)?,
        Commands::Write(ref args) => cmd_write(args, &cli)?,
        Commands::Dump(ref args) => cmd_dump(args, &cli)?,
        Commands::Scan(ref args) => cmd_scan(args, &cli, pb)?,
        Commands::Palette(ref args) => cmd_palette(args, &cli)?,
        Commands::Lcm(ref args) => cmd_lcm(args, &cli)?,
    }

    Ok(())
}
