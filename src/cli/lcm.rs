use anyhow::Result;
use romkit::utils::math::lcm;

use super::command::{Cli, LcmArgs};

pub fn cmd_lcm(args: &LcmArgs, _cli: &Cli) -> Result<()> {
    println!("{}", lcm(args.x, args.y)?);
    Ok(())
}
