use std::path::Path;

use crate::cli::commands::InitArgs;
use crate::io::desk_io::{self, SEED_FILE};
use crate::model::config::DeskInfo;

/// Create a desk under `root`
pub fn cmd_init(args: InitArgs, root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let name = args.name.unwrap_or_else(|| DeskInfo::default().name);
    let desk_dir = desk_io::init_desk(root, &name, args.with_seed, args.force)?;
    println!("Initialized desk \"{}\" in {}", name, desk_dir.display());
    if args.with_seed {
        println!("Wrote sample inbox to {}", desk_dir.join(SEED_FILE).display());
    }
    Ok(())
}
