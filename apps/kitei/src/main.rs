// crates.io
use clap::Parser;
// self
use kitei::Args;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = Args::parse();

	kitei::run(args)
}
