use vergen_gitcl::{CargoBuilder, Emitter, GitclBuilder};

fn main() {
	let mut emitter = Emitter::default();

	let cargo_ok = CargoBuilder::default()
		.target_triple(true)
		.build()
		.map_or(false, |cargo| emitter.add_instructions(&cargo).is_ok());
	if !cargo_ok {
		println!("cargo:rustc-env=VERGEN_CARGO_TARGET_TRIPLE=unknown");
	}
	// Disable the git version if built outside of a checkout.
	let git_ok = GitclBuilder::default()
		.sha(true)
		.build()
		.map_or(false, |gitcl| emitter.add_instructions(&gitcl).is_ok());
	if !git_ok {
		println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
	}
	if emitter.emit().is_err() {
		println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
		println!("cargo:rustc-env=VERGEN_CARGO_TARGET_TRIPLE=unknown");
	}
}
