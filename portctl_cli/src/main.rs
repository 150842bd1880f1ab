use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use portctl_cli::Commands;
use portctl_cli::OutputFormat;
use portctl_cli::PortctlCli;
use portctl_core::AnyEmptyResult;
use portctl_core::AnyResult;
use portctl_core::CachedPackageManifest;
use portctl_core::FileSystem;
use portctl_core::InstallPaths;
use portctl_core::PackageSpec;
use portctl_core::PortManifest;
use portctl_core::PortctlConfig;
use portctl_core::extract_port_names_and_versions;
use portctl_core::get_paragraphs;
use portctl_core::get_single_paragraph;
use portctl_core::load_all_ports;
use portctl_core::try_load_cached_package;
use portctl_core::try_load_port;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

type CommandResult = AnyEmptyResult;

fn main() {
	let args = PortctlCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Parse {
			file,
			single,
			format,
		}) => run_parse(&args, file, *single, *format),
		Some(Commands::Ports { format }) => run_ports(&args, *format),
		Some(Commands::Show { port, format }) => run_show(&args, port, *format),
		Some(Commands::Package { spec, format }) => run_package(&args, spec, *format),
		None => {
			eprintln!("No subcommand specified. Run `portctl --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		match e.downcast::<portctl_core::PortctlError>() {
			Ok(portctl_err) => {
				let report: miette::Report = (*portctl_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `PORTCTL_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_env("PORTCTL_LOG")
		.unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.without_time()
		.init();
}

fn resolve_root(args: &PortctlCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Load the root's config (or defaults) and the file source it configures.
fn load_context(args: &PortctlCli) -> AnyResult<(PortctlConfig, InstallPaths, FileSystem)> {
	let root = resolve_root(args);
	let config = PortctlConfig::load(&root)?.unwrap_or_default();
	let paths = InstallPaths::new(&root, &config);
	let source = FileSystem::new(config.max_file_size);

	Ok((config, paths, source))
}

fn print_field(label: &str, value: impl std::fmt::Display) {
	println!("{label:<14} {value}");
}

fn print_json(value: &impl serde::Serialize) -> CommandResult {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

fn run_parse(args: &PortctlCli, file: &Path, single: bool, format: OutputFormat) -> CommandResult {
	let (_, paths, source) = load_context(args)?;
	let file = paths.root.join(file);

	let document = if single {
		vec![get_single_paragraph(&source, &file)?]
	} else {
		get_paragraphs(&source, &file)?
	};

	if let OutputFormat::Json = format {
		return print_json(&document);
	}

	if document.is_empty() {
		println!("No paragraphs found.");
		return Ok(());
	}

	for (index, paragraph) in document.iter().enumerate() {
		if index > 0 {
			println!();
		}
		for (name, value) in paragraph.iter() {
			println!("{}: {value}", colored!(name, bold));
		}
	}

	Ok(())
}

fn run_ports(args: &PortctlCli, format: OutputFormat) -> CommandResult {
	let (config, paths, source) = load_context(args)?;
	let ports = load_all_ports(&source, &paths.ports, &config.exclude.patterns)?;
	let names_and_versions = extract_port_names_and_versions(&ports);

	if let OutputFormat::Json = format {
		return print_json(&names_and_versions);
	}

	if names_and_versions.is_empty() {
		println!("No ports found in {}.", paths.ports.display());
		return Ok(());
	}

	for (name, version) in &names_and_versions {
		println!("{name} {version}");
	}
	println!("\n{} port(s)", names_and_versions.len());

	Ok(())
}

fn run_show(args: &PortctlCli, port: &str, format: OutputFormat) -> CommandResult {
	let (_, paths, source) = load_context(args)?;
	let manifest = try_load_port(&source, &paths.port_dir(port))?;

	if let OutputFormat::Json = format {
		return print_json(&manifest);
	}

	print_port(&manifest);
	Ok(())
}

fn run_package(args: &PortctlCli, spec: &str, format: OutputFormat) -> CommandResult {
	let (_, paths, source) = load_context(args)?;
	let spec: PackageSpec = spec.parse()?;
	let manifest = try_load_cached_package(&source, &paths, &spec)?;

	if let OutputFormat::Json = format {
		return print_json(&manifest);
	}

	print_package(&spec, &manifest);
	Ok(())
}

fn print_port(manifest: &PortManifest) {
	println!("{}", colored!(manifest.name, bold));
	print_field("Version", &manifest.version);
	if let Some(description) = &manifest.description {
		print_field("Description", description);
	}
	if let Some(maintainer) = &manifest.maintainer {
		print_field("Maintainer", maintainer);
	}
	if !manifest.build_depends.is_empty() {
		print_field("Build-Depends", manifest.build_depends.join(", "));
	}
	for (name, value) in &manifest.extra {
		print_field(name, value);
	}
}

fn print_package(spec: &PackageSpec, manifest: &CachedPackageManifest) {
	println!("{}", colored!(spec, bold));
	print_field("Package", &manifest.name);
	print_field("Version", &manifest.version);
	if let Some(architecture) = &manifest.architecture {
		print_field("Architecture", architecture);
	}
	if let Some(description) = &manifest.description {
		print_field("Description", description);
	}
	if let Some(maintainer) = &manifest.maintainer {
		print_field("Maintainer", maintainer);
	}
	if !manifest.depends.is_empty() {
		print_field("Depends", manifest.depends.join(", "));
	}
	for (name, value) in &manifest.extra {
		print_field(name, value);
	}
}
