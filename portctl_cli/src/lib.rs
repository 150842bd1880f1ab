use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Inspect CONTROL files, ports and cached package manifests.",
	long_about = "portctl reads the CONTROL files that describe buildable ports and already built \
	              packages.\n\nQuick start:\n  portctl parse ports/zlib/CONTROL   Print the \
	              fields of a file\n  portctl ports                      List every port and \
	              its version\n  portctl show zlib                  Show one port\n  portctl \
	              package zlib:x64-linux     Show a cached package"
)]
pub struct PortctlCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the root directory holding `portctl.toml`, the ports tree and
	/// the package cache.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output, including ports that were skipped.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Parse a control file and print its paragraphs.
	///
	/// Fails on the first malformed or repeated field name. With `--single`
	/// the file must contain exactly one paragraph.
	Parse {
		/// The file to parse.
		file: PathBuf,

		/// Require exactly one paragraph.
		#[arg(long, default_value_t = false)]
		single: bool,

		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// List every port with a valid CONTROL file.
	///
	/// Port directories without a usable CONTROL file are skipped. When two
	/// ports share a name the first one in directory order is listed.
	Ports {
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Show the manifest of a single port.
	Show {
		/// Name of the port directory.
		port: String,

		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Show the manifest of a package in the package cache.
	Package {
		/// Package spec written as `name:triplet`.
		spec: String,

		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
