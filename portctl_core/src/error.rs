use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum PortctlError {
	#[error(transparent)]
	#[diagnostic(code(portctl::io_error))]
	Io(#[from] std::io::Error),

	#[error("malformed field name `{name}` at {line}:{column}: expected ':'")]
	#[diagnostic(
		code(portctl::malformed_field_name),
		help("field names may only contain `A-Z`, `a-z`, `0-9` and `-`, followed directly by `:`")
	)]
	MalformedFieldName {
		name: String,
		line: usize,
		column: usize,
	},

	#[error("duplicate field `{name}` at {line}:{column}")]
	#[diagnostic(
		code(portctl::duplicate_field),
		help("each field name may appear only once per paragraph")
	)]
	DuplicateField {
		name: String,
		line: usize,
		column: usize,
	},

	#[error("expected exactly one paragraph, found {found}")]
	#[diagnostic(code(portctl::expected_only_one_paragraph))]
	ExpectedOnlyOneParagraph { found: usize },

	#[error("missing required field `{field}`")]
	#[diagnostic(code(portctl::missing_field))]
	MissingField { field: String },

	#[error("invalid package spec: `{0}`")]
	#[diagnostic(
		code(portctl::invalid_package_spec),
		help("package specs are written as `name:triplet`, e.g. `zlib:x64-linux`")
	)]
	InvalidPackageSpec(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(portctl::config_parse),
		help("check that portctl.toml is valid TOML")
	)]
	ConfigParse(String),

	#[error("file too large: `{path}` is {size} bytes (limit: {limit} bytes)")]
	#[diagnostic(
		code(portctl::file_too_large),
		help("increase `max_file_size` in portctl.toml")
	)]
	FileTooLarge { path: String, size: u64, limit: u64 },
}

pub type PortctlResult<T> = Result<T, PortctlError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
