//! Cloud Resource Multiplexer CLI
//!
//! Command-line interface for listing kinds, normalizing kind names,
//! extracting schemas and wrapping or unwrapping cloud resource envelopes.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cloud_resource_mux::{
    extract_schema, load_document, load_document_auto, normalize,
    parse_schema_uri, payload_json_schema, unwrap, validate_against_descriptor, wrap,
    wrap_cloud_object, Catalog, CodecError, Envelope, Kind, Metadata, NormalizeError, Provider,
    WrapOptions,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cloud-resource-mux")]
#[command(about = "Wrap, unwrap and describe multiplexed cloud resource payloads")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known cloud resource kind
    Kinds {
        /// Only list kinds of this provider (e.g. aws, gcp, kubernetes)
        #[arg(long)]
        provider: Option<String>,

        /// Group kinds by provider with their API versions
        #[arg(long, conflicts_with = "provider")]
        grouped: bool,

        /// Only list kinds with a wired payload type
        #[arg(long)]
        registered: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Resolve a kind spelling to its canonical name
    Normalize {
        /// Kind spelling (e.g. "AWS RDS Instance", AwsRdsInstance)
        input: String,

        /// Output results as JSON (for automation)
        #[arg(long)]
        json: bool,
    },

    /// Describe the fields of a kind's payload
    Schema {
        /// Kind spelling or schema URI (cloud-resource-schema://AwsEksCluster)
        kind: String,

        /// Emit the JSON Schema used for strict validation instead
        #[arg(long)]
        json_schema: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Wrap spec data into a cloud resource envelope
    Wrap {
        /// Spec data file, or - for stdin
        data: String,

        /// Kind of the data. Without it the data must be a cloud object
        /// carrying its own kind and metadata.
        #[arg(long)]
        kind: Option<String>,

        /// Metadata file for the envelope (requires --kind)
        #[arg(long, requires = "kind")]
        metadata: Option<PathBuf>,

        /// Ignore unknown fields instead of rejecting them
        #[arg(long)]
        lenient: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Extract the concrete payload from an envelope
    Unwrap {
        /// Envelope file, or - for stdin
        envelope: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Validate spec data against a kind's payload type
    Validate {
        /// Kind spelling
        kind: String,

        /// Spec data file, or - for stdin
        data: String,

        /// Output results as JSON (for automation)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::new();

    let result = match cli.command {
        Commands::Kinds {
            provider,
            grouped,
            registered,
            pretty,
        } => run_kinds(&catalog, provider.as_deref(), grouped, registered, pretty),
        Commands::Normalize { input, json } => run_normalize(&catalog, &input, json),
        Commands::Schema {
            kind,
            json_schema,
            pretty,
        } => run_schema(&catalog, &kind, json_schema, pretty),
        Commands::Wrap {
            data,
            kind,
            metadata,
            lenient,
            pretty,
        } => run_wrap(
            &catalog,
            WrapArgs {
                data,
                kind,
                metadata,
                lenient,
                pretty,
            },
        ),
        Commands::Unwrap { envelope, pretty } => run_unwrap(&envelope, pretty),
        Commands::Validate { kind, data, json } => run_validate(&catalog, &kind, &data, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_kinds(
    catalog: &Catalog,
    provider: Option<&str>,
    grouped: bool,
    registered: bool,
    pretty: bool,
) -> Result<(), u8> {
    if grouped {
        return print_json(&catalog.grouped(), pretty);
    }

    let provider = match provider {
        Some(name) => Some(parse_provider(name).ok_or_else(|| {
            eprintln!("Error: unknown provider: {}", name);
            2u8
        })?),
        None => None,
    };

    let infos: Vec<_> = catalog
        .kind_infos()
        .into_iter()
        .filter(|info| provider.map_or(true, |p| info.provider == p))
        .filter(|info| {
            !registered
                || catalog
                    .kind(&info.kind)
                    .map_or(false, |kind| catalog.is_registered(kind))
        })
        .collect();

    print_json(&infos, pretty)
}

fn parse_provider(name: &str) -> Option<Provider> {
    let name = name.to_lowercase().replace(['-', '_', ' '], "");
    serde_json::from_value(serde_json::Value::String(name)).ok()
}

#[derive(Serialize)]
struct NormalizeOutput<'a> {
    input: &'a str,
    kind: &'static str,
    pascal_name: String,
    provider: Provider,
}

fn run_normalize(catalog: &Catalog, input: &str, json_output: bool) -> Result<(), u8> {
    match normalize(catalog, input) {
        Ok(kind) => {
            if json_output {
                print_json(
                    &NormalizeOutput {
                        input,
                        kind: kind.name(),
                        pascal_name: kind.pascal_name(),
                        provider: kind.provider(),
                    },
                    false,
                )
            } else {
                println!("{}", kind);
                Ok(())
            }
        }
        Err(e) => {
            if json_output {
                let popular: serde_json::Map<String, serde_json::Value> = catalog
                    .popular_kinds_by_category()
                    .into_iter()
                    .map(|(category, kinds)| {
                        let names: Vec<&str> = kinds.iter().map(Kind::name).collect();
                        (category.to_string(), serde_json::json!(names))
                    })
                    .collect();
                let suggestions = match &e {
                    NormalizeError::UnknownKind { suggestions, .. } => suggestions.clone(),
                    NormalizeError::Empty => Vec::new(),
                };
                let output = serde_json::json!({
                    "error": "INVALID_CLOUD_RESOURCE_KIND",
                    "message": e.to_string(),
                    "input": input,
                    "suggestions": suggestions,
                    "popular_kinds_by_category": popular,
                });
                println!("{}", output);
            } else {
                eprintln!("Error: {}", e);
            }
            Err(2)
        }
    }
}

fn run_schema(catalog: &Catalog, raw: &str, json_schema: bool, pretty: bool) -> Result<(), u8> {
    let spelling = parse_schema_uri(raw).unwrap_or(raw);
    let kind = resolve_kind(catalog, spelling)?;

    if json_schema {
        let entry = catalog.resolve_variant(kind).map_err(report_codec_error)?;
        return print_json(&payload_json_schema(entry.descriptor()), pretty);
    }

    let schema = extract_schema(catalog, kind).map_err(report_codec_error)?;
    print_json(&schema, pretty)
}

struct WrapArgs {
    data: String,
    kind: Option<String>,
    metadata: Option<PathBuf>,
    lenient: bool,
    pretty: bool,
}

fn run_wrap(catalog: &Catalog, args: WrapArgs) -> Result<(), u8> {
    let WrapArgs {
        data: data_source,
        kind,
        metadata: metadata_path,
        lenient,
        pretty,
    } = args;

    let data = load_document_auto(&data_source).map_err(|e| {
        eprintln!("Error loading data: {}", e);
        e.exit_code() as u8
    })?;
    let options = WrapOptions::new().strict(!lenient);

    let envelope = match kind {
        Some(spelling) => {
            let kind = resolve_kind(catalog, &spelling)?;
            let metadata = match metadata_path {
                Some(path) => {
                    let raw = load_document(&path).map_err(|e| {
                        eprintln!("Error loading metadata: {}", e);
                        e.exit_code() as u8
                    })?;
                    let metadata = Metadata::from_value(&raw)
                        .map_err(|e| report_codec_error(CodecError::from(e)))?;
                    Some(metadata)
                }
                None => None,
            };
            wrap(catalog, kind, &data, metadata, &options)
        }
        None => wrap_cloud_object(catalog, &data, &options),
    }
    .map_err(report_codec_error)?;

    print_json(&envelope, pretty)
}

fn run_unwrap(source: &str, pretty: bool) -> Result<(), u8> {
    let raw = load_document_auto(source).map_err(|e| {
        eprintln!("Error loading envelope: {}", e);
        e.exit_code() as u8
    })?;
    let envelope = Envelope::from_value(raw).map_err(|e| {
        eprintln!("Error: {}", e);
        2u8
    })?;

    let payload = unwrap(&envelope).map_err(report_codec_error)?;
    let value = payload.to_value().map_err(|e| {
        eprintln!("Error serializing payload: {}", e);
        2u8
    })?;
    print_json(&value, pretty)
}

fn run_validate(
    catalog: &Catalog,
    raw_kind: &str,
    source: &str,
    json_output: bool,
) -> Result<(), u8> {
    let kind = match normalize(catalog, raw_kind) {
        Ok(kind) => kind,
        Err(e) => {
            report_error(json_output, &e.to_string());
            return Err(2);
        }
    };
    let entry = catalog.resolve_variant(kind).map_err(|e| {
        report_error(json_output, &e.to_string());
        e.exit_code() as u8
    })?;
    let data = load_document_auto(source).map_err(|e| {
        report_error(json_output, &format!("loading data: {}", e));
        e.exit_code() as u8
    })?;

    match validate_against_descriptor(entry.descriptor(), &data) {
        Ok(()) => {
            if json_output {
                println!(r#"{{"valid":true}}"#);
            } else {
                println!("Valid");
            }
            Ok(())
        }
        Err(errors) => {
            if json_output {
                let output = serde_json::json!({
                    "valid": false,
                    "errors": errors
                });
                println!("{}", output);
            } else {
                eprintln!("Validation failed:");
                for error in errors {
                    eprintln!("  {}", error);
                }
            }
            Err(1)
        }
    }
}

fn resolve_kind(catalog: &Catalog, spelling: &str) -> Result<Kind, u8> {
    normalize(catalog, spelling).map_err(|e| {
        eprintln!("Error: {}", e);
        2u8
    })
}

fn report_codec_error(e: CodecError) -> u8 {
    eprintln!("Error: {}", e);
    if let CodecError::InvalidSpecData { violations, .. } = &e {
        for violation in violations.iter().skip(1) {
            eprintln!("  {}", violation);
        }
    }
    e.exit_code() as u8
}

/// Output an error message in plain text or JSON format.
fn report_error(json_output: bool, msg: &str) {
    if json_output {
        println!("{}", serde_json::json!({ "valid": false, "error": msg }));
    } else {
        eprintln!("Error: {}", msg);
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), u8> {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;
    println!("{}", output);
    Ok(())
}
