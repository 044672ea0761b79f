use anyhow::{Context, Result};
use farmgeo::geometry::{Srid, parse_polygon_geojson};
use std::io::Read;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file containing a Polygon or a Feature with a Polygon geometry.
	/// Use "-" to read from stdin.
	#[arg(required = true, verbatim_doc_comment)]
	pub input: String,

	/// Name written to `properties.name`. Defaults to the name in the input.
	#[arg(short, long)]
	pub name: Option<String>,

	/// Reference system the polygon is tagged with.
	#[arg(long, default_value_t = Srid::WGS84.code())]
	pub srid: u32,

	/// Pretty-print the output.
	#[arg(long)]
	pub pretty: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let feature = normalize(arguments)?;
	println!("{feature}");
	Ok(())
}

fn normalize(arguments: &Subcommand) -> Result<String> {
	let text = read_input(&arguments.input)?;

	let (name, polygon) = parse_polygon_geojson(&text, Srid(arguments.srid))
		.with_context(|| format!("normalizing polygon from {}", arguments.input))?;
	log::debug!("normalized {polygon:?}");

	let name = arguments.name.as_deref().or(name.as_deref());
	let feature = polygon.to_geojson_feature(name);

	Ok(if arguments.pretty {
		serde_json::to_string_pretty(&feature)?
	} else {
		serde_json::to_string(&feature)?
	})
}

fn read_input(input: &str) -> Result<String> {
	if input == "-" {
		let mut text = String::new();
		std::io::stdin().read_to_string(&mut text).context("reading stdin")?;
		Ok(text)
	} else {
		std::fs::read_to_string(input).with_context(|| format!("reading {input}"))
	}
}
