#![allow(clippy::many_single_char_names)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::redundant_closure_for_method_calls)]

use anyhow::Context;
use clap::{load_yaml, value_t, values_t, App};
use homology::coset::CosetLimits;
use homology::utils::{init_logging, load_hypergraph, Config, OutputFormat};
use homology::{compute_hypergraph_homology, valid_dimensions, HomologyOptions};

fn main() -> anyhow::Result<()> {
    let yaml = load_yaml!("cli.yml");
    let matches = App::from_yaml(yaml).get_matches();
    let config = get_config(&matches)?;
    init_logging(config.verbosity);

    let hypergraph = load_hypergraph(&config.input)?;
    let dimensions = if config.dimensions.is_empty() {
        valid_dimensions(&hypergraph).collect()
    } else {
        config.dimensions.clone()
    };

    let results = dimensions
        .iter()
        .map(|&k| {
            compute_hypergraph_homology(&hypergraph, k, &config.options)
                .with_context(|| format!("Failed to compute H_{k}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    match config.format {
        OutputFormat::Text => {
            for result in &results {
                print!("{result}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
    }
    Ok(())
}

fn get_config(matches: &clap::ArgMatches<'_>) -> anyhow::Result<Config> {
    let dimensions = if matches.is_present("dimension") {
        values_t!(matches, "dimension", usize)?
    } else {
        Vec::new()
    };
    Ok(Config {
        input: matches
            .value_of("hypergraph")
            .context("No hypergraph given")?
            .into(),
        dimensions,
        options: HomologyOptions {
            shortest: matches.is_present("shortest"),
            coset_limits: CosetLimits {
                max_boundary_rank: value_t!(matches, "max-boundary-rank", usize)?,
            },
        },
        format: if matches.is_present("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
        verbosity: matches.occurrences_of("verbose"),
    })
}
