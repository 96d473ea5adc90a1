use component_gen::prelude::*;

use log::info;
use num_format::{Locale, ToFormattedString};

use std::time::Instant;

use super::*;

pub(crate) fn generate(opts: CliOpts) -> Result<(), Error> {
    let CliOpts {
        max_num_nodes,
        max_num_edges,
        max_ship_size,
        seed,
        output_file,
        mapping,
        budget_fraction,
        use_32_bit,
    } = opts;

    // Validation happens before the output file is touched.
    let generator = GeneratorBuilder::new()
        .max_num_nodes(max_num_nodes)
        .max_num_edges(max_num_edges)
        .max_size(max_ship_size)
        .seed(seed)
        .mapping(mapping)
        .budget_fraction(budget_fraction)
        .build()?;

    info!(
        "Generating graph ({} bit) into: {}",
        if use_32_bit { "32" } else { "64" },
        output_file.display()
    );

    if use_32_bit {
        run::<u32>(&generator, &output_file)
    } else {
        run::<u64>(&generator, &output_file)
    }
}

fn run<NI: Idx>(generator: &Generator, output_file: &std::path::Path) -> Result<(), Error> {
    let start = Instant::now();
    let generation = generator.generate::<NI>()?;
    info!("Generation took {:?}", start.elapsed());

    let start = Instant::now();
    generation.graph().write_to_path(output_file)?;
    info!("Writing took {:?}", start.elapsed());

    print_summary(&generation);

    Ok(())
}

fn print_summary<NI: Idx>(generation: &Generation<NI>) {
    let graph = generation.graph();
    let counts = generation.counts();

    println!(
        "Num nodes: {}",
        graph.node_count().to_formatted_string(&Locale::en)
    );
    println!(
        "Num edges: {}\n",
        graph.edge_count().to_formatted_string(&Locale::en)
    );
    println!(
        "path: {} - tree: {} - bipartite: {} - cycle: {}",
        counts.path, counts.tree, counts.bipartite, counts.cycle
    );
    println!("Total: {}", counts.total());
}
