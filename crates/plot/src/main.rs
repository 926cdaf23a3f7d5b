use std::{env, process};

use cobweb_maps::Scenario;
use cobweb_plot::{load_scenario, run};

fn main() {
    let scenario = match env::args_os().nth(1) {
        Some(path) => load_scenario(path).unwrap_or_else(|err| {
            eprintln!("error: {err}");
            process::exit(1);
        }),
        None => Scenario::default(),
    };

    if let Err(err) = run(scenario) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
