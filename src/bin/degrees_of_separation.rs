use clap::{App, Arg};
use labgraph::task;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new("degrees_of_separation")
        .arg(Arg::with_name("NAME1").required(true))
        .arg(Arg::with_name("NAME2").required(true))
        .arg(
            Arg::with_name("input")
                .long("input")
                .takes_value(true)
                .default_value("input.txt"),
        )
        .get_matches();
    println!(
        "{}",
        task::separation(
            matches.value_of("input").unwrap(),
            matches.value_of("NAME1").unwrap(),
            matches.value_of("NAME2").unwrap(),
        )?
    );
    Ok(())
}
