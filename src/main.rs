//! Trains `ClusterBoost` on a training file
//! and reports the training and test accuracy.
//!
//! ```txt
//! clusterboost <train-file> <test-file> <k> <rounds> [log.csv]
//! ```
use colored::Colorize;

use clusterboost::prelude::*;

use std::env;
use std::process::ExitCode;


const USAGE: &str = "usage: clusterboost <train-file> <test-file> <k> <rounds> [log.csv]";


fn parse_arg(args: &[String], i: usize, name: &str) -> clusterboost::Result<usize> {
    args[i].parse::<usize>()
        .map_err(|_| Error::InvalidArgument(
            format!("{name} must be a non-negative integer. got `{}`", args[i])
        ))
}


fn run(args: &[String]) -> clusterboost::Result<()> {
    let train = DataSetReader::default().file(args[1].as_str()).read()?;
    let test = DataSetReader::default().file(args[2].as_str()).read()?;
    let k = parse_arg(args, 3, "k")?;
    let rounds = parse_arg(args, 4, "rounds")?;

    let booster = ClusterBoost::from_dataset(&train, k)?
        .force_quit_at(rounds);
    let weak_learner = booster.weak_learner().clone();

    let f = match args.get(5) {
        Some(log) => {
            let mut logger = Logger::new(
                booster,
                weak_learner,
                zero_one_loss::<DStumpClassifier>,
                &train,
                &test,
            );
            logger.run(log)?
        },
        None => {
            let mut booster = booster;
            booster.run(&weak_learner)
        },
    };

    let train_accuracy = accuracy(&train, &f)?;
    let test_accuracy = accuracy(&test, &f)?;
    println!("{} {train_accuracy}", "Training accuracy of model:".bold());
    println!("{} {test_accuracy}", "Test accuracy of model:".bold());
    Ok(())
}


fn main() -> ExitCode {
    let args = env::args().collect::<Vec<String>>();
    if !(5..=6).contains(&args.len()) {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".bold().red());
            ExitCode::FAILURE
        },
    }
}
