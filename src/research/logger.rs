use colored::Colorize;

use crate::{
    Booster,
    DataSet,
    Result,
    WeakLearner,
};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;
use std::ops::ControlFlow;

const DEFAULT_ROUND: usize = 10;
const DEFAULT_TIMELIMIT_MILLIS: u128 = u128::MAX;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Round,TrainLoss,TestLoss,Time\n";


/// Struct `Logger` provides a generic function that
/// logs train/test loss value and running time
/// for each step of boosting.
///
/// # Example
/// ```no_run
/// use clusterboost::prelude::*;
///
/// let train = DataSetReader::default().file("train.txt").read().unwrap();
/// let test = DataSetReader::default().file("test.txt").read().unwrap();
///
/// let booster = ClusterBoost::from_dataset(&train, 10)
///     .unwrap()
///     .force_quit_at(200);
/// let weak_learner = booster.weak_learner().clone();
///
/// let mut logger = Logger::new(
///     booster, weak_learner, zero_one_loss::<DStumpClassifier>, &train, &test,
/// )
///     .print_every(20);
/// let f = logger.run("log.csv").unwrap();
/// ```
pub struct Logger<'a, B, W, G> {
    booster: B,
    weak_learner: W,
    loss_func: G,
    train: &'a DataSet,
    test: &'a DataSet,
    time_limit: u128,
    round: usize,
}


impl<'a, B, W, G> Logger<'a, B, W, G> {
    /// Create a new instance of `Logger`.
    pub fn new(
        booster: B,
        weak_learner: W,
        loss_func: G,
        train: &'a DataSet,
        test: &'a DataSet,
    ) -> Self
    {
        Self {
            booster,
            weak_learner,
            loss_func,
            train,
            test,
            time_limit: DEFAULT_TIMELIMIT_MILLIS,
            round: DEFAULT_ROUND,
        }
    }
}


impl<H, B, W, G, O, S> Logger<'_, B, W, G>
    where B: Booster<H, Output = O> + CurrentHypothesis<Output = S>,
          W: WeakLearner<Hypothesis = H>,
          G: Fn(&DataSet, &S) -> Result<f64>,
{
    /// Set the time limit for boosting algorithm as milliseconds.
    /// If the boosting algorithm reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_millis(mut self, time_limit: u128) -> Self {
        self.time_limit = time_limit;
        self
    }


    /// Set the time limit for boosting algorithm as seconds.
    /// If the boosting algorithm reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_secs(mut self, time_limit: u64) -> Self {
        self.time_limit = (time_limit as u128).saturating_mul(1_000);
        self
    }


    /// Set the time limit for boosting algorithm as minutes.
    /// If the boosting algorithm reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_mins(mut self, time_limit: u64) -> Self {
        self.time_limit = (time_limit as u128).saturating_mul(60_000);
        self
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `10` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round.max(1);
        self
    }


    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "ERROR".bold().green(),
            "ERROR".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let limit = if self.time_limit != u128::MAX {
            time_format(self.time_limit)
        } else {
            "Nothing".into()
        };
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.booster.name().bold().green(),
        );
        if let Some(info) = self.booster.info() {
            println!("{}", info_lines(info));
        }

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Weak Learner".bold(),
            self.weak_learner.name().bold().green(),
        );
        if let Some(info) = self.weak_learner.info() {
            println!("{}", info_lines(info));
        }
        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Time Limit".bold(),
            limit.bold().green(),
            "".bold(),
        );
    }


    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as `Booster::run`.
    /// This method measures running time per iteration,
    /// and writes a line `round,train,test,time` to `filename`.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P) -> Result<O> {
        // Open file
        let mut file = File::create(filename)?;

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        // ---------------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess();
        self.print_stats();

        // Cumulative time
        let mut time_acc = 0;

        // ---------------------------------------------------------------------
        // Boosting step
        if self.round != usize::MAX { self.print_log_header(); }
        for iter in 1.. {
            // Start measuring time
            let now = Instant::now();

            let flow = self.booster.boost(&self.weak_learner, iter);

            // Stop measuring and convert `Duration` to Milliseconds.
            time_acc += now.elapsed().as_millis();

            if let ControlFlow::Break(_) = flow {
                break;
            }

            let f = self.booster.current_hypothesis();
            let train = (self.loss_func)(self.train, &f)?;
            let test = (self.loss_func)(self.test, &f)?;

            // Write the results to `file`.
            let line = format!("{iter},{train},{test},{time_acc}\n");
            file.write_all(line.as_bytes())?;

            if time_acc > self.time_limit {
                println!(
                    "{} {}\t\t{}\t{}\t{}\n",
                    "[TLE]".bold().bright_red(),
                    format!("{:>WIDTH$}", iter).bold().red(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", train).bold().green(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", test).bold().yellow(),
                    time_format(time_acc).bold().cyan(),
                );
                break;
            }

            if self.round != usize::MAX && iter % self.round == 0 {
                println!(
                    "{} {}\t\t{}\t{}\t{}",
                    "[LOG]".bold().magenta(),
                    format!("{:>WIDTH$}", iter).red(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", train).green(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", test).yellow(),
                    time_format(time_acc).bold().cyan(),
                );
            }
        }

        let f = self.booster.postprocess();
        if self.round != usize::MAX {
            let last = self.booster.current_hypothesis();
            let train = (self.loss_func)(self.train, &last)?;
            let test = (self.loss_func)(self.test, &last)?;
            println!(
                "{} {}\t\t{}\t{}\t{}\n",
                "[FIN]".bold().bright_green(),
                format!("{:>WIDTH$}", "").red(),
                format!("{:>WIDTH$.PREC_WIDTH$}", train).bold().green(),
                format!("{:>WIDTH$.PREC_WIDTH$}", test).bold().yellow(),
                time_format(time_acc).bold().cyan(),
            );
        }
        Ok(f)
    }
}


fn info_lines(info: Vec<(&str, String)>) -> String {
    info.into_iter()
        .map(|(key, val)| {
            format!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                key,
                val.bold().yellow(),
                width = STAT_WIDTH - 8
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}


/// Implementing this trait allows you to use [`Logger`] to
/// log algorithm's behavor.
pub trait CurrentHypothesis {
    /// The hypothesis at the current state.
    type Output;
    /// Returns the combined hypothesis at the current state.
    fn current_hypothesis(&self) -> Self::Output;
}
