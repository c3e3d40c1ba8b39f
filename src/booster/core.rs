//! Provides `Booster` trait.

use crate::WeakLearner;

use std::ops::ControlFlow;


/// The trait [`Booster`] drives a boosting algorithm round by round.
///
/// Each call of [`Booster::boost`] is one round:
/// 1. the booster hands its current weights on the training examples
///    to the weak learner,
/// 2. the weak learner returns a hypothesis `H`,
/// 3. the booster reweights the examples and keeps the hypothesis.
///
/// [`Booster::boost`] returns `ControlFlow::Break` once the booster
/// has run the number of rounds it was configured with,
/// e.g., [`ClusterBoost::force_quit_at`](crate::ClusterBoost::force_quit_at).
/// [`Booster::postprocess`] then assembles the final hypothesis.
///
/// [`Logger`](crate::research::Logger) drives the same three methods,
/// measuring each round.
pub trait Booster<H> {
    /// The final hypothesis output by a boosting algorithm.
    type Output;


    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str;


    /// Returns the parameters of the boosting algorithm
    /// as `(key, value)` pairs.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Resets the state, performs rounds `1, 2, ...`
    /// until [`Booster::boost`] breaks,
    /// and returns the final hypothesis.
    ///
    /// Calling `run` twice trains from scratch twice.
    fn run<W>(&mut self, weak_learner: &W) -> Self::Output
        where W: WeakLearner<Hypothesis = H>
    {
        self.preprocess();

        for iter in 1.. {
            if self.boost(weak_learner, iter).is_break() {
                break;
            }
        }

        self.postprocess()
    }


    /// Resets the weights and the collected hypotheses.
    fn preprocess(&mut self);


    /// Performs the `iteration`th round.
    /// Returns `ControlFlow::Break(rounds)` without training
    /// if `iteration` exceeds the configured number of rounds.
    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = H>;


    /// Returns the combined hypothesis of the rounds performed so far.
    fn postprocess(&mut self) -> Self::Output;
}
