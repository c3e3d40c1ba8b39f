//! Provides [`ClusterBoost`].
use crate::{
    Booster,
    WeakLearner,
    Classifier,
    Clustering,
    ClusterBoostClassifier,
    DataSet,
    DStump,
    DStumpClassifier,
    Location,
    MajorityVote,
    Result,
    Sample,

    common::{checker, utils},
    common::constants::{DEFAULT_ROUNDS, MISTAKE_FACTOR},
    research::CurrentHypothesis,
};

use std::ops::ControlFlow;


/// Defines `ClusterBoost`.
///
/// `ClusterBoost` first clusters the `m` locations into `k` groups
/// (see [`Clustering`]) and reduces every raw example
/// to the `k` sums of its values per cluster.
/// Then, in each round,
/// 1. a decision stump is trained on the reduced examples
///    weighted by the current distribution,
/// 2. the weight of every misclassified example is doubled,
/// 3. the weights are normalized to sum to `1`.
///
/// The final hypothesis is the unweighted majority vote of the stumps.
/// Ties are predicted as `0`.
///
/// # Example
/// The following code shows a small example
/// for running [`ClusterBoost`].
/// See also:
/// - [`DStump`]
/// - [`ClusterBoostClassifier`]
///
/// ```
/// use clusterboost::prelude::*;
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(0.0, 1.0),
///     Location::new(50.0, 50.0),
/// ];
/// let input = vec![
///     vec![5, 4, 0],
///     vec![0, 1, 3],
///     vec![6, 6, 1],
///     vec![1, 0, 2],
/// ];
/// let labels = vec![1, 0, 1, 0];
///
/// let mut booster = ClusterBoost::init(&input, &labels, &locations, 2)
///     .unwrap();
/// for _ in 0..10 {
///     booster.iterate();
/// }
///
/// let predictions = input.iter()
///     .map(|x| booster.predict(x).unwrap())
///     .collect::<Vec<_>>();
/// assert_eq!(predictions, labels);
/// ```
pub struct ClusterBoost {
    // Clustering of the locations.
    clustering: Clustering,

    // The reduced training sample.
    sample: Sample,

    // Decision stump learner on `sample`.
    weak_learner: DStump,

    // Distribution on sample.
    dist: Vec<f64>,

    // Stumps obtained so far.
    committee: MajorityVote<DStumpClassifier>,

    // Number of rounds `Booster::run` performs.
    max_iter: usize,

    // Optional. If this value is `Some(it)`,
    // `Booster::run` terminates after `it` iterations.
    force_quit_at: Option<usize>,
}


impl ClusterBoost {
    /// Initialize the `ClusterBoost`.
    ///
    /// `input` is an `n × m` matrix whose `i`th row
    /// is the `i`th example observed on `locations`,
    /// and `labels[i]` is its label in `{0, 1}`.
    ///
    /// Returns `Err` if `input` is empty or not rectangular,
    /// `labels.len() != n`, `locations.len() != m`,
    /// some location is missing, some label is not binary,
    /// or `k` is not in `[1, m]`.
    pub fn init(
        input: &[Vec<i64>],
        labels: &[u8],
        locations: &[Location],
        k: usize,
    ) -> Result<Self>
    {
        let m = checker::rows(input, "input")?;
        checker::length("labels", input.len(), labels.len())?;
        checker::length("locations", m, locations.len())?;
        checker::binary_labels(labels)?;

        let clustering = Clustering::new(locations, k)?;
        let reduced = input.iter()
            .map(|x| clustering.reduce_dimensions(x))
            .collect::<Result<Vec<_>>>()?;
        let sample = Sample::new(reduced, labels.to_vec())?;

        let weak_learner = DStump::init(&sample);

        let n_sample = input.len();
        let uni = 1.0 / n_sample as f64;

        Ok(Self {
            clustering,
            sample,
            weak_learner,

            dist: vec![uni; n_sample],
            committee: MajorityVote::default(),

            max_iter: DEFAULT_ROUNDS,
            force_quit_at: None,
        })
    }


    /// Initialize the `ClusterBoost` from a [`DataSet`].
    pub fn from_dataset(data: &DataSet, k: usize) -> Result<Self> {
        Self::init(data.input(), data.labels(), data.locations(), k)
    }


    /// Force quits after `it` iterations.
    /// This parameter only affects [`Booster::run`].
    /// Default is [`DEFAULT_ROUNDS`].
    pub fn force_quit_at(mut self, it: usize) -> Self {
        self.force_quit_at = Some(it);
        self
    }


    /// Applies one round of boosting.
    pub fn iterate(&mut self) {
        let h = self.weak_learner.produce(&self.sample, &self.dist);
        self.update_params(h);
    }


    /// Predicts the label of the raw example `sample` of length `m`
    /// by the majority vote of the stumps obtained so far.
    /// Returns `Err` if `sample.len() != m`.
    pub fn predict(&self, sample: &[i64]) -> Result<u8> {
        let x = self.clustering.reduce_dimensions(sample)?;
        Ok(self.committee.predict(&x))
    }


    /// Returns the current weight on the `i`th example.
    /// Returns `Err` if `i >= n`.
    pub fn weight_of(&self, i: usize) -> Result<f64> {
        checker::index(i, self.dist.len())?;
        Ok(self.dist[i])
    }


    /// Returns the clustering of the locations.
    #[inline]
    pub fn clustering(&self) -> &Clustering {
        &self.clustering
    }


    /// Returns the reduced training sample.
    #[inline]
    pub fn sample(&self) -> &Sample {
        &self.sample
    }


    /// Returns the decision stump learner on [`ClusterBoost::sample`].
    #[inline]
    pub fn weak_learner(&self) -> &DStump {
        &self.weak_learner
    }


    /// Returns the stumps obtained so far.
    #[inline]
    pub fn committee(&self) -> &MajorityVote<DStumpClassifier> {
        &self.committee
    }


    /// Doubles the weights on the examples `h` misclassifies,
    /// normalizes the weights, and appends `h` to the committee.
    fn update_params(&mut self, h: DStumpClassifier) {
        let mistakes = utils::mistakes(&self.sample, &h);
        for i in mistakes.ones() {
            self.dist[i] *= MISTAKE_FACTOR;
        }
        utils::normalize(&mut self.dist[..]);
        checker::simplex_condition(&self.dist[..]);

        self.committee.push(h);
    }
}


impl Booster<DStumpClassifier> for ClusterBoost {
    type Output = ClusterBoostClassifier<DStumpClassifier>;


    fn name(&self) -> &str {
        "ClusterBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let rounds = self.force_quit_at.unwrap_or(DEFAULT_ROUNDS);
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of locations", format!("{}", self.clustering.n_locations())),
            ("# of clusters", format!("{n_feature}")),
            ("Rounds", format!("{rounds}")),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) {
        // Initialize parameters
        let n_sample = self.sample.shape().0;
        let uni = 1.0 / n_sample as f64;
        self.dist = vec![uni; n_sample];

        self.committee = MajorityVote::default();

        self.max_iter = self.force_quit_at.unwrap_or(DEFAULT_ROUNDS);
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = DStumpClassifier>,
    {
        if self.max_iter < iteration {
            return ControlFlow::Break(self.max_iter);
        }

        let h = weak_learner.produce(&self.sample, &self.dist);
        self.update_params(h);

        ControlFlow::Continue(())
    }


    fn postprocess(&mut self) -> Self::Output {
        self.current_hypothesis()
    }
}


impl CurrentHypothesis for ClusterBoost {
    type Output = ClusterBoostClassifier<DStumpClassifier>;
    fn current_hypothesis(&self) -> Self::Output {
        ClusterBoostClassifier::new(
            self.clustering.clone(),
            self.committee.clone(),
        )
    }
}
