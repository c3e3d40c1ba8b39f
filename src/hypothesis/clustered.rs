use serde::{Serialize, Deserialize};

use crate::{
    Classifier,
    Clustering,
    DStumpClassifier,
    Error,
    MajorityVote,
    Result,
};


/// The final hypothesis of [`ClusterBoost`](crate::ClusterBoost).
/// It reduces a raw example on `m` locations to `k` cluster sums,
/// then takes the majority vote of the committee.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClusterBoostClassifier<H> {
    /// The clustering of the training locations.
    pub clustering: Clustering,
    /// The committee trained on the reduced examples.
    pub committee: MajorityVote<H>,
}


impl<H> ClusterBoostClassifier<H> {
    /// Construct a new classifier.
    #[inline]
    pub fn new(clustering: Clustering, committee: MajorityVote<H>) -> Self {
        Self { clustering, committee }
    }
}


impl<H> ClusterBoostClassifier<H>
    where H: Classifier,
{
    /// Predicts the label of the raw example `sample` of length `m`.
    /// Returns `Err` if `sample.len() != m`.
    pub fn predict(&self, sample: &[i64]) -> Result<u8> {
        let x = self.clustering.reduce_dimensions(sample)?;
        Ok(self.committee.predict(&x))
    }


    /// Predicts the labels of the raw examples.
    pub fn predict_all<T>(&self, samples: &[T]) -> Result<Vec<u8>>
        where T: AsRef<[i64]>,
    {
        samples.iter()
            .map(|x| self.predict(x.as_ref()))
            .collect()
    }
}


impl<H> ClusterBoostClassifier<H>
    where H: Serialize,
{
    /// Serializes `self` into a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}


impl ClusterBoostClassifier<DStumpClassifier> {
    /// Deserializes a classifier from a JSON string.
    ///
    /// Returns `Err` if `json` is malformed,
    /// or describes a classifier that [`ClusterBoost`](crate::ClusterBoost)
    /// cannot produce.
    /// E.g., a cluster id out of range, a stump with sign `2`,
    /// or a stump trained on a dimension other than `k`.
    pub fn from_json(json: &str) -> Result<Self> {
        let f: Self = serde_json::from_str(json)?;
        f.clustering.validate()?;

        let k = f.clustering.n_clusters();
        for (t, h) in f.committee.hypotheses().iter().enumerate() {
            h.validate()?;
            if h.n_feature() != k {
                return Err(Error::invalid(format!(
                    "stump {t} expects {} features, but k = {k}",
                    h.n_feature()
                )));
            }
        }
        Ok(f)
    }
}
