use crate::{
    Classifier,
    ClusterBoostClassifier,
    DataSet,
    Result,
};


/// Returns the fraction of examples in `data` that `f` predicts correctly.
/// Returns `Err` if the examples of `data` do not have
/// the number of locations `f` was trained on.
pub fn accuracy<H>(data: &DataSet, f: &ClusterBoostClassifier<H>)
    -> Result<f64>
    where H: Classifier,
{
    let n_sample = data.shape().0;
    let predictions = f.predict_all(data.input())?;
    let correct = predictions.into_iter()
        .zip(data.labels())
        .filter(|(p, y)| p == *y)
        .count();
    Ok(correct as f64 / n_sample as f64)
}


/// Zero-one loss, i.e., `1 - accuracy`.
pub fn zero_one_loss<H>(data: &DataSet, f: &ClusterBoostClassifier<H>)
    -> Result<f64>
    where H: Classifier,
{
    accuracy(data, f).map(|acc| 1f64 - acc)
}
