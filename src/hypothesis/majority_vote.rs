use serde::{Serialize, Deserialize};
use crate::Classifier;


/// The committee of hypotheses collected by boosting.
/// Every member has one unweighted vote:
/// `+1` for label `1` and `-1` for label `0`.
/// The committee predicts `1` iff the net vote is strictly positive,
/// so ties go to label `0`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MajorityVote<H> {
    /// Set of hypotheses, in the order they were appended.
    pub hypotheses: Vec<H>,
}


impl<H> Default for MajorityVote<H> {
    fn default() -> Self {
        Self { hypotheses: Vec::new() }
    }
}


impl<H: Clone> MajorityVote<H> {
    /// Construct a new `MajorityVote` from the given slice.
    #[inline]
    pub fn from_slice(hypotheses: &[H]) -> Self {
        Self { hypotheses: hypotheses.to_vec() }
    }
}


impl<H> MajorityVote<H> {
    /// Append a hypothesis to the committee.
    #[inline]
    pub fn push(&mut self, hypothesis: H) {
        self.hypotheses.push(hypothesis);
    }


    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if the committee has no member.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Returns the members.
    #[inline]
    pub fn hypotheses(&self) -> &[H] {
        &self.hypotheses[..]
    }
}


impl<H> MajorityVote<H>
    where H: Classifier,
{
    /// Returns `#votes for 1 - #votes for 0`.
    pub fn net_vote(&self, x: &[i64]) -> i64 {
        self.hypotheses.iter()
            .map(|h| 2 * h.predict(x) as i64 - 1)
            .sum::<i64>()
    }
}


impl<H> Classifier for MajorityVote<H>
    where H: Classifier,
{
    fn confidence(&self, x: &[i64]) -> f64 {
        self.net_vote(x) as f64
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Constant(u8);

    impl Classifier for Constant {
        fn confidence(&self, _x: &[i64]) -> f64 {
            if self.0 == 1 { 1.0 } else { -1.0 }
        }
    }

    #[test]
    fn test_empty_committee_predicts_zero() {
        let f = MajorityVote::<Constant>::default();
        assert_eq!(f.predict(&[1, 2]), 0);
    }

    #[test]
    fn test_tie_goes_to_zero() {
        let f = MajorityVote::from_slice(&[Constant(1), Constant(0)]);
        assert_eq!(f.net_vote(&[0]), 0);
        assert_eq!(f.predict(&[0]), 0);
    }

    #[test]
    fn test_majority() {
        let f = MajorityVote::from_slice(
            &[Constant(1), Constant(0), Constant(1)]
        );
        assert_eq!(f.net_vote(&[0]), 1);
        assert_eq!(f.predict(&[0]), 1);
    }
}
