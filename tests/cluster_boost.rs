use std::env;
use std::fs;

use rand::{SeedableRng, rngs::StdRng};

use clusterboost::prelude::*;
use clusterboost::sample::synthetic;


/// Tests for `ClusterBoost`.
#[cfg(test)]
pub mod cluster_boost_tests {
    use super::*;

    const N_CENTERS: usize = 3;
    const PER_CENTER: usize = 4;

    fn train_and_test(seed: u64) -> (DataSet, DataSet) {
        let mut rng = StdRng::seed_from_u64(seed);
        let locations = synthetic::clustered_locations(
            N_CENTERS, PER_CENTER, 10.0, &mut rng
        ).unwrap();
        let train = synthetic::labeled_dataset(
            locations.clone(), PER_CENTER, 200, &mut rng
        ).unwrap();
        let test = synthetic::labeled_dataset(
            locations, PER_CENTER, 100, &mut rng
        ).unwrap();
        (train, test)
    }

    #[test]
    fn weights_stay_on_simplex() {
        let (train, _) = train_and_test(1);
        let mut booster = ClusterBoost::from_dataset(&train, N_CENTERS).unwrap();
        let n_sample = train.shape().0;

        for _ in 0..30 {
            booster.iterate();
            let weights = (0..n_sample)
                .map(|i| booster.weight_of(i).unwrap())
                .collect::<Vec<_>>();
            let sum = weights.iter().sum::<f64>();
            assert!((sum - 1.0).abs() < 1e-9, "sum = {sum}");
            assert!(weights.iter().all(|w| *w >= 0.0));
        }
        assert_eq!(booster.committee().len(), 30);
        assert!(booster.weight_of(n_sample).is_err());
    }

    #[test]
    fn misclassified_weights_are_doubled() {
        let locations = vec![Location::new(0.0, 0.0)];
        let input = vec![vec![1], vec![2], vec![3], vec![4]];
        let labels = vec![1, 0, 1, 1];
        let mut booster = ClusterBoost::init(&input, &labels, &locations, 1)
            .unwrap();

        // Round 1 predicts `1` everywhere and misses the 2nd example.
        booster.iterate();
        let expected = [0.2, 0.4, 0.2, 0.2];
        for (i, e) in expected.into_iter().enumerate() {
            let w = booster.weight_of(i).unwrap();
            assert!((w - e).abs() < 1e-12, "w[{i}] = {w}");
        }

        // Round 2 predicts `1` only for `x > 2` and misses the 1st example.
        booster.iterate();
        let expected = [1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0, 1.0 / 6.0];
        for (i, e) in expected.into_iter().enumerate() {
            let w = booster.weight_of(i).unwrap();
            assert!((w - e).abs() < 1e-12, "w[{i}] = {w}");
        }

        // The two stumps disagree on `x <= 2`, so the vote is tied.
        assert_eq!(booster.predict(&[1]).unwrap(), 0);
        assert_eq!(booster.predict(&[2]).unwrap(), 0);
        assert_eq!(booster.predict(&[3]).unwrap(), 1);
        assert_eq!(booster.committee().net_vote(&[1]), 0);
        assert_eq!(booster.committee().net_vote(&[4]), 2);
    }

    #[test]
    fn empty_committee_predicts_zero() {
        let (train, _) = train_and_test(2);
        let booster = ClusterBoost::from_dataset(&train, N_CENTERS).unwrap();
        for x in train.input() {
            assert_eq!(booster.predict(x).unwrap(), 0);
        }
    }

    #[test]
    fn deterministic() {
        let (train, test) = train_and_test(3);
        let mut b1 = ClusterBoost::from_dataset(&train, N_CENTERS).unwrap();
        let mut b2 = ClusterBoost::from_dataset(&train, N_CENTERS).unwrap();
        for _ in 0..10 {
            b1.iterate();
            b2.iterate();
        }
        assert_eq!(b1.committee(), b2.committee());
        for x in test.input() {
            assert_eq!(b1.predict(x).unwrap(), b2.predict(x).unwrap());
        }
    }

    #[test]
    fn synthetic_end_to_end() {
        let (train, test) = train_and_test(4);
        let mut booster = ClusterBoost::from_dataset(&train, N_CENTERS)
            .unwrap()
            .force_quit_at(20);
        let weak_learner = booster.weak_learner().clone();
        let f = booster.run(&weak_learner);

        assert_eq!(f.committee.len(), 20);
        assert_eq!(accuracy(&train, &f).unwrap(), 1.0);

        let test_accuracy = accuracy(&test, &f).unwrap();
        println!("Test accuracy: {test_accuracy}");
        assert!(test_accuracy >= 0.9, "test accuracy = {test_accuracy}");

        // `run` and `iterate` agree.
        let mut stepwise = ClusterBoost::from_dataset(&train, N_CENTERS)
            .unwrap();
        for _ in 0..20 {
            stepwise.iterate();
        }
        for x in test.input() {
            assert_eq!(stepwise.predict(x).unwrap(), f.predict(x).unwrap());
        }
    }

    #[test]
    fn model_round_trip() {
        let (train, test) = train_and_test(5);
        let mut booster = ClusterBoost::from_dataset(&train, N_CENTERS)
            .unwrap()
            .force_quit_at(5);
        let weak_learner = booster.weak_learner().clone();
        let f = booster.run(&weak_learner);

        let json = f.to_json().unwrap();
        let g = ClusterBoostClassifier::<DStumpClassifier>::from_json(&json)
            .unwrap();
        assert_eq!(f, g);
        assert_eq!(
            f.predict_all(test.input()).unwrap(),
            g.predict_all(test.input()).unwrap(),
        );
        assert!(ClusterBoostClassifier::<DStumpClassifier>::from_json("{").is_err());
    }

    #[test]
    fn corrupt_model_is_rejected() {
        let (train, _) = train_and_test(7);
        let mut booster = ClusterBoost::from_dataset(&train, N_CENTERS)
            .unwrap()
            .force_quit_at(3);
        let weak_learner = booster.weak_learner().clone();
        let json = booster.run(&weak_learner).to_json().unwrap();

        // A cluster id outside `[0, k)`.
        let bad_id = r#"{"clustering":{"ids":[3],"k":1},"committee":{"hypotheses":[]}}"#;
        // A stump whose sign is not binary.
        let bad_sign = json.replacen(r#""sign":0"#, r#""sign":2"#, 1)
            .replacen(r#""sign":1"#, r#""sign":2"#, 1);
        // Stumps trained on more features than there are clusters.
        let bad_width = json.replace(
            &format!(r#""n_feature":{N_CENTERS}"#),
            &format!(r#""n_feature":{}"#, N_CENTERS + 1),
        );

        for corrupt in [bad_id, bad_sign.as_str(), bad_width.as_str()] {
            assert!(matches!(
                ClusterBoostClassifier::<DStumpClassifier>::from_json(corrupt),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn overflowing_cluster_sums_are_rejected() {
        let locations = vec![Location::new(0.0, 0.0), Location::new(1.0, 0.0)];
        let input = vec![vec![i64::MAX, 1], vec![0, 0]];
        assert!(matches!(
            ClusterBoost::init(&input, &[1, 0], &locations, 1),
            Err(Error::InvalidArgument(_))
        ));

        let input = vec![vec![i64::MAX, 0], vec![0, 0]];
        let booster = ClusterBoost::init(&input, &[1, 0], &locations, 1)
            .unwrap();
        assert!(booster.predict(&[i64::MAX, i64::MAX]).is_err());
    }

    #[test]
    fn logger_writes_csv() {
        let (train, test) = train_and_test(6);
        let booster = ClusterBoost::from_dataset(&train, N_CENTERS)
            .unwrap()
            .force_quit_at(5);
        let weak_learner = booster.weak_learner().clone();

        let mut path = env::temp_dir();
        path.push(format!("clusterboost-log-{}.csv", std::process::id()));

        let mut logger = Logger::new(
            booster,
            weak_learner,
            zero_one_loss::<DStumpClassifier>,
            &train,
            &test,
        )
            .print_every(usize::MAX);
        let f = logger.run(&path).unwrap();
        assert_eq!(f.committee.len(), 5);

        let log = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);
        let lines = log.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Round,TrainLoss,TestLoss,Time");
        assert_eq!(lines.len(), 6);
        for (round, line) in lines[1..].iter().enumerate() {
            let fields = line.split(',').collect::<Vec<_>>();
            assert_eq!(fields.len(), 4);
            assert_eq!(fields[0], format!("{}", round + 1));
        }
    }

    #[test]
    fn invalid_arguments() {
        let locations = vec![Location::new(0.0, 0.0), Location::new(5.0, 5.0)];
        let input = vec![vec![1, 2], vec![3, 4]];

        // k out of range
        assert!(ClusterBoost::init(&input, &[0, 1], &locations, 0).is_err());
        assert!(ClusterBoost::init(&input, &[0, 1], &locations, 3).is_err());
        // labels of a wrong length
        assert!(ClusterBoost::init(&input, &[0], &locations, 1).is_err());
        // non-binary label
        assert!(matches!(
            ClusterBoost::init(&input, &[0, 3], &locations, 1),
            Err(Error::InvalidArgument(_))
        ));
        // locations of a wrong length
        assert!(ClusterBoost::init(&input, &[0, 1], &locations[..1], 1).is_err());
        // empty input
        assert!(ClusterBoost::init(&[], &[], &locations, 1).is_err());

        let booster = ClusterBoost::init(&input, &[0, 1], &locations, 2)
            .unwrap();
        assert!(booster.predict(&[1]).is_err());
        assert!(booster.predict(&[1, 2, 3]).is_err());
    }
}
