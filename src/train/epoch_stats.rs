use serde::{Serialize, Deserialize};

/// Training statistics recorded by `train_loop` at each log interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean loss of the pre-update outputs over all samples in this epoch.
    pub train_loss: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_round_trip_through_json() {
        let stats = EpochStats { epoch: 2000, total_epochs: 20000, train_loss: 0.125 };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"epoch":2000,"total_epochs":20000,"train_loss":0.125}"#);
        assert_eq!(serde_json::from_str::<EpochStats>(&json).unwrap(), stats);
    }
}
