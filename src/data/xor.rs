/// Encoding of logical "false". Kept off zero so sigmoid units do not saturate.
pub const LOW: f64 = 0.001;
/// Encoding of logical "true".
pub const HIGH: f64 = 0.999;

/// The four XOR truth-table rows.
#[derive(Debug, Clone, PartialEq)]
pub struct XorDataset {
    pub inputs: Vec<Vec<f64>>,
    pub labels: Vec<Vec<f64>>,
}

const TABLE: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

impl XorDataset {
    /// One output unit holding `a XOR b`.
    pub fn single_output(low: f64, high: f64) -> XorDataset {
        XorDataset::build(low, high, |value| vec![if value { high } else { low }])
    }

    /// Two output units: `[low, high]` for false and `[high, low]` for true.
    pub fn one_hot(low: f64, high: f64) -> XorDataset {
        XorDataset::build(low, high, |value| {
            if value { vec![high, low] } else { vec![low, high] }
        })
    }

    fn build<F>(low: f64, high: f64, label: F) -> XorDataset
    where
        F: Fn(bool) -> Vec<f64>,
    {
        let encode = |b: bool| if b { high } else { low };
        let (inputs, labels): (Vec<_>, Vec<_>) = TABLE.iter()
            .map(|&(a, b)| (vec![encode(a), encode(b)], label(a ^ b)))
            .unzip();
        XorDataset { inputs, labels }
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl Default for XorDataset {
    fn default() -> Self {
        XorDataset::single_output(LOW, HIGH)
    }
}
