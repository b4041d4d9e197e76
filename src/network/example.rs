/// One training pair. The trainer only borrows and reorders these.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Example {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Example {
        Example { input, target }
    }
}
