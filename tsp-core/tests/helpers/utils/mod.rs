use crate::utils::{Environment, Random};
use std::cell::RefCell;
use std::sync::{Arc, Mutex};

/// A random which returns predefined values in given order.
pub struct FakeRandom {
    ints: RefCell<Vec<i32>>,
    reals: RefCell<Vec<f64>>,
}

impl FakeRandom {
    pub fn new(mut ints: Vec<i32>, mut reals: Vec<f64>) -> Self {
        ints.reverse();
        reals.reverse();

        Self { ints: RefCell::new(ints), reals: RefCell::new(reals) }
    }
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max);
        let value = self.ints.borrow_mut().pop().expect("no more ints");
        assert!(value >= min && value <= max, "fake int {value} is out of [{min}, {max}]");

        value
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        assert!(min < max);
        self.reals.borrow_mut().pop().expect("no more reals")
    }
}

/// Creates an environment which keeps log messages in memory.
pub fn create_test_environment_with_log(seed: u64) -> (Environment, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (Environment::new(logger, Some(seed)), messages)
}
