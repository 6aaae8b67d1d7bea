#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::navigation::Navigator;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Navigator that only remembers what it was asked to do.
    #[derive(Clone, Default)]
    pub struct RecordingNavigator {
        requests: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingNavigator {
        pub fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.requests.borrow_mut().push(path.to_string());
        }
    }
}
