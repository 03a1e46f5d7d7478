use dioxus::prelude::*;

/// Holds a loading flag up for as long as it lives.
///
/// Setting the flag back happens on drop, so it is cleared on every exit of
/// the task that owns the guard, including early returns and cancellation.
pub struct LoadingGuard {
    flag: Signal<bool>,
}

impl LoadingGuard {
    pub fn start(mut flag: Signal<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        // The owning component may already be gone
        if let Ok(mut loading) = self.flag.try_write() {
            *loading = false;
        }
    }
}

/// Indeterminate progress indicator.
#[component]
pub fn Spinner(#[props(default = "".to_string())] class: String) -> Element {
    rsx! {
        div {
            class: "spinner {class}",
            role: "progressbar",
            aria_label: "Carregando",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::time::Duration;

    fn app() -> Element {
        rsx! {}
    }

    /// Run `test` inside a live component scope so signals can be created.
    fn in_component(test: impl FnOnce()) {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dom.in_scope(ScopeId::APP, test);
    }

    fn submit(flag: Signal<bool>, fields_complete: bool) -> Result<(), &'static str> {
        let _loading = LoadingGuard::start(flag);
        assert!(*flag.peek());
        if !fields_complete {
            return Err("missing fields");
        }
        Err("rejected")
    }

    #[test]
    fn test_flag_raised_while_guard_lives() {
        in_component(|| {
            let flag = Signal::new(false);
            let guard = LoadingGuard::start(flag);
            assert!(*flag.peek());
            drop(guard);
            assert!(!*flag.peek());
        });
    }

    #[test]
    fn test_flag_cleared_on_early_return_and_error() {
        in_component(|| {
            let flag = Signal::new(false);
            assert_eq!(submit(flag, false), Err("missing fields"));
            assert!(!*flag.peek());

            assert_eq!(submit(flag, true), Err("rejected"));
            assert!(!*flag.peek());
        });
    }

    #[test]
    fn test_flag_cleared_when_task_panics() {
        in_component(|| {
            let flag = Signal::new(false);
            let result = catch_unwind(AssertUnwindSafe(|| {
                let _loading = LoadingGuard::start(flag);
                panic!("backend exploded");
            }));
            assert!(result.is_err());
            assert!(!*flag.peek());
        });
    }

    #[test]
    fn test_flag_cleared_when_task_is_cancelled() {
        in_component(|| {
            let flag = Signal::new(false);
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap();
            let _rt = runtime.enter();
            let stalled = async move {
                let _loading = LoadingGuard::start(flag);
                std::future::pending::<()>().await;
            };
            let result =
                runtime.block_on(tokio::time::timeout(Duration::from_millis(10), stalled));
            assert!(result.is_err());
            assert!(!*flag.peek());
        });
    }
}
