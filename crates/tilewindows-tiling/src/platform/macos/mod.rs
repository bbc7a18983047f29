//! macOS WindowAutomation implementation.
//!
//! Drives System Events through `osascript`: enumeration scripts print
//! tab-separated records that `records` turns into typed windows. All moves
//! for one application run as a single script that captures the window list
//! once, so un-minimizing or raising a window cannot shift the indexes of
//! the requests after it. The transport sits behind
//! [`ScriptRunner`] so everything above it can be exercised without a Mac.

mod records;
mod runner;
mod scripts;
mod types;
mod window_management;

pub use records::{parse_move_results, parse_record, parse_records};
pub use runner::{OsascriptRunner, ScriptRunner};
pub use types::*;

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::time::Duration;

    use super::*;
    use crate::platform::{Result, WindowAutomation, WindowMove};
    use tilewindows_common::{AutomationError, Rect};

    /// Records scripts and replays canned responses in order.
    #[derive(Default)]
    struct FakeRunner {
        scripts: RefCell<Vec<String>>,
        responses: RefCell<VecDeque<Result<String>>>,
    }

    impl FakeRunner {
        fn respond(self, response: Result<String>) -> Self {
            self.responses.borrow_mut().push_back(response);
            self
        }
    }

    impl ScriptRunner for FakeRunner {
        fn run(&self, script: &str) -> Result<String> {
            self.scripts.borrow_mut().push(script.to_string());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }

    #[test]
    fn new_manager_uses_osascript() {
        let automation = MacOsAutomation::new();
        let _runner: &OsascriptRunner = &automation.runner;
    }

    #[test]
    fn app_windows_parses_and_sorts() {
        let runner = FakeRunner::default().respond(Ok(
            "slack\t2\t0\t0\t50\t50\tAXStandardWindow\tfalse\n\
             slack\t1\t-1080\t447\t1080\t989\tAXStandardWindow\ttrue\n"
                .into(),
        ));
        let automation = MacOsAutomation::with_runner(runner);

        let windows = automation.app_windows("Slack").unwrap();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].index, 1);
        assert_eq!(windows[0].app, "Slack");
        assert!(windows[0].minimized);
        assert_eq!(windows[0].rect, Rect::new(-1080, 447, 1080, 989));

        let scripts = automation.runner.scripts.borrow();
        assert!(scripts[0].contains(r#"process "Slack""#));
    }

    #[test]
    fn app_not_running_has_no_windows() {
        let automation = MacOsAutomation::with_runner(FakeRunner::default().respond(Ok(String::new())));
        assert!(automation.app_windows("Nope").unwrap().is_empty());
    }

    #[test]
    fn all_windows_keeps_process_names() {
        let runner = FakeRunner::default().respond(Ok(
            "Arc\t1\t0\t25\t100\t100\tAXStandardWindow\tfalse\n\
             Finder\t1\t0\t0\t10\t10\tAXDialog\tfalse"
                .into(),
        ));
        let automation = MacOsAutomation::with_runner(runner);

        let windows = automation.all_windows().unwrap();
        assert_eq!(windows[0].app, "Arc");
        assert_eq!(windows[1].app, "Finder");
        assert!(!windows[1].standard);
    }

    #[test]
    fn transport_errors_propagate() {
        let runner = FakeRunner::default().respond(Err(AutomationError::Failed {
            status: "exit status: 1".into(),
            stderr: "not authorized to send Apple events".into(),
        }));
        let automation = MacOsAutomation::with_runner(runner);
        assert!(matches!(
            automation.all_windows(),
            Err(AutomationError::Failed { .. })
        ));
    }

    #[test]
    fn malformed_output_is_an_error() {
        let runner = FakeRunner::default().respond(Ok("{\"app\": \"Arc\"}".into()));
        let automation = MacOsAutomation::with_runner(runner);
        assert!(matches!(
            automation.app_windows("Arc"),
            Err(AutomationError::MalformedRecord(_))
        ));
    }

    fn request(index: u32, x: i32, unminimize: bool) -> WindowMove {
        WindowMove {
            index,
            rect: Rect::new(x, 25, 1437, 1415),
            unminimize,
        }
    }

    #[test]
    fn batch_moves_run_as_one_script_over_captured_windows() {
        let runner = FakeRunner::default().respond(Ok("ok\nok".into()));
        let automation = MacOsAutomation::with_runner(runner);

        // The minimized window goes first; un-minimizing it raises it to the
        // front, which must not redirect the second request.
        let moves = [request(2, 0, true), request(1, 1437, false)];
        let results = automation
            .move_windows("Slack", &moves, Duration::ZERO)
            .unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_ok()));

        let scripts = automation.runner.scripts.borrow();
        assert_eq!(scripts.len(), 1);
        let script = &scripts[0];
        assert_eq!(script.matches("set wins to every window").count(), 1);
        let capture = script.find("set wins to every window").unwrap();
        let first = script.find("set win to item 2 of wins").unwrap();
        let second = script.find("set win to item 1 of wins").unwrap();
        assert!(capture < first && first < second);
        assert!(!script.contains("set win to window"));
    }

    #[test]
    fn batch_reports_each_window() {
        let runner = FakeRunner::default().respond(Ok(
            "error\tSystem Events got an error: Can’t get item 2 of {}.\nok".into(),
        ));
        let automation = MacOsAutomation::with_runner(runner);

        let results = automation
            .move_windows("zed", &[request(2, 0, false), request(1, 0, false)], Duration::ZERO)
            .unwrap();
        assert!(matches!(&results[0], Err(AutomationError::Diagnostic(_))));
        assert!(results[1].is_ok());
    }

    #[test]
    fn empty_batch_runs_nothing() {
        let automation = MacOsAutomation::with_runner(FakeRunner::default());
        let results = automation.move_windows("zed", &[], Duration::ZERO).unwrap();
        assert!(results.is_empty());
        assert!(automation.runner.scripts.borrow().is_empty());
    }

    #[test]
    fn batch_transport_failure_is_the_outer_error() {
        let runner = FakeRunner::default().respond(Err(AutomationError::Failed {
            status: "exit status: 1".into(),
            stderr: "execution error".into(),
        }));
        let automation = MacOsAutomation::with_runner(runner);
        assert!(automation
            .move_windows("zed", &[request(1, 0, false)], Duration::ZERO)
            .is_err());
    }
}
