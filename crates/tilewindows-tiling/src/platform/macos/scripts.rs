//! AppleScript sources for System Events window automation.
//!
//! Enumeration scripts print one record per window, fields separated by
//! tabs, records by linefeeds:
//!
//! ```text
//! <app> TAB <index> TAB <x> TAB <y> TAB <width> TAB <height> TAB <subrole> TAB <minimized>
//! ```
//!
//! `records` parses that format; the two modules change together.

use std::time::Duration;

use crate::platform::WindowMove;

/// Emits records for every window of `appProc`, named `appName`.
const WINDOW_RECORDS: &str = r#"
      set wCount to count of windows of appProc
      repeat with i from 1 to wCount
        try
          set win to window i of appProc
          set winPos to position of win
          set winSize to size of win
          set subroleStr to ""
          try
            set subroleStr to (value of attribute "AXSubrole" of win) as text
          end try
          set isMin to false
          try
            set isMin to value of attribute "AXMinimized" of win
          end try
          set out to out & appName & tab & i & tab & (item 1 of winPos) & tab & (item 2 of winPos) & tab & (item 1 of winSize) & tab & (item 2 of winSize) & tab & subroleStr & tab & isMin & linefeed
        end try
      end repeat"#;

/// Escape a value for use inside an AppleScript string literal.
pub fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Records for every window of every foreground process.
pub fn all_windows_script() -> String {
    format!(
        r#"set out to ""
tell application "System Events"
  repeat with appProc in (every process whose background only is false)
    set appName to name of appProc
    try{WINDOW_RECORDS}
    end try
  end repeat
end tell
return out"#
    )
}

/// Records for the windows of one process. Empty when it is not running.
pub fn app_windows_script(app: &str) -> String {
    let app = escape(app);
    format!(
        r#"set out to ""
tell application "System Events"
  if not (exists process "{app}") then return ""
  set appProc to process "{app}"
  set appName to name of appProc
{WINDOW_RECORDS}
end tell
return out"#
    )
}

/// Move a batch of windows of one process.
///
/// The window references are captured once, before anything changes, and
/// every request addresses its window as `item <index> of wins`. Each request
/// activates the application, waits `settle`, then un-minimizes (optionally),
/// sets position and sets size inside its own `try`, printing one result line:
///
/// ```text
/// ok
/// error TAB <message>
/// ```
///
/// `records::parse_move_results` reads that output back.
pub fn move_windows_script(app: &str, moves: &[WindowMove], settle: Duration) -> String {
    let app = escape(app);
    let delay = if settle.is_zero() {
        String::new()
    } else {
        format!("\n  delay {:.3}", settle.as_secs_f64())
    };

    let mut script = format!(
        r#"set out to ""
tell application "System Events"
  set wins to every window of process "{app}"
end tell
"#
    );

    for request in moves {
        let unminimize = if request.unminimize {
            r#"
      try
        set value of attribute "AXMinimized" of win to false
      end try"#
        } else {
            ""
        };
        let (x, y) = request.rect.position();
        let (w, h) = request.rect.size();
        script.push_str(&format!(
            r#"try
  try
    tell application "{app}" to activate
  end try{delay}
  tell application "System Events"
    set win to item {index} of wins{unminimize}
    set position of win to {{{x}, {y}}}
    set size of win to {{{w}, {h}}}
  end tell
  set out to out & "ok" & linefeed
on error errMsg
  set out to out & "error" & tab & errMsg & linefeed
end try
"#,
            index = request.index,
        ));
    }

    script.push_str("return out");
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilewindows_common::Rect;

    #[test]
    fn escape_quotes_and_backslashes() {
        assert_eq!(escape("Slack"), "Slack");
        assert_eq!(escape(r#"My "App""#), r#"My \"App\""#);
        assert_eq!(escape(r"a\b"), r"a\\b");
    }

    #[test]
    fn app_script_names_the_process() {
        let script = app_windows_script("Arc");
        assert!(script.contains(r#"exists process "Arc""#));
        assert!(script.contains(r#"value of attribute "AXSubrole""#));
        assert!(script.trim_end().ends_with("return out"));
    }

    #[test]
    fn app_script_escapes_name() {
        let script = app_windows_script(r#"Evil" to quit"#);
        assert!(script.contains(r#"process "Evil\" to quit""#));
    }

    #[test]
    fn all_windows_script_filters_background_processes() {
        let script = all_windows_script();
        assert!(script.contains("background only is false"));
        assert!(script.contains("set appName to name of appProc"));
    }

    fn request(index: u32, rect: Rect, unminimize: bool) -> WindowMove {
        WindowMove {
            index,
            rect,
            unminimize,
        }
    }

    #[test]
    fn move_script_captures_windows_once() {
        let moves = [
            request(2, Rect::new(0, 25, 800, 600), true),
            request(1, Rect::new(800, 25, 800, 600), false),
        ];
        let script = move_windows_script("Slack", &moves, Duration::ZERO);

        assert_eq!(script.matches("every window of process").count(), 1);
        assert!(script.contains(r#"set wins to every window of process "Slack""#));
        assert!(script.contains("set win to item 2 of wins"));
        assert!(script.contains("set win to item 1 of wins"));
        assert!(!script.contains("window 1 of"));
        assert!(!script.contains("set win to window"));
        assert_eq!(script.matches("to activate").count(), 2);
        assert!(script.trim_end().ends_with("return out"));
    }

    #[test]
    fn move_script_keeps_request_order() {
        let moves = [
            request(2, Rect::new(0, 25, 800, 600), false),
            request(1, Rect::new(800, 25, 800, 600), false),
        ];
        let script = move_windows_script("zed", &moves, Duration::ZERO);
        let second = script.find("item 2 of wins").unwrap();
        let first = script.find("item 1 of wins").unwrap();
        assert!(second < first);
    }

    #[test]
    fn move_script_sets_position_then_size() {
        let moves = [request(2, Rect::new(-1080, 447, 1080, 989), false)];
        let script = move_windows_script("Slack", &moves, Duration::ZERO);
        assert!(script.contains("set position of win to {-1080, 447}"));
        assert!(script.contains("set size of win to {1080, 989}"));
        assert!(!script.contains("AXMinimized"));
        assert!(!script.contains("delay"));

        let pos = script.find("set position").unwrap();
        let size = script.find("set size").unwrap();
        assert!(pos < size);
    }

    #[test]
    fn move_script_unminimizes_first_when_asked() {
        let moves = [request(1, Rect::new(0, 25, 100, 100), true)];
        let script = move_windows_script("Slack", &moves, Duration::ZERO);
        let unmin = script.find("AXMinimized").unwrap();
        let pos = script.find("set position").unwrap();
        assert!(unmin < pos);
    }

    #[test]
    fn move_script_waits_after_each_activation() {
        let moves = [
            request(1, Rect::new(0, 25, 100, 100), false),
            request(2, Rect::new(0, 25, 100, 100), false),
        ];
        let script = move_windows_script("zed", &moves, Duration::from_millis(150));
        assert_eq!(script.matches("delay 0.150").count(), 2);
        let activate = script.find("to activate").unwrap();
        let delay = script.find("delay 0.150").unwrap();
        let item = script.find("item 1 of wins").unwrap();
        assert!(activate < delay && delay < item);
    }

    #[test]
    fn move_script_escapes_app_name() {
        let moves = [request(1, Rect::new(0, 0, 1, 1), false)];
        let script = move_windows_script(r#"Evil" to quit"#, &moves, Duration::ZERO);
        assert!(script.contains(r#"process "Evil\" to quit""#));
        assert!(script.contains(r#"application "Evil\" to quit" to activate"#));
    }
}
