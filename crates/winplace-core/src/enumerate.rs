use crate::filter::{self, Verdict};
use crate::record::WindowRecord;
use crate::window::{Desktop, Window, WindowResult};

/// Walks every top-level window and returns the admitted ones.
///
/// Records keep the desktop's z-order, topmost first. Only a failure to
/// start the walk is an error; windows that fail a query are skipped.
pub fn enumerate<D: Desktop>(desktop: &D) -> WindowResult<Vec<WindowRecord>> {
    let windows = desktop.top_level_windows()?;
    let total = windows.len();

    let mut records = Vec::new();
    for window in &windows {
        match filter::classify(window) {
            Verdict::Admitted(record) => records.push(record),
            Verdict::Excluded(reason) => {
                crate::log_debug!("Skipping window {}: {}", window.handle(), reason);
            }
        }
    }

    crate::log_debug!("Enumerated {} of {} top-level windows", records.len(), total);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;
    use crate::testing::{FakeDesktop, FakeWindow};

    #[test]
    fn keeps_admitted_windows_in_z_order() {
        // Arrange
        let mut hidden = FakeWindow::new(2, "Tool", Rect::default());
        hidden.visible = false;
        let desktop = FakeDesktop::new(vec![
            FakeWindow::new(3, "Browser", Rect::new(0, 0, 10, 10)),
            hidden,
            FakeWindow::new(1, "Terminal", Rect::new(5, 5, 20, 20)),
        ]);

        // Act
        let records = enumerate(&desktop).unwrap();

        // Assert
        let titles: Vec<String> = records.iter().map(|r| r.title().to_string()).collect();
        assert_eq!(titles, ["Browser", "Terminal"]);
    }

    #[test]
    fn failing_window_does_not_abort_enumeration() {
        // Arrange
        let mut flaky = FakeWindow::new(2, "Flaky", Rect::default());
        flaky.fail_queries = true;
        let desktop = FakeDesktop::new(vec![
            flaky,
            FakeWindow::new(1, "Terminal", Rect::default()),
        ]);

        // Act
        let records = enumerate(&desktop).unwrap();

        // Assert
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title().to_string(), "Terminal");
    }

    #[test]
    fn enumeration_start_failure_is_an_error() {
        // Arrange
        let desktop = FakeDesktop::new(Vec::new());
        desktop.fail_enumeration.set(true);

        // Act / Assert
        assert!(enumerate(&desktop).is_err());
    }
}
