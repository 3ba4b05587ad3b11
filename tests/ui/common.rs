//! Shared helpers for rendering tests

use ratatui::backend::TestBackend;

/// Text content of the backend's buffer, one string per row
pub fn buffer_lines(backend: &TestBackend) -> Vec<String> {
    let buffer = backend.buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| {
                    buffer
                        .cell((x, y))
                        .map(|cell| cell.symbol())
                        .unwrap_or(" ")
                })
                .collect::<String>()
        })
        .collect()
}

/// Number of rows whose text contains `needle`
pub fn rows_containing(backend: &TestBackend, needle: &str) -> usize {
    buffer_lines(backend)
        .iter()
        .filter(|line| line.contains(needle))
        .count()
}
