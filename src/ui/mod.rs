use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

pub mod actions;
pub mod render;

/// Named output regions. Each write replaces what was there before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sink {
    Alert,
    ProfilesOutput,
    EditJson,
    SearchOutput,
    HealthOutput,
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sink::Alert => "alert",
            Sink::ProfilesOutput => "profiles",
            Sink::EditJson => "edit",
            Sink::SearchOutput => "search",
            Sink::HealthOutput => "health",
        };
        f.write_str(label)
    }
}

pub trait Display: Send + Sync {
    fn show(&self, sink: Sink, text: &str);
}

/// Prints each write to stdout, labelled with its sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDisplay;

impl Display for ConsoleDisplay {
    fn show(&self, sink: Sink, text: &str) {
        println!("[{}]\n{}", sink, text);
    }
}

/// Keeps the current text of every sink in memory; useful when embedding.
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    sinks: Mutex<HashMap<Sink, String>>,
    writes: Mutex<usize>,
}

impl MemoryDisplay {
    pub fn get(&self, sink: Sink) -> Option<String> {
        self.sinks.lock().ok()?.get(&sink).cloned()
    }

    pub fn writes(&self) -> usize {
        self.writes.lock().map(|n| *n).unwrap_or(0)
    }
}

impl Display for MemoryDisplay {
    fn show(&self, sink: Sink, text: &str) {
        if let Ok(mut sinks) = self.sinks.lock() {
            sinks.insert(sink, text.to_string());
        }
        if let Ok(mut n) = self.writes.lock() {
            *n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let display = MemoryDisplay::default();
        display.show(Sink::SearchOutput, "first");
        display.show(Sink::SearchOutput, "second");
        assert_eq!(display.get(Sink::SearchOutput).as_deref(), Some("second"));
        assert_eq!(display.get(Sink::Alert), None);
        assert_eq!(display.writes(), 2);
    }
}
