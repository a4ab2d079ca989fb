use store::clock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// Messages shown to the user during this session, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: &str, now: i64) {
        self.entries.push(LogEntry {
            timestamp: clock::time_of_day(now),
            level,
            message: message.to_string(),
        });
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.entries.iter().filter(|e| e.level == level).count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_clear() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Info, "Connexion", 1_714_641_300_000);
        log.push(LogLevel::Error, "Échec", 1_714_641_301_000);
        assert_eq!(log.entries[0].timestamp, "09:15:00");
        assert_eq!(log.count(LogLevel::Error), 1);
        assert_eq!(log.count(LogLevel::Warning), 0);
        log.visible = true;
        log.clear();
        assert!(log.entries.is_empty());
        assert!(!log.visible);
    }
}
