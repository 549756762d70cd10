//! In-memory stand-ins for Discord used by unit tests.

use anyhow::Result;
use log::{Level, LevelFilter, Log, Metadata, Record};
use serenity::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, Once};

use crate::interaction::{CommandInteraction, Reply};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sent {
    Reply,
    FollowUp,
}

pub struct MockInteraction {
    name: String,
    guild: Option<String>,
    options: HashMap<String, String>,
    acknowledged: AtomicBool,
    sent: Mutex<Vec<(Sent, Reply)>>,
}

impl MockInteraction {
    pub fn new(name: &str) -> Self {
        MockInteraction {
            name: name.to_string(),
            guild: None,
            options: HashMap::new(),
            acknowledged: AtomicBool::new(false),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn in_guild(mut self, guild: &str) -> Self {
        self.guild = Some(guild.to_string());
        self
    }

    pub fn with_option(mut self, name: &str, value: &str) -> Self {
        self.options.insert(name.to_string(), value.to_string());
        self
    }

    pub fn sent(&self) -> Vec<(Sent, Reply)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandInteraction for MockInteraction {
    fn command_name(&self) -> &str {
        &self.name
    }

    fn guild_name(&self) -> Option<String> {
        self.guild.clone()
    }

    fn string_option(&self, name: &str) -> Option<String> {
        self.options.get(name).cloned()
    }

    fn is_acknowledged(&self) -> bool {
        self.acknowledged.load(Ordering::Acquire)
    }

    async fn reply(&self, reply: Reply) -> Result<()> {
        // Discord rejects a second initial response
        if self.acknowledged.swap(true, Ordering::AcqRel) {
            anyhow::bail!("Interaction has already been acknowledged");
        }
        self.sent.lock().unwrap().push((Sent::Reply, reply));
        Ok(())
    }

    async fn follow_up(&self, reply: Reply) -> Result<()> {
        if !self.is_acknowledged() {
            anyhow::bail!("Unknown webhook");
        }
        self.sent.lock().unwrap().push((Sent::FollowUp, reply));
        Ok(())
    }

    async fn defer(&self) -> Result<()> {
        if self.acknowledged.swap(true, Ordering::AcqRel) {
            anyhow::bail!("Interaction has already been acknowledged");
        }
        Ok(())
    }
}

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

/// Records log lines per thread, so parallel tests only see their own.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|c| {
            c.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Installs the capturing logger and clears this thread's records.
///
/// Only valid with single-threaded runtimes (`#[tokio::test]` default).
pub fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).ok();
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURED.with(|c| c.borrow_mut().clear());
}

pub fn captured_logs(level: Level) -> Vec<String> {
    CAPTURED.with(|c| {
        c.borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line.clone())
            .collect()
    })
}
