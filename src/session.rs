use std::fmt::Debug;

use redis::aio::MultiplexedConnection;
use tracing::{debug, info};

use crate::{Config, TourResult};

/// One operation of the tour and the reply it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// The command as it would be typed into `redis-cli`.
    pub label: String,
    /// The reply, rendered with `Debug`.
    pub reply: String,
}

/// Ordered record of every operation performed during a tour.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reply of the first operation recorded under `label`.
    pub fn reply(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.reply.as_str())
    }

    fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }
}

/// Established connection with a Redis server, plus the transcript of
/// everything sent over it.
///
/// Backed by a single multiplexed connection from the `redis` crate, no
/// pooling or retrying. The session is released by [`Session::close`],
/// which takes `self` so it cannot happen twice.
pub struct Session {
    connection: MultiplexedConnection,
    transcript: Transcript,
    /// Print each recorded operation on stdout.
    echo: bool,
}

impl Session {
    /// Establish a connection with the server described by `config`.
    ///
    /// Any failure (bad URL, refused connection, failed `AUTH`) is returned to
    /// the caller; there are no retries.
    pub async fn connect(config: &Config) -> TourResult<Self> {
        let url = config.connection_url()?;
        let client = redis::Client::open(url.as_str())?;
        let connection = client.get_multiplexed_async_connection().await?;
        info!(addr = %client.get_connection_info().addr, "connected");
        Ok(Session {
            connection,
            transcript: Transcript::default(),
            echo: true,
        })
    }

    /// Stop printing operations on stdout. They are still recorded.
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    pub fn connection(&mut self) -> &mut MultiplexedConnection {
        &mut self.connection
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Record the reply to one operation, one line per operation.
    pub fn record<T: Debug + ?Sized>(&mut self, label: impl Into<String>, reply: &T) {
        let entry = TranscriptEntry {
            label: label.into(),
            reply: format!("{reply:?}"),
        };
        debug!(label = %entry.label, reply = %entry.reply);
        if self.echo {
            println!("{} -> {}", entry.label, entry.reply);
        }
        self.transcript.push(entry);
    }

    /// Release the connection and hand back the transcript.
    pub fn close(self) -> Transcript {
        let Session {
            connection,
            transcript,
            ..
        } = self;
        // Dropping the last handle of a multiplexed connection shuts down its
        // driver task and the socket with it.
        drop(connection);
        info!(operations = transcript.len(), "connection closed");
        transcript
    }
}
