//! The demonstration routines and the runner that sequences them.
//!
//! Each category routine assumes it runs on an empty database, in the order
//! given by [`Category::ALL`]; the replies noted in the routines are what a
//! fresh Redis Stack server sends back.

use std::fmt::Debug;

use redis::FromRedisValue;
use tracing::{error, info};

use crate::{Category, Config, Error, IntoCmd, Session, TourResult, Transcript};

pub mod functions;
pub mod generic;
pub mod hashes;
pub mod json;
pub mod lists;
pub mod search;
pub mod sets;
pub mod sorted_sets;
pub mod streams;
pub mod strings;

/// What a finished tour leaves behind.
#[derive(Debug)]
pub struct Report {
    /// Every operation that got a reply, in order.
    pub transcript: Transcript,
    /// The error that stopped the tour, if any.
    pub failure: Option<Error>,
}

impl Report {
    pub fn into_result(self) -> TourResult<Transcript> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(self.transcript),
        }
    }
}

/// Run the categories selected by `config`, then close the session.
///
/// The session is closed whether or not every routine succeeded; the first
/// error stops the tour and is handed back in the [`Report`].
#[tracing::instrument(skip_all)]
pub async fn run(mut session: Session, config: &Config) -> Report {
    let result = run_categories(&mut session, config).await;
    let transcript = session.close();

    if let Err(err) = &result {
        error!(%err, "tour aborted");
    }

    Report {
        transcript,
        failure: result.err(),
    }
}

async fn run_categories(session: &mut Session, config: &Config) -> TourResult<()> {
    if config.flush {
        let reply: String = redis::cmd("FLUSHDB")
            .query_async(session.connection())
            .await?;
        session.record("FLUSHDB", &reply);
    }

    for category in config.categories() {
        info!(%category, "running");
        run_category(session, category).await?;
    }

    Ok(())
}

/// Run the routine of a single category.
pub async fn run_category(session: &mut Session, category: Category) -> TourResult<()> {
    use Category as C;

    match category {
        C::Strings => strings::run(session).await,
        C::Generic => generic::run(session).await,
        C::Hashes => hashes::run(session).await,
        C::Sets => sets::run(session).await,
        C::SortedSets => sorted_sets::run(session).await,
        C::Lists => lists::run(session).await,
        C::Streams => streams::run(session).await,
        C::Json => json::run(session).await,
        C::Search => search::run(session).await,
        C::Functions => functions::run(session).await,
    }
}

/// Send a module command and record its reply as is.
pub(crate) async fn exec<C, T>(session: &mut Session, cmd: C) -> TourResult<T>
where
    C: IntoCmd,
    T: FromRedisValue + Debug,
{
    let label = cmd.label();
    let reply: T = cmd.into_cmd().query_async(session.connection()).await?;
    session.record(label, &reply);
    Ok(reply)
}

/// Send a module command without recording it, for replies that are
/// decoded before they are shown.
pub(crate) async fn fetch<C, T>(session: &mut Session, cmd: C) -> TourResult<T>
where
    C: IntoCmd,
    T: FromRedisValue,
{
    Ok(cmd.into_cmd().query_async(session.connection()).await?)
}
