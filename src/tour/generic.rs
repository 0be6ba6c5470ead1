use redis::AsyncCommands;
use tracing::debug;

use super::fetch;
use crate::{cmd::ScanCmd, IntoCmd, Session, TourResult};

#[tracing::instrument(skip_all)]
pub async fn run(session: &mut Session) -> TourResult<()> {
    // KEYS pattern
    // Blocks the server while it walks the whole keyspace. O(N)
    let mut reply: Vec<String> = session.connection().keys("my*").await?;
    // The server returns keys in hash order.
    reply.sort();
    session.record("KEYS my*", &reply); // ["myCounter", "myKey", "myKey2"]

    // EXISTS key [key ...]
    let reply: i64 = session.connection().exists("myKey").await?;
    session.record("EXISTS myKey", &reply); // 1

    // EXPIRE key seconds
    let reply: bool = session.connection().expire("myKey", 120).await?;
    session.record("EXPIRE myKey 120", &reply); // true

    // TTL key
    // -1 without a timeout, -2 for a missing key.
    let reply: i64 = session.connection().ttl("myKey").await?;
    session.record("TTL myKey", &reply); // 120

    // PERSIST key
    let reply: bool = session.connection().persist("myKey").await?;
    session.record("PERSIST myKey", &reply); // true

    // SCAN cursor [MATCH pattern] [COUNT count] [TYPE type]
    // O(1) per call, O(N) for a complete iteration.
    let scan = ScanCmd::new(0).pattern("my*").count(2).kind("string");

    let (cursor, keys): (u64, Vec<String>) = fetch(session, scan.clone()).await?;
    session.record(scan.label(), &(cursor, &keys));

    if cursor != 0 {
        let next = scan.at(cursor);
        let label = next.label();
        let page: (u64, Vec<String>) = fetch(session, next).await?;
        session.record(label, &page);
    }

    let mut all = scan_all(session, &scan).await?;
    all.sort();
    session.record(format!("{} (until cursor 0)", scan.label()), &all); // ["myCounter", "myKey", "myKey2"]

    // DEL key [key ...]
    let reply: i64 = session.connection().del("myKey").await?;
    session.record("DEL myKey", &reply); // 1

    // INFO [section]
    let info: String = redis::cmd("INFO")
        .arg("keyspace")
        .query_async(session.connection())
        .await?;
    let databases: Vec<&str> = info
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("db"))
        .collect();
    session.record("INFO keyspace", &databases); // ["db0:keys=2,expires=0,avg_ttl=0"]

    Ok(())
}

/// Follow the cursor from 0 until the server hands back 0 again, collecting
/// every key along the way.
pub async fn scan_all(session: &mut Session, scan: &ScanCmd) -> TourResult<Vec<String>> {
    let mut keys = Vec::new();
    let mut cursor = 0;
    loop {
        let (next, page): (u64, Vec<String>) = fetch(session, scan.at(cursor)).await?;
        debug!(cursor, next, found = page.len());
        keys.extend(page);
        if next == 0 {
            return Ok(keys);
        }
        cursor = next;
    }
}
