use redis::AsyncCommands;

use crate::{Session, TourResult};

#[tracing::instrument(skip_all)]
pub async fn run(session: &mut Session) -> TourResult<()> {
    // SET key value
    // Overwrites any previous value, whatever its type. O(1)
    let reply: String = session.connection().set("myKey", "Hello").await?;
    session.record("SET myKey Hello", &reply); // "OK"

    let reply: String = session.connection().set("myKey2", "World").await?;
    session.record("SET myKey2 World", &reply); // "OK"

    // GET key
    // nil when the key does not exist. O(1)
    let reply: Option<String> = session.connection().get("myKey").await?;
    session.record("GET myKey", &reply); // Some("Hello")

    // MGET key [key ...]
    // nil for every key that is missing or does not hold a string. O(N)
    let reply: Vec<Option<String>> = redis::cmd("MGET")
        .arg("myKey")
        .arg("nonExistentKey")
        .query_async(session.connection())
        .await?;
    session.record("MGET myKey nonExistentKey", &reply); // [Some("Hello"), None]

    // INCR key
    // A missing key counts as 0 before the increment. O(1)
    let reply: i64 = redis::cmd("INCR")
        .arg("myCounter")
        .query_async(session.connection())
        .await?;
    session.record("INCR myCounter", &reply); // 1

    let reply: i64 = session.connection().incr("myCounter", 5).await?;
    session.record("INCRBY myCounter 5", &reply); // 6

    Ok(())
}
