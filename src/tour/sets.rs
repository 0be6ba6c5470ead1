use redis::AsyncCommands;

use crate::{Session, TourResult};

#[tracing::instrument(skip_all)]
pub async fn run(session: &mut Session) -> TourResult<()> {
    // SADD key member [member ...]
    let reply: i64 = session.connection().sadd("mySet", "Hello").await?;
    session.record("SADD mySet Hello", &reply); // 1

    // SMEMBERS key
    let reply: Vec<String> = session.connection().smembers("mySet").await?;
    session.record("SMEMBERS mySet", &reply); // ["Hello"]

    // SCARD key
    let reply: i64 = session.connection().scard("mySet").await?;
    session.record("SCARD mySet", &reply); // 1

    // SISMEMBER key member
    let reply: bool = session.connection().sismember("mySet", "Hello").await?;
    session.record("SISMEMBER mySet Hello", &reply); // true

    // SDIFF key [key ...]
    // Members of the first set missing from all the others. A missing key
    // is an empty set.
    let reply: Vec<String> = session
        .connection()
        .sdiff(&["mySet", "myOtherSet"])
        .await?;
    session.record("SDIFF mySet myOtherSet", &reply); // ["Hello"]

    // SDIFFSTORE destination key [key ...]
    let reply: i64 = session
        .connection()
        .sdiffstore("myNewSet", &["mySet", "myOtherSet"])
        .await?;
    session.record("SDIFFSTORE myNewSet mySet myOtherSet", &reply); // 1

    // SREM key member [member ...]
    let reply: i64 = session.connection().srem("mySet", "Hello").await?;
    session.record("SREM mySet Hello", &reply); // 1

    Ok(())
}
