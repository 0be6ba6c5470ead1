use redis::AsyncCommands;

use crate::{Session, TourResult};

#[tracing::instrument(skip_all)]
pub async fn run(session: &mut Session) -> TourResult<()> {
    // ZADD key score member [score member ...]
    // O(log(N)) per member.
    let reply: i64 = session
        .connection()
        .zadd_multiple("myZSet", &[(1, "one"), (2, "two")])
        .await?;
    session.record("ZADD myZSet 1 one 2 two", &reply); // 2

    // ZRANGE key start stop [WITHSCORES]
    // O(log(N)+M), M being the number of members returned.
    let reply: Vec<String> = session.connection().zrange("myZSet", 0, -1).await?;
    session.record("ZRANGE myZSet 0 -1", &reply); // ["one", "two"]

    let reply: Vec<(String, f64)> = session
        .connection()
        .zrange_withscores("myZSet", 0, -1)
        .await?;
    session.record("ZRANGE myZSet 0 -1 WITHSCORES", &reply); // [("one", 1.0), ("two", 2.0)]

    // ZSCORE key member
    let reply: Option<f64> = session.connection().zscore("myZSet", "two").await?;
    session.record("ZSCORE myZSet two", &reply); // Some(2.0)

    Ok(())
}
