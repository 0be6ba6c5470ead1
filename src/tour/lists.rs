use std::num::NonZeroUsize;

use redis::AsyncCommands;

use crate::{Session, TourResult};

#[tracing::instrument(skip_all)]
pub async fn run(session: &mut Session) -> TourResult<()> {
    // LPUSH key element [element ...]
    let reply: i64 = session.connection().lpush("myList", "World").await?;
    session.record("LPUSH myList World", &reply); // 1

    // RPUSH key element [element ...]
    let reply: i64 = session.connection().rpush("myList", "Hello").await?;
    session.record("RPUSH myList Hello", &reply); // 2

    // LRANGE key start stop
    // O(S+N), S being the offset of start.
    let reply: Vec<String> = session.connection().lrange("myList", 0, -1).await?;
    session.record("LRANGE myList 0 -1", &reply); // ["World", "Hello"]

    // LLEN key
    let reply: i64 = session.connection().llen("myList").await?;
    session.record("LLEN myList", &reply); // 2

    // LPOP key [count]
    let reply: Option<String> = session.connection().lpop("myList", None).await?;
    session.record("LPOP myList", &reply); // Some("World")

    // RPOP key [count]
    let reply: Option<String> = session.connection().rpop("myList", None).await?;
    session.record("RPOP myList", &reply); // Some("Hello")

    // The list is gone now that its last element was popped.
    let reply: i64 = session
        .connection()
        .rpush("myList", &["one", "two", "three", "four", "five"])
        .await?;
    session.record("RPUSH myList one two three four five", &reply); // 5

    // Negative indexes count from the tail: -3 and 2 both point at "three".
    let reply: Vec<String> = session.connection().lrange("myList", -3, 2).await?;
    session.record("LRANGE myList -3 2", &reply); // ["three"]

    let reply: Vec<String> = session
        .connection()
        .lpop("myList", NonZeroUsize::new(2))
        .await?;
    session.record("LPOP myList 2", &reply); // ["one", "two"]

    Ok(())
}
