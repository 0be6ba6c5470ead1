use std::collections::BTreeMap;

use redis::AsyncCommands;

use crate::{Session, TourResult};

const KEY: &str = "h_employee_profile:101";

#[tracing::instrument(skip_all)]
pub async fn run(session: &mut Session) -> TourResult<()> {
    // HSET key field value [field value ...]
    // Replies with the number of fields that were added. O(N)
    let reply: i64 = redis::cmd("HSET")
        .arg(KEY)
        .arg("name")
        .arg("Nicol")
        .arg("age")
        .arg(33)
        .query_async(session.connection())
        .await?;
    session.record(format!("HSET {KEY} name Nicol age 33"), &reply); // 2

    // HGET key field
    let reply: Option<String> = session.connection().hget(KEY, "name").await?;
    session.record(format!("HGET {KEY} name"), &reply); // Some("Nicol")

    // HGETALL key
    let reply: BTreeMap<String, String> = session.connection().hgetall(KEY).await?;
    session.record(format!("HGETALL {KEY}"), &reply); // {"age": "33", "name": "Nicol"}

    // HMGET key field [field ...]
    let reply: Vec<Option<String>> = redis::cmd("HMGET")
        .arg(KEY)
        .arg("name")
        .arg("age")
        .query_async(session.connection())
        .await?;
    session.record(format!("HMGET {KEY} name age"), &reply); // [Some("Nicol"), Some("33")]

    // HINCRBY key field increment
    let reply: i64 = session.connection().hincr(KEY, "age", 1).await?;
    session.record(format!("HINCRBY {KEY} age 1"), &reply); // 34

    Ok(())
}
